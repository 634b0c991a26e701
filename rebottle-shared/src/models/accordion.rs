use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum_macros::EnumIter;

/// The collapsible sections on the main screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum AccordionSection {
    /// Code entry and redemption.
    Code,
    /// Read-only monetary value of the balance.
    Wallet,
    /// The (placeholder) withdrawal control.
    Withdraw,
}

impl AccordionSection {
    /// Return the canonical string representation of the section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Wallet => "wallet",
            Self::Withdraw => "withdraw",
        }
    }

    /// The heading rendered on the section's toggle row.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Code => "ENTER CODE",
            Self::Wallet => "WALLET",
            Self::Withdraw => "WITHDRAW",
        }
    }
}

impl fmt::Display for AccordionSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccordionSection {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "code" => Ok(Self::Code),
            "wallet" => Ok(Self::Wallet),
            "withdraw" => Ok(Self::Withdraw),
            _ => Err("unknown accordion section"),
        }
    }
}

/// Accordion transition: selecting the open section closes it, selecting any
/// other opens it. At most one section is ever open.
#[must_use]
pub fn toggle(
    open: Option<AccordionSection>,
    section: AccordionSection,
) -> Option<AccordionSection> {
    if open == Some(section) {
        None
    } else {
        Some(section)
    }
}
