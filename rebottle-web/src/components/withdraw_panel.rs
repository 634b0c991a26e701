use shared::config::RewardsConfig;
use shared::models::{can_withdraw, monetary_value};
use yew::prelude::*;

#[derive(yew::Properties, PartialEq)]
pub struct WithdrawPanelProps {
    /// Current points balance.
    pub points: u32,
}

/// Withdrawal section. The button is disabled at zero balance; when enabled
/// it is deliberately not wired to any handler — there is no payout flow yet.
#[function_component(WithdrawPanel)]
pub fn withdraw_panel(props: &WithdrawPanelProps) -> Html {
    let config = RewardsConfig::new();
    let value = monetary_value(&config, props.points);

    html! {
        <div class="pt-2">
            <button class="btn btn-primary w-full" disabled={!can_withdraw(props.points)}>
                { format!("Withdraw {}{}", config.currency_symbol, value) }
            </button>
        </div>
    }
}
