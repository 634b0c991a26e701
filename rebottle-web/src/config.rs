//! Frontend configuration module
//!
//! Branding strings for the client, kept out of the view code.

/// Frontend configuration for branding and external links
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Application title shown on both screens
    pub app_title: String,
    /// Tagline shown under the title on the login gate
    pub tagline: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            app_title: option_env!("REBOTTLE_APP_TITLE")
                .unwrap_or("REBOTTLE")
                .to_string(),
            tagline: "Recycle. Redeem. Reward.".to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the application title
    pub fn app_title(&self) -> &str {
        &self.app_title
    }

    /// Get the tagline
    pub fn tagline(&self) -> &str {
        &self.tagline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.app_title.is_empty());
        assert!(!config.tagline.is_empty());
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.app_title(), config2.app_title());
        assert_eq!(config1.tagline(), config2.tagline());
    }
}
