//! Display configuration

/// Display configuration for computed views
#[derive(Debug, Clone)]
pub struct Config {
    /// Currency suffix appended to formatted amounts
    pub currency: String,
    /// Localized label for boolean true
    pub yes_label: String,
    /// Localized label for boolean false
    pub no_label: String,
    /// Bucket name for parameters without a group tag
    pub default_group: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            currency: std::env::var("CURRENCY").unwrap_or_else(|_| "zł".into()),
            yes_label: std::env::var("LABEL_YES").unwrap_or_else(|_| "Yes".into()),
            no_label: std::env::var("LABEL_NO").unwrap_or_else(|_| "No".into()),
            default_group: std::env::var("DEFAULT_PARAM_GROUP")
                .unwrap_or_else(|_| "General".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
