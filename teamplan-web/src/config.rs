//! Frontend configuration module
//!
//! This module provides configuration for frontend-specific URLs and
//! settings.

/// Frontend configuration for URLs and external links
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL all API requests are issued against
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TEAMPLAN_API_URL").unwrap_or("/api").to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert_eq!(config.api_base_url(), config.api_base_url.as_str());
    }
}
