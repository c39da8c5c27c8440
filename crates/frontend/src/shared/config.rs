use serde::Deserialize;

/// Form configuration, injected by the host page at attach time
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub host: HostSettings,
    #[serde(default)]
    pub form: FormSettings,
}

/// Where and how to reach the host platform
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    /// Opaque token appended as `p_auth`; sent as "" when absent
    pub auth_token: String,
    pub company_list_id: u64,
    pub category_list_id: u64,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            auth_token: String::new(),
            company_list_id: 334341,
            category_list_id: 334543,
        }
    }
}

/// Behaviour switches of the form itself
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// How long the wizard stays locked after a page change
    pub transition_ms: u32,
    /// Fill the company number with a random 4-digit value on company selection
    pub autofill_company_number: bool,
    /// Return to page 1 after a successful submission
    pub reset_page_on_success: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            transition_ms: 300,
            autofill_company_number: false,
            reset_page_on_success: false,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[host]
api_base = ""
company_list_id = 334341
category_list_id = 334543

[form]
transition_ms = 300
autofill_company_number = false
reset_page_on_success = false
"#;

/// Load configuration from the TOML document supplied by the host
///
/// Missing keys fall back to their defaults; a blank or absent document
/// yields the embedded default configuration.
pub fn load_config(overrides: Option<&str>) -> Result<FormConfig, String> {
    match overrides.filter(|s| !s.trim().is_empty()) {
        Some(source) => {
            log::info!("Loading form config from host overrides");
            toml::from_str(source).map_err(|e| format!("Invalid form config: {}", e))
        }
        None => {
            log::info!("Using default embedded form configuration");
            toml::from_str(DEFAULT_CONFIG).map_err(|e| format!("Invalid default config: {}", e))
        }
    }
}

impl FormConfig {
    /// Inject the host's auth token; `None` keeps whatever the config carried
    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token {
            self.host.auth_token = token;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, FormConfig::default());
        assert_eq!(config.host.company_list_id, 334341);
        assert_eq!(config.host.category_list_id, 334543);
        assert_eq!(config.form.transition_ms, 300);
    }

    #[test]
    fn test_blank_overrides_use_defaults() {
        assert_eq!(load_config(Some("  \n")).unwrap(), FormConfig::default());
    }

    #[test]
    fn test_partial_overrides() {
        let config = load_config(Some(
            r#"
            [host]
            api_base = "https://portal.example.com"

            [form]
            reset_page_on_success = true
            "#,
        ))
        .unwrap();
        assert_eq!(config.host.api_base, "https://portal.example.com");
        assert_eq!(config.host.company_list_id, 334341);
        assert!(config.form.reset_page_on_success);
        assert_eq!(config.form.transition_ms, 300);
    }

    #[test]
    fn test_invalid_overrides() {
        let err = load_config(Some("[form]\ntransition_ms = \"slow\"")).unwrap_err();
        assert!(err.starts_with("Invalid form config"));
    }

    #[test]
    fn test_with_auth_token() {
        let config = FormConfig::default().with_auth_token(Some("abc123".to_string()));
        assert_eq!(config.host.auth_token, "abc123");
        let config = config.with_auth_token(None);
        assert_eq!(config.host.auth_token, "abc123");
    }
}
