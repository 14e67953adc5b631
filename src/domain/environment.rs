use clap::ValueEnum;
use std::collections::HashMap;
use std::env;

/// Deployment environment the session is created against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Environment {
    Development,
    Uat,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Uat,
        Environment::Production,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Uat => "uat",
            Environment::Production => "production",
        }
    }
}

/// Per-environment connection settings. Resolved once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub display_name: String,
    pub api_endpoint: String,
    pub universal_link_base: String,
    pub api_key: String,
}

/// Immutable lookup from [`Environment`] to its configuration.
pub struct Environments {
    configs: HashMap<Environment, EnvironmentConfig>,
}

impl Environments {
    /// Builds the environment table. Endpoints and link bases are fixed;
    /// API keys come from the process environment with a placeholder
    /// fallback.
    pub fn from_env() -> Self {
        let mut configs = HashMap::new();
        configs.insert(
            Environment::Development,
            EnvironmentConfig {
                display_name: "DEV".to_string(),
                api_endpoint: "https://dev-payments.cardfree.net/v1/payment/session".to_string(),
                universal_link_base: "https://dev-mobile.cardfree.net/pay/tap-to-pay".to_string(),
                api_key: api_key_from_env("TTP_DEV_API_KEY"),
            },
        );
        configs.insert(
            Environment::Uat,
            EnvironmentConfig {
                display_name: "UAT".to_string(),
                api_endpoint: "https://uat-payments.cardfree.net/v1/payment/session".to_string(),
                universal_link_base: "https://uat-mobile.cardfree.net/pay/tap-to-pay".to_string(),
                api_key: api_key_from_env("TTP_UAT_API_KEY"),
            },
        );
        configs.insert(
            Environment::Production,
            EnvironmentConfig {
                display_name: "PROD".to_string(),
                api_endpoint: "https://payments.cardfree.com/v1/payment/session".to_string(),
                universal_link_base: "https://mobile.cardfree.com/pay/tap-to-pay".to_string(),
                api_key: api_key_from_env("TTP_PRD_API_KEY"),
            },
        );
        Self { configs }
    }

    pub fn get(&self, environment: Environment) -> &EnvironmentConfig {
        // The table is total over the enum; the lookup cannot miss.
        &self.configs[&environment]
    }
}

fn api_key_from_env(var: &str) -> String {
    env::var(var).unwrap_or_else(|_| "REPLACE_ME".to_string())
}

/// Scheme and host the external app uses to return control to us.
#[derive(Debug, Clone, PartialEq)]
pub struct DeepLinkConfig {
    pub scheme: String,
    pub host: String,
}

impl DeepLinkConfig {
    pub fn from_env() -> Self {
        Self {
            scheme: env::var("TTP_DEEPLINK_SCHEME").unwrap_or_else(|_| "tapsample".to_string()),
            host: env::var("TTP_DEEPLINK_HOST").unwrap_or_else(|_| "callback".to_string()),
        }
    }

    pub fn return_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_ids() {
        assert_eq!(Environment::Development.id(), "development");
        assert_eq!(Environment::Uat.id(), "uat");
        assert_eq!(Environment::Production.id(), "production");
    }

    #[test]
    fn test_fixed_endpoints() {
        let environments = Environments::from_env();

        let dev = environments.get(Environment::Development);
        assert_eq!(dev.display_name, "DEV");
        assert_eq!(
            dev.api_endpoint,
            "https://dev-payments.cardfree.net/v1/payment/session"
        );
        assert_eq!(
            dev.universal_link_base,
            "https://dev-mobile.cardfree.net/pay/tap-to-pay"
        );

        let prod = environments.get(Environment::Production);
        assert_eq!(prod.display_name, "PROD");
        assert_eq!(
            prod.api_endpoint,
            "https://payments.cardfree.com/v1/payment/session"
        );
    }

    #[test]
    fn test_all_environments_configured() {
        let environments = Environments::from_env();
        for environment in Environment::ALL {
            assert!(!environments.get(environment).api_endpoint.is_empty());
        }
    }

    #[test]
    fn test_return_url_formatting() {
        let config = DeepLinkConfig {
            scheme: "app".to_string(),
            host: "host".to_string(),
        };
        assert_eq!(config.return_url(), "app://host");
    }
}
