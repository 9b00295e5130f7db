//! Gateway configuration.

use std::env;

use common::RegistrationConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Eligibility rules applied to every registration
    pub registration: RegistrationConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = RegistrationConfig::default();

        Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            registration: RegistrationConfig {
                country_name: env::var("REGISTRATION_COUNTRY_NAME")
                    .unwrap_or(defaults.country_name),
                country_code: env::var("REGISTRATION_COUNTRY_CODE")
                    .unwrap_or(defaults.country_code),
                minimum_age: env::var("REGISTRATION_MINIMUM_AGE")
                    .ok()
                    .and_then(|a| a.parse().ok())
                    .unwrap_or(defaults.minimum_age),
            },
        }
    }

    /// Socket address string, e.g. `0.0.0.0:3000`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            registration: RegistrationConfig::default(),
        }
    }
}
