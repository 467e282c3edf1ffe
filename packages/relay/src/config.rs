use std::env;

/// Downstream endpoint settings. Populated once by the entry point; the
/// forwarder itself reads no environment.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub url: String,
    pub token: String,
}

impl RelayConfig {
    pub fn new(url: &str, token: &str) -> RelayConfig {
        RelayConfig {
            url: url.to_string(),
            token: token.to_string(),
        }
    }

    /// Reads `URL` and `TOKEN`. Missing variables resolve to empty strings;
    /// emptiness is rejected when the forwarder builds the request.
    pub fn from_env() -> RelayConfig {
        RelayConfig {
            url: env::var("URL").unwrap_or_default(),
            token: env::var("TOKEN").unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_resolve_to_empty_strings() {
        std::env::remove_var("URL");
        std::env::remove_var("TOKEN");

        let config = RelayConfig::from_env();

        assert_eq!(config.url, "");
        assert_eq!(config.token, "");
    }
}
