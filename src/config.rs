pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` runs the service in fallback-only mode.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let bind_addr = non_blank("BIND_ADDR").unwrap_or_else(|| {
            let port = non_blank("PORT").unwrap_or_else(|| "3000".to_string());
            format!("0.0.0.0:{}", port)
        });

        Self {
            openai_api_key: non_blank("OPENAI_API_KEY"),
            openai_model: non_blank("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            bind_addr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_fallback_mode() {
        let cfg = config(&[("OPENAI_API_KEY", "  ")]);
        assert!(cfg.openai_api_key.is_none());
        assert_eq!(cfg.openai_model, DEFAULT_MODEL);
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn reads_key_model_and_port() {
        let cfg = config(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("PORT", "8080"),
        ]);
        assert_eq!(cfg.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.openai_model, "gpt-4o");
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn bind_addr_wins_over_port() {
        let cfg = config(&[("BIND_ADDR", "127.0.0.1:9000"), ("PORT", "8080")]);
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
    }
}
