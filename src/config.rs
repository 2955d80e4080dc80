use dioxus::prelude::*;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub typewriter: TypewriterConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TypewriterConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_words")]
    pub words: Vec<String>,
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            words: default_words(),
            hold_ms: default_hold_ms(),
        }
    }
}

fn default_words() -> Vec<String> {
    vec![
        "Fullstack Developer".to_string(),
        "Software Engineer".to_string(),
        "UI/UX Designer".to_string(),
    ]
}

fn default_hold_ms() -> u32 {
    2000
}

pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move { fetch_runtime_config().await })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> RuntimeConfig {
    match fetch_config_from("/config.json").await {
        Ok(config) => config,
        Err(primary) => match fetch_config_from("/assets/config.json").await {
            Ok(config) => config,
            Err(fallback) => {
                tracing::debug!(%primary, %fallback, "runtime config unavailable, using defaults");
                RuntimeConfig::default()
            }
        },
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> RuntimeConfig {
    let enabled = std::env::var("PORTFOLIO_TYPEWRITER")
        .map(|value| flag_enabled(&value))
        .unwrap_or(false);
    RuntimeConfig {
        typewriter: TypewriterConfig {
            enabled,
            ..TypewriterConfig::default()
        },
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn flag_enabled(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_decodes_to_defaults() {
        let config: RuntimeConfig = serde_json::from_str("{}").expect("valid json");
        assert_eq!(config, RuntimeConfig::default());
        assert!(!config.typewriter.enabled);
        assert_eq!(config.typewriter.hold_ms, 2000);
    }

    #[test]
    fn partial_typewriter_config_keeps_remaining_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"typewriter":{"enabled":true}}"#).expect("valid json");
        assert!(config.typewriter.enabled);
        assert_eq!(config.typewriter.words, TypewriterConfig::default().words);
        assert_eq!(config.typewriter.hold_ms, 2000);
    }

    #[test]
    fn full_typewriter_config_decodes() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{"typewriter":{"enabled":true,"words":["Rustacean"],"hold_ms":1500}}"#,
        )
        .expect("valid json");
        assert_eq!(config.typewriter.words, vec!["Rustacean".to_string()]);
        assert_eq!(config.typewriter.hold_ms, 1500);
    }

    #[test]
    fn env_flag_values() {
        assert!(flag_enabled("1"));
        assert!(flag_enabled("true"));
        assert!(flag_enabled("TRUE"));
        assert!(!flag_enabled("0"));
        assert!(!flag_enabled(""));
    }
}
