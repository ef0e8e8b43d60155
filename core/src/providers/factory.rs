use crate::config::Config;
use crate::providers::{AnthropicProvider, OllamaProvider, OpenAIProvider};
use crate::traits::Provider;
use anyhow::{Result, anyhow};

pub const AVAILABLE_PROVIDERS: &[&str] = &["openai", "anthropic", "groq", "ollama"];

pub fn create_provider(config: &Config) -> Result<Box<dyn Provider>> {
    let provider_name = config.provider_name();

    match provider_name.to_lowercase().as_str() {
        "ollama" => {
            let mut provider = OllamaProvider::new();
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(Box::new(provider))
        }
        "openai" => {
            let api_key = resolve_api_key_with_fallback(
                &["OPENAI_API_KEY", "HUARAZ_OPENAI_API_KEY"],
                &config.api_key,
            )?;
            let mut provider = OpenAIProvider::new(api_key);
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(Box::new(provider))
        }
        "anthropic" => {
            let api_key = resolve_api_key_with_fallback(
                &["ANTHROPIC_API_KEY", "HUARAZ_ANTHROPIC_API_KEY"],
                &config.api_key,
            )?;
            let mut provider = AnthropicProvider::new(api_key);
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(Box::new(provider))
        }
        "groq" => {
            let api_key = resolve_api_key_with_fallback(
                &["GROQ_API_KEY", "HUARAZ_GROQ_API_KEY"],
                &config.api_key,
            )?;
            let mut provider = OpenAIProvider::groq(api_key);
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Ok(Box::new(provider))
        }
        _ => Err(anyhow!(
            "Unknown provider: {}. Available: {}",
            provider_name,
            AVAILABLE_PROVIDERS.join(", ")
        )),
    }
}

fn resolve_api_key_with_fallback(env_vars: &[&str], config_key: &str) -> Result<String> {
    if let Some(key) = env_vars
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|k| !k.is_empty()))
    {
        return Ok(key);
    }

    if !config_key.is_empty() {
        Ok(config_key.to_string())
    } else {
        Err(anyhow!(
            "No API key found. Set {} or run 'huaraz onboard'.",
            env_vars.join(" / ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_provider_lists_options() {
        let config = Config {
            provider: Some("gemini".to_string()),
            ..Default::default()
        };
        let err = create_provider(&config).err().unwrap();
        assert!(err.to_string().contains("openai, anthropic, groq, ollama"));
    }

    #[test]
    fn ollama_needs_no_key() {
        let config = Config {
            provider: Some("Ollama".to_string()),
            ..Default::default()
        };
        assert_eq!(create_provider(&config).unwrap().name(), "ollama");
    }

    #[test]
    fn config_key_used_as_fallback() {
        let key = resolve_api_key_with_fallback(&["HUARAZ_TEST_UNSET_KEY_VAR"], "sk-config").unwrap();
        assert_eq!(key, "sk-config");
        assert!(resolve_api_key_with_fallback(&["HUARAZ_TEST_UNSET_KEY_VAR"], "").is_err());
    }

    #[test]
    fn anthropic_uses_config_key() {
        let config = Config {
            provider: Some("Anthropic".to_string()),
            api_key: "sk-ant-config".to_string(),
            ..Default::default()
        };
        // An exported ANTHROPIC_API_KEY would win over the config key; either way a provider is built.
        assert_eq!(create_provider(&config).unwrap().name(), "anthropic");
    }
}
