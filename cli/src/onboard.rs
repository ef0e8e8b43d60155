use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Select};
use huaraz_core::agent::AgentProfile;
use huaraz_core::config::{Config, WeatherConfig};
use huaraz_core::providers::factory::AVAILABLE_PROVIDERS;

const BANNER: &str = r"
    -------------------------------------

      /\        HUARAZ
     /  \/\     Asistente turístico
    /    \ \    Cordillera Blanca, Perú

    -------------------------------------
";

const TOTAL_STEPS: usize = 5;

fn print_step(step: usize, total: usize, title: &str) {
    println!();
    println!(
        "{}",
        style(format!("[{}/{}] {}", step, total, title))
            .cyan()
            .bold()
    );
    println!();
}

fn setup_provider() -> Result<String> {
    let selection = Select::new()
        .with_prompt("Select your LLM provider")
        .items(AVAILABLE_PROVIDERS)
        .default(0)
        .interact()
        .context("Failed to select provider")?;

    Ok(AVAILABLE_PROVIDERS[selection].to_string())
}

fn setup_api_key(provider: &str) -> Result<String> {
    if provider == "ollama" {
        println!(
            "  {} Ollama runs locally, no API key needed",
            style("✓").green()
        );
        return Ok(String::new());
    }

    let api_key: String = Input::new()
        .with_prompt(format!("Enter your {} API key", provider))
        .interact_text()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        return Err(anyhow::anyhow!("API key cannot be empty"));
    }

    Ok(api_key.trim().to_string())
}

fn models_for(provider: &str) -> &'static [&'static str] {
    match provider {
        "groq" => &["llama-3.3-70b-versatile", "llama-3.1-8b-instant", "mixtral-8x7b-32768"],
        "anthropic" => &["claude-3-5-sonnet-latest", "claude-3-5-haiku-latest", "claude-3-opus-latest"],
        "ollama" => &["llama3.2", "qwen2.5", "mistral"],
        _ => &["gpt-4o-mini", "gpt-4o", "gpt-4-turbo"],
    }
}

fn setup_model(provider: &str) -> Result<String> {
    let models = models_for(provider);

    let selection = Select::new()
        .with_prompt("Select your model")
        .items(models)
        .default(0)
        .interact()
        .context("Failed to select model")?;

    Ok(models[selection].to_string())
}

fn setup_profile() -> Result<AgentProfile> {
    let profiles = [
        AgentProfile::Standard,
        AgentProfile::Expert,
        AgentProfile::Budget,
    ];
    let labels = [
        "standard - balanced answers",
        "expert - longer multi-step planning",
        "budget - prefers economical options",
    ];

    let selection = Select::new()
        .with_prompt("Select a traveller profile")
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to select profile")?;

    Ok(profiles[selection])
}

fn setup_weather() -> Result<WeatherConfig> {
    let mut weather = WeatherConfig::default();

    weather.enabled = Confirm::new()
        .with_prompt("Enable the weather tool?")
        .default(true)
        .interact()
        .context("Failed to read weather choice")?;

    if !weather.enabled {
        return Ok(weather);
    }

    let api_key: String = Input::new()
        .with_prompt("OpenWeather API key (leave empty for general climate info)")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read weather API key")?;

    let api_key = api_key.trim();
    if !api_key.is_empty() {
        weather.api_key = Some(api_key.to_string());
    }

    Ok(weather)
}

pub fn run_onboard() -> Result<Config> {
    println!("{}", style(BANNER).cyan().bold());

    println!("  {}", style("¡Bienvenido a Huaraz!").white().bold());
    println!(
        "  {}",
        style("This wizard will configure your travel assistant.").dim()
    );
    println!();

    print_step(1, TOTAL_STEPS, "Provider");
    let provider = setup_provider()?;

    print_step(2, TOTAL_STEPS, "API Key Setup");
    let api_key = setup_api_key(&provider)?;

    print_step(3, TOTAL_STEPS, "Model Selection");
    let model = setup_model(&provider)?;

    print_step(4, TOTAL_STEPS, "Traveller Profile");
    let profile = setup_profile()?;

    print_step(5, TOTAL_STEPS, "Weather");
    let weather = setup_weather()?;
    if weather.enabled && weather.api_key.is_none() {
        println!(
            "  {} Set HUARAZ_WEATHER_API_KEY or OPENWEATHER_API_KEY later for live weather",
            style("!").yellow()
        );
    }

    let config = Config {
        provider: Some(provider),
        api_key,
        model,
        profile,
        weather,
        ..Default::default()
    };

    println!();
    println!("  {} Configuration complete!", style("✓").green().bold());
    println!(
        "  {} Config saved to {}",
        style("→").green(),
        style(huaraz_core::config::get_config_path().display()).cyan()
    );
    println!();
    println!(
        "  {} You can now run: {}",
        style("→").green(),
        style("huaraz chat").cyan().bold()
    );
    println!();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_provider_offers_models() {
        for provider in AVAILABLE_PROVIDERS {
            assert!(!models_for(provider).is_empty());
        }
        assert_eq!(models_for("openai")[0], Config::default().model);
    }
}
