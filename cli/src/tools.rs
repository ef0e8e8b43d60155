use anyhow::{Context, Result};
use console::style;
use huaraz_core::agent::ToolRegistry;
use huaraz_core::config::Config;
use huaraz_core::knowledge::KnowledgeBase;
use huaraz_core::tools::{WeatherTool, register_huaraz_tools};

pub async fn handle_command(command: ToolsCommands, config: &Config) -> Result<()> {
    let registry = build_registry(config)?;

    match command {
        ToolsCommands::List => list_tools(&registry),
        ToolsCommands::Call { name, args } => call_tool(&registry, &name, args.as_deref()).await,
    }
}

fn build_registry(config: &Config) -> Result<ToolRegistry> {
    let weather = if config.weather.enabled {
        Some(
            WeatherTool::new(config.weather.client()?)
                .with_default_location(config.weather.location.clone()),
        )
    } else {
        None
    };

    let registry = ToolRegistry::new();
    register_huaraz_tools(&registry, KnowledgeBase::huaraz(), weather);
    Ok(registry)
}

fn list_tools(registry: &ToolRegistry) -> Result<()> {
    let specs = registry.get_specs();

    println!(
        "{} Available tools ({})",
        style("✓").green().bold(),
        specs.len()
    );
    println!();

    for spec in specs {
        println!("  {}", style(&spec.name).white().bold());
        println!("    {}", spec.description);

        if let Some(properties) = spec.parameters_schema["properties"].as_object()
            && !properties.is_empty()
        {
            let names: Vec<&str> = properties.keys().map(String::as_str).collect();
            println!("    {} {}", style("Args:").dim(), names.join(", "));
        }

        println!();
    }

    Ok(())
}

async fn call_tool(registry: &ToolRegistry, name: &str, args: Option<&str>) -> Result<()> {
    let args: serde_json::Value = match args {
        Some(raw) => serde_json::from_str(raw)
            .with_context(|| format!("Arguments for {} must be a JSON object", name))?,
        None => serde_json::json!({}),
    };

    let result = registry.execute(name, args).await;
    if !result.success {
        anyhow::bail!("{}", result.error.unwrap_or_default());
    }

    match serde_json::from_str::<serde_json::Value>(&result.output) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", result.output),
    }

    Ok(())
}

#[derive(clap::Subcommand, Clone, Debug)]
pub enum ToolsCommands {
    /// List the tools offered to the model
    List,
    /// Run one tool directly with JSON arguments
    Call {
        name: String,
        /// Arguments object, e.g. '{"query": "laguna"}'
        args: Option<String>,
    },
}
