use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use huaraz_core::agent::{AgentBuilder, AgentLoop, AgentProfile, UserContext};
use huaraz_core::config;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use termimad::MadSkin;
use tracing_subscriber::EnvFilter;

mod onboard;
mod tools;

#[derive(Parser)]
#[command(name = "huaraz")]
#[command(about = "huaraz - asistente turístico para Huaraz y la Cordillera Blanca", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive setup of provider, model and profile
    Onboard,
    /// Chat with the assistant; one-shot when a message is given
    Chat {
        #[arg(short, long)]
        message: Option<String>,
        /// standard, expert or budget
        #[arg(long)]
        profile: Option<AgentProfile>,
        /// budget, mid_range or luxury
        #[arg(long)]
        budget: Option<String>,
        #[arg(long)]
        fitness: Option<String>,
        /// Repeat for several interests
        #[arg(long = "interest")]
        interests: Vec<String>,
    },
    /// Inspect or run the Huaraz tools without a model
    Tools {
        #[command(subcommand)]
        command: tools::ToolsCommands,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or_else(|| {
        if !config::config_exists() {
            Commands::Onboard
        } else {
            Commands::Chat {
                message: None,
                profile: None,
                budget: None,
                fitness: None,
                interests: Vec::new(),
            }
        }
    });

    match command {
        Commands::Onboard => {
            let onboard_config = onboard::run_onboard().map_err(|e| {
                eprintln!("❌ Onboarding failed: {}", e);
                anyhow::anyhow!("Onboarding failed: {}", e)
            })?;
            config::save_config(&onboard_config)?;
        }
        Commands::Chat {
            message,
            profile,
            budget,
            fitness,
            interests,
        } => {
            let mut config = config::load_config()?;
            if let Some(profile) = profile {
                config.profile = profile;
            }

            let agent = AgentBuilder::from_config(&config)?.build();

            let user_context = UserContext {
                budget,
                fitness_level: fitness,
                interests,
                notes: None,
            };
            agent.set_user_context(&user_context).await?;

            let skin = MadSkin::default();

            if let Some(msg) = message {
                println!("\n🤔 Procesando...\n");
                let reply = agent.process_query(&msg).await;
                skin.print_text(&reply.response);
                if let Some(error) = reply.error {
                    anyhow::bail!("Agent processing failed: {}", error);
                }
            } else {
                run_repl(&agent, &skin).await?;
            }
        }
        Commands::Tools { command } => {
            let config = config::Config::load_or_init()?;
            tools::handle_command(command, &config).await?;
        }
    }

    Ok(())
}

async fn run_repl(agent: &AgentLoop, skin: &MadSkin) -> Result<()> {
    println!("🏔️  Huaraz ({} · {})", agent.provider_name(), agent.model());
    println!(
        "{}\n",
        style("Escribe tu consulta. /historial, /limpiar, /salir (Ctrl+D para salir)").dim()
    );

    let mut editor = DefaultEditor::new()?;
    let history_path = config::get_huaraz_dir().join("history.txt");
    let _ = editor.load_history(&history_path);

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("\n👋 ¡Buen viaje!");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);

        match input {
            "/salir" | "/exit" => {
                println!("👋 ¡Buen viaje!");
                break;
            }
            "/historial" => {
                let history = agent.conversation_history().await?;
                if history.is_empty() {
                    println!("{}", style("(sin historial)").dim());
                } else {
                    println!("{}", history);
                }
            }
            "/limpiar" | "/clear" => {
                agent.clear_memory().await?;
                println!("{} Historial borrado", style("✓").green());
            }
            _ => {
                println!("\n🤔 Procesando...\n");
                let reply = agent.process_query(input).await;
                skin.print_text(&reply.response);
                if !reply.tool_calls.is_empty() {
                    println!(
                        "{}",
                        style(format!("herramientas: {}", reply.tool_calls.join(", "))).dim()
                    );
                }
                if let Some(error) = reply.error {
                    eprintln!("❌ Error: {}", error);
                }
            }
        }

        println!();
    }

    if config::ensure_huaraz_dir().is_ok()
        && let Err(e) = editor.save_history(&history_path)
    {
        tracing::warn!("Could not save chat history: {}", e);
    }

    Ok(())
}
