use anyhow::Result;
use clap::Parser;
use prompt_studio::session::Session;
use prompt_studio::ui;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "prompt-studio")]
#[command(about = "Turn a short idea into a structured image-generation prompt")]
struct CliArgs {
    /// One-shot mode: generate from this idea and print the final JSON.
    /// Without it, an interactive session starts.
    #[arg(value_name = "IDEA")]
    idea: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_studio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let mut session = match Session::new() {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to initialize session: {}", e);
            std::process::exit(1);
        }
    };

    match args.idea {
        Some(idea) => {
            info!("Running one-shot generation");
            session.generate(&idea).await;
            if let Some(message) = session.error() {
                error!("Generation did not complete: {}", message);
                eprintln!("{}", message);
                std::process::exit(1);
            }
            println!("{}", session.final_json());
            Ok(())
        }
        None => match ui::run_interactive(&mut session).await {
            Ok(()) => Ok(()),
            Err(e) => {
                error!("Session ended with error: {}", e);
                std::process::exit(1);
            }
        },
    }
}
