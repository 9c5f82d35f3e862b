//! Summarist CLI - article summarisation with interchangeable LLM providers
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for setting up logging and the environment and handling top-level errors.

use clap::Parser;
use colored::Colorize;
use summarist::clipboard::SystemClipboard;
use summarist::{agent, ui, ProcessEnv, Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "summarist")]
#[command(author, version, about = "Summarise articles with local or hosted LLMs", long_about = None)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let _cli = Cli::parse();

    // A missing .env is fine; keys may already be exported
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let settings = Settings::load()?;

    ui::print_banner();
    let kind = ui::select_provider()?;
    println!("\nUsing {} for summarization", kind);
    println!("{}", "-".repeat(30));

    let article = ui::read_article()?;
    println!("\nGenerating summary...");

    let mut clipboard = SystemClipboard::new();
    match agent::run(&article, kind, &ProcessEnv, &settings, &mut clipboard).await {
        Ok(summary) => {
            ui::print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
