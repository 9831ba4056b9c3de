//! Agent Relay CLI - chat with an LLM through the relay server
//!
//! Terminal counterpart of the browser chatbot: every message goes to
//! `GET /prompt/{message}` and the generated text is printed back.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use std::io::Write;

use api::RelayClient;
use config::Config;

#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Agent Relay CLI - chat with an LLM through the relay server", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one prompt and print the response
    Ask {
        /// Prompt text (multiple words are joined with spaces)
        #[arg(required = true)]
        prompt: Vec<String>,
    },

    /// Interactive chat session
    Chat,

    /// Check that the relay server is up
    Health,

    /// Store the relay API key (RELAY_API_KEY on the server)
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Set the relay server URL
    Endpoint {
        /// Base URL, e.g. http://localhost:8003
        url: String,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { prompt } => cmd_ask(prompt.join(" ")).await,
        Commands::Chat => cmd_chat().await,
        Commands::Health => cmd_health().await,
        Commands::Login { key } => cmd_login(key).await,
        Commands::Endpoint { url } => cmd_endpoint(url),
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

fn client_from(config: &Config) -> RelayClient {
    RelayClient::new(&config.endpoint(), config.api_key.as_deref())
}

async fn cmd_ask(prompt: String) -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config);

    let response = client.ask(&prompt).await?;

    // Plain stdout so the answer can be piped
    println!("{}", response);

    Ok(())
}

async fn cmd_chat() -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config);

    print_chat_banner(&config.endpoint());

    loop {
        let line: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        match line.trim() {
            "" => continue,
            "exit" | "quit" => break,
            "clear" => {
                clear_screen()?;
                print_chat_banner(&config.endpoint());
                continue;
            }
            _ => {}
        }

        match client.ask(&line).await {
            Ok(response) => {
                println!("{} {}", "Agent's response:".cyan().bold(), response);
            }
            Err(e) => {
                println!(
                    "{} Failed to fetch response from the server: {}",
                    "Error:".red().bold(),
                    e
                );
            }
        }
    }

    Ok(())
}

fn print_chat_banner(endpoint: &str) {
    println!("{}", "Chatbot - Powered by AI".bold());
    println!(
        "{}",
        format!("Connected to {endpoint}. Type 'clear' to reset, 'exit' to quit.").dimmed()
    );
}

fn clear_screen() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "\x1B[2J\x1B[1;1H").context("Failed to clear screen")?;
    stdout.flush().context("Failed to clear screen")
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config);

    let health = client.health().await?;

    println!(
        "{} {} ({} / {}) v{}",
        "✓".green(),
        health.status.green(),
        health.provider.cyan(),
        health.model.cyan(),
        health.version.dimmed()
    );

    Ok(())
}

async fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    // Test connection
    let client = RelayClient::new(&config.endpoint(), Some(&api_key));
    print!("Testing connection... ");

    match client.health().await {
        Ok(_) => println!("{}", "OK".green()),
        Err(_) => {
            println!("{}", "Failed".red());
            bail!("Could not reach the relay server at {}", config.endpoint());
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_endpoint(url: String) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("Endpoint must start with http:// or https://");
    }

    let mut config = Config::load()?;
    config.set_base_url(&url);
    config.save()?;

    println!("{} Endpoint set to {}", "✓".green(), config.base_url.cyan());

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    if config.endpoint() != config.base_url {
        println!(
            "  Endpoint override ({}): {}",
            config::ENDPOINT_ENV,
            config.endpoint().cyan()
        );
    }
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );

    Ok(())
}
