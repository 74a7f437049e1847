//! Offline fraud check
//!
//! Scores a single input with the same rules as the API server and prints
//! the verdict as JSON.
//!
//! # Usage
//!
//! ```bash
//! shield-check message "Tebrikler! Hemen tıklayın" --sender-phone 08501234567
//! shield-check phone 08501234567
//! shield-check url https://bit.ly/abc
//! shield-check --config shield.toml url http://10.0.0.1/login
//! ```

use clap::{Parser, Subcommand};
use shield_rs::scoring::Analyzer;
use shield_rs::ShieldConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shield-check")]
#[command(about = "Score a message, phone number or URL for fraud risk", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a text message
    Message {
        /// Message text
        text: String,
        /// Sender phone number
        #[arg(long)]
        sender_phone: Option<String>,
    },
    /// Analyze a phone number
    Phone {
        /// Phone number
        number: String,
    },
    /// Analyze a URL
    Url {
        /// URL
        url: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ShieldConfig::load(cli.config.as_deref())?;
    let analyzer = Analyzer::new(config.rules, config.thresholds);

    let verdict = match cli.command {
        Commands::Message { text, sender_phone } => {
            analyzer.analyze_message(&text, sender_phone.as_deref())
        }
        Commands::Phone { number } => analyzer.analyze_phone(&number),
        Commands::Url { url } => analyzer.analyze_url(&url),
    };

    println!("{}", serde_json::to_string_pretty(&verdict)?);

    // Non-zero exit lets shell scripts branch on the verdict
    if verdict.is_fraud {
        std::process::exit(2);
    }

    Ok(())
}
