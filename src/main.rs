//! # GearBot — Product & Training Assistant
//!
//! Answers free-text questions about the product catalog with matching
//! products and up to three training videos each.
//!
//! Usage:
//!   gearbot ask "what can I use for footwork?"   # one-shot answer
//!   gearbot chat                                 # interactive session
//!   gearbot data                                 # table preview
//!   gearbot serve                                # HTTP gateway

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use gearbot_catalog::SnapshotStore;
use gearbot_core::config::GearbotConfig;
use gearbot_core::types::ChatMessage;
use gearbot_engine::Responder;

#[derive(Parser)]
#[command(name = "gearbot", version, about = "🏋️ GearBot — Product & Training Assistant")]
struct Cli {
    /// Path to config file (default: ~/.gearbot/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a single query and exit
    Ask {
        /// Free-text query
        query: Vec<String>,
    },
    /// Interactive chat session
    Chat,
    /// Preview the loaded product & video tables
    Data,
    /// Run the HTTP gateway
    Serve,
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

fn load_config(cli: &Cli) -> Result<GearbotConfig> {
    match &cli.config {
        Some(path) => {
            let path = expand_path(path);
            Ok(GearbotConfig::load_from(std::path::Path::new(&path))?)
        }
        None => Ok(GearbotConfig::load()?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "gearbot=debug,gearbot_core=debug,gearbot_catalog=debug,gearbot_engine=debug,\
         gearbot_gateway=debug,tower_http=debug"
    } else {
        "gearbot=info,gearbot_catalog=info,gearbot_gateway=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    let config = load_config(&cli)?;
    let store = Arc::new(SnapshotStore::open(&config.data));

    match cli.command {
        Command::Ask { query } => {
            let query = query.join(" ");
            let responder = Responder::new(config.engine.clone());
            let pair = store.snapshot();
            println!("{}", responder.answer(&query, &pair));
        }
        Command::Chat => run_chat(&config, &store)?,
        Command::Data => print_data(&store),
        Command::Serve => gearbot_gateway::run(config, store).await?,
    }
    Ok(())
}

/// Interactive REPL. The transcript lives here, owned by the caller — the
/// engine only ever sees one query at a time.
fn run_chat(config: &GearbotConfig, store: &SnapshotStore) -> Result<()> {
    let responder = Responder::new(config.engine.clone());
    let mut transcript: Vec<ChatMessage> =
        vec![ChatMessage::assistant(config.identity.greeting.clone())];

    println!("🏋️ {} — ask about products, type 'quit' to exit", config.identity.name);
    if !config.identity.example_questions.is_empty() {
        println!(
            "Example questions: {}",
            config.identity.example_questions.join(" · ")
        );
    }
    println!("\n{}\n", config.identity.greeting);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        // Pick up edited data files between turns.
        store.refresh();
        let pair = store.snapshot();
        let reply = responder.answer(line, &pair);

        transcript.push(ChatMessage::user(line));
        transcript.push(ChatMessage::assistant(reply.clone()));
        println!("\n{reply}\n");
    }
    tracing::debug!("chat ended with {} transcript entries", transcript.len());
    Ok(())
}

fn print_data(store: &SnapshotStore) {
    let pair = store.snapshot();
    println!("Products ({}):", pair.catalog.products.len());
    for p in &pair.catalog.products {
        println!("  [{}] {} — {}", p.id, p.name, p.url);
        if !p.keywords.is_empty() {
            println!("        keywords: {}", p.keywords);
        }
    }
    println!("\nVideos ({}):", pair.media.videos.len());
    for v in &pair.media.videos {
        println!("  [{}] {} — {}", v.product_id, v.title, v.url);
    }
}
