use anyhow::Context;
use campus_stay::chat::{ChatResponder, ChatTranscript};
use campus_stay::config::Config;
use campus_stay::search::MarketTrend;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campus-stay", about = "Student accommodation search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search listings near a college or locality
    Search {
        college: String,
        /// Also write the result as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run the HTTP server
    Serve,
    /// Chat with the keyword responder; interactive when no message is given
    Chat { message: Option<String> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Command::Search { college, output } => search(&config, &college, output).await,
        Command::Serve => serve(&config).await,
        Command::Chat { message } => chat(&config, message).await,
    }
}

async fn search(config: &Config, college: &str, output: Option<PathBuf>) -> anyhow::Result<()> {
    info!("🏠 Campus Stay - searching near {}", college);
    if config.fallback_mode() {
        info!("No GEMINI_API_KEY set, using fallback data");
    }

    let state = campus_stay::build_state(config)?;
    let result = state.search.search(college).await;

    info!("✅ Found {} listings", result.hostels.len());
    println!("{}\n", result.location_summary);

    for (i, listing) in result.hostels.iter().enumerate() {
        println!(
            "{}. {} [{}] ({} {}/month)",
            i + 1,
            listing.name,
            listing.kind,
            listing.currency,
            listing.price_per_month
        );
        println!(
            "   {} away, rated {} ({} reviews), {} beds left",
            listing.distance, listing.rating, listing.review_count, listing.availability
        );
        println!("   Amenities: {}", listing.amenities.join(", "));
        println!("   {}", listing.description);
        println!();
    }

    if let Some(trend) = MarketTrend::from_points(&result.market_insights) {
        let months: Vec<_> = result
            .market_insights
            .iter()
            .map(|p| format!("{} {}", p.month, p.avg_price))
            .collect();
        println!("Average rent: {}", months.join(" | "));
        println!(
            "Range {}-{}, {:+.1}% over the period",
            trend.min, trend.max, trend.change_pct
        );
    }

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&result)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved result to {}", path.display());
    }

    Ok(())
}

async fn chat(config: &Config, message: Option<String>) -> anyhow::Result<()> {
    let responder = ChatResponder::new(config.chat_delay);
    let mut transcript = ChatTranscript::new();

    if let Some(message) = message {
        if let Some(reply) = transcript.send(&responder, &message).await {
            println!("{}", reply);
        }
        return Ok(());
    }

    for greeting in transcript.messages() {
        println!("{}", greeting.text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if let Some(reply) = transcript.send(&responder, &line).await {
            println!("{}", reply);
        }
    }

    info!("Chat ended after {} messages", transcript.messages().len());
    Ok(())
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = campus_stay::build_state(config)?;
    let live = state.search.is_live();
    let app = campus_stay::web::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    info!(
        "🚀 Listening on http://{} ({} mode)",
        config.bind_addr,
        if live { "live" } else { "fallback" }
    );
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
