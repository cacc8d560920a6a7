use anyhow::Result;
use clap::{Parser, Subcommand};
use coursematch_common::{logger, AppConfig};
use coursematch_server::RecommendResponse;
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(env_path) = find_project_root().map(|root| root.join(".env")) {
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
            return;
        }
    }
    dotenv::dotenv().ok();
}

#[derive(Parser)]
#[command(name = "coursematch")]
#[command(about = "CourseMatch - semantic academic program recommender", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print recommendations for a query and exit
    Recommend {
        /// Free-text interests
        text: String,

        /// Number of recommendations
        #[arg(short, long)]
        k: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let mut config = AppConfig::from_env()?;
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            config.validate()?;
            serve(config).await?;
        }
        Some(Commands::Recommend { text, k }) => {
            let config = AppConfig::from_env()?;
            logger::setup_console_logging(&config.log_level)?;

            let k = k.unwrap_or(config.default_top_k);
            let engine = coursematch_server::build_engine(&config).await?;
            let result = engine.recommend(&text, k).await?;

            let response = RecommendResponse::from(result);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        None => {
            let config = AppConfig::from_env()?;
            serve(config).await?;
        }
    }

    Ok(())
}

async fn serve(config: AppConfig) -> Result<()> {
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("CourseMatch starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!(
        "  Embedding: {} ({})",
        config.embedding_backend,
        config.embedding_model
    );

    coursematch_server::start_server(config).await?;
    Ok(())
}
