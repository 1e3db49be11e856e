use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use guidepost_core::gateways::notify::NotificationGateway;
use guidepost_gateways::{
    email::SendToJsonFile,
    feedback_analysis::{GenerativeModelConfig, GenerativeModelGateway},
    notify::{DummyNotifyGW, Notify},
};

#[derive(Debug, Parser)]
#[command(name = "guidepost", version, about = "Guidepost marketplace backend")]
struct Args {
    /// File path of the SQLite database
    #[arg(long, env = "DATABASE_URL", default_value = "guidepost.sqlite")]
    db_url: String,

    /// Size of the database connection pool
    #[arg(long, default_value_t = 8)]
    db_pool_size: u32,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    /// Directory where outgoing emails are archived as JSON files.
    /// Notifications are discarded if not set.
    #[arg(long, env = "GUIDEPOST_EMAIL_DIR")]
    email_dir: Option<PathBuf>,

    /// Chat completions endpoint of the feedback analysis provider
    #[arg(
        long,
        env = "GUIDEPOST_AI_API_URL",
        default_value = "https://api.openai.com/v1/chat/completions"
    )]
    ai_api_url: String,

    /// API key for the feedback analysis provider
    #[arg(long, env = "GUIDEPOST_AI_API_KEY", default_value = "", hide_env_values = true)]
    ai_api_key: String,

    /// Model used for feedback analysis
    #[arg(long, env = "GUIDEPOST_AI_MODEL", default_value = "gpt-4o-mini")]
    ai_model: String,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();

    let connections = guidepost_db_sqlite::Connections::init(&args.db_url, args.db_pool_size)?;
    guidepost_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    let notify: Box<dyn NotificationGateway + Send + Sync> = match &args.email_dir {
        Some(dir) => {
            let email_gw = SendToJsonFile::try_new(dir)?;
            log::info!("Archiving outgoing emails in {}", email_gw.path().display());
            Box::new(Notify::new(email_gw))
        }
        None => {
            log::warn!("No email directory configured, notifications are discarded");
            Box::new(DummyNotifyGW)
        }
    };

    let analysis = GenerativeModelGateway::new(GenerativeModelConfig {
        api_url: args.ai_api_url,
        api_key: args.ai_api_key,
        model: args.ai_model,
    });

    guidepost_webserver::run(connections, args.enable_cors, notify, Box::new(analysis)).await;
    Ok(())
}
