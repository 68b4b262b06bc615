use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::Read;

use tubetime_core::{config, extract_video_ids, YoutubeClient, VIDEO_ID_LEN};

mod cli;
use cli::{Cli, Commands};

/// Initialize terminal logger (stderr, so stdout stays pipeable)
fn init_logger() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_logger()?;

    // Load environment variables from .env if present
    let _ = dotenv();

    match cli.command {
        Commands::Duration { video_id } => run_duration(&video_id).await,
        Commands::Extract { text } => run_extract(text),
    }
}

async fn run_duration(video_id: &str) -> Result<()> {
    if video_id.len() != VIDEO_ID_LEN {
        bail!(
            "{:?} - wrong YouTube video id (must be {} characters)",
            video_id,
            VIDEO_ID_LEN
        );
    }

    let Some(api_key) = config::YOUTUBE_API_KEY.as_deref() else {
        bail!(
            "YOUTUBEDATAKEY environment variable not set; get a key here: \
             https://console.developers.google.com/apis/api/youtube.googleapis.com"
        );
    };

    let client = YoutubeClient::new(api_key)?;
    match client.fetch_duration(video_id).await? {
        Some(duration) if !duration.is_empty() => println!("{}", duration),
        Some(_) => log::warn!(
            "Video {} has a duration the API reported in an unexpected format",
            video_id
        ),
        None => log::info!("No metadata for video {} (deleted or private?)", video_id),
    }

    Ok(())
}

fn run_extract(text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    for id in extract_video_ids(&text) {
        println!("{}", id);
    }

    Ok(())
}
