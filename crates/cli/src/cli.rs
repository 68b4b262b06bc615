use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tubetime")]
#[command(author, version, about = "Fetch YouTube video durations from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the duration of a video
    Duration {
        /// YouTube video ID (exactly 11 characters)
        video_id: String,
    },

    /// Extract video IDs from text (reads stdin when TEXT is omitted)
    Extract {
        /// Text to scan for YouTube links
        text: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
