use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lp-import")]
#[command(about = "Import a web page into editable landing-page sections")]
#[command(version)]
pub struct Args {
    /// URL of the page to import (also recorded as the LP source)
    pub url: String,

    /// Read the HTML from a local file instead of fetching the URL
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Override the User-Agent header sent with the fetch
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Load importer configuration from a JSON file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the resulting LP JSON
    #[arg(short, long)]
    pub pretty: bool,
}
