use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Pick a connection snippet from a catalog and print the files it resolves to.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// The directory containing connect.yaml
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Read catalogs from this file instead of <root>/connect.yaml
    #[clap(long)]
    pub catalogs: Option<PathBuf>,

    /// Named catalog to switch to, e.g. frameworks or orms
    #[clap(long, short)]
    pub catalog: Option<String>,

    #[clap(long, short)]
    pub parent: Option<String>,

    #[clap(long)]
    pub child: Option<String>,

    #[clap(long, short)]
    pub grandchild: Option<String>,

    /// Show snippets for the connection pooler
    #[clap(long)]
    pub pooler: bool,
}
