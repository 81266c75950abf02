//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chunkmill")]
#[command(
    author,
    version,
    about = "Structure-aware chunking for retrieval ingestion pipelines"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a transformation event against object storage
    Transform(TransformArgs),

    /// Chunk local files without touching object storage
    Chunk(ChunkArgs),

    /// List supported languages and extensions
    Languages,
}

#[derive(Args)]
pub struct TransformArgs {
    /// Event JSON file, or - for stdin
    #[arg(long, default_value = "-")]
    pub event: String,

    /// Serve buckets from this directory instead of S3
    #[arg(long)]
    pub local_root: Option<PathBuf>,

    /// Override the configured transformation bucket
    #[arg(long)]
    pub bucket: Option<String>,
}

#[derive(Args)]
pub struct ChunkArgs {
    /// File or directory to chunk
    pub path: PathBuf,

    /// Glob pattern for directory scans
    #[arg(long, default_value = "**/*")]
    pub pattern: String,

    /// Paragraph chunk size bound in bytes
    #[arg(long)]
    pub max_chunk_size: Option<usize>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
