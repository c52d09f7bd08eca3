//! ryz_cli - driver functionality (library interface for testing)

use clap::Parser;

pub mod manifest;
pub mod normalize;
pub mod pipeline;

#[derive(Parser)]
#[command(name = "ryzc")]
#[command(about = "The Ryz to Java source translator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Translate .ryz sources into .java files
    Build {
        /// Input .ryz files, resolved against the source directories
        files: Vec<String>,
        /// Output directory for the generated .java files
        #[arg(short, long)]
        output: Option<String>,
        /// Directories searched for the input files
        #[arg(long = "source-dir")]
        source_dirs: Vec<String>,
    },
    /// Translate without writing any output
    Check {
        /// Input .ryz files, resolved against the source directories
        files: Vec<String>,
        /// Directories searched for the input files
        #[arg(long = "source-dir")]
        source_dirs: Vec<String>,
    },
    /// Show version information
    Version,
}

pub fn get_version() -> String {
    format!("ryzc {}", env!("CARGO_PKG_VERSION"))
}
