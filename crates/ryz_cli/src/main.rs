// ryzc entry point
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ryz_cli::manifest::Manifest;
use ryz_cli::pipeline::{self, BuildOptions};
use ryz_cli::{get_version, Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Build {
            files,
            output,
            source_dirs,
        }) => {
            let options = build_options(output, source_dirs, true)?;
            let written = pipeline::run(&options, &files)?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Some(Commands::Check { files, source_dirs }) => {
            let options = build_options(None, source_dirs, false)?;
            pipeline::run(&options, &files)?;
            println!("{} file(s) check out", files.len());
        }
        Some(Commands::Version) | None => {
            println!("{}", get_version());
        }
    }
    Ok(())
}

/// CLI flags win; the manifest fills the gaps; defaults close the rest.
fn build_options(
    output: Option<String>,
    source_dirs: Vec<String>,
    write_output: bool,
) -> Result<BuildOptions> {
    let manifest = Manifest::load(&std::env::current_dir()?)?.unwrap_or_default();
    let mut options = BuildOptions::default();
    options.write_output = write_output;
    if !source_dirs.is_empty() {
        options.source_dirs = source_dirs.into_iter().map(PathBuf::from).collect();
    } else if !manifest.source_dirs.is_empty() {
        options.source_dirs = manifest.source_dirs;
    }
    if let Some(output) = output {
        options.output = PathBuf::from(output);
    } else if let Some(output) = manifest.output {
        options.output = output;
    }
    Ok(options)
}
