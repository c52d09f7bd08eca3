//! Drives whole files through the translation core and writes the output.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use ryz_transform::{CompilationUnit, InterfaceInventory};

use crate::normalize;

pub struct BuildOptions {
    /// Directories searched, in order, for each input file.
    pub source_dirs: Vec<PathBuf>,
    /// Output root for generated .java files.
    pub output: PathBuf,
    /// `check` runs the full translation but writes nothing.
    pub write_output: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            source_dirs: vec![PathBuf::from(".")],
            output: PathBuf::from("."),
            write_output: true,
        }
    }
}

/// Translates every input file in order. Returns the paths written.
pub fn run(options: &BuildOptions, files: &[String]) -> Result<Vec<PathBuf>> {
    let interfaces = Arc::new(InterfaceInventory::default());
    let mut written = Vec::new();
    for file in files {
        let path = locate(&options.source_dirs, file)?;
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut unit =
            CompilationUnit::with_interfaces(file.clone(), normalize::clean_lines(&raw), interfaces.clone());
        unit.transform_source_code()
            .with_context(|| format!("translating {}", path.display()))?;
        for &line in unit.unprocessed_lines() {
            debug!(file = file.as_str(), line, "not processed");
        }
        if !unit.has_class_name() {
            bail!("no class header found in {}", path.display());
        }
        if options.write_output {
            let target = write_unit(&options.output, &unit)?;
            info!(path = %target.display(), "wrote generated source");
            written.push(target);
        }
    }
    Ok(written)
}

fn locate(source_dirs: &[PathBuf], file: &str) -> Result<PathBuf> {
    for dir in source_dirs {
        let candidate = dir.join(file);
        if candidate.exists() {
            return Ok(candidate);
        }
    }
    bail!("file not found in any source directory: {}", file)
}

/// Assembles the final source text: the header comment, the package chunk,
/// every import chunk in encounter order, then the remaining chunks.
pub fn assemble(unit: &CompilationUnit) -> String {
    let mut package = None;
    let mut imports = Vec::new();
    let mut body = Vec::new();
    for chunk in unit.output_lines() {
        if chunk.starts_with("package") {
            package.get_or_insert(chunk.as_str());
        } else if chunk.starts_with("import") {
            imports.push(chunk.as_str());
        } else {
            body.push(chunk.as_str());
        }
    }
    let mut source = format!("//-- Create from: {}\n", unit.source_file());
    if let Some(package) = package {
        source.push_str(package);
    }
    for import in imports {
        source.push_str(import);
    }
    for chunk in body {
        source.push_str(chunk);
    }
    source
}

fn write_unit(output_root: &Path, unit: &CompilationUnit) -> Result<PathBuf> {
    let package_dir = output_root.join(unit.package_name().replace('.', "/"));
    fs::create_dir_all(&package_dir)
        .with_context(|| format!("creating {}", package_dir.display()))?;
    let target = package_dir.join(format!("{}.java", unit.class_name()));
    fs::write(&target, assemble(unit))
        .with_context(|| format!("writing {}", target.display()))?;
    Ok(target)
}
