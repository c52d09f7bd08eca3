//! Optional `ryz.toml` project configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings a project can pin instead of repeating CLI flags. Flags win
/// over manifest values when both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Directories searched for .ryz sources.
    #[serde(default)]
    pub source_dirs: Vec<PathBuf>,
    /// Where the generated .java files land.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Manifest {
    /// Loads `ryz.toml` from the given directory, if present.
    pub fn load(dir: &Path) -> Result<Option<Manifest>> {
        let path = dir.join("ryz.toml");
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let manifest = toml::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_manifest_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(Manifest::load(dir.path()).expect("load").is_none());
    }

    #[test]
    fn manifest_values_parse() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("ryz.toml"),
            "source_dirs = [\"src\"]\noutput = \"out\"\n",
        )
        .expect("write manifest");
        let manifest = Manifest::load(dir.path()).expect("load").expect("present");
        assert_eq!(manifest.source_dirs, vec![PathBuf::from("src")]);
        assert_eq!(manifest.output, Some(PathBuf::from("out")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("ryz.toml"), "outputs = \"typo\"\n").expect("write manifest");
        assert!(Manifest::load(dir.path()).is_err());
    }
}
