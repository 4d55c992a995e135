use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Puzzle input read entirely into memory before solving.
pub struct InputFile {
    /// File path, or `<stdin>`.
    pub name: String,
    pub contents: String,
}

impl InputFile {
    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path.display()))?;
        Ok(Self {name: path.display().to_string(), contents})
    }

    pub fn stdin() -> Result<Self> {
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)
            .context("failed to read input from standard input")?;
        Ok(Self {name: "<stdin>".to_string(), contents})
    }

    pub fn from_path_or_stdin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => Self::stdin(),
        }
    }
}

impl From<&str> for InputFile {
    fn from(value: &str) -> Self {
        Self {name: "<memory>".to_string(), contents: value.to_string()}
    }
}
