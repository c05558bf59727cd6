use anyhow::{anyhow, Result};
use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};

/// Directory searched for `<KEY>.md` when a feature key is given,
/// relative to the current working directory.
pub const PRP_ROOT: &str = "PRPs";

/// Prepare a Product Requirement Prompt (PRP) for an AI coding agent
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(true)
        .args(["prp", "prp_path"]),
))]
pub struct Cli {
    /// Feature key; resolves to PRPs/<KEY>.md
    #[arg(long, value_name = "KEY")]
    pub prp: Option<String>,

    /// Path to a PRP markdown file (overrides --prp)
    #[arg(long, value_name = "PATH")]
    pub prp_path: Option<PathBuf>,

    /// Print the prompt with copy/paste instructions instead of raw text
    #[arg(long)]
    pub interactive: bool,
}

/// Resolve the PRP file location from the two argument sources.
///
/// An explicit path always wins over a feature key. The key form resolves
/// to `PRPs/<KEY>.md`; no existence or extension checking happens here.
pub fn resolve_prp_path(prp: Option<&str>, prp_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = prp_path {
        return Ok(path.to_path_buf());
    }

    if let Some(key) = prp {
        return Ok(Path::new(PRP_ROOT).join(format!("{key}.md")));
    }

    Err(anyhow!("must provide either --prp or --prp-path"))
}
