use anyhow::Result;
use clap::Parser;
use prp_runner::cli::{resolve_prp_path, Cli};
use prp_runner::output::present;
use prp_runner::prompt::load_prompt;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let prp_path = resolve_prp_path(cli.prp.as_deref(), cli.prp_path.as_deref())?;
    let prompt = load_prompt(&prp_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    present(&mut out, &prompt, cli.interactive)?;
    out.flush()?;

    Ok(())
}
