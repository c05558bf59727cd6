use anyhow::Result;
use std::io::Write;

/// Write the composed prompt to `out`.
///
/// Headless mode emits the prompt followed by a single newline and nothing
/// else. Interactive mode wraps it in banners and a short instruction list
/// for copy/paste use. Never reads from stdin.
pub fn present<W: Write>(out: &mut W, prompt: &str, interactive: bool) -> Result<()> {
    if interactive {
        writeln!(out, "=== PRP LOADED FOR CURSOR ===")?;
        writeln!(out, "{prompt}")?;
        writeln!(out, "\n=== INSTRUCTIONS ===")?;
        writeln!(out, "1. Copy the PRP content above")?;
        writeln!(out, "2. Paste it into Cursor")?;
        writeln!(out, "3. Follow the workflow guidance to implement the PRP")?;
        writeln!(out, "4. Use the validation commands to verify your implementation")?;
    } else {
        writeln!(out, "{prompt}")?;
    }

    Ok(())
}
