use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// Workflow guidance prepended to every PRP. The interior indentation and
/// the trailing spaces before the PRP body are part of the output contract.
pub const META_HEADER: &str = "Ingest and understand the Product Requirement Prompt (PRP) below in detail.

    # WORKFLOW GUIDANCE:

    ## Planning Phase
    - Think hard before you code. Create a comprehensive plan addressing all requirements.
    - Break down complex tasks into smaller, manageable steps.
    - Use the TodoWrite tool to create and track your implementation plan.
    - Identify implementation patterns from existing code to follow.

    ## Implementation Phase
    - Follow code conventions and patterns found in existing files.
    - Implement one component at a time and verify it works correctly.
    - Write clear, maintainable code with appropriate comments.
    - Consider error handling, edge cases, and potential security issues.
    - Use type hints to ensure type safety.

    ## Validation Phase
    - Run all validation commands specified in the PRP.
    - Test the implementation thoroughly.
    - Ensure all requirements are met before considering the task complete.
    - Fix any issues found during validation.

    ---

    Now, implement the PRP below:

    ";

/// Load a PRP file and compose the complete prompt.
///
/// The composed prompt is the header immediately followed by the file's
/// full text: no trimming, no line-ending normalization.
pub fn load_prompt(prp_path: &Path) -> Result<String> {
    if !prp_path.exists() {
        return Err(anyhow!("PRP file not found: {}", prp_path.display()));
    }

    let prp_content = fs::read_to_string(prp_path)
        .with_context(|| format!("failed to read PRP file at {}", prp_path.display()))?;

    Ok(format!("{META_HEADER}{prp_content}"))
}
