//! prp-runner: Prepare a Product Requirement Prompt (PRP) for an AI coding agent
//!
//! This library provides the core functionality for resolving a PRP file on
//! disk, composing it with a fixed workflow-guidance header, and presenting
//! the result in headless or interactive form.

/// Command-line surface and PRP path resolution
pub mod cli;

/// Headless and interactive presentation of a composed prompt
pub mod output;

/// Header constant and prompt composition
pub mod prompt;
