//! Core module - Shared plumbing for both filters
//!
//! This module provides:
//! - Input sources (files or stdin) and lossy line reading
//! - Diagnostics on stderr gated by --quiet/--verbose
//! - Serializable report models
//! - Rendering to text/jsonl/json

pub mod diag;
pub mod input;
pub mod model;
pub mod render;
