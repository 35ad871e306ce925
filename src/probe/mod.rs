// src/probe/mod.rs
// =============================================================================
// This module contains all probing logic.
//
// Submodules:
// - worker: Fetches each app concurrently and collects the results
// - classify: Pure content heuristics for telling real apps apart from
//   platform placeholder pages
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod classify;
mod worker;

// Re-export public items from submodules
// This lets users write `probe::probe_all()` instead of
// `probe::worker::probe_all()`. Only what the rest of the crate actually
// consumes is re-exported; the classifier stays an internal detail of
// the worker.
pub use worker::{probe_all, ProbeResult, STATUS_UNAVAILABLE};
