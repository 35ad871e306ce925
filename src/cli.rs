// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// app-guardian takes a single required positional argument: a text file
// with one app name per line. clap rejects missing or extra arguments
// for us before any probing happens, with a usage message and a non-zero
// exit code.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: For flags the user may leave out entirely
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "app-guardian",
    version = "0.1.0",
    about = "Probe a list of hosted apps and flag platform placeholder pages",
    long_about = "app-guardian reads a file of app names (one per line), probes each one \
                  at http://<name>.<base-domain>, and reports whether the response looks \
                  like a real application or a hosting-platform error/welcome page."
)]
pub struct Cli {
    /// Path to the input file listing one app name per line
    ///
    /// Blank lines are kept and reported as "no site name was provided"
    /// rows rather than being skipped, so the report always has one row
    /// per input line.
    pub input: String,

    /// Output results in JSON format instead of the CSV report
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,

    /// Domain appended to every app name to form the probe URL
    ///
    /// The probe URL template is http://<name>.<base-domain>
    #[arg(long, default_value = "herokuapp.com")]
    pub base_domain: String,

    /// Per-request timeout in seconds (default: none)
    ///
    /// The original behavior is no timeout at all, which means a single
    /// unresponsive endpoint can stall the whole run. Pass --timeout to
    /// bound each request instead.
    #[arg(long)]
    pub timeout: Option<u64>,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands?
//    - The tool does exactly one thing: probe a list of apps
//    - A single struct with a positional argument keeps the CLI flat
//    - clap still generates --help and --version for free
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why Option<u64> for timeout?
//    - None = the flag was not given = keep the legacy "no timeout" behavior
//    - Some(secs) = the user opted into a bounded request
//    - Option is Rust's type-safe way to model "maybe absent"
//
// 4. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------
