// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Read the target list (one app name per line)
// 3. Probe every target concurrently and collect the results
// 4. Print the report (CSV-style text or JSON)
// 5. Exit with proper code (0 = all reachable, 1 = something unreachable,
//    2 = error)
//
// Diagnostics go to stderr via tracing; the report goes to stdout. That
// separation means `app-guardian apps.txt > report.csv` captures a clean
// report no matter how chatty the logs are.
//
// Rust concepts used:
// - async/await: Because we need to make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching on success and failure
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod input;    // src/input.rs - target list reading
mod probe;    // src/probe/ - probing and classification logic
mod report;   // src/report.rs - report rendering

// Import items we need from our modules
use cli::Cli;
use clap::Parser; // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    init_tracing();

    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Sets up the tracing subscriber
//
// Default level is `info`; RUST_LOG overrides it (e.g. RUST_LOG=debug).
// Events go to stderr so the stdout report stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = every target reachable
//   Ok(1) = at least one target unreachable
//   Err = fatal error (unreadable input, etc.), reported as exit code 2
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, and usage errors
    let cli = Cli::parse();

    info!("start processing");

    // Read the target list; failure here is fatal - without targets
    // there is nothing to probe
    let targets = input::read_targets(&cli.input)?;

    info!(
        "probing {} app(s) against {}",
        targets.len(),
        cli.base_domain
    );

    // None = no per-request timeout (the legacy behavior)
    let timeout = cli.timeout.map(Duration::from_secs);

    // Fan out one worker per target, wait for all of them, drain results
    let results = probe::probe_all(targets, &cli.base_domain, timeout).await;

    // Print the report to stdout
    print_report(&results, cli.json)?;

    // Count unreachable apps for the summary and the exit code
    let unreachable = results.iter().filter(|r| !r.accessible).count();

    info!(
        "complete processing: {} unreachable out of {}",
        unreachable,
        results.len()
    );

    if unreachable > 0 {
        Ok(1) // Exit code 1 = something is unreachable
    } else {
        Ok(0) // Exit code 0 = all good
    }
}

// Prints the report either as CSV-style text or JSON
//
// Parameters:
//   results: slice of ProbeResult structs, in drain order
//   json: whether to output JSON format
fn print_report(results: &[probe::ProbeResult], json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        println!("{}", report::render_json(results)?);
    } else {
        // render_csv already newline-terminates every row
        print!("{}", report::render_csv(results));
    }
    Ok(())
}
