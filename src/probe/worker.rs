// src/probe/worker.rs
// =============================================================================
// This module probes the targets: one async task per app name, all running
// at once, each delivering exactly one ProbeResult over a shared channel.
//
// Key guarantees:
// - One result per target, always. Every failure path inside a worker
//   produces a result instead of propagating an error, and even a panicked
//   task gets a synthetic result from the collector.
// - The channel's capacity equals the target count, so no worker ever
//   blocks trying to deliver.
// - The collector joins EVERY worker before draining a single result, so
//   the report is never partial.
// - Results arrive in completion order, not input order. The `app` field
//   is the only way to correlate a row back to the input list.
//
// There is deliberately no concurrency cap: the original tool spawned one
// goroutine per target and we keep that shape. Resource usage scales
// linearly with the input size, which is fine for the short app lists
// this tool is meant for.
//
// Rust concepts:
// - tokio::spawn: Start an async task on the runtime
// - mpsc channels: Multi-producer single-consumer message passing
// - join_all: Await many task handles as a barrier
// =============================================================================

use futures::future::join_all;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};
use url::Url;

use super::classify::classify;

/// Sentinel status for "no real HTTP status is available"
///
/// Used whenever a transport-level failure prevents us from ever seeing a
/// status line (connection refused, truncated stream, unreadable body...).
pub const STATUS_UNAVAILABLE: u16 = 999;

// The result of probing a single app
//
// Built exactly once inside a worker and immutable afterwards; ownership
// moves to the collector through the channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// The app name from the input list, echoed verbatim (even on failure)
    pub app: String,
    /// True iff we got a substantive, non-placeholder response
    pub accessible: bool,
    /// The real HTTP status, or STATUS_UNAVAILABLE when there isn't one
    pub status: u16,
    /// Human-readable classification or error explanation
    pub notes: String,
}

impl ProbeResult {
    fn new(app: String, accessible: bool, status: u16, notes: String) -> Self {
        ProbeResult {
            app,
            accessible,
            status,
            notes,
        }
    }
}

// Probes every target concurrently and collects all results
//
// This is the dispatcher + collector in one place:
// fan out one task per target, wait for all of them, drain the channel.
//
// Parameters:
//   targets: the app names to probe (duplicates are probed independently)
//   base_domain: domain for the http://<name>.<base_domain> template
//   timeout: optional per-request bound; None = no timeout (the default)
//
// Returns: one ProbeResult per target, in completion order
pub async fn probe_all(
    targets: Vec<String>,
    base_domain: &str,
    timeout: Option<Duration>,
) -> Vec<ProbeResult> {
    // Nothing to do: no workers, no channel, no blocking
    if targets.is_empty() {
        return Vec::new();
    }

    // One shared client for every worker (connection pooling).
    // No redirect override, default transport settings; the only knob is
    // the opt-in timeout.
    let mut builder = Client::builder();
    if let Some(bound) = timeout {
        builder = builder.timeout(bound);
    }
    let client = builder.build().expect("Failed to create HTTP client");

    let total = targets.len();

    // Channel sized to the input count so a worker's send can never block:
    // even if the collector hasn't started draining, every result fits
    let (tx, mut rx) = mpsc::channel(total);

    // Fan out: one task per target, no concurrency cap. Each task gets a
    // clone of its name; the originals stay behind for panic synthesis.
    let mut handles = Vec::with_capacity(total);
    for site in targets.iter().cloned() {
        let client = client.clone();
        let tx = tx.clone();
        let domain = base_domain.to_string();
        handles.push(tokio::spawn(async move {
            let result = probe_site(&client, site, &domain).await;
            // send() only fails if the receiver is gone, and the receiver
            // outlives every worker here
            let _ = tx.send(result).await;
        }));
    }

    // Drop our own sender so the channel closes once the workers finish
    drop(tx);

    info!("waiting for {} probe worker(s) to complete", total);

    // Barrier: every worker must finish before we read anything
    let joined = join_all(handles).await;

    // A worker that panicked never sent its result; synthesize one so the
    // one-result-per-target invariant holds anyway
    let mut results = Vec::with_capacity(total);
    for (site, join_result) in targets.into_iter().zip(joined) {
        if let Err(e) = join_result {
            error!("probe worker for '{}' did not finish: {}", site, e);
            results.push(ProbeResult::new(
                site,
                false,
                STATUS_UNAVAILABLE,
                format!("probe task failed: {}", e),
            ));
        }
    }

    // Drain in arrival order. The channel is closed and every sender is
    // gone, so recv() returns None as soon as it's empty.
    while let Some(result) = rx.recv().await {
        results.push(result);
    }

    info!("collected {} result(s)", results.len());

    results
}

// Probes a single app
//
// Always returns exactly one ProbeResult - every failure mode becomes
// data in the result, never an error that could lose the row or affect
// another worker.
//
// The checks run in order, first match ends the probe:
// 1. Empty name -> report without any network call
// 2. URL template failure -> transport-style error result
// 3. GET failure -> status classified from the error message
// 4. Body read failure -> sentinel status
// 5. Otherwise classify the body with the real response status
pub(crate) async fn probe_site(client: &Client, site: String, base_domain: &str) -> ProbeResult {
    // Have a non-empty app name?
    if site.is_empty() {
        return ProbeResult::new(
            site,
            false,
            STATUS_UNAVAILABLE,
            "no site name was provided".to_string(),
        );
    }

    // Build the probe URL from the fixed template
    let raw_url = format!("http://{}.{}", site, base_domain);
    let url = match Url::parse(&raw_url) {
        Ok(url) => url,
        Err(e) => {
            error!("could not build a probe URL for '{}': {}", site, e);
            return ProbeResult::new(
                site,
                false,
                STATUS_UNAVAILABLE,
                format!("error getting site response: {}", e),
            );
        }
    };

    // Execute the GET; no retry on failure
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("error occurred fetching {}: {}", url, e);
            return ProbeResult::new(
                site,
                false,
                fetch_error_status(&e.to_string()),
                format!("error getting site response: {}", e),
            );
        }
    };

    // Remember the real status before consuming the response
    let status = response.status().as_u16();

    // Read the whole body into memory (no size cap - bodies here are
    // platform pages or app landing pages, not downloads)
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            error!(
                "error occurred reading the response body for {}: {}",
                site, e
            );
            return ProbeResult::new(
                site,
                false,
                STATUS_UNAVAILABLE,
                format!("error reading the site response: {}", e),
            );
        }
    };

    // Hand the body to the classifier and keep the real status
    let verdict = classify(&body);
    ProbeResult::new(site, verdict.accessible(), status, verdict.notes())
}

// Maps a transport error message to the status we report
//
// - A truncated stream ("EOF" in the message) has no usable status.
// - A certificate-validity complaint reports 200. That is a quirk carried
//   over from the original tool (a failed request reporting a "success"
//   status); kept as-is so reports stay comparable across versions.
// - Anything else gets the sentinel.
fn fetch_error_status(message: &str) -> u16 {
    if message.contains("EOF") {
        return STATUS_UNAVAILABLE;
    }

    if message.contains("certificate") {
        return 200;
    }

    STATUS_UNAVAILABLE
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a channel AND join_all?
//    - join_all is the barrier: it proves every worker has finished
//    - The channel carries the data: results in whatever order they landed
//    - We never start draining before the barrier, so the report can't be
//      partial
//
// 2. Why drop(tx)?
//    - The channel stays open while any sender exists
//    - Each worker got a clone of tx; ours would keep the channel open
//      forever, making the drain loop hang after the last result
//    - Dropping our copy means: once the workers are done, recv() -> None
//
// 3. Why clone the client?
//    - Each task needs its own handle to the client
//    - Client is cheap to clone (it's just a reference counter internally)
//    - All clones share one connection pool
//
// 4. Why does probe_site take `site: String` by value?
//    - The result echoes the name back, so the worker needs to own it
//    - Moving it in avoids a clone on the happy path
//
// 5. Why u16 for the status?
//    - reqwest's StatusCode can't represent our 999 sentinel
//    - A plain integer can hold both real statuses and the sentinel,
//      exactly like the report column
// -----------------------------------------------------------------------------
