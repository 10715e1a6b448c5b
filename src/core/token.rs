//! Token composition and the delayed generation task.
//!
//! A token is `<meter>-<8 uppercase alphanumeric chars>-<current millis % 10000>`.
//! It is a display string only; nothing about it is unguessable or verifiable.
//!
//! Generation is simulated by a spawned task that sleeps for the configured
//! delay and then delivers a [`GeneratedToken`] over a channel. The returned
//! [`JoinHandle`] is the cancellation handle: aborting it before the delay
//! elapses guarantees no completion is delivered, which is how a Clear action
//! invalidates an in-flight generation.

use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Length of the random fragment in the middle of a token.
pub const FRAGMENT_LEN: usize = 8;

/// A completed simulated generation, as delivered to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedToken {
    /// Meter number the token was requested for
    pub meter_no: String,
    /// The full formatted token text
    pub text: String,
}

/// Composes a token for the given meter number.
///
/// The middle fragment is uppercase alphanumeric of [`FRAGMENT_LEN`] characters;
/// the tail is the current Unix time in milliseconds truncated to four digits.
#[must_use]
pub fn compose_token(meter_no: &str) -> String {
    let fragment: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(FRAGMENT_LEN)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect();
    let stamp = Utc::now().timestamp_millis().rem_euclid(10_000);
    format!("{meter_no}-{fragment}-{stamp}")
}

/// Schedules a simulated generation: after `delay`, a token for `meter_no` is
/// composed and sent on `tx`.
///
/// The send result is deliberately ignored; if the receiver is gone the UI has
/// shut down and there is nobody left to show the token to. Abort the returned
/// handle to cancel a still-pending generation.
pub fn schedule_generation(
    meter_no: String,
    delay: Duration,
    tx: UnboundedSender<GeneratedToken>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let text = compose_token(&meter_no);
        tracing::debug!("Generated token for meter '{}': {}", meter_no, text);
        let _ = tx.send(GeneratedToken { meter_no, text });
    })
}
