//! [`Latency`] adapters.

use std::time::Duration;

use folio_core::ports::Latency;

/// Sleeps on the tokio timer for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay(pub Duration);

impl TokioDelay {
  pub fn from_millis(ms: u64) -> Self { Self(Duration::from_millis(ms)) }
}

impl Latency for TokioDelay {
  async fn wait(&self) {
    if !self.0.is_zero() {
      tokio::time::sleep(self.0).await;
    }
  }
}

/// Resolves immediately. Used by tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Latency for NoDelay {
  async fn wait(&self) {}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test(start_paused = true)]
  async fn tokio_delay_waits_the_configured_time() {
    let start = tokio::time::Instant::now();
    TokioDelay::from_millis(1000).wait().await;
    assert!(start.elapsed() >= Duration::from_millis(1000));
  }

  #[tokio::test]
  async fn no_delay_completes() {
    NoDelay.wait().await;
  }
}
