//! Download URL liveness probing.
//!
//! Resolution needs one bit per candidate URL: does it respond. The check
//! is a capability trait so tests and embedders can swap the transport. The
//! HTTP implementation issues a HEAD request; every failure, transport
//! errors included, counts as "not live" so resolution moves on to the next
//! candidate instead of aborting.

use std::time::Duration;

/// Boolean liveness check for a candidate download URL.
pub trait UrlProber {
    /// Whether the URL responds successfully.
    fn is_live(&self, url: &str) -> bool;
}

/// Default timeout for probe requests.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP HEAD prober.
pub struct HttpProber {
    client: reqwest::blocking::Client,
}

impl HttpProber {
    /// Create a prober with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(PROBE_TIMEOUT)
    }

    /// Create a prober with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("piton")
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpProber {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlProber for HttpProber {
    fn is_live(&self, url: &str) -> bool {
        match self.client.head(url).send() {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!("Probe of {} failed: {}", url, err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prober_constructs_with_custom_timeout() {
        let _ = HttpProber::with_timeout(Duration::from_millis(100));
    }

    #[test]
    fn unroutable_url_is_not_live() {
        // Connection failure, not an HTTP status; must still read as dead.
        let prober = HttpProber::with_timeout(Duration::from_millis(250));
        assert!(!prober.is_live("http://127.0.0.1:1/nothing-listens-here"));
    }

    #[test]
    fn malformed_url_is_not_live() {
        let prober = HttpProber::with_timeout(Duration::from_millis(250));
        assert!(!prober.is_live("not a url"));
    }
}
