//! Authenticated page fetching with silent-expiry recovery
//!
//! An expired session is not reported with a 401. The switch answers `200 OK`
//! with its login page instead, so expiry can only be detected from the body.

use super::session::SessionManager;
use crate::error::{ExporterError, Result};
use std::time::Duration;
use tracing::warn;

/// How many leading characters of a body are checked for the login marker
const LOGIN_SNIFF_CHARS: usize = 200;

const LOGIN_MARKER: &str = "login";

/// Whether `body` is the login page served in place of an expired session's content
///
/// Case-insensitive search for `login` in the first 200 characters. This is a
/// heuristic tied to the firmware's page layout: a data page with `login` near its
/// top would be misread as expiry.
pub fn looks_like_login_redirect(body: &str) -> bool {
    body.chars()
        .take(LOGIN_SNIFF_CHARS)
        .collect::<String>()
        .to_lowercase()
        .contains(LOGIN_MARKER)
}

/// Fetches data pages, re-authenticating at most once per fetch
#[derive(Debug, Clone, Copy)]
pub struct PageFetcher {
    timeout: Duration,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// GET `endpoint`; if the login page comes back, log in again and retry once.
    ///
    /// Every failure, including transport errors and a failed re-login, is reported
    /// as [`ExporterError::Fetch`].
    pub async fn fetch(&self, session: &mut SessionManager, endpoint: &str) -> Result<String> {
        let body = self.get(session, endpoint).await?;
        if !looks_like_login_redirect(&body) {
            return Ok(body);
        }

        warn!("Session expired, re-authenticating");
        if let Err(e) = session.login().await {
            return Err(ExporterError::Fetch(format!(
                "{}: re-authentication failed: {}",
                endpoint, e
            )));
        }

        let body = self.get(session, endpoint).await?;
        if looks_like_login_redirect(&body) {
            session.invalidate();
            return Err(ExporterError::Fetch(format!(
                "{}: still redirected to login after re-authentication",
                endpoint
            )));
        }

        Ok(body)
    }

    async fn get(&self, session: &SessionManager, endpoint: &str) -> Result<String> {
        session
            .get(endpoint, self.timeout)
            .await
            .map_err(|e| ExporterError::Fetch(format!("{}: {}", endpoint, e)))
    }
}
