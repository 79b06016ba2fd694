//! Switch Session Management
//!
//! The web UI authenticates with a `SID` cookie. The session can expire on the
//! switch at any time without notice, so this module only tracks whether a login
//! succeeded; detecting expiry is the fetcher's job.
//!
//! # Login handshake
//!
//! 1. `GET /login.htm` with a fresh cookie jar (primes any server-side cookies)
//! 2. `POST /login.htm` with `submitId=pwdLogin&password=<token>&submitEnd=`
//!    and `Referer: http://<host>/login.htm`
//! 3. The login succeeded if and only if the jar now holds a non-empty `SID` cookie.
//!    Status code and body of the POST are ignored.

use super::auth::hash_password;
use super::types::Credential;
use crate::error::{ExporterError, Result};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::REFERER;
use secrecy::ExposeSecret;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

pub const LOGIN_PAGE: &str = "/login.htm";

const SESSION_COOKIE: &str = "SID";

/// HTTP client whose cookie jar holds a valid `SID`
struct Session {
    http: reqwest::Client,
}

/// Owns the cookie-bearing HTTP client and performs the login handshake
///
/// State is either unauthenticated (`session == None`) or authenticated. Every
/// login attempt starts from a fresh jar, and a failed attempt leaves no session
/// behind.
pub struct SessionManager {
    credential: Credential,
    base_url: Url,
    login_timeout: Duration,
    session: Option<Session>,
}

impl SessionManager {
    pub fn new(credential: Credential, login_timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(&format!("http://{}", credential.host())).map_err(|e| {
            ExporterError::Config(format!("Invalid switch host '{}': {}", credential.host(), e))
        })?;

        Ok(Self {
            credential,
            base_url,
            login_timeout,
            session: None,
        })
    }

    pub fn host(&self) -> &str {
        self.credential.host()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Drop the current session; the next request needs a fresh login
    pub fn invalidate(&mut self) {
        self.session = None;
    }

    /// Full URL for a page on the switch
    pub fn url(&self, endpoint: &str) -> Result<Url> {
        self.base_url
            .join(endpoint)
            .map_err(|e| ExporterError::Config(format!("Invalid endpoint '{}': {}", endpoint, e)))
    }

    /// Run the login handshake, replacing any existing session.
    pub async fn login(&mut self) -> Result<()> {
        self.invalidate();

        match self.authenticate().await {
            Ok(session) => {
                info!("Logged into switch at {}", self.host());
                self.session = Some(session);
                Ok(())
            }
            Err(e) => {
                error!("Login to switch at {} failed: {}", self.host(), e);
                Err(e)
            }
        }
    }

    async fn authenticate(&self) -> Result<Session> {
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .user_agent(concat!("prosafe-exporter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExporterError::Auth(format!("failed to build HTTP client: {}", e)))?;

        let login_url = self.url(LOGIN_PAGE)?;

        debug!("GET {}", login_url);
        http.get(login_url.clone())
            .timeout(self.login_timeout)
            .send()
            .await
            .map_err(|e| ExporterError::Auth(format!("login page request failed: {}", e)))?;

        let token = hash_password(self.credential.password().expose_secret());

        debug!("POST {}", login_url);
        http.post(login_url.clone())
            .timeout(self.login_timeout)
            .header(REFERER, login_url.as_str())
            .form(&[
                ("submitId", "pwdLogin"),
                ("password", token.as_str()),
                ("submitEnd", ""),
            ])
            .send()
            .await
            .map_err(|e| ExporterError::Auth(format!("login request failed: {}", e)))?;

        if !has_session_cookie(jar.as_ref(), &login_url) {
            return Err(ExporterError::Auth("no session cookie received".to_string()));
        }

        Ok(Session { http })
    }

    /// GET a page with the current session
    ///
    /// Returns the body of any successful (2xx) response, login page included.
    pub async fn get(&self, endpoint: &str, timeout: Duration) -> Result<String> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| ExporterError::Auth("not logged in".to_string()))?;
        let url = self.url(endpoint)?;

        debug!("GET {}", url);
        let body = session
            .http
            .get(url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }
}

fn has_session_cookie(jar: &Jar, url: &Url) -> bool {
    let Some(header) = jar.cookies(url) else {
        return false;
    };
    let Ok(cookies) = header.to_str() else {
        return false;
    };

    cookies.split(';').any(|cookie| {
        matches!(
            cookie.trim().split_once('='),
            Some((name, value)) if name == SESSION_COOKIE && !value.is_empty()
        )
    })
}
