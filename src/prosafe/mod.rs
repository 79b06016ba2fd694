pub mod auth;
pub mod client;
pub mod fetcher;
pub mod script;
pub mod session;
pub mod statistics;
pub mod status;
pub mod types;

pub use client::SwitchClient;
pub use fetcher::{looks_like_login_redirect, PageFetcher};
pub use session::SessionManager;
pub use types::{Credential, LinkState, PortRecord, Snapshot};
