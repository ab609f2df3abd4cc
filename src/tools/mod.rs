// ABOUTME: Built-in tool adapters.
// ABOUTME: Email delivery, web search, arithmetic, and conversational stubs.

mod calculator;
mod general;
mod google_search;
mod outlook;

pub use calculator::{Calculator, CalculatorInput};
pub use general::{AskUser, AskUserInput, ConversationInput, ConversationTool};
pub use google_search::{GoogleSearch, GoogleSearchInput, SearchResult};
pub use outlook::{SendEmailInput, SendOutlookEmail};

use std::time::Duration;

use crate::error::ConfigError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("structools/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by the network-backed adapters.
fn default_http_client() -> Result<reqwest::Client, ConfigError> {
    http_client(USER_AGENT)
}

fn http_client(user_agent: &str) -> Result<reqwest::Client, ConfigError> {
    Ok(reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(user_agent)
        .build()?)
}

fn env_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnv(name))
}
