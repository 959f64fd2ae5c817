use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single weather fetch.
///
/// The dashboard treats all three the same way: logged as a diagnostic record
/// and swallowed, leaving the prior display state in place. The distinction
/// exists for the operator reading the log, not for control flow.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (DNS, connect, broken transfer).
    #[error("could not reach the weather service: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("weather service returned {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// The payload was not the JSON shape we expect.
    #[error("unexpected weather payload: {0}")]
    Parse(String),
}

impl FetchError {
    pub(crate) fn from_request(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }

    pub(crate) fn http(status: StatusCode, body: &str) -> Self {
        Self::Http { status, body: truncate_body(body) }
    }
}

/// Keep diagnostics readable when the service returns a full HTML error page.
/// Cuts on a char boundary so multibyte bodies cannot panic the error path.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
