use thiserror::Error;

/// Every way a single recommendation request can fail.
///
/// The `Display` output of each variant is the text shown to the user.
#[derive(Debug, Error)]
pub enum CommuteError {
    #[error("Please provide valid addresses.")]
    InvalidAddresses,

    #[error("Error encoding data.")]
    Encode(#[source] serde_json::Error),

    #[error("Error: {}", error_chain(.0))]
    Request(#[from] reqwest::Error),

    #[error("Error: Invalid response from server.")]
    InvalidStatus { status: u16 },

    #[error("Error from API: {0}")]
    Api(String),

    #[error("Error: Unexpected response format.")]
    UnexpectedFormat,

    #[error("Error parsing JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Joins an error with its sources, skipping a source whose message the
/// outer error already repeats.
pub fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut description = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let message = cause.to_string();
        if !description.contains(&message) {
            description.push_str(": ");
            description.push_str(&message);
        }
        source = cause.source();
    }

    description
}
