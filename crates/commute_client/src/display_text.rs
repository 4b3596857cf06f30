use std::fmt::Display;

use crate::commute_error::CommuteError;

/// Text shown to the user once a request has completed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayText(String);

impl DisplayText {
    pub fn best_departure_time(value: &str) -> Self {
        DisplayText(format!("Best Departure Time: {}", value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<CommuteError> for DisplayText {
    fn from(error: CommuteError) -> Self {
        DisplayText(error.to_string())
    }
}

impl From<Result<String, CommuteError>> for DisplayText {
    fn from(result: Result<String, CommuteError>) -> Self {
        match result {
            Ok(best_departure_time) => DisplayText::best_departure_time(&best_departure_time),
            Err(error) => error.into(),
        }
    }
}

impl Display for DisplayText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
