use crate::input::InputError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("Failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionError {
    /// The line printed when a run fails.
    pub fn report(&self) -> String {
        format!("An unexpected error occurred: {}", self)
    }
}
