use crate::application::ports::LlmClientError;
use crate::domain::ImageSourceError;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Completion(#[from] LlmClientError),
}

impl From<ImageSourceError> for AnalysisError {
    fn from(err: ImageSourceError) -> Self {
        AnalysisError::InvalidInput(err.to_string())
    }
}
