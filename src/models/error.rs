use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Fetch Error: {0}")]
    FetchError(String),
    #[error("Request Error: {0}")]
    RequestError(String),
    #[error("Report Error: {0}")]
    ReportError(String),
    #[error("Viewer Error: {0}")]
    ViewerError(String),
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ReportError(err.to_string())
    }
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        Error::RequestError(err.to_string())
    }
}
