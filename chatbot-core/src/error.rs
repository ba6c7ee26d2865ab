use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatbotError {
    /// A handler could not process the message; the chain stops and returns this error.
    #[error("Handler error: {0}")]
    Handler(String),
}

pub type Result<T> = std::result::Result<T, ChatbotError>;
