use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("contents character limit must be greater than zero")]
    ZeroCharacterLimit,
}
