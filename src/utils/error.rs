use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Unknown item kind: {kind}")]
    UnknownKind { kind: String },
}

pub type Result<T> = std::result::Result<T, LibraryError>;
