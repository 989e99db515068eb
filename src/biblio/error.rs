use thiserror::Error;

/// Failures at the terminal I/O boundary.
///
/// Everything a user can get wrong (unknown id, duplicate id, bad menu
/// input) is reported through [`crate::commands::CmdMessage`]s and is never
/// an error; this type only covers the terminal itself failing.
#[derive(Error, Debug)]
pub enum BiblioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BiblioError>;
