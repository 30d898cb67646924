use std::fmt;

use aeroforge_core::InvalidInput;

/// Errors surfaced by the command-line front end
#[derive(Debug)]
pub enum CliError {
    Io(String),
    Parse(String),
    Serialize(String),
    Analysis(InvalidInput),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(msg) => write!(f, "I/O error: {msg}"),
            CliError::Parse(msg) => write!(f, "parse error: {msg}"),
            CliError::Serialize(msg) => write!(f, "serialization error: {msg}"),
            CliError::Analysis(e) => write!(f, "analysis failed: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Analysis(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidInput> for CliError {
    fn from(e: InvalidInput) -> Self {
        CliError::Analysis(e)
    }
}
