use serde_json::error::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysicsJsonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed physics json at {line}:{column}: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("missing key at {line}:{column}: {message}")]
    SchemaKeyMissing {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("unexpected value type at {line}:{column}: {message}")]
    TypeCoercionFailed {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("buffer size {size} exceeds the {available} bytes available")]
    TruncatedBuffer { size: usize, available: usize },

    #[error("{collection} index {index} out of range (len {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    #[error("unknown component type tag: {0:?}")]
    UnknownComponentType(String),
}

impl From<serde_json::Error> for PhysicsJsonError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        let message = err.to_string();
        match err.classify() {
            Category::Io => {
                PhysicsJsonError::Io(std::io::Error::new(std::io::ErrorKind::Other, err))
            }
            Category::Syntax | Category::Eof => PhysicsJsonError::Malformed {
                line,
                column,
                message,
            },
            Category::Data if message.starts_with("missing field") => {
                PhysicsJsonError::SchemaKeyMissing {
                    line,
                    column,
                    message,
                }
            }
            Category::Data => PhysicsJsonError::TypeCoercionFailed {
                line,
                column,
                message,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, PhysicsJsonError>;
