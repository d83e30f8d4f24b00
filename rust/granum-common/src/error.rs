use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_bounds(index: u64, len: u64) -> Error {
        Error(ErrorKind::OutOfBounds { index, len }.into())
    }

    pub fn exhausted(len: u64) -> Error {
        Error(ErrorKind::Exhausted { len }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn overflow(len: u64) -> Error {
        Error(ErrorKind::Overflow { len }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} out of bounds for reader of length {len}")]
    OutOfBounds { index: u64, len: u64 },

    #[error("cursor exhausted after {len} values")]
    Exhausted { len: u64 },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("length {len} does not fit a 32-bit collection size")]
    Overflow { len: u64 },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
