// SPDX-License-Identifier: Apache-2.0

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The `fac_mac = ` key does not occur in the board info blob
    KeyNotFound,
    /// The key was found but the text after it is not a MAC address
    MalformedAddress,
    InvalidArgument,
    Bug,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BdInfoError {
    kind: ErrorKind,
    msg: String,
}

impl BdInfoError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::fmt::Display for BdInfoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl std::error::Error for BdInfoError {}

impl From<std::io::Error> for BdInfoError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::new(
                ErrorKind::InvalidArgument,
                format!("Flash image too short: {e}"),
            )
        } else {
            Self::new(ErrorKind::Bug, format!("IO error: {e}"))
        }
    }
}

pub trait ErrorContext<T> {
    /// Prefix the error message with `msg`, keeping the error kind.
    fn context(self, msg: &str) -> Result<T, BdInfoError>;
}

impl<T> ErrorContext<T> for Result<T, BdInfoError> {
    fn context(self, msg: &str) -> Result<T, BdInfoError> {
        self.map_err(|e| BdInfoError::new(e.kind, format!("{msg}: {}", e.msg)))
    }
}
