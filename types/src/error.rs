use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A serializable error for client rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    /// The outermost message.
    pub message: String,
    /// The message followed by each underlying cause, outermost first.
    pub chain: Vec<String>,
}

impl Error {
    pub fn has_causes(&self) -> bool {
        self.chain.len() > 1
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(report: anyhow::Error) -> Self {
        Self {
            message: report.to_string(),
            chain: report.chain().map(|cause| cause.to_string()).collect(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self {
            chain: vec![s.clone()],
            message: s,
        }
    }
}

/// Build an ad-hoc error with `format!` syntax.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::internal_anyhow_dont_use!($($arg)*)
    };
}
