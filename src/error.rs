use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    io::Error as IoError,
};

#[derive(Debug)]
pub enum PinyinError {
    Io(IoError),
    /// A dictionary line that could not be turned into a record. `line` is 1-based.
    Parse { line: usize, reason: String },
    Common(String),
}

impl Error for PinyinError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for PinyinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "PinyinError: ")?;
        match self {
            Self::Io(e) => Display::fmt(e, f),
            Self::Parse { line, reason } => write!(f, "line {}: {}", line, reason),
            Self::Common(e) => Display::fmt(e, f),
        }
    }
}

impl From<IoError> for PinyinError {
    fn from(value: IoError) -> Self {
        Self::Io(value)
    }
}

impl From<String> for PinyinError {
    fn from(value: String) -> Self {
        Self::Common(value)
    }
}

impl From<&str> for PinyinError {
    fn from(value: &str) -> Self {
        Self::Common(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed() {
        let e = PinyinError::Parse {
            line: 3,
            reason: "expected 3 fields".into(),
        };
        assert_eq!(e.to_string(), "PinyinError: line 3: expected 3 fields");
        assert_eq!(
            PinyinError::from("bad").to_string(),
            "PinyinError: bad"
        );
    }

    #[test]
    fn io_error_is_the_source() {
        let e = PinyinError::from(IoError::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(e.source().is_some());
        assert!(PinyinError::from("x".to_string()).source().is_none());
    }
}
