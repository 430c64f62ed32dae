use std::fmt;

/// Boxed error type carried by failing filters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while dispatching action filters.
#[derive(Debug)]
pub enum Error {
    /// A required argument was absent.
    ///
    /// Raised before the request's resolution scope is queried.
    InvalidArgument {
        /// Name of the missing argument
        parameter: &'static str,
    },
    /// A filter failed while running one of its hooks.
    Filter(BoxError),
}

impl Error {
    /// Wraps any error raised by a filter implementation.
    pub fn filter(err: impl Into<BoxError>) -> Self {
        Error::Filter(err.into())
    }

    /// Creates a filter failure from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Error::Filter(message.into())
    }

    /// Returns `true` if this error reports a missing argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { parameter } => {
                write!(f, "Invalid argument: '{}' must be provided", parameter)
            }
            Error::Filter(err) => write!(f, "Filter failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidArgument { .. } => None,
            Error::Filter(err) => Some(err.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_argument_names_the_parameter() {
        let err = Error::InvalidArgument {
            parameter: "action_context",
        };

        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid argument: 'action_context' must be provided"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn filter_error_exposes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = Error::filter(io);

        assert!(!err.is_invalid_argument());
        assert_eq!(err.to_string(), "Filter failed: disk gone");
        assert_eq!(err.source().unwrap().to_string(), "disk gone");
    }

    #[test]
    fn message_builds_filter_error() {
        let err = Error::message("quota exceeded");
        assert!(matches!(err, Error::Filter(_)));
        assert_eq!(err.to_string(), "Filter failed: quota exceeded");
    }
}
