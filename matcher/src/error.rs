//! The uniform rejection error for malformed matcher input.

use snafu::Snafu;

/// Error returned by the matcher for any malformed input.
///
/// Every validation failure collapses into the single `InvalidFormat`
/// variant so callers can assert on one stable message regardless of
/// which sub-check rejected the value.
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum MatchError {
    /// The offending value was not a valid IPv4 address or network.
    #[snafu(display("Invalid IP or network format: {}", value))]
    InvalidFormat {
        /// The rejected input text.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_contains_stable_phrase() {
        let err = MatchError::InvalidFormat {
            value: "999.999.999.999".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid IP or network format: 999.999.999.999"
        );
        assert!(err.to_string().contains("Invalid IP or network format"));
    }
}
