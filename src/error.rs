use thiserror::Error as ThisError;

/// Faults reported by the logging service, plus the one failure this crate
/// produces locally (constructing an enum from an unknown string).
///
/// The service owns retry policy; this type only carries what a caller needs
/// to decide on one. In particular the sequence-token variants expose the
/// token the service expected, see [`expected_sequence_token`](Error::expected_sequence_token).
#[derive(Debug, ThisError)]
pub enum Error {
    /// The sequence token sent with a write does not match the stream cursor.
    /// Retry the write with the expected token.
    #[error("invalid sequence token: {message}")]
    InvalidSequenceToken {
        message: String,
        expected_sequence_token: Option<String>,
    },
    /// The event batch was already ingested. The expected token points past
    /// the accepted batch.
    #[error("data already accepted: {message}")]
    DataAlreadyAccepted {
        message: String,
        expected_sequence_token: Option<String>,
    },
    /// A conflicting update to the same resource won the race.
    #[error("operation aborted: {message}")]
    OperationAborted { message: String },
    #[error("resource not found: {message}")]
    ResourceNotFound { message: String },
    #[error("resource already exists: {message}")]
    ResourceAlreadyExists { message: String },
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
    #[error("limit exceeded: {message}")]
    LimitExceeded { message: String },
    #[error("service unavailable: {message}")]
    ServiceUnavailable { message: String },
    /// Not a service fault: `{value}` is not a member of the `{target}` enum.
    #[error("{value:?} is not a valid {target}")]
    InvalidEnumValue {
        target: &'static str,
        value: String,
    },
}

impl Error {
    /// The sequence token the service expected, when the fault carries one.
    ///
    /// Present on [`InvalidSequenceToken`](Error::InvalidSequenceToken) and
    /// [`DataAlreadyAccepted`](Error::DataAlreadyAccepted); callers use it to
    /// correct the cursor and resend.
    pub fn expected_sequence_token(&self) -> Option<&str> {
        match self {
            Error::InvalidSequenceToken {
                expected_sequence_token,
                ..
            }
            | Error::DataAlreadyAccepted {
                expected_sequence_token,
                ..
            } => expected_sequence_token.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_token_faults_expose_the_corrective_token() {
        let err = Error::InvalidSequenceToken {
            message: "The given sequenceToken is invalid.".to_string(),
            expected_sequence_token: Some("49590302938407709".to_string()),
        };
        assert_eq!(err.expected_sequence_token(), Some("49590302938407709"));

        let err = Error::DataAlreadyAccepted {
            message: "The given batch of log events has already been accepted.".to_string(),
            expected_sequence_token: Some("49590302938407710".to_string()),
        };
        assert_eq!(err.expected_sequence_token(), Some("49590302938407710"));
    }

    #[test]
    fn other_faults_carry_no_token() {
        let err = Error::OperationAborted {
            message: "A conflicting operation is currently in progress.".to_string(),
        };
        assert_eq!(err.expected_sequence_token(), None);
        assert_eq!(
            err.to_string(),
            "operation aborted: A conflicting operation is currently in progress."
        );
    }
}
