//! Data model for a [CloudWatch Logs](https://docs.aws.amazon.com/AmazonCloudWatchLogs/latest/APIReference/Welcome.html)
//! style logging API: request types, result types, and the service fault
//! taxonomy, without any transport attached.
//!
//! ## Getting Started
//!
//! Every type starts from its zero value and is filled in with `with_`
//! chaining. Accessors hand back exactly what was stored.
//!
//! ```rust
//! use cloudwatch_logs_types::types::{InputLogEvent, PutLogEventsRequest};
//!
//! let request = PutLogEventsRequest::default()
//!     .with_log_group_name("payments")
//!     .with_log_stream_name("api-01")
//!     .with_log_events(vec![InputLogEvent::new(1_700_000_000_000, "started")]);
//!
//! assert_eq!(request.log_group_name(), Some("payments"));
//!
//! // The display form lists set fields only.
//! assert_eq!(
//!     request.to_string(),
//!     "{log_group_name: payments, log_stream_name: api-01, \
//!      log_events: [{timestamp: 1700000000000, message: started}]}",
//! );
//! ```
//!
//! ## Service faults
//!
//! Faults reported by the service map onto [`Error`]. The sequence-token
//! variants carry the corrective token so a caller can retry a write:
//!
//! ```rust
//! use cloudwatch_logs_types::Error;
//!
//! let err = Error::InvalidSequenceToken {
//!     message: "The given sequenceToken is invalid.".into(),
//!     expected_sequence_token: Some("49590302938407709".into()),
//! };
//!
//! assert_eq!(err.expected_sequence_token(), Some("49590302938407709"));
//! ```

#[macro_use]
mod macros;

/// Common errors.
pub mod error;

/// Data structures used by operations.
pub mod types;

pub use error::Error;
