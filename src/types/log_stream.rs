use crate::error::Error;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort key for a log stream listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderBy {
    LogStreamName,
    LastEventTime,
}

impl OrderBy {
    /// All members, in canonical order.
    pub const fn values() -> &'static [OrderBy] {
        &[OrderBy::LogStreamName, OrderBy::LastEventTime]
    }

    /// The canonical wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::LogStreamName => "LogStreamName",
            OrderBy::LastEventTime => "LastEventTime",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<OrderBy> for String {
    fn from(value: OrderBy) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for OrderBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LogStreamName" => Ok(OrderBy::LogStreamName),
            "LastEventTime" => Ok(OrderBy::LastEventTime),
            _ => Err(Error::InvalidEnumValue {
                target: "OrderBy",
                value: s.to_string(),
            }),
        }
    }
}

/// A sequence of log events from a single source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_event_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_event_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_ingestion_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upload_sequence_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stored_bytes: Option<i64>,
}

impl LogStream {
    pub fn log_stream_name(&self) -> Option<&str> {
        self.log_stream_name.as_deref()
    }

    pub fn set_log_stream_name(&mut self, log_stream_name: Option<String>) {
        self.log_stream_name = log_stream_name;
    }

    pub fn with_log_stream_name(mut self, log_stream_name: impl Into<String>) -> Self {
        self.log_stream_name = Some(log_stream_name.into());
        self
    }

    pub fn creation_time(&self) -> Option<i64> {
        self.creation_time
    }

    pub fn set_creation_time(&mut self, creation_time: Option<i64>) {
        self.creation_time = creation_time;
    }

    pub fn with_creation_time(mut self, creation_time: i64) -> Self {
        self.creation_time = Some(creation_time);
        self
    }

    pub fn first_event_timestamp(&self) -> Option<i64> {
        self.first_event_timestamp
    }

    pub fn set_first_event_timestamp(&mut self, first_event_timestamp: Option<i64>) {
        self.first_event_timestamp = first_event_timestamp;
    }

    pub fn with_first_event_timestamp(mut self, first_event_timestamp: i64) -> Self {
        self.first_event_timestamp = Some(first_event_timestamp);
        self
    }

    pub fn last_event_timestamp(&self) -> Option<i64> {
        self.last_event_timestamp
    }

    pub fn set_last_event_timestamp(&mut self, last_event_timestamp: Option<i64>) {
        self.last_event_timestamp = last_event_timestamp;
    }

    pub fn with_last_event_timestamp(mut self, last_event_timestamp: i64) -> Self {
        self.last_event_timestamp = Some(last_event_timestamp);
        self
    }

    pub fn last_ingestion_time(&self) -> Option<i64> {
        self.last_ingestion_time
    }

    pub fn set_last_ingestion_time(&mut self, last_ingestion_time: Option<i64>) {
        self.last_ingestion_time = last_ingestion_time;
    }

    pub fn with_last_ingestion_time(mut self, last_ingestion_time: i64) -> Self {
        self.last_ingestion_time = Some(last_ingestion_time);
        self
    }

    /// Cursor for the next append to this stream.
    pub fn upload_sequence_token(&self) -> Option<&str> {
        self.upload_sequence_token.as_deref()
    }

    pub fn set_upload_sequence_token(&mut self, upload_sequence_token: Option<String>) {
        self.upload_sequence_token = upload_sequence_token;
    }

    pub fn with_upload_sequence_token(mut self, upload_sequence_token: impl Into<String>) -> Self {
        self.upload_sequence_token = Some(upload_sequence_token.into());
        self
    }

    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    pub fn set_arn(&mut self, arn: Option<String>) {
        self.arn = arn;
    }

    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    pub fn stored_bytes(&self) -> Option<i64> {
        self.stored_bytes
    }

    pub fn set_stored_bytes(&mut self, stored_bytes: Option<i64>) {
        self.stored_bytes = stored_bytes;
    }

    pub fn with_stored_bytes(mut self, stored_bytes: i64) -> Self {
        self.stored_bytes = Some(stored_bytes);
        self
    }
}

display_fields!(LogStream {
    log_stream_name,
    creation_time,
    first_event_timestamp,
    last_event_timestamp,
    last_ingestion_time,
    upload_sequence_token,
    arn,
    stored_bytes,
});

/// Lists streams of a log group.
///
/// The sort key is stored as the raw wire string; [`with_order_by`](DescribeLogStreamsRequest::with_order_by)
/// accepts the [`OrderBy`] member directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogStreamsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_stream_name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i32>,
}

impl DescribeLogStreamsRequest {
    pub fn log_group_name(&self) -> Option<&str> {
        self.log_group_name.as_deref()
    }

    pub fn set_log_group_name(&mut self, log_group_name: Option<String>) {
        self.log_group_name = log_group_name;
    }

    pub fn with_log_group_name(mut self, log_group_name: impl Into<String>) -> Self {
        self.log_group_name = Some(log_group_name.into());
        self
    }

    pub fn log_stream_name_prefix(&self) -> Option<&str> {
        self.log_stream_name_prefix.as_deref()
    }

    pub fn set_log_stream_name_prefix(&mut self, log_stream_name_prefix: Option<String>) {
        self.log_stream_name_prefix = log_stream_name_prefix;
    }

    pub fn with_log_stream_name_prefix(
        mut self,
        log_stream_name_prefix: impl Into<String>,
    ) -> Self {
        self.log_stream_name_prefix = Some(log_stream_name_prefix.into());
        self
    }

    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    pub fn set_order_by(&mut self, order_by: Option<String>) {
        self.order_by = order_by;
    }

    /// Accepts either a raw string or an [`OrderBy`] member.
    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn descending(&self) -> Option<bool> {
        self.descending
    }

    pub fn set_descending(&mut self, descending: Option<bool>) {
        self.descending = descending;
    }

    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = Some(descending);
        self
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn limit(&self) -> Option<i32> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<i32>) {
        self.limit = limit;
    }

    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }
}

display_fields!(DescribeLogStreamsRequest {
    log_group_name,
    log_stream_name_prefix,
    order_by,
    descending,
    next_token,
    limit,
});

/// One page of log streams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogStreamsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_streams: Option<Vec<LogStream>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl DescribeLogStreamsResult {
    pub fn log_streams(&self) -> Option<&[LogStream]> {
        self.log_streams.as_deref()
    }

    pub fn set_log_streams(&mut self, log_streams: Option<Vec<LogStream>>) {
        self.log_streams = log_streams;
    }

    pub fn with_log_streams(mut self, log_streams: Vec<LogStream>) -> Self {
        self.log_streams = Some(log_streams);
        self
    }

    /// Token for the next page. Opaque, expires 24 hours after issuance;
    /// absent when the listing is complete.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

display_fields!(DescribeLogStreamsResult {
    log_streams,
    next_token,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_by_round_trips_through_its_wire_string() {
        for member in OrderBy::values() {
            assert_eq!(member.as_str().parse::<OrderBy>().unwrap(), *member);
        }
    }

    #[test]
    fn order_by_rejects_empty_and_unknown_strings() {
        for invalid in ["", "logStreamName", "LASTEVENTTIME", "CreationTime"] {
            assert!(invalid.parse::<OrderBy>().is_err());
        }
    }

    #[test]
    fn describe_request_takes_raw_string_or_enum_for_order_by() {
        let by_enum = DescribeLogStreamsRequest::default().with_order_by(OrderBy::LastEventTime);
        let by_string = DescribeLogStreamsRequest::default().with_order_by("LastEventTime");

        assert_eq!(by_enum, by_string);
        assert_eq!(by_enum.order_by(), Some("LastEventTime"));
    }

    #[test]
    fn stream_keeps_its_upload_sequence_token_verbatim() {
        let stream = LogStream::default().with_upload_sequence_token("49590302938407709");
        assert_eq!(stream.upload_sequence_token(), Some("49590302938407709"));
    }
}
