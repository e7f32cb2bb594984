use serde::{Deserialize, Serialize};

/// A single log event submitted by a producer.
///
/// The timestamp is epoch milliseconds; the message carries the raw event
/// data. Both are required by the service on ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputLogEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl InputLogEvent {
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp: Some(timestamp),
            message: Some(message.into()),
        }
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: Option<i64>) {
        self.timestamp = timestamp;
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

display_fields!(InputLogEvent { timestamp, message });

/// Appends a batch of events to a log stream.
///
/// The sequence token must match the stream's cursor; on a mismatch the
/// service reports an invalid-sequence-token fault carrying the expected
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutLogEventsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_events: Option<Vec<InputLogEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sequence_token: Option<String>,
}

impl PutLogEventsRequest {
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

    /// Events in the batch, ordered by timestamp.
    pub fn log_events(&self) -> Option<&[InputLogEvent]> {
        self.log_events.as_deref()
    }

    pub fn set_log_events(&mut self, log_events: Option<Vec<InputLogEvent>>) {
        self.log_events = log_events;
    }

    pub fn with_log_events(mut self, log_events: Vec<InputLogEvent>) -> Self {
        self.log_events = Some(log_events);
        self
    }

    pub fn sequence_token(&self) -> Option<&str> {
        self.sequence_token.as_deref()
    }

    pub fn set_sequence_token(&mut self, sequence_token: Option<String>) {
        self.sequence_token = sequence_token;
    }

    pub fn with_sequence_token(mut self, sequence_token: impl Into<String>) -> Self {
        self.sequence_token = Some(sequence_token.into());
        self
    }
}

display_fields!(PutLogEventsRequest {
    log_group_name,
    log_stream_name,
    log_events,
    sequence_token,
});

/// Indices of events the service refused from a batch.
///
/// Indices refer to positions in the submitted batch. Too-new events are
/// ahead of the service clock, too-old and expired events fall outside the
/// group's retention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedLogEventsInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    too_new_log_event_start_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    too_old_log_event_end_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expired_log_event_end_index: Option<i32>,
}

impl RejectedLogEventsInfo {
    pub fn too_new_log_event_start_index(&self) -> Option<i32> {
        self.too_new_log_event_start_index
    }

    pub fn set_too_new_log_event_start_index(&mut self, index: Option<i32>) {
        self.too_new_log_event_start_index = index;
    }

    pub fn with_too_new_log_event_start_index(mut self, index: i32) -> Self {
        self.too_new_log_event_start_index = Some(index);
        self
    }

    pub fn too_old_log_event_end_index(&self) -> Option<i32> {
        self.too_old_log_event_end_index
    }

    pub fn set_too_old_log_event_end_index(&mut self, index: Option<i32>) {
        self.too_old_log_event_end_index = index;
    }

    pub fn with_too_old_log_event_end_index(mut self, index: i32) -> Self {
        self.too_old_log_event_end_index = Some(index);
        self
    }

    pub fn expired_log_event_end_index(&self) -> Option<i32> {
        self.expired_log_event_end_index
    }

    pub fn set_expired_log_event_end_index(&mut self, index: Option<i32>) {
        self.expired_log_event_end_index = index;
    }

    pub fn with_expired_log_event_end_index(mut self, index: i32) -> Self {
        self.expired_log_event_end_index = Some(index);
        self
    }
}

display_fields!(RejectedLogEventsInfo {
    too_new_log_event_start_index,
    too_old_log_event_end_index,
    expired_log_event_end_index,
});

/// Outcome of a write: the next sequence token plus any partial rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutLogEventsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    next_sequence_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected_log_events_info: Option<RejectedLogEventsInfo>,
}

impl PutLogEventsResult {
    /// Sequence token for the next write to the same stream.
    pub fn next_sequence_token(&self) -> Option<&str> {
        self.next_sequence_token.as_deref()
    }

    pub fn set_next_sequence_token(&mut self, next_sequence_token: Option<String>) {
        self.next_sequence_token = next_sequence_token;
    }

    pub fn with_next_sequence_token(mut self, next_sequence_token: impl Into<String>) -> Self {
        self.next_sequence_token = Some(next_sequence_token.into());
        self
    }

    pub fn rejected_log_events_info(&self) -> Option<&RejectedLogEventsInfo> {
        self.rejected_log_events_info.as_ref()
    }

    pub fn set_rejected_log_events_info(&mut self, info: Option<RejectedLogEventsInfo>) {
        self.rejected_log_events_info = info;
    }

    pub fn with_rejected_log_events_info(mut self, info: RejectedLogEventsInfo) -> Self {
        self.rejected_log_events_info = Some(info);
        self
    }
}

display_fields!(PutLogEventsResult {
    next_sequence_token,
    rejected_log_events_info,
});

/// A log event returned by a filtered search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredLogEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ingestion_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_id: Option<String>,
}

impl FilteredLogEvent {
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

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: Option<i64>) {
        self.timestamp = timestamp;
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// When the service ingested the event, in epoch milliseconds.
    pub fn ingestion_time(&self) -> Option<i64> {
        self.ingestion_time
    }

    pub fn set_ingestion_time(&mut self, ingestion_time: Option<i64>) {
        self.ingestion_time = ingestion_time;
    }

    pub fn with_ingestion_time(mut self, ingestion_time: i64) -> Self {
        self.ingestion_time = Some(ingestion_time);
        self
    }

    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    pub fn set_event_id(&mut self, event_id: Option<String>) {
        self.event_id = event_id;
    }

    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }
}

display_fields!(FilteredLogEvent {
    log_stream_name,
    timestamp,
    message,
    ingestion_time,
    event_id,
});

/// Whether a search covered all of one log stream.
///
/// A `false` completeness flag means the page ended before the stream was
/// exhausted; continuing with the next token resumes the search there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchedLogStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    searched_completely: Option<bool>,
}

impl SearchedLogStream {
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

    pub fn searched_completely(&self) -> Option<bool> {
        self.searched_completely
    }

    pub fn set_searched_completely(&mut self, searched_completely: Option<bool>) {
        self.searched_completely = searched_completely;
    }

    pub fn with_searched_completely(mut self, searched_completely: bool) -> Self {
        self.searched_completely = Some(searched_completely);
        self
    }
}

display_fields!(SearchedLogStream {
    log_stream_name,
    searched_completely,
});

/// Searches a log group's events against a filter pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterLogEventsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_stream_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interleaved: Option<bool>,
}

impl FilterLogEventsRequest {
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

    pub fn log_stream_names(&self) -> Option<&[String]> {
        self.log_stream_names.as_deref()
    }

    pub fn set_log_stream_names(&mut self, log_stream_names: Option<Vec<String>>) {
        self.log_stream_names = log_stream_names;
    }

    pub fn with_log_stream_names(mut self, log_stream_names: Vec<String>) -> Self {
        self.log_stream_names = Some(log_stream_names);
        self
    }

    pub fn start_time(&self) -> Option<i64> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: Option<i64>) {
        self.start_time = start_time;
    }

    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(&self) -> Option<i64> {
        self.end_time
    }

    pub fn set_end_time(&mut self, end_time: Option<i64>) {
        self.end_time = end_time;
    }

    pub fn with_end_time(mut self, end_time: i64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Pattern in the service's filter syntax; an unset pattern matches
    /// every event.
    pub fn filter_pattern(&self) -> Option<&str> {
        self.filter_pattern.as_deref()
    }

    pub fn set_filter_pattern(&mut self, filter_pattern: Option<String>) {
        self.filter_pattern = filter_pattern;
    }

    pub fn with_filter_pattern(mut self, filter_pattern: impl Into<String>) -> Self {
        self.filter_pattern = Some(filter_pattern.into());
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

    /// Interleave events from all matched streams into one timeline instead
    /// of grouping per stream.
    pub fn interleaved(&self) -> Option<bool> {
        self.interleaved
    }

    pub fn set_interleaved(&mut self, interleaved: Option<bool>) {
        self.interleaved = interleaved;
    }

    pub fn with_interleaved(mut self, interleaved: bool) -> Self {
        self.interleaved = Some(interleaved);
        self
    }
}

display_fields!(FilterLogEventsRequest {
    log_group_name,
    log_stream_names,
    start_time,
    end_time,
    filter_pattern,
    next_token,
    limit,
    interleaved,
});

/// One page of search results, with per-stream completeness flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterLogEventsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<Vec<FilteredLogEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    searched_log_streams: Option<Vec<SearchedLogStream>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl FilterLogEventsResult {
    pub fn events(&self) -> Option<&[FilteredLogEvent]> {
        self.events.as_deref()
    }

    pub fn set_events(&mut self, events: Option<Vec<FilteredLogEvent>>) {
        self.events = events;
    }

    pub fn with_events(mut self, events: Vec<FilteredLogEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn searched_log_streams(&self) -> Option<&[SearchedLogStream]> {
        self.searched_log_streams.as_deref()
    }

    pub fn set_searched_log_streams(
        &mut self,
        searched_log_streams: Option<Vec<SearchedLogStream>>,
    ) {
        self.searched_log_streams = searched_log_streams;
    }

    pub fn with_searched_log_streams(
        mut self,
        searched_log_streams: Vec<SearchedLogStream>,
    ) -> Self {
        self.searched_log_streams = Some(searched_log_streams);
        self
    }

    /// Token for the next page. Opaque, expires 24 hours after issuance;
    /// absent when the search is complete.
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

display_fields!(FilterLogEventsResult {
    events,
    searched_log_streams,
    next_token,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_log_event_display_skips_the_unset_timestamp() {
        let event = InputLogEvent::default().with_message("hello");
        assert_eq!(event.to_string(), "{message: hello}");

        let event = event.with_timestamp(1_700_000_000_000);
        assert_eq!(
            event.to_string(),
            "{timestamp: 1700000000000, message: hello}"
        );
    }

    #[test]
    fn put_result_hands_back_the_stored_sequence_token() {
        let result = PutLogEventsResult::default()
            .with_next_sequence_token("49590302938407709")
            .with_rejected_log_events_info(
                RejectedLogEventsInfo::default().with_too_old_log_event_end_index(3),
            );

        assert_eq!(result.next_sequence_token(), Some("49590302938407709"));
        assert_eq!(
            result
                .rejected_log_events_info()
                .and_then(RejectedLogEventsInfo::too_old_log_event_end_index),
            Some(3)
        );
    }

    #[test]
    fn search_result_tracks_per_stream_completeness() {
        let result = FilterLogEventsResult::default().with_searched_log_streams(vec![
            SearchedLogStream::default()
                .with_log_stream_name("api-01")
                .with_searched_completely(true),
            SearchedLogStream::default()
                .with_log_stream_name("api-02")
                .with_searched_completely(false),
        ]);

        let streams = result.searched_log_streams().unwrap();
        assert_eq!(streams.len(), 2);
        assert_eq!(streams[1].searched_completely(), Some(false));
        assert!(result.next_token().is_none());
    }

    #[test]
    fn equal_field_values_mean_equal_instances() {
        let a = PutLogEventsRequest::default()
            .with_log_group_name("payments")
            .with_log_events(vec![InputLogEvent::new(1, "a"), InputLogEvent::new(2, "b")]);
        let b = PutLogEventsRequest::default()
            .with_log_group_name("payments")
            .with_log_events(vec![InputLogEvent::new(1, "a"), InputLogEvent::new(2, "b")]);

        assert_eq!(a, b);
        assert_ne!(a.clone().with_sequence_token("t"), b);
    }
}
