mod common;

use cloudwatch_logs_types::types::{
    DescribeLogGroupsRequest, DescribeLogGroupsResult, DescribeLogStreamsRequest, Distribution,
    ExportTaskStatusCode, InputLogEvent, LogStream, OrderBy, PutLogEventsRequest,
    PutLogEventsResult,
};
use cloudwatch_logs_types::Error;

use common::{describe_log_groups_response, hash_of, put_log_events_response};
use itertools::iproduct;
use serde_json::json;

#[test]
fn identical_field_values_mean_equal_instances_and_equal_hashes() {
    let build = || {
        DescribeLogStreamsRequest::default()
            .with_log_group_name("payments")
            .with_order_by(OrderBy::LastEventTime)
            .with_descending(true)
            .with_limit(50)
    };

    assert_eq!(build(), build());
    assert_eq!(hash_of(&build()), hash_of(&build()));
}

#[test]
fn changing_any_single_field_breaks_equality() {
    let base = || {
        LogStream::default()
            .with_log_stream_name("api-01")
            .with_creation_time(1_696_118_400_000)
            .with_upload_sequence_token("49590302938407709")
            .with_stored_bytes(2048)
    };

    let variants = vec![
        base().with_log_stream_name("api-02"),
        base().with_creation_time(1_696_118_400_001),
        base().with_upload_sequence_token("49590302938407710"),
        base().with_stored_bytes(0),
        base().with_arn("arn:aws:logs:us-east-1:123456789012:log-group:x"),
    ];

    for variant in variants {
        assert_ne!(variant, base());
    }

    // Unsetting a field is a difference too.
    let mut unset = base();
    unset.set_upload_sequence_token(None);
    assert_ne!(unset, base());
}

#[test]
fn enum_members_compare_equal_only_to_themselves() {
    for (a, b) in iproduct!(Distribution::values(), Distribution::values()) {
        assert_eq!(a == b, a.as_str() == b.as_str());
    }

    for (a, b) in iproduct!(
        ExportTaskStatusCode::values(),
        ExportTaskStatusCode::values()
    ) {
        assert_eq!(a == b, a.as_str() == b.as_str());
    }

    for (a, b) in iproduct!(OrderBy::values(), OrderBy::values()) {
        assert_eq!(a == b, a.as_str() == b.as_str());
    }
}

#[test]
fn every_enum_rejects_the_empty_string() {
    assert!("".parse::<Distribution>().is_err());
    assert!("".parse::<ExportTaskStatusCode>().is_err());
    assert!("".parse::<OrderBy>().is_err());
}

#[test]
fn enum_failures_name_the_offending_input() {
    match "BOGUS".parse::<Distribution>().unwrap_err() {
        Error::InvalidEnumValue { target, value } => {
            assert_eq!(target, "Distribution");
            assert_eq!(value, "BOGUS");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn requests_serialize_with_camel_case_keys_and_omit_unset_fields() {
    let request = PutLogEventsRequest::default()
        .with_log_group_name("payments")
        .with_log_stream_name("api-01")
        .with_log_events(vec![
            InputLogEvent::new(1_700_000_000_000, "started"),
            InputLogEvent::new(1_700_000_000_250, "listening on :8080"),
        ]);

    // No sequenceToken key: the field was never set.
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "logGroupName": "payments",
            "logStreamName": "api-01",
            "logEvents": [
                { "timestamp": 1_700_000_000_000_i64, "message": "started" },
                { "timestamp": 1_700_000_000_250_i64, "message": "listening on :8080" }
            ]
        })
    );
}

#[test]
fn service_responses_deserialize_and_the_next_token_echoes_back() {
    let result: DescribeLogGroupsResult =
        serde_json::from_value(describe_log_groups_response()).unwrap();

    let groups = result.log_groups().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].log_group_name(), Some("payments"));
    assert_eq!(groups[0].retention_in_days(), Some(30));
    assert_eq!(groups[1].creation_time(), Some(1_696_204_800_000));
    assert_eq!(groups[1].retention_in_days(), None);

    // Continue the listing by echoing the token verbatim.
    let token = result.next_token().unwrap();
    assert_eq!(token, "eyJvZmZzZXQiOjUwfQ==");

    let follow_up = DescribeLogGroupsRequest::default()
        .with_log_group_name_prefix("payments")
        .with_next_token(token);
    assert_eq!(follow_up.next_token(), Some(token));
    assert_eq!(
        serde_json::to_value(&follow_up).unwrap()["nextToken"],
        json!("eyJvZmZzZXQiOjUwfQ==")
    );
}

#[test]
fn put_log_events_response_carries_token_and_rejection_info() {
    let result: PutLogEventsResult = serde_json::from_value(put_log_events_response()).unwrap();

    assert_eq!(result.next_sequence_token(), Some("49590302938407709"));

    let rejected = result.rejected_log_events_info().unwrap();
    assert_eq!(rejected.too_old_log_event_end_index(), Some(2));
    assert_eq!(rejected.expired_log_event_end_index(), Some(0));
    assert_eq!(rejected.too_new_log_event_start_index(), None);
}

#[test]
fn sequence_token_fault_drives_a_corrected_retry() {
    let fault = Error::InvalidSequenceToken {
        message: "The given sequenceToken is invalid.".to_string(),
        expected_sequence_token: Some("49590302938407709".to_string()),
    };

    // A caller recovers by rebuilding the request with the expected token.
    let retry = PutLogEventsRequest::default()
        .with_log_group_name("payments")
        .with_log_stream_name("api-01")
        .with_sequence_token(fault.expected_sequence_token().unwrap());

    assert_eq!(retry.sequence_token(), Some("49590302938407709"));
}
