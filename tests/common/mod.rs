use serde_json::{json, Value};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// A DescribeLogGroups response as the service would send it.
pub fn describe_log_groups_response() -> Value {
    json!({
        "logGroups": [
            {
                "logGroupName": "payments",
                "creationTime": 1_696_118_400_000_i64,
                "retentionInDays": 30,
                "metricFilterCount": 2,
                "arn": "arn:aws:logs:us-east-1:123456789012:log-group:payments:*",
                "storedBytes": 1_048_576_i64
            },
            {
                "logGroupName": "payments-dlq",
                "creationTime": 1_696_204_800_000_i64
            }
        ],
        "nextToken": "eyJvZmZzZXQiOjUwfQ=="
    })
}

/// A PutLogEvents response reporting a partially rejected batch.
pub fn put_log_events_response() -> Value {
    json!({
        "nextSequenceToken": "49590302938407709",
        "rejectedLogEventsInfo": {
            "tooOldLogEventEndIndex": 2,
            "expiredLogEventEndIndex": 0
        }
    })
}
