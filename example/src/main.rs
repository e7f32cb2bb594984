use cloudwatch_logs_types::types::{
    DescribeLogStreamsRequest, InputLogEvent, OrderBy, PutLogEventsRequest,
};
use cloudwatch_logs_types::Error;

// Builds the requests a transport layer would send for a typical ingestion
// round: find the freshest stream, then append a batch to it.

fn main() {
    let describe = DescribeLogStreamsRequest::default()
        .with_log_group_name("payments")
        .with_order_by(OrderBy::LastEventTime)
        .with_descending(true)
        .with_limit(1);

    println!("describe streams: {describe}");

    let put = PutLogEventsRequest::default()
        .with_log_group_name("payments")
        .with_log_stream_name("api-01")
        .with_sequence_token("49590302938407709")
        .with_log_events(vec![
            InputLogEvent::new(1_700_000_000_000, "started"),
            InputLogEvent::new(1_700_000_000_250, "listening on :8080"),
        ]);

    println!("put events: {put}");

    // A fault the service reports when the token above is stale.
    let fault = Error::InvalidSequenceToken {
        message: "The given sequenceToken is invalid.".to_string(),
        expected_sequence_token: Some("49590302938407710".to_string()),
    };

    if let Some(token) = fault.expected_sequence_token() {
        let retry = put.with_sequence_token(token);
        println!("retrying with corrected token: {retry}");
    }
}
