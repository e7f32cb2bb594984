use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maps values extracted by a filter pattern onto a monitoring metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTransformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_value: Option<String>,
}

impl MetricTransformation {
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    pub fn set_metric_name(&mut self, metric_name: Option<String>) {
        self.metric_name = metric_name;
    }

    pub fn with_metric_name(mut self, metric_name: impl Into<String>) -> Self {
        self.metric_name = Some(metric_name.into());
        self
    }

    pub fn metric_namespace(&self) -> Option<&str> {
        self.metric_namespace.as_deref()
    }

    pub fn set_metric_namespace(&mut self, metric_namespace: Option<String>) {
        self.metric_namespace = metric_namespace;
    }

    pub fn with_metric_namespace(mut self, metric_namespace: impl Into<String>) -> Self {
        self.metric_namespace = Some(metric_namespace.into());
        self
    }

    /// Value published per match: a literal, or a `$field` reference into
    /// the extracted values.
    pub fn metric_value(&self) -> Option<&str> {
        self.metric_value.as_deref()
    }

    pub fn set_metric_value(&mut self, metric_value: Option<String>) {
        self.metric_value = metric_value;
    }

    pub fn with_metric_value(mut self, metric_value: impl Into<String>) -> Self {
        self.metric_value = Some(metric_value.into());
        self
    }
}

display_fields!(MetricTransformation {
    metric_name,
    metric_namespace,
    metric_value,
});

/// A pattern that turns matching log events into metric data points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_transformations: Option<Vec<MetricTransformation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
}

impl MetricFilter {
    pub fn filter_name(&self) -> Option<&str> {
        self.filter_name.as_deref()
    }

    pub fn set_filter_name(&mut self, filter_name: Option<String>) {
        self.filter_name = filter_name;
    }

    pub fn with_filter_name(mut self, filter_name: impl Into<String>) -> Self {
        self.filter_name = Some(filter_name.into());
        self
    }

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

    pub fn metric_transformations(&self) -> Option<&[MetricTransformation]> {
        self.metric_transformations.as_deref()
    }

    pub fn set_metric_transformations(
        &mut self,
        metric_transformations: Option<Vec<MetricTransformation>>,
    ) {
        self.metric_transformations = metric_transformations;
    }

    pub fn with_metric_transformations(
        mut self,
        metric_transformations: Vec<MetricTransformation>,
    ) -> Self {
        self.metric_transformations = Some(metric_transformations);
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
}

display_fields!(MetricFilter {
    filter_name,
    filter_pattern,
    metric_transformations,
    creation_time,
    log_group_name,
});

/// A test event that matched a filter pattern, with the values the pattern
/// pulled out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFilterMatchRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extracted_values: Option<BTreeMap<String, String>>,
}

impl MetricFilterMatchRecord {
    /// Position of the event in the tested batch, starting at 1.
    pub fn event_number(&self) -> Option<i64> {
        self.event_number
    }

    pub fn set_event_number(&mut self, event_number: Option<i64>) {
        self.event_number = event_number;
    }

    pub fn with_event_number(mut self, event_number: i64) -> Self {
        self.event_number = Some(event_number);
        self
    }

    pub fn event_message(&self) -> Option<&str> {
        self.event_message.as_deref()
    }

    pub fn set_event_message(&mut self, event_message: Option<String>) {
        self.event_message = event_message;
    }

    pub fn with_event_message(mut self, event_message: impl Into<String>) -> Self {
        self.event_message = Some(event_message.into());
        self
    }

    pub fn extracted_values(&self) -> Option<&BTreeMap<String, String>> {
        self.extracted_values.as_ref()
    }

    pub fn set_extracted_values(&mut self, extracted_values: Option<BTreeMap<String, String>>) {
        self.extracted_values = extracted_values;
    }

    pub fn with_extracted_values(mut self, extracted_values: BTreeMap<String, String>) -> Self {
        self.extracted_values = Some(extracted_values);
        self
    }
}

display_fields!(MetricFilterMatchRecord {
    event_number,
    event_message,
    extracted_values,
});

/// Lists metric filters, by log group, name prefix, or target metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeMetricFiltersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_namespace: Option<String>,
}

impl DescribeMetricFiltersRequest {
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

    pub fn filter_name_prefix(&self) -> Option<&str> {
        self.filter_name_prefix.as_deref()
    }

    pub fn set_filter_name_prefix(&mut self, filter_name_prefix: Option<String>) {
        self.filter_name_prefix = filter_name_prefix;
    }

    pub fn with_filter_name_prefix(mut self, filter_name_prefix: impl Into<String>) -> Self {
        self.filter_name_prefix = Some(filter_name_prefix.into());
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

    /// Narrow the listing to filters publishing this metric.
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    pub fn set_metric_name(&mut self, metric_name: Option<String>) {
        self.metric_name = metric_name;
    }

    pub fn with_metric_name(mut self, metric_name: impl Into<String>) -> Self {
        self.metric_name = Some(metric_name.into());
        self
    }

    pub fn metric_namespace(&self) -> Option<&str> {
        self.metric_namespace.as_deref()
    }

    pub fn set_metric_namespace(&mut self, metric_namespace: Option<String>) {
        self.metric_namespace = metric_namespace;
    }

    pub fn with_metric_namespace(mut self, metric_namespace: impl Into<String>) -> Self {
        self.metric_namespace = Some(metric_namespace.into());
        self
    }
}

display_fields!(DescribeMetricFiltersRequest {
    log_group_name,
    filter_name_prefix,
    next_token,
    limit,
    metric_name,
    metric_namespace,
});

/// One page of metric filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeMetricFiltersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_filters: Option<Vec<MetricFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl DescribeMetricFiltersResult {
    pub fn metric_filters(&self) -> Option<&[MetricFilter]> {
        self.metric_filters.as_deref()
    }

    pub fn set_metric_filters(&mut self, metric_filters: Option<Vec<MetricFilter>>) {
        self.metric_filters = metric_filters;
    }

    pub fn with_metric_filters(mut self, metric_filters: Vec<MetricFilter>) -> Self {
        self.metric_filters = Some(metric_filters);
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

display_fields!(DescribeMetricFiltersResult {
    metric_filters,
    next_token,
});

/// Runs a filter pattern against sample event messages without creating a
/// filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestMetricFilterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_event_messages: Option<Vec<String>>,
}

impl TestMetricFilterRequest {
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

    pub fn log_event_messages(&self) -> Option<&[String]> {
        self.log_event_messages.as_deref()
    }

    pub fn set_log_event_messages(&mut self, log_event_messages: Option<Vec<String>>) {
        self.log_event_messages = log_event_messages;
    }

    pub fn with_log_event_messages(mut self, log_event_messages: Vec<String>) -> Self {
        self.log_event_messages = Some(log_event_messages);
        self
    }
}

display_fields!(TestMetricFilterRequest {
    filter_pattern,
    log_event_messages,
});

/// Matches produced by a filter test run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestMetricFilterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<Vec<MetricFilterMatchRecord>>,
}

impl TestMetricFilterResult {
    pub fn matches(&self) -> Option<&[MetricFilterMatchRecord]> {
        self.matches.as_deref()
    }

    pub fn set_matches(&mut self, matches: Option<Vec<MetricFilterMatchRecord>>) {
        self.matches = matches;
    }

    pub fn with_matches(mut self, matches: Vec<MetricFilterMatchRecord>) -> Self {
        self.matches = Some(matches);
        self
    }
}

display_fields!(TestMetricFilterResult { matches });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_record_display_renders_extracted_values_in_key_order() {
        let mut values = BTreeMap::new();
        values.insert("status".to_string(), "500".to_string());
        values.insert("latency".to_string(), "312".to_string());

        let record = MetricFilterMatchRecord::default()
            .with_event_number(1)
            .with_event_message("ERROR status=500 latency=312")
            .with_extracted_values(values);

        assert_eq!(
            record.to_string(),
            "{event_number: 1, event_message: ERROR status=500 latency=312, \
             extracted_values: {latency: 312, status: 500}}"
        );
    }

    #[test]
    fn test_result_holds_one_record_per_match() {
        let result = TestMetricFilterResult::default().with_matches(vec![
            MetricFilterMatchRecord::default().with_event_number(1),
            MetricFilterMatchRecord::default().with_event_number(3),
        ]);

        let matches = result.matches().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].event_number(), Some(3));
    }

    #[test]
    fn filters_with_identical_fields_hash_identically() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let build = || {
            MetricFilter::default()
                .with_filter_name("errors")
                .with_filter_pattern("ERROR")
                .with_metric_transformations(vec![MetricTransformation::default()
                    .with_metric_name("ErrorCount")
                    .with_metric_namespace("Payments")
                    .with_metric_value("1")])
        };

        let hash = |filter: &MetricFilter| {
            let mut hasher = DefaultHasher::new();
            filter.hash(&mut hasher);
            hasher.finish()
        };

        assert_eq!(build(), build());
        assert_eq!(hash(&build()), hash(&build()));
    }
}
