use serde::{Deserialize, Serialize};

/// A named container for log streams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retention_in_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric_filter_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stored_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kms_key_id: Option<String>,
}

impl LogGroup {
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

    /// Retention in days; unset means events are kept forever.
    pub fn retention_in_days(&self) -> Option<i32> {
        self.retention_in_days
    }

    pub fn set_retention_in_days(&mut self, retention_in_days: Option<i32>) {
        self.retention_in_days = retention_in_days;
    }

    pub fn with_retention_in_days(mut self, retention_in_days: i32) -> Self {
        self.retention_in_days = Some(retention_in_days);
        self
    }

    pub fn metric_filter_count(&self) -> Option<i32> {
        self.metric_filter_count
    }

    pub fn set_metric_filter_count(&mut self, metric_filter_count: Option<i32>) {
        self.metric_filter_count = metric_filter_count;
    }

    pub fn with_metric_filter_count(mut self, metric_filter_count: i32) -> Self {
        self.metric_filter_count = Some(metric_filter_count);
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

    /// Key used to encrypt the group's data at rest, when one is attached.
    pub fn kms_key_id(&self) -> Option<&str> {
        self.kms_key_id.as_deref()
    }

    pub fn set_kms_key_id(&mut self, kms_key_id: Option<String>) {
        self.kms_key_id = kms_key_id;
    }

    pub fn with_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }
}

display_fields!(LogGroup {
    log_group_name,
    creation_time,
    retention_in_days,
    metric_filter_count,
    arn,
    stored_bytes,
    kms_key_id,
});

/// Lists log groups, optionally narrowed by a name prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogGroupsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i32>,
}

impl DescribeLogGroupsRequest {
    pub fn log_group_name_prefix(&self) -> Option<&str> {
        self.log_group_name_prefix.as_deref()
    }

    pub fn set_log_group_name_prefix(&mut self, log_group_name_prefix: Option<String>) {
        self.log_group_name_prefix = log_group_name_prefix;
    }

    pub fn with_log_group_name_prefix(mut self, log_group_name_prefix: impl Into<String>) -> Self {
        self.log_group_name_prefix = Some(log_group_name_prefix.into());
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

display_fields!(DescribeLogGroupsRequest {
    log_group_name_prefix,
    next_token,
    limit,
});

/// One page of log groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogGroupsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_groups: Option<Vec<LogGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl DescribeLogGroupsResult {
    pub fn log_groups(&self) -> Option<&[LogGroup]> {
        self.log_groups.as_deref()
    }

    pub fn set_log_groups(&mut self, log_groups: Option<Vec<LogGroup>>) {
        self.log_groups = log_groups;
    }

    pub fn with_log_groups(mut self, log_groups: Vec<LogGroup>) -> Self {
        self.log_groups = Some(log_groups);
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

display_fields!(DescribeLogGroupsResult {
    log_groups,
    next_token,
});

/// Sets how long a log group keeps its events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutRetentionPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retention_in_days: Option<i32>,
}

impl PutRetentionPolicyRequest {
    pub fn new(log_group_name: impl Into<String>, retention_in_days: i32) -> Self {
        Self {
            log_group_name: Some(log_group_name.into()),
            retention_in_days: Some(retention_in_days),
        }
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

    pub fn retention_in_days(&self) -> Option<i32> {
        self.retention_in_days
    }

    pub fn set_retention_in_days(&mut self, retention_in_days: Option<i32>) {
        self.retention_in_days = retention_in_days;
    }

    pub fn with_retention_in_days(mut self, retention_in_days: i32) -> Self {
        self.retention_in_days = Some(retention_in_days);
        self
    }
}

display_fields!(PutRetentionPolicyRequest {
    log_group_name,
    retention_in_days,
});

/// Removes a log group's retention policy, so its events are kept forever.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRetentionPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
}

impl DeleteRetentionPolicyRequest {
    pub fn new(log_group_name: impl Into<String>) -> Self {
        Self {
            log_group_name: Some(log_group_name.into()),
        }
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

display_fields!(DeleteRetentionPolicyRequest { log_group_name });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_retention_policy_builds_both_ways() {
        let parameterized = DeleteRetentionPolicyRequest::new("payments");
        let chained = DeleteRetentionPolicyRequest::default().with_log_group_name("payments");

        assert_eq!(parameterized, chained);
        assert_eq!(DeleteRetentionPolicyRequest::default().log_group_name(), None);
    }

    #[test]
    fn result_echoes_its_pagination_token_unmodified() {
        let token = "frontend/2016-01-01/[$LATEST]abcdef";
        let result = DescribeLogGroupsResult::default().with_next_token(token);
        assert_eq!(result.next_token(), Some(token));
    }

    #[test]
    fn log_group_display_orders_fields_by_declaration() {
        let group = LogGroup::default()
            .with_stored_bytes(1024)
            .with_log_group_name("payments")
            .with_retention_in_days(30);

        // Declared order wins, not the order fields were set in.
        assert_eq!(
            group.to_string(),
            "{log_group_name: payments, retention_in_days: 30, stored_bytes: 1024}"
        );
    }
}
