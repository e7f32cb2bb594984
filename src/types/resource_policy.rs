use serde::{Deserialize, Serialize};

/// An access-control document governing who may write to an account's logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated_time: Option<i64>,
}

impl ResourcePolicy {
    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }

    /// The policy itself, a JSON document up to 5120 bytes.
    pub fn policy_document(&self) -> Option<&str> {
        self.policy_document.as_deref()
    }

    pub fn set_policy_document(&mut self, policy_document: Option<String>) {
        self.policy_document = policy_document;
    }

    pub fn with_policy_document(mut self, policy_document: impl Into<String>) -> Self {
        self.policy_document = Some(policy_document.into());
        self
    }

    pub fn last_updated_time(&self) -> Option<i64> {
        self.last_updated_time
    }

    pub fn set_last_updated_time(&mut self, last_updated_time: Option<i64>) {
        self.last_updated_time = last_updated_time;
    }

    pub fn with_last_updated_time(mut self, last_updated_time: i64) -> Self {
        self.last_updated_time = Some(last_updated_time);
        self
    }
}

display_fields!(ResourcePolicy {
    policy_name,
    policy_document,
    last_updated_time,
});

/// Creates or replaces a resource policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutResourcePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_document: Option<String>,
}

impl PutResourcePolicyRequest {
    pub fn new(policy_name: impl Into<String>, policy_document: impl Into<String>) -> Self {
        Self {
            policy_name: Some(policy_name.into()),
            policy_document: Some(policy_document.into()),
        }
    }

    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }

    pub fn policy_document(&self) -> Option<&str> {
        self.policy_document.as_deref()
    }

    pub fn set_policy_document(&mut self, policy_document: Option<String>) {
        self.policy_document = policy_document;
    }

    pub fn with_policy_document(mut self, policy_document: impl Into<String>) -> Self {
        self.policy_document = Some(policy_document.into());
        self
    }
}

display_fields!(PutResourcePolicyRequest {
    policy_name,
    policy_document,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutResourcePolicyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_policy: Option<ResourcePolicy>,
}

impl PutResourcePolicyResult {
    /// The policy as stored, including the service-side update time.
    pub fn resource_policy(&self) -> Option<&ResourcePolicy> {
        self.resource_policy.as_ref()
    }

    pub fn set_resource_policy(&mut self, resource_policy: Option<ResourcePolicy>) {
        self.resource_policy = resource_policy;
    }

    pub fn with_resource_policy(mut self, resource_policy: ResourcePolicy) -> Self {
        self.resource_policy = Some(resource_policy);
        self
    }
}

display_fields!(PutResourcePolicyResult { resource_policy });

/// Deletes a resource policy, revoking the access it granted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResourcePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
}

impl DeleteResourcePolicyRequest {
    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }
}

display_fields!(DeleteResourcePolicyRequest { policy_name });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_request_builds_from_required_fields() {
        let document = r#"{"Version":"2012-10-17","Statement":[]}"#;
        let request = PutResourcePolicyRequest::new("route53-query-logging", document);

        assert_eq!(request.policy_name(), Some("route53-query-logging"));
        assert_eq!(request.policy_document(), Some(document));
        assert_eq!(
            request,
            PutResourcePolicyRequest::default()
                .with_policy_name("route53-query-logging")
                .with_policy_document(document)
        );
    }

    #[test]
    fn put_result_nests_the_stored_policy() {
        let result = PutResourcePolicyResult::default().with_resource_policy(
            ResourcePolicy::default()
                .with_policy_name("route53-query-logging")
                .with_last_updated_time(1_700_000_000_000),
        );

        let policy = result.resource_policy().unwrap();
        assert_eq!(policy.policy_name(), Some("route53-query-logging"));
        assert_eq!(policy.last_updated_time(), Some(1_700_000_000_000));
    }
}
