use crate::error::Error;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named cross-account delivery target for log data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<i64>,
}

impl Destination {
    pub fn destination_name(&self) -> Option<&str> {
        self.destination_name.as_deref()
    }

    pub fn set_destination_name(&mut self, destination_name: Option<String>) {
        self.destination_name = destination_name;
    }

    pub fn with_destination_name(mut self, destination_name: impl Into<String>) -> Self {
        self.destination_name = Some(destination_name.into());
        self
    }

    /// ARN of the physical resource (for example a Kinesis stream) the
    /// destination forwards to.
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }

    pub fn set_target_arn(&mut self, target_arn: Option<String>) {
        self.target_arn = target_arn;
    }

    pub fn with_target_arn(mut self, target_arn: impl Into<String>) -> Self {
        self.target_arn = Some(target_arn.into());
        self
    }

    /// ARN of the role that grants the logging service permission to write
    /// to the target.
    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn set_role_arn(&mut self, role_arn: Option<String>) {
        self.role_arn = role_arn;
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }

    /// Access policy document governing who may subscribe to the destination.
    pub fn access_policy(&self) -> Option<&str> {
        self.access_policy.as_deref()
    }

    pub fn set_access_policy(&mut self, access_policy: Option<String>) {
        self.access_policy = access_policy;
    }

    pub fn with_access_policy(mut self, access_policy: impl Into<String>) -> Self {
        self.access_policy = Some(access_policy.into());
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

    /// Creation time of the destination, in epoch milliseconds.
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
}

display_fields!(Destination {
    destination_name,
    target_arn,
    role_arn,
    access_policy,
    arn,
    creation_time,
});

/// Deletes a destination and stops delivery through it.
///
/// The destination name is 1-512 characters and may not contain `:` or `*`;
/// the service enforces this, the model does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDestinationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_name: Option<String>,
}

impl DeleteDestinationRequest {
    pub fn destination_name(&self) -> Option<&str> {
        self.destination_name.as_deref()
    }

    pub fn set_destination_name(&mut self, destination_name: Option<String>) {
        self.destination_name = destination_name;
    }

    pub fn with_destination_name(mut self, destination_name: impl Into<String>) -> Self {
        self.destination_name = Some(destination_name.into());
        self
    }
}

display_fields!(DeleteDestinationRequest { destination_name });

/// Lists destinations, optionally narrowed by a name prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeDestinationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i32>,
}

impl DescribeDestinationsRequest {
    pub fn destination_name_prefix(&self) -> Option<&str> {
        self.destination_name_prefix.as_deref()
    }

    pub fn set_destination_name_prefix(&mut self, destination_name_prefix: Option<String>) {
        self.destination_name_prefix = destination_name_prefix;
    }

    pub fn with_destination_name_prefix(
        mut self,
        destination_name_prefix: impl Into<String>,
    ) -> Self {
        self.destination_name_prefix = Some(destination_name_prefix.into());
        self
    }

    /// Continuation token from a previous listing, echoed back verbatim.
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

    /// Maximum number of items to return in one page.
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

display_fields!(DescribeDestinationsRequest {
    destination_name_prefix,
    next_token,
    limit,
});

/// One page of destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeDestinationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    destinations: Option<Vec<Destination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl DescribeDestinationsResult {
    pub fn destinations(&self) -> Option<&[Destination]> {
        self.destinations.as_deref()
    }

    pub fn set_destinations(&mut self, destinations: Option<Vec<Destination>>) {
        self.destinations = destinations;
    }

    pub fn with_destinations(mut self, destinations: Vec<Destination>) -> Self {
        self.destinations = Some(destinations);
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

display_fields!(DescribeDestinationsResult {
    destinations,
    next_token,
});

/// How log data is spread across a delivery target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distribution {
    Random,
    ByLogStream,
}

impl Distribution {
    /// All members, in canonical order.
    pub const fn values() -> &'static [Distribution] {
        &[Distribution::Random, Distribution::ByLogStream]
    }

    /// The canonical wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Random => "Random",
            Distribution::ByLogStream => "ByLogStream",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Distribution> for String {
    fn from(value: Distribution) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Random" => Ok(Distribution::Random),
            "ByLogStream" => Ok(Distribution::ByLogStream),
            _ => Err(Error::InvalidEnumValue {
                target: "Distribution",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluent_chaining_sets_every_field() {
        let destination = Destination::default()
            .with_destination_name("audit-fanout")
            .with_target_arn("arn:aws:kinesis:us-east-1:123456789012:stream/audit")
            .with_role_arn("arn:aws:iam::123456789012:role/cwl-to-kinesis")
            .with_creation_time(1_700_000_000_000);

        assert_eq!(destination.destination_name(), Some("audit-fanout"));
        assert_eq!(destination.creation_time(), Some(1_700_000_000_000));
        assert_eq!(destination.access_policy(), None);
    }

    #[test]
    fn mutators_overwrite_and_unset() {
        let mut request = DeleteDestinationRequest::default();
        request.set_destination_name(Some("audit-fanout".to_string()));
        assert_eq!(request.destination_name(), Some("audit-fanout"));

        request.set_destination_name(None);
        assert_eq!(request.destination_name(), None);
    }

    #[test]
    fn display_skips_unset_fields() {
        let result = DescribeDestinationsResult::default().with_next_token("page-2");
        assert_eq!(result.to_string(), "{next_token: page-2}");

        assert_eq!(DescribeDestinationsRequest::default().to_string(), "{}");
    }

    #[test]
    fn distribution_round_trips_through_its_wire_string() {
        for member in Distribution::values() {
            assert_eq!(member.as_str().parse::<Distribution>().unwrap(), *member);
        }
    }

    #[test]
    fn distribution_rejects_empty_and_unknown_strings() {
        for invalid in ["", "random", "BY_LOG_STREAM", "RoundRobin"] {
            let err = invalid.parse::<Distribution>().unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidEnumValue {
                    target: "Distribution",
                    ..
                }
            ));
        }
    }
}
