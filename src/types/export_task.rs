use crate::error::Error;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an export task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportTaskStatusCode {
    Cancelled,
    Completed,
    Failed,
    Pending,
    PendingCancel,
    Running,
}

impl ExportTaskStatusCode {
    /// All members, in canonical order.
    pub const fn values() -> &'static [ExportTaskStatusCode] {
        &[
            ExportTaskStatusCode::Cancelled,
            ExportTaskStatusCode::Completed,
            ExportTaskStatusCode::Failed,
            ExportTaskStatusCode::Pending,
            ExportTaskStatusCode::PendingCancel,
            ExportTaskStatusCode::Running,
        ]
    }

    /// The canonical wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportTaskStatusCode::Cancelled => "CANCELLED",
            ExportTaskStatusCode::Completed => "COMPLETED",
            ExportTaskStatusCode::Failed => "FAILED",
            ExportTaskStatusCode::Pending => "PENDING",
            ExportTaskStatusCode::PendingCancel => "PENDING_CANCEL",
            ExportTaskStatusCode::Running => "RUNNING",
        }
    }
}

impl fmt::Display for ExportTaskStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExportTaskStatusCode> for String {
    fn from(value: ExportTaskStatusCode) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ExportTaskStatusCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CANCELLED" => Ok(ExportTaskStatusCode::Cancelled),
            "COMPLETED" => Ok(ExportTaskStatusCode::Completed),
            "FAILED" => Ok(ExportTaskStatusCode::Failed),
            "PENDING" => Ok(ExportTaskStatusCode::Pending),
            "PENDING_CANCEL" => Ok(ExportTaskStatusCode::PendingCancel),
            "RUNNING" => Ok(ExportTaskStatusCode::Running),
            _ => Err(Error::InvalidEnumValue {
                target: "ExportTaskStatusCode",
                value: s.to_string(),
            }),
        }
    }
}

/// Status of an export task: a code plus an optional human-readable detail.
///
/// The code is stored as the raw wire string; [`with_status_code`](ExportTaskStatus::with_status_code)
/// accepts the enum member directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTaskStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ExportTaskStatus {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn set_code(&mut self, code: Option<String>) {
        self.code = code;
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Store the canonical string of the given member as the code.
    pub fn with_status_code(self, code: ExportTaskStatusCode) -> Self {
        self.with_code(code)
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

display_fields!(ExportTaskStatus { code, message });

/// Timing of an export task run, in epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTaskExecutionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completion_time: Option<i64>,
}

impl ExportTaskExecutionInfo {
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

    pub fn completion_time(&self) -> Option<i64> {
        self.completion_time
    }

    pub fn set_completion_time(&mut self, completion_time: Option<i64>) {
        self.completion_time = completion_time;
    }

    pub fn with_completion_time(mut self, completion_time: i64) -> Self {
        self.completion_time = Some(completion_time);
        self
    }
}

display_fields!(ExportTaskExecutionInfo {
    creation_time,
    completion_time,
});

/// An asynchronous job copying log data to bulk storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    task_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ExportTaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_info: Option<ExportTaskExecutionInfo>,
}

impl ExportTask {
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn set_task_id(&mut self, task_id: Option<String>) {
        self.task_id = task_id;
    }

    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn task_name(&self) -> Option<&str> {
        self.task_name.as_deref()
    }

    pub fn set_task_name(&mut self, task_name: Option<String>) {
        self.task_name = task_name;
    }

    pub fn with_task_name(mut self, task_name: impl Into<String>) -> Self {
        self.task_name = Some(task_name.into());
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

    /// Start of the exported range, in epoch milliseconds.
    pub fn from(&self) -> Option<i64> {
        self.from
    }

    pub fn set_from(&mut self, from: Option<i64>) {
        self.from = from;
    }

    pub fn with_from(mut self, from: i64) -> Self {
        self.from = Some(from);
        self
    }

    /// End of the exported range, in epoch milliseconds.
    pub fn to(&self) -> Option<i64> {
        self.to
    }

    pub fn set_to(&mut self, to: Option<i64>) {
        self.to = to;
    }

    pub fn with_to(mut self, to: i64) -> Self {
        self.to = Some(to);
        self
    }

    /// Name of the storage bucket the task exports to.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn set_destination(&mut self, destination: Option<String>) {
        self.destination = destination;
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn destination_prefix(&self) -> Option<&str> {
        self.destination_prefix.as_deref()
    }

    pub fn set_destination_prefix(&mut self, destination_prefix: Option<String>) {
        self.destination_prefix = destination_prefix;
    }

    pub fn with_destination_prefix(mut self, destination_prefix: impl Into<String>) -> Self {
        self.destination_prefix = Some(destination_prefix.into());
        self
    }

    pub fn status(&self) -> Option<&ExportTaskStatus> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: Option<ExportTaskStatus>) {
        self.status = status;
    }

    pub fn with_status(mut self, status: ExportTaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn execution_info(&self) -> Option<&ExportTaskExecutionInfo> {
        self.execution_info.as_ref()
    }

    pub fn set_execution_info(&mut self, execution_info: Option<ExportTaskExecutionInfo>) {
        self.execution_info = execution_info;
    }

    pub fn with_execution_info(mut self, execution_info: ExportTaskExecutionInfo) -> Self {
        self.execution_info = Some(execution_info);
        self
    }
}

display_fields!(ExportTask {
    task_id,
    task_name,
    log_group_name,
    from,
    to,
    destination,
    destination_prefix,
    status,
    execution_info,
});

/// Starts an export of a log group's data to bulk storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExportTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    task_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_stream_name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_prefix: Option<String>,
}

impl CreateExportTaskRequest {
    pub fn task_name(&self) -> Option<&str> {
        self.task_name.as_deref()
    }

    pub fn set_task_name(&mut self, task_name: Option<String>) {
        self.task_name = task_name;
    }

    pub fn with_task_name(mut self, task_name: impl Into<String>) -> Self {
        self.task_name = Some(task_name.into());
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

    /// Restrict the export to streams whose name starts with this prefix.
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

    pub fn from(&self) -> Option<i64> {
        self.from
    }

    pub fn set_from(&mut self, from: Option<i64>) {
        self.from = from;
    }

    pub fn with_from(mut self, from: i64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to(&self) -> Option<i64> {
        self.to
    }

    pub fn set_to(&mut self, to: Option<i64>) {
        self.to = to;
    }

    pub fn with_to(mut self, to: i64) -> Self {
        self.to = Some(to);
        self
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn set_destination(&mut self, destination: Option<String>) {
        self.destination = destination;
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn destination_prefix(&self) -> Option<&str> {
        self.destination_prefix.as_deref()
    }

    pub fn set_destination_prefix(&mut self, destination_prefix: Option<String>) {
        self.destination_prefix = destination_prefix;
    }

    pub fn with_destination_prefix(mut self, destination_prefix: impl Into<String>) -> Self {
        self.destination_prefix = Some(destination_prefix.into());
        self
    }
}

display_fields!(CreateExportTaskRequest {
    task_name,
    log_group_name,
    log_stream_name_prefix,
    from,
    to,
    destination,
    destination_prefix,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExportTaskResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    task_id: Option<String>,
}

impl CreateExportTaskResult {
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn set_task_id(&mut self, task_id: Option<String>) {
        self.task_id = task_id;
    }

    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }
}

display_fields!(CreateExportTaskResult { task_id });

/// Cancels an export task in `PENDING` or `RUNNING` state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelExportTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    task_id: Option<String>,
}

impl CancelExportTaskRequest {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: Some(task_id.into()),
        }
    }

    /// Task identifier, 1-512 characters.
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn set_task_id(&mut self, task_id: Option<String>) {
        self.task_id = task_id;
    }

    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }
}

display_fields!(CancelExportTaskRequest { task_id });

/// Lists export tasks, optionally narrowed to one task or one status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeExportTasksRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i32>,
}

impl DescribeExportTasksRequest {
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn set_task_id(&mut self, task_id: Option<String>) {
        self.task_id = task_id;
    }

    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn status_code(&self) -> Option<&str> {
        self.status_code.as_deref()
    }

    pub fn set_status_code(&mut self, status_code: Option<String>) {
        self.status_code = status_code;
    }

    /// Accepts either a raw string or an [`ExportTaskStatusCode`] member.
    pub fn with_status_code(mut self, status_code: impl Into<String>) -> Self {
        self.status_code = Some(status_code.into());
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

display_fields!(DescribeExportTasksRequest {
    task_id,
    status_code,
    next_token,
    limit,
});

/// One page of export tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeExportTasksResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    export_tasks: Option<Vec<ExportTask>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl DescribeExportTasksResult {
    pub fn export_tasks(&self) -> Option<&[ExportTask]> {
        self.export_tasks.as_deref()
    }

    pub fn set_export_tasks(&mut self, export_tasks: Option<Vec<ExportTask>>) {
        self.export_tasks = export_tasks;
    }

    pub fn with_export_tasks(mut self, export_tasks: Vec<ExportTask>) -> Self {
        self.export_tasks = Some(export_tasks);
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

display_fields!(DescribeExportTasksResult {
    export_tasks,
    next_token,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_accepts_raw_string_or_enum() {
        let by_enum = ExportTaskStatus::default().with_status_code(ExportTaskStatusCode::Running);
        let by_string = ExportTaskStatus::default().with_code("RUNNING");

        assert_eq!(by_enum, by_string);
        assert_eq!(by_enum.code(), Some("RUNNING"));
    }

    #[test]
    fn status_code_round_trips_for_every_member() {
        for member in ExportTaskStatusCode::values() {
            assert_eq!(
                member.as_str().parse::<ExportTaskStatusCode>().unwrap(),
                *member
            );
        }
    }

    #[test]
    fn status_code_rejects_empty_and_unknown_strings() {
        for invalid in ["", "running", "Pending", "DONE"] {
            assert!(invalid.parse::<ExportTaskStatusCode>().is_err());
        }
    }

    #[test]
    fn cancel_request_chains_from_its_zero_value() {
        let request = CancelExportTaskRequest::default().with_task_id("task-123");
        assert_eq!(request.task_id(), Some("task-123"));

        // Convenience construction matches the chained form.
        assert_eq!(request, CancelExportTaskRequest::new("task-123"));
    }

    #[test]
    fn export_task_display_nests_sub_records() {
        let task = ExportTask::default()
            .with_task_id("task-123")
            .with_status(
                ExportTaskStatus::default().with_status_code(ExportTaskStatusCode::Pending),
            );

        assert_eq!(
            task.to_string(),
            "{task_id: task-123, status: {code: PENDING}}"
        );
    }

    #[test]
    fn describe_request_takes_enum_member_for_status_code() {
        let request =
            DescribeExportTasksRequest::default().with_status_code(ExportTaskStatusCode::Failed);
        assert_eq!(request.status_code(), Some("FAILED"));
    }
}
