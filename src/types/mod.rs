pub(crate) mod display;

mod destination;
mod export_task;
mod log_event;
mod log_group;
mod log_stream;
mod metric_filter;
mod resource_policy;

pub use destination::{
    DeleteDestinationRequest, DescribeDestinationsRequest, DescribeDestinationsResult,
    Destination, Distribution,
};
pub use export_task::{
    CancelExportTaskRequest, CreateExportTaskRequest, CreateExportTaskResult,
    DescribeExportTasksRequest, DescribeExportTasksResult, ExportTask, ExportTaskExecutionInfo,
    ExportTaskStatus, ExportTaskStatusCode,
};
pub use log_event::{
    FilterLogEventsRequest, FilterLogEventsResult, FilteredLogEvent, InputLogEvent,
    PutLogEventsRequest, PutLogEventsResult, RejectedLogEventsInfo, SearchedLogStream,
};
pub use log_group::{
    DeleteRetentionPolicyRequest, DescribeLogGroupsRequest, DescribeLogGroupsResult, LogGroup,
    PutRetentionPolicyRequest,
};
pub use log_stream::{
    DescribeLogStreamsRequest, DescribeLogStreamsResult, LogStream, OrderBy,
};
pub use metric_filter::{
    DescribeMetricFiltersRequest, DescribeMetricFiltersResult, MetricFilter,
    MetricFilterMatchRecord, MetricTransformation, TestMetricFilterRequest,
    TestMetricFilterResult,
};
pub use resource_policy::{
    DeleteResourcePolicyRequest, PutResourcePolicyRequest, PutResourcePolicyResult,
    ResourcePolicy,
};
