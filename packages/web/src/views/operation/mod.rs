mod overview;
pub use overview::OperationOverview;

mod daily_tasks;
pub use daily_tasks::OperationDailyTasks;

mod new_tasks;
pub use new_tasks::OperationNewTasks;
