mod overview;
pub use overview::AdminOverview;

mod default_tasks;
pub use default_tasks::AdminDefaultTasks;

mod daily_tasks;
pub use daily_tasks::AdminDailyTasks;

mod new_tasks;
pub use new_tasks::AdminNewTasks;
