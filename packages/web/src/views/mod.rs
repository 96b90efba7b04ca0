mod metrics;
mod support;

mod protected;
pub use protected::Protected;

mod shell;
pub use shell::DashboardShell;

mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod unauthorized;
pub use unauthorized::{NotFound, Unauthorized};

mod help;
pub use help::{AdminHelp, OperationHelp};

mod admin;
pub use admin::{AdminDailyTasks, AdminDefaultTasks, AdminNewTasks, AdminOverview};

mod operation;
pub use operation::{OperationDailyTasks, OperationNewTasks, OperationOverview};
