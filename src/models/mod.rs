pub mod employee;
pub mod log_entry;
pub mod organisation;
pub mod team;
pub mod user;

pub use employee::{Employee, EmployeeWithTeams};
pub use log_entry::{LogDetails, LogEntry};
pub use organisation::Organisation;
pub use team::{Team, TeamWithMemberCount};
pub use user::User;
