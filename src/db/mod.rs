pub mod employees;
pub mod logs;
pub mod memberships;
pub mod organisations;
pub mod teams;
pub mod users;
