pub mod assignment;
pub mod course;
pub mod request;
pub mod role;
pub mod user;
