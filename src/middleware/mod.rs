pub mod role;
pub mod session;
