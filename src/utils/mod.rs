pub mod flash;
pub mod paths;
pub mod record_id;
