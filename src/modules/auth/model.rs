pub use presence_models::admins::*;
