pub use presence_models::students::*;
