pub use presence_models::teachers::*;
