pub use presence_models::programs::*;
