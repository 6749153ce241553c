pub use presence_models::courses::*;
