pub use presence_models::departments::*;
