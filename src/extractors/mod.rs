pub mod json;

pub use json::{ApiPath, ApiQuery, ValidJson};
