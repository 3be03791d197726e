//! Controller and request validation.

mod pets;
mod validation;
pub use pets::PetController;
pub use validation::{Validate, NAME_MAX_LENGTH};
