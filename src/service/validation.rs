//! Request body rules checked before a request reaches the controller.

use crate::error::AppError;
use crate::models::{NewPet, PetPatch};

pub const NAME_MAX_LENGTH: usize = 255;

pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "name must be at most {} characters",
            NAME_MAX_LENGTH
        )));
    }
    Ok(())
}

impl Validate for NewPet {
    fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)
    }
}

impl Validate for PetPatch {
    /// Only supplied fields are checked.
    fn validate(&self) -> Result<(), AppError> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }
}
