//! Input validation rules used by request DTOs

use std::borrow::Cow;

use validator::ValidationError;

/// `validator` custom rule: the value must contain a non-whitespace character
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}
