//! Employee form validation.
//!
//! Field rules live on [`NewEmployee`] as `validator` attributes; this module holds
//! the rule functions and flattens [`ValidationErrors`] into [`FormErrors`], one
//! inline message per form field.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::NewEmployee;

pub const NAME_REQUIRED: &str = "Full name is required";
pub const DOB_REQUIRED: &str = "Date of birth is required";

pub(crate) fn name_present(name: &str) -> Result<(), ValidationError> {
    required(name, NAME_REQUIRED)
}

pub(crate) fn dob_present(dob: &str) -> Result<(), ValidationError> {
    required(dob, DOB_REQUIRED)
}

fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed(message));
        return Err(err);
    }
    Ok(())
}

/// Form field that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Dob,
    Image,
}

/// Inline messages shown next to the employee form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub image: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.dob.is_none() && self.image.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Dob => self.dob.as_deref(),
            FormField::Image => self.image.as_deref(),
        }
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        let slot = self.slot(field);
        *slot = Some(message.into());
    }

    /// Drop the message for `field`, e.g. once the user edits it again.
    pub fn clear(&mut self, field: FormField) {
        *self.slot(field) = None;
    }

    fn slot(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Dob => &mut self.dob,
            FormField::Image => &mut self.image,
        }
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.field_errors();
        let message = |field: &str| {
            fields.get(field).and_then(|errs| errs.first()).map(|err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string())
            })
        };
        Self {
            name: message("name"),
            dob: message("dob"),
            image: None,
        }
    }
}

/// Check a draft before it is added or applied as an edit.
pub fn validate_draft(draft: &NewEmployee) -> Result<(), FormErrors> {
    draft.validate().map_err(FormErrors::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_and_missing_dob() {
        let draft = NewEmployee {
            name: "   ".to_string(),
            ..NewEmployee::default()
        };
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
        assert_eq!(errors.dob.as_deref(), Some(DOB_REQUIRED));
        assert!(errors.image.is_none());
    }

    #[test]
    fn test_complete_draft_passes() {
        let draft = NewEmployee {
            name: "Grace Hopper".to_string(),
            dob: "1906-12-09".to_string(),
            ..NewEmployee::default()
        };
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = validate_draft(&NewEmployee::default()).unwrap_err();
        errors.clear(FormField::Name);
        assert!(errors.get(FormField::Name).is_none());
        assert_eq!(errors.get(FormField::Dob), Some(DOB_REQUIRED));

        errors.clear(FormField::Dob);
        assert!(errors.is_empty());

        errors.set(FormField::Image, "Please choose an image file");
        assert!(!errors.is_empty());
    }
}
