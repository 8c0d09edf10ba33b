//! Request validation: turns a submitted draft into column assignments.

use crate::error::AppError;
use crate::model::{ClientChanges, ClientDraft, ClientField};

pub struct RequestValidator;

impl RequestValidator {
    /// Create: name and email required; optional fields not submitted are stored as NULL.
    pub fn validate_create(draft: &ClientDraft) -> Result<ClientChanges, AppError> {
        let mut changes = ClientChanges::default();
        for field in ClientField::ALL {
            let value = normalize(field, draft.get(field))?;
            if field.is_required() && value.is_none() {
                return Err(AppError::Validation(format!("{} is required", field.column())));
            }
            changes.set(field, value);
        }
        check_email(&changes)?;
        Ok(changes)
    }

    /// Update: only submitted fields are assigned. A submitted required field must not be blank.
    pub fn validate_update(draft: &ClientDraft) -> Result<ClientChanges, AppError> {
        let mut changes = ClientChanges::default();
        for field in ClientField::ALL {
            let Some(raw) = draft.get(field) else { continue };
            let value = normalize(field, Some(raw))?;
            if field.is_required() && value.is_none() {
                return Err(AppError::Validation(format!("{} must not be empty", field.column())));
            }
            changes.set(field, value);
        }
        check_email(&changes)?;
        Ok(changes)
    }
}

/// Trim; blank becomes None. TEXT columns cannot store NUL.
fn normalize(field: ClientField, value: Option<&str>) -> Result<Option<String>, AppError> {
    if value.is_some_and(|v| v.contains('\0')) {
        return Err(AppError::Validation(format!(
            "{} must not contain NUL characters",
            field.column()
        )));
    }
    Ok(value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string))
}

fn check_email(changes: &ClientChanges) -> Result<(), AppError> {
    if let Some(Some(email)) = changes.get(ClientField::Email) {
        if !email.contains('@') || email.len() < 3 {
            return Err(AppError::Validation("email must be a valid email".into()));
        }
    }
    Ok(())
}
