use crate::{Result as ServiceErrorResult, ServiceError};

/// Trim surrounding whitespace from user input
pub fn sanitize_string(s: &str) -> String {
    s.trim().to_string()
}

/// Check a character count against inclusive bounds.
#[track_caller]
pub fn validate_string(
    value: &str,
    field_name: &str,
    min_length: usize,
    max_length: usize,
) -> ServiceErrorResult<()> {
    let length = value.chars().count();

    if length < min_length {
        let message = if min_length == 1 {
            format!("{} is required", field_name)
        } else {
            format!("{} must be at least {} characters", field_name, min_length)
        };
        return Err(ServiceError::validation(message, Some(field_name)));
    }

    if length > max_length {
        return Err(ServiceError::validation(
            format!("{} must not exceed {} characters", field_name, max_length),
            Some(field_name),
        ));
    }

    Ok(())
}

/// Minimal `local@domain.tld` shape check
#[track_caller]
pub fn validate_email(email: &str) -> ServiceErrorResult<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };

    if !valid {
        return Err(ServiceError::validation(
            format!("Invalid email address: {}", email),
            Some("email"),
        ));
    }
    Ok(())
}

/// Sanitize and validate a required name field.
#[track_caller]
pub(crate) fn required_name(
    value: &str,
    field_name: &str,
    max_length: usize,
) -> ServiceErrorResult<String> {
    let value = sanitize_string(value);
    validate_string(&value, field_name, 1, max_length)?;
    Ok(value)
}

/// Sanitize and validate an optional free-text field.
#[track_caller]
pub(crate) fn optional_text(
    value: &str,
    field_name: &str,
    max_length: usize,
) -> ServiceErrorResult<String> {
    let value = sanitize_string(value);
    validate_string(&value, field_name, 0, max_length)?;
    Ok(value)
}
