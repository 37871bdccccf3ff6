//! Presence checks for request bodies.

use crate::error::AuthError;
use serde::Deserialize;
use utoipa::ToSchema;

/// Signup/login body. Fields are optional so a missing one surfaces as a validation error.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct Credentials {
    #[serde(default)]
    #[schema(example = "luke@jedi.com")]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(example = "usetheforce")]
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Credentials {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Both fields must be present and non-blank. Returns the trimmed email and the password as given.
    pub fn credentials(creds: &Credentials) -> Result<(&str, &str), AuthError> {
        let email = required("email", creds.email.as_deref())?.trim();
        let password = required("password", creds.password.as_deref())?;
        Ok((email, password))
    }
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, AuthError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AuthError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_present_fields_and_trims_email() {
        let creds = Credentials::new("  luke@jedi.com ", "usetheforce");
        assert_eq!(RequestValidator::credentials(&creds).unwrap(), ("luke@jedi.com", "usetheforce"));
    }

    #[test]
    fn reports_first_missing_field() {
        let none = Credentials::default();
        assert!(matches!(RequestValidator::credentials(&none), Err(AuthError::MissingField("email"))));
        let no_password = Credentials {
            email: Some("leia@rebellion.com".into()),
            password: None,
        };
        assert!(matches!(
            RequestValidator::credentials(&no_password),
            Err(AuthError::MissingField("password"))
        ));
    }

    #[test]
    fn blank_counts_as_missing() {
        let blank = Credentials::new("han@smuggler.com", "   ");
        assert!(matches!(RequestValidator::credentials(&blank), Err(AuthError::MissingField("password"))));
    }

    #[test]
    fn null_fields_deserialize_as_missing() {
        let creds: Credentials = serde_json::from_str(r#"{"email":null}"#).unwrap();
        assert!(creds.email.is_none());
        assert!(creds.password.is_none());
    }
}
