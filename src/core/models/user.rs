use crate::core::constants::INVALID_EMAIL;
use crate::core::errors::{DevConnectorError, FieldError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[serde(skip_serializing)]
    pub password: String, // bcrypt hash once the user is persisted
    pub date: DateTime<Utc>,
}

impl User {
    /// Builds an unsaved record with a fresh id. `password` still holds the
    /// plaintext and must be replaced with its hash before persisting.
    pub fn new(name: String, email: String, avatar: String, password: String) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            avatar,
            password,
            date: Utc::now(),
        }
    }
}

/// Registration input as submitted by a client, before any side effect.
#[derive(Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(
        email(message = "Please enter valid email"),
        custom(function = "require_top_level_domain")
    )]
    pub email: String,

    #[validate(length(min = 6, message = "Please enter valid password with >=6 char"))]
    pub password: String,
}

/// Rejects addresses whose domain has no dotted top-level part, such as
/// `ann@localhost` or `ann@example`.
fn require_top_level_domain(email: &str) -> Result<(), ValidationError> {
    let domain = email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or_default();
    let labels: Vec<&str> = domain.split('.').collect();
    let labels_ok = labels
        .iter()
        .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'));
    let tld_ok = labels.len() >= 2
        && labels.last().is_some_and(|tld| {
            tld.chars().count() >= 2 && (tld.chars().all(char::is_alphabetic) || tld.starts_with("xn--"))
        });

    if labels_ok && tld_ok {
        Ok(())
    } else {
        Err(ValidationError::new("email_tld").with_message(INVALID_EMAIL.into()))
    }
}

impl NewUser {
    /// Checks every rule and reports all violations in field order.
    pub fn check(&self) -> Result<(), DevConnectorError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let by_field = errors.field_errors();
        let violations: Vec<FieldError> = ["name", "email", "password"]
            .into_iter()
            .filter_map(|field| {
                by_field.get(field).and_then(|errs| errs.first()).map(|err| {
                    let msg = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    FieldError::body(field, msg)
                })
            })
            .collect();
        Err(DevConnectorError::Validation(violations))
    }
}
