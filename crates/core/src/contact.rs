//! Contact-form message validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+@.+\..+").expect("email pattern must compile"));

/// A contact-form submission, forwarded verbatim to the configured relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trim all fields and reject submissions with a blank name/message or an
/// implausible email address. Returns the normalized message.
pub fn validate_contact(input: &ContactMessage) -> Result<ContactMessage, CoreError> {
    let name = input.name.trim();
    let email = input.email.trim();
    let message = input.message.trim();

    if name.is_empty() {
        return Err(CoreError::Validation("name required".to_string()));
    }
    if email.is_empty() || !EMAIL_RE.is_match(email) {
        return Err(CoreError::Validation("valid email required".to_string()));
    }
    if message.is_empty() {
        return Err(CoreError::Validation("message required".to_string()));
    }

    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}
