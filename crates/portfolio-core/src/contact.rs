//! WhatsApp deep links, contact form validation and the interaction log.

use crate::constants::{FEEDBACK_ERROR_DISMISS, FEEDBACK_SUCCESS_DISMISS};
use crate::error::{ContactError, DataError};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

pub const QUICK_CONTACT_MESSAGE: &str =
    "Hi! I'd like to discuss a potential project. Are you available for a quick chat?";

/// Opening message for a service card's button.
pub fn service_message(service: &str) -> String {
    format!(
        "Hi! I am interested in `{service}`. Could you please provide more details about this service?"
    )
}

/// `encodeURIComponent`: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
/// is percent-encoded as UTF-8.
pub fn encode_uri_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 3);
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Destination for every deep link. The number is kept as digits only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhatsApp {
    digits: String,
}

impl WhatsApp {
    pub fn new(phone: &str) -> Self {
        Self {
            digits: phone.chars().filter(char::is_ascii_digit).collect(),
        }
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn url(&self, message: &str) -> String {
        format!(
            "{WHATSAPP_BASE_URL}{}?text={}",
            self.digits,
            encode_uri_component(message)
        )
    }

    pub fn service_url(&self, service: &str) -> String {
        self.url(&service_message(service))
    }

    pub fn quick_contact_url(&self) -> String {
        self.url(QUICK_CONTACT_MESSAGE)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    /// Name, email and message must be non-blank; service is optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn message(&self) -> String {
        let mut message = format!("Hi! My name is `{}`.\n\n", self.name);
        if !self.service.trim().is_empty() {
            let _ = write!(message, "I'm interested in: `{}`\n\n", self.service);
        }
        let _ = write!(message, "Message: `{}` \n\n", self.message);
        let _ = write!(message, "Email: {}", self.email);
        message
    }

    /// Service recorded in the interaction log.
    pub fn tracked_service(&self) -> &str {
        if self.service.trim().is_empty() {
            "general"
        } else {
            &self.service
        }
    }

    /// Validate and produce the deep link, or the feedback to show instead.
    pub fn submit(&self, whatsapp: &WhatsApp) -> Submission {
        match self.validate() {
            Ok(()) => Submission::Accepted {
                url: whatsapp.url(&self.message()),
                feedback: Feedback::success(),
            },
            Err(error) => {
                log::warn!("[contact] rejected form: {error}");
                Submission::Rejected {
                    error,
                    feedback: Feedback::error(),
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Accepted { url: String, feedback: Feedback },
    Rejected { error: ContactError, feedback: Feedback },
}

impl Submission {
    pub fn url(&self) -> Option<&str> {
        match self {
            Submission::Accepted { url, .. } => Some(url),
            Submission::Rejected { .. } => None,
        }
    }

    pub fn feedback(&self) -> &Feedback {
        match self {
            Submission::Accepted { feedback, .. } | Submission::Rejected { feedback, .. } => {
                feedback
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Inline message appended to the contact form.
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: &'static str,
    pub dismiss_after: Duration,
    /// Clear the form when the message is dismissed.
    pub reset_form: bool,
}

impl Feedback {
    pub fn success() -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: "Message prepared! Opening WhatsApp...",
            dismiss_after: FEEDBACK_SUCCESS_DISMISS,
            reset_form: true,
        }
    }

    pub fn error() -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: "Please fill in all required fields.",
            dismiss_after: FEEDBACK_ERROR_DISMISS,
            reset_form: false,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self.kind {
            FeedbackKind::Success => "form-feedback form-feedback-success",
            FeedbackKind::Error => "form-feedback form-feedback-error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Service,
    ContactForm,
    QuickContact,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub service: String,
    /// ISO-8601, as produced by the browser clock.
    pub timestamp: String,
    pub user_agent: String,
}

/// Append-only list of opened deep links, persisted as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionLog {
    entries: Vec<Interaction>,
}

impl InteractionLog {
    /// A missing or corrupt stored value starts a fresh log.
    pub fn load(stored: Option<&str>) -> Self {
        let entries = match stored {
            Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
                log::warn!("[contact] discarding unreadable interaction log: {e}");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Self { entries }
    }

    pub fn record(&mut self, interaction: Interaction) {
        log::info!(
            "[contact] interaction {:?} for {}",
            interaction.kind,
            interaction.service
        );
        self.entries.push(interaction);
    }

    pub fn entries(&self) -> &[Interaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String, DataError> {
        serde_json::to_string(&self.entries).map_err(|source| DataError::Encode {
            document: "interaction log",
            source,
        })
    }
}
