use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::ui::notification::Notification;

/// Something, `@`, something, `.`, something; no whitespace anywhere.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
/// Simulated network latency for a submission.
pub const SUBMIT_DELAY_MS: f64 = 2000.0;
pub const SUCCESS_MESSAGE: &str = "✅ Message sent successfully! I'll get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// DOM id of the input element.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// Client-side validation failure. `Display` is the user-facing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingField(Field),
    InvalidEmail,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(_) => write!(f, "Please fill in all fields"),
            FormError::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl std::error::Error for FormError {}

impl FormError {
    pub fn notification(&self, now: f64) -> Notification {
        Notification::error(format!("⚠️ {}", self), now)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Raw contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Check for empty fields first (after trimming), then the email shape.
    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|&f| self.value(f).trim().is_empty())
        {
            return Err(FormError::MissingField(field));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `focused` / `has-value` styling for one form group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldDecoration {
    pub focused: bool,
    pub has_value: bool,
}

impl FieldDecoration {
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Losing focus keeps the floating label up while the field has text.
    pub fn blur(&mut self, value: &str) {
        if value.is_empty() {
            self.focused = false;
        }
    }

    pub fn input(&mut self, value: &str) {
        self.has_value = !value.is_empty();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn classes(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.focused {
            out.push("focused");
        }
        if self.has_value {
            out.push("has-value");
        }
        out
    }
}

/// Simulated send: the form is "in flight" for [`SUBMIT_DELAY_MS`], then
/// succeeds. Nothing leaves the page.
#[derive(Clone, Debug, Default)]
pub struct Submission {
    sending_since: Option<f64>,
}

impl Submission {
    /// Validate `form` and start sending.
    ///
    /// A submit while already sending is ignored (the button is disabled).
    pub fn begin(&mut self, form: &ContactForm, now: f64) -> Result<(), FormError> {
        if self.sending_since.is_some() {
            return Ok(());
        }
        form.validate()?;
        self.sending_since = Some(now);
        Ok(())
    }

    /// Returns the success banner once the simulated send completes. The
    /// caller resets the form and its decorations at that point.
    pub fn poll(&mut self, now: f64) -> Option<Notification> {
        let since = self.sending_since?;
        if now - since < SUBMIT_DELAY_MS {
            return None;
        }
        self.sending_since = None;
        Some(Notification::success(SUCCESS_MESSAGE, now))
    }

    pub fn is_sending(&self) -> bool {
        self.sending_since.is_some()
    }
}
