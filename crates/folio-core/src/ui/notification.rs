/// Time before a new banner starts sliding in.
pub const ENTER_DELAY_MS: f64 = 100.0;
/// Time after creation at which a banner starts sliding out.
pub const DISMISS_AFTER_MS: f64 = 4000.0;
/// Slide-out transition length; the banner is removed afterwards.
pub const EXIT_DURATION_MS: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Error => "fa-exclamation-circle",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#9ECAD6",
            NotificationKind::Error => "#F5CBCB",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            NotificationKind::Success => "#0a0a0f",
            NotificationKind::Error => "#8b0000",
        }
    }
}

/// Where a banner is in its slide-in / hold / slide-out lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Created, still off-screen.
    Entering,
    Visible,
    /// Sliding back off-screen.
    Leaving,
    /// Ready to be detached from the page.
    Removed,
}

/// A toast banner shown in the top-right corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: f64,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: f64) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: now,
        }
    }

    pub fn success(message: impl Into<String>, now: f64) -> Self {
        Self::new(message, NotificationKind::Success, now)
    }

    pub fn error(message: impl Into<String>, now: f64) -> Self {
        Self::new(message, NotificationKind::Error, now)
    }

    pub fn phase(&self, now: f64) -> NotificationPhase {
        let age = now - self.created_at;
        if age < ENTER_DELAY_MS {
            NotificationPhase::Entering
        } else if age < DISMISS_AFTER_MS {
            NotificationPhase::Visible
        } else if age < DISMISS_AFTER_MS + EXIT_DURATION_MS {
            NotificationPhase::Leaving
        } else {
            NotificationPhase::Removed
        }
    }

    /// Horizontal CSS offset in pixels for the current phase.
    pub fn offset_x(&self, now: f64) -> f32 {
        match self.phase(now) {
            NotificationPhase::Visible => 0.0,
            _ => 400.0,
        }
    }
}
