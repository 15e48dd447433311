use crate::ui::notification::Notification;

/// Up, up, down, down, left, right, left, right, B, A.
pub const KONAMI_CODE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];
/// How long the rainbow filter stays on.
pub const EASTER_EGG_DURATION_MS: f64 = 4000.0;
pub const EASTER_EGG_MESSAGE: &str = "🎉 Easter egg activated! You found the secret!";

/// Tracks progress through [`KONAMI_CODE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KonamiDetector {
    progress: usize,
}

impl KonamiDetector {
    /// Feed one key code. Returns `true` when the sequence completes.
    ///
    /// A wrong key drops all progress; it is not retried as a first key.
    pub fn feed(&mut self, key_code: u32) -> bool {
        if KONAMI_CODE.get(self.progress) == Some(&key_code) {
            self.progress += 1;
            if self.progress == KONAMI_CODE.len() {
                self.progress = 0;
                return true;
            }
        } else {
            self.progress = 0;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.progress
    }
}

/// Timed rainbow effect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EasterEgg {
    activated_at: Option<f64>,
}

impl EasterEgg {
    /// Start (or restart) the effect and return its announcement.
    pub fn activate(&mut self, now: f64) -> Notification {
        self.activated_at = Some(now);
        log::debug!("easter egg activated");
        Notification::success(EASTER_EGG_MESSAGE, now)
    }

    pub fn is_active(&self, now: f64) -> bool {
        self.activated_at
            .is_some_and(|t| now - t < EASTER_EGG_DURATION_MS)
    }
}
