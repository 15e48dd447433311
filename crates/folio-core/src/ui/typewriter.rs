/// Delay after typing one character.
pub const TYPE_DELAY_MS: u32 = 100;
/// Delay after deleting one character.
pub const DELETE_DELAY_MS: u32 = 50;
/// Pause with the full phrase on screen.
pub const HOLD_DELAY_MS: u32 = 2000;
/// Pause on the empty line before the next phrase.
pub const NEXT_PHRASE_DELAY_MS: u32 = 500;

pub const DEFAULT_PHRASES: [&str; 6] = [
    "Data Scientist",
    "Machine Learning Enthusiast",
    "AI Researcher",
    "Gen AI Developer",
    "Tech Innovator",
    "Enterpreneur",
];

/// Output of one typewriter tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    /// Milliseconds to wait before the next tick.
    pub delay_ms: u32,
}

/// Types each phrase out, holds it, deletes it, then moves to the next.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect())
    }
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    /// Advance by one character and report what to display.
    pub fn tick(&mut self) -> TypeStep {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return TypeStep {
                text: String::new(),
                delay_ms: TYPE_DELAY_MS,
            };
        };
        let len = phrase.chars().count();

        let mut delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.char_index = (self.char_index + 1).min(len);
            TYPE_DELAY_MS
        };
        let text: String = phrase.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            delay_ms = HOLD_DELAY_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = NEXT_PHRASE_DELAY_MS;
        }

        TypeStep { text, delay_ms }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}
