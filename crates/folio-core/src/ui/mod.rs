//! Timer- and event-driven page behaviour, kept free of DOM types so the
//! binding layer only forwards events and applies the results.
pub mod form;
pub mod konami;
pub mod notification;
pub mod reveal;
pub mod scroll;
pub mod typewriter;

pub use form::{ContactForm, Field, FieldDecoration, FormError, Submission};
pub use konami::{EasterEgg, KonamiDetector};
pub use notification::{Notification, NotificationKind, NotificationPhase};
pub use reveal::RevealKind;
pub use scroll::{MenuState, SmoothScroll};
pub use typewriter::{TypeStep, Typewriter};
