use folio_core::ui::scroll::{navbar_scrolled, scroll_target, SCROLL_DURATION_MS};
use folio_core::ui::{
    ContactForm, EasterEgg, FieldDecoration, KonamiDetector, MenuState, Notification,
    NotificationPhase, RevealKind, SmoothScroll, Submission, Typewriter,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct TypewriterText {
    inner: Typewriter,
    delay_ms: u32,
}

#[wasm_bindgen]
impl TypewriterText {
    /// `phrases` replaces the built-in list when non-empty.
    #[wasm_bindgen(constructor)]
    pub fn new(phrases: Vec<String>) -> TypewriterText {
        let inner = if phrases.is_empty() {
            Typewriter::default()
        } else {
            Typewriter::new(phrases)
        };
        TypewriterText { inner, delay_ms: 0 }
    }

    /// Text to display now; schedule the next call after `delay_ms`.
    pub fn tick(&mut self) -> String {
        let step = self.inner.tick();
        self.delay_ms = step.delay_ms;
        step.text
    }

    #[wasm_bindgen(getter)]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

/// Eased scroll for one nav-link click. Call `sample` from each animation
/// frame until `running` turns false.
#[wasm_bindgen]
pub struct NavScroll {
    inner: SmoothScroll,
    running: bool,
}

#[wasm_bindgen]
impl NavScroll {
    /// `element_top` is the target's viewport-relative top, `page_offset`
    /// the current scroll position.
    #[wasm_bindgen(constructor)]
    pub fn new(page_offset: f64, element_top: f64) -> NavScroll {
        let target = scroll_target(element_top, page_offset);
        NavScroll {
            inner: SmoothScroll::new(page_offset, target, SCROLL_DURATION_MS),
            running: true,
        }
    }

    /// Scroll offset for the frame at `now`.
    pub fn sample(&mut self, now: f64) -> f64 {
        let sample = self.inner.sample(now);
        self.running = sample.running;
        sample.offset
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running
    }

    #[wasm_bindgen(getter)]
    pub fn target(&self) -> f64 {
        self.inner.target()
    }
}

#[wasm_bindgen]
pub fn is_navbar_scrolled(scroll_y: f64) -> bool {
    navbar_scrolled(scroll_y)
}

#[wasm_bindgen]
pub struct MobileMenu {
    state: MenuState,
}

#[wasm_bindgen]
impl MobileMenu {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MobileMenu {
        MobileMenu {
            state: MenuState::default(),
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.state.toggle()
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    #[wasm_bindgen(getter)]
    pub fn open(&self) -> bool {
        self.state.is_open()
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}

/// Floating-label styling for one contact form group.
#[wasm_bindgen]
pub struct FieldStyle {
    inner: FieldDecoration,
}

#[wasm_bindgen]
impl FieldStyle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldStyle {
        FieldStyle {
            inner: FieldDecoration::default(),
        }
    }

    pub fn focus(&mut self) {
        self.inner.focus();
    }

    pub fn blur(&mut self, value: &str) {
        self.inner.blur(value);
    }

    pub fn input(&mut self, value: &str) {
        self.inner.input(value);
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Space-separated classes for the form group element.
    pub fn class_list(&self) -> String {
        self.inner.classes().join(" ")
    }
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// CSS `animation-delay` for a revealed element, if its role staggers.
#[wasm_bindgen]
pub fn reveal_delay(class_list: &str, index: usize) -> Option<String> {
    RevealKind::from_class_list(class_list)?.css_delay(index)
}

#[wasm_bindgen]
pub fn reveal_selector() -> String {
    RevealKind::selector()
}

/// A banner for the page to render. Poll `phase` to drive its transitions.
#[wasm_bindgen]
pub struct Toast {
    inner: Notification,
}

#[wasm_bindgen]
impl Toast {
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.inner.message.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn class_name(&self) -> String {
        self.inner.kind.class_name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn icon(&self) -> String {
        self.inner.kind.icon().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn background(&self) -> String {
        self.inner.kind.background().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn foreground(&self) -> String {
        self.inner.kind.foreground().to_string()
    }

    /// 0 entering, 1 visible, 2 leaving, 3 removed.
    pub fn phase(&self, now: f64) -> u8 {
        match self.inner.phase(now) {
            NotificationPhase::Entering => 0,
            NotificationPhase::Visible => 1,
            NotificationPhase::Leaving => 2,
            NotificationPhase::Removed => 3,
        }
    }

    pub fn offset_x(&self, now: f64) -> f32 {
        self.inner.offset_x(now)
    }
}

impl From<Notification> for Toast {
    fn from(inner: Notification) -> Self {
        Toast { inner }
    }
}

#[wasm_bindgen]
pub struct ContactSender {
    submission: Submission,
}

#[wasm_bindgen]
impl ContactSender {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ContactSender {
        ContactSender {
            submission: Submission::default(),
        }
    }

    /// Validate and start sending. Returns an error toast on failure.
    pub fn submit(
        &mut self,
        name: String,
        email: String,
        subject: String,
        message: String,
        now: f64,
    ) -> Option<Toast> {
        let form = ContactForm::new(name, email, subject, message);
        match self.submission.begin(&form, now) {
            Ok(()) => None,
            Err(err) => {
                log::debug!("contact form rejected: {}", err);
                Some(err.notification(now).into())
            }
        }
    }

    /// The success toast once sending completes; the page then resets the form.
    pub fn poll(&mut self, now: f64) -> Option<Toast> {
        self.submission.poll(now).map(Toast::from)
    }

    #[wasm_bindgen(getter)]
    pub fn sending(&self) -> bool {
        self.submission.is_sending()
    }
}

impl Default for ContactSender {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub struct KonamiListener {
    detector: KonamiDetector,
    egg: EasterEgg,
}

#[wasm_bindgen]
impl KonamiListener {
    #[wasm_bindgen(constructor)]
    pub fn new() -> KonamiListener {
        KonamiListener {
            detector: KonamiDetector::default(),
            egg: EasterEgg::default(),
        }
    }

    /// `keydown` handler. Returns the announcement when the code completes.
    pub fn key(&mut self, key_code: u32, now: f64) -> Option<Toast> {
        if self.detector.feed(key_code) {
            Some(self.egg.activate(now).into())
        } else {
            None
        }
    }

    /// Whether the rainbow filter should currently be applied.
    pub fn effect_active(&self, now: f64) -> bool {
        self.egg.is_active(now)
    }
}

impl Default for KonamiListener {
    fn default() -> Self {
        Self::new()
    }
}
