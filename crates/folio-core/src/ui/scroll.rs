use crate::math::ease_in_out_quad;

/// Height of the fixed header that scroll targets must clear.
pub const HEADER_OFFSET: f64 = 80.0;
/// Duration of a nav-link scroll.
pub const SCROLL_DURATION_MS: f64 = 1000.0;
/// Scroll depth past which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Page offset that puts an element just below the fixed header.
///
/// `element_top` is the element's viewport-relative top and `page_offset`
/// the current vertical scroll position.
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// One sample of a running scroll animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    /// Whether another frame should be requested.
    pub running: bool,
}

/// Eased scroll from a start offset to a target over a fixed duration.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    start: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl SmoothScroll {
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            distance: target - start,
            duration_ms,
            started_at: None,
        }
    }

    /// Offset at frame time `now`. The first call latches the start time.
    ///
    /// Elapsed time is clamped to the duration so the last sample lands
    /// exactly on the target.
    pub fn sample(&mut self, now: f64) -> ScrollSample {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now - started_at;
        let t = elapsed.clamp(0.0, self.duration_ms.max(0.0));
        ScrollSample {
            offset: ease_in_out_quad(t, self.start, self.distance, self.duration_ms),
            running: elapsed < self.duration_ms,
        }
    }

    pub fn target(&self) -> f64 {
        self.start + self.distance
    }
}

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Hamburger click.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any nav link click closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
