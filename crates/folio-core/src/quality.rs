use crate::scene::SceneUpdater;

/// Frame-rate guard for the 3D backdrop.
///
/// Counts frames over one-second windows. When a window closes below
/// `min_fps` and the point cloud is still larger than `min_points`, the
/// cloud is cut to `reduction` of its size. Cuts are permanent; the guard
/// never grows the cloud back.
pub struct FrameRateGuard {
    /// Length of a measurement window in milliseconds.
    pub window_ms: f64,
    /// Frame rate below which the cloud is reduced.
    pub min_fps: u32,
    /// The cloud is never reduced once it is at or below this many points.
    pub min_points: usize,
    /// Fraction of points kept by each reduction.
    pub reduction: f32,
    /// Milliseconds after creation before the first window opens.
    pub start_delay_ms: f64,
    created_at: f64,
    window_start: Option<f64>,
    frames: u32,
    last_fps: Option<u32>,
}

impl FrameRateGuard {
    /// Start the guard at `now`. Every later `record`/`observe` call must
    /// pass a timestamp from the same clock.
    pub fn new(now: f64) -> Self {
        Self {
            window_ms: 1000.0,
            min_fps: 30,
            min_points: 100,
            reduction: 0.7,
            start_delay_ms: 5000.0,
            created_at: now,
            window_start: None,
            frames: 0,
            last_fps: None,
        }
    }

    /// Record one rendered frame at `now`.
    ///
    /// Returns the rounded frame rate when a window closes.
    pub fn record(&mut self, now: f64) -> Option<u32> {
        if now - self.created_at < self.start_delay_ms {
            return None;
        }
        let start = *self.window_start.get_or_insert(now);

        self.frames += 1;
        let elapsed = now - start;
        if elapsed < self.window_ms || elapsed <= 0.0 {
            return None;
        }

        let fps = ((self.frames as f64 * 1000.0) / elapsed).round() as u32;
        self.frames = 0;
        self.window_start = Some(now);
        self.last_fps = Some(fps);
        Some(fps)
    }

    /// Point count to keep given a measured frame rate, or `None` to keep all.
    pub fn target_points(&self, fps: u32, points: usize) -> Option<usize> {
        if fps < self.min_fps && points > self.min_points {
            Some((points as f32 * self.reduction).floor() as usize)
        } else {
            None
        }
    }

    /// Record a frame and shrink the scene's point cloud if it is too slow.
    ///
    /// Returns `true` when the cloud was reduced.
    pub fn observe(&mut self, now: f64, scene: &mut SceneUpdater) -> bool {
        let Some(fps) = self.record(now) else {
            return false;
        };
        match self.target_points(fps, scene.points().len()) {
            Some(keep) => {
                log::debug!("frame rate {} below {}, keeping {} points", fps, self.min_fps, keep);
                scene.truncate_points(keep);
                true
            }
            None => false,
        }
    }

    /// Rate reported by the most recently closed window.
    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }
}
