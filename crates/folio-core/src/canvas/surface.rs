use glam::Vec2;

use crate::color::Rgb;

/// Immediate-mode 2D drawing target, e.g. a `CanvasRenderingContext2d`.
pub trait Surface {
    /// Erase the full `width` x `height` area.
    fn clear(&mut self, width: f32, height: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, width: f32);
}
