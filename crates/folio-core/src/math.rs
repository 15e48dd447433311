/// First-order low-pass step: move `current` toward `target` by `factor`.
///
/// Evaluated as `current + (target - current) * factor`, so a value already
/// at its target is left bit-for-bit unchanged.
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Penner's quadratic ease-in-out.
///
/// `t` is elapsed time, `b` the start value, `c` the total change and `d`
/// the duration. A non-positive duration jumps straight to `b + c`.
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

/// Wrap a coordinate to the opposite edge once it leaves `[0, extent]`.
///
/// The interval is closed: a value sitting exactly on `0` or `extent` stays
/// where it is.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}
