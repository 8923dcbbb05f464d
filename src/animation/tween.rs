use crate::{
    foundation::core::{Point, Tick},
    model::color::Color,
};

/// Linear interpolation between `v0` at tick `t0` and `v1` at tick `t1`, evaluated at `t`.
///
/// Weighted form `v0*(t1-t)/(t1-t0) + v1*(t-t0)/(t1-t0)`. No clamping: values outside
/// `[t0, t1]` extrapolate. Callers guarantee `t0 < t1`.
pub fn tween(v0: f64, v1: f64, t0: f64, t1: f64, t: f64) -> f64 {
    let span = t1 - t0;
    v0 * ((t1 - t) / span) + v1 * ((t - t0) / span)
}

/// Component-wise tweening over tick intervals.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t0: Tick, t1: Tick, t: Tick) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t0: Tick, t1: Tick, t: Tick) -> Self {
        tween(*a, *b, t0 as f64, t1 as f64, t as f64)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t0: Tick, t1: Tick, t: Tick) -> Self {
        Point::new(
            f64::lerp(&a.x, &b.x, t0, t1, t),
            f64::lerp(&a.y, &b.y, t0, t1, t),
        )
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t0: Tick, t1: Tick, t: Tick) -> Self {
        Color::from_channels_clamped(
            f64::lerp(&a.red(), &b.red(), t0, t1, t),
            f64::lerp(&a.green(), &b.green(), t0, t1, t),
            f64::lerp(&a.blue(), &b.blue(), t0, t1, t),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
