use std::fmt;

use crate::{
    emit::format::fmt1,
    foundation::error::{AnimatorError, AnimatorResult},
};

/// RGB color with each channel stored as a percentage in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
}

impl Color {
    pub fn new(red: f64, green: f64, blue: f64) -> AnimatorResult<Self> {
        check_channel("red", red)?;
        check_channel("green", green)?;
        check_channel("blue", blue)?;
        Ok(Self { red, green, blue })
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// 8-bit straight RGB, rounded to nearest.
    pub fn to_rgb8(&self) -> [u8; 3] {
        fn byte(pct: f64) -> u8 {
            (pct / 100.0 * 255.0).round().clamp(0.0, 255.0) as u8
        }
        [byte(self.red), byte(self.green), byte(self.blue)]
    }

    /// `rgb(R%,G%,B%)` as used by SVG `fill` attributes.
    pub fn to_svg_rgb(&self) -> String {
        format!(
            "rgb({}%,{}%,{}%)",
            fmt1(self.red),
            fmt1(self.green),
            fmt1(self.blue)
        )
    }

    // Interpolated channels can drift past the bounds by an ulp.
    pub(crate) fn from_channels_clamped(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: red.clamp(0.0, 100.0),
            green: green.clamp(0.0, 100.0),
            blue: blue.clamp(0.0, 100.0),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})",
            fmt1(self.red),
            fmt1(self.green),
            fmt1(self.blue)
        )
    }
}

fn check_channel(name: &str, v: f64) -> AnimatorResult<()> {
    if !v.is_finite() || !(0.0..=100.0).contains(&v) {
        return Err(AnimatorError::validation(format!(
            "{name} value must be between 0 and 100 (got {v})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/model/color.rs"]
mod tests;
