use crate::foundation::error::{AnimatorError, AnimatorResult};

pub use kurbo::Point;

/// Integer animation time unit. Signed so that negative requests can be rejected explicitly.
pub type Tick = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TickRange {
    pub start: Tick,
    pub end: Tick, // exclusive
}

impl TickRange {
    pub fn new(start: Tick, end: Tick) -> AnimatorResult<Self> {
        if start < 0 {
            return Err(AnimatorError::validation(format!(
                "tick range cannot start before t=0 (got {start})"
            )));
        }
        if start > end {
            return Err(AnimatorError::validation(format!(
                "tick range end must be >= start (got {start}..{end})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(self, t: Tick) -> bool {
        self.start <= t && t < self.end
    }

    /// True when `other` lies entirely within `self`, endpoints included.
    pub fn encloses(self, other: TickRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Playback rate in ticks per second. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Speed(u32);

impl Speed {
    pub fn new(ticks_per_second: i64) -> AnimatorResult<Self> {
        if ticks_per_second <= 0 {
            return Err(AnimatorError::configuration(format!(
                "speed must be greater than 0 (got {ticks_per_second})"
            )));
        }
        let tps = u32::try_from(ticks_per_second).map_err(|_| {
            AnimatorError::configuration(format!("speed {ticks_per_second} is too large"))
        })?;
        Ok(Self(tps))
    }

    pub fn ticks_per_second(self) -> u32 {
        self.0
    }

    pub fn ticks_to_secs(self, ticks: Tick) -> f64 {
        ticks as f64 / f64::from(self.0)
    }

    pub fn ticks_to_millis(self, ticks: Tick) -> f64 {
        self.ticks_to_secs(ticks) * 1000.0
    }

    pub fn faster(self, by: u32) -> Self {
        Self(self.0.saturating_add(by))
    }

    /// Never drops below one tick per second.
    pub fn slower(self, by: u32) -> Self {
        Self(self.0.saturating_sub(by).max(1))
    }

    /// Wall-clock time between ticks, truncated to whole milliseconds.
    pub fn tick_interval(self) -> std::time::Duration {
        std::time::Duration::from_millis(u64::from(1000 / self.0))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
