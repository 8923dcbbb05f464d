use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::{
    emit::OutputKind,
    eval::frame::Frame,
    foundation::core::{Speed, Tick},
    foundation::error::AnimatorResult,
    model::animation::Animation,
};

/// Ticks per second added or removed by one speed step.
pub const SPEED_STEP: u32 = 5;

/// Playback state over a finished animation.
///
/// The driver owns no clock: callers either pull frames with [`step`](Self::step) or feed
/// wall-clock time to [`advance`](Self::advance), which paces steps by
/// [`tick_interval`](Self::tick_interval).
#[derive(Debug)]
pub struct PreviewDriver<'a> {
    anim: &'a Animation,
    tick: Tick,
    default_speed: Speed,
    speed: Speed,
    playing: bool,
    pending: Duration,
}

impl<'a> PreviewDriver<'a> {
    pub fn new(anim: &'a Animation, speed: Speed) -> Self {
        Self {
            anim,
            tick: 0,
            default_speed: speed,
            speed,
            playing: false,
            pending: Duration::ZERO,
        }
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= self.anim.last_tick()
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.pending = Duration::ZERO;
    }

    /// Resume playback. Once the end has been reached this rewinds to tick 0 and restores the
    /// starting speed first.
    pub fn restart(&mut self) {
        if self.is_finished() {
            tracing::debug!(speed = self.default_speed.ticks_per_second(), "rewinding preview");
            self.tick = 0;
            self.speed = self.default_speed;
        }
        self.play();
    }

    pub fn speed_up(&mut self) {
        self.speed = self.speed.faster(SPEED_STEP);
    }

    pub fn speed_down(&mut self) {
        self.speed = self.speed.slower(SPEED_STEP);
    }

    pub fn tick_interval(&self) -> Duration {
        self.speed.tick_interval()
    }

    /// Frame for the current tick, then move one tick forward. `None` (and playback stops) once
    /// `last_tick` is reached.
    pub fn step(&mut self) -> AnimatorResult<Option<Frame>> {
        if self.is_finished() {
            self.playing = false;
            return Ok(None);
        }
        let frame = self.anim.generate_frame(self.tick)?;
        self.tick += 1;
        Ok(Some(frame))
    }

    /// Account for `elapsed` wall-clock time and return the frames that became due.
    pub fn advance(&mut self, elapsed: Duration) -> AnimatorResult<Vec<Frame>> {
        let mut due = Vec::new();
        if !self.playing {
            return Ok(due);
        }
        self.pending += elapsed;
        loop {
            let interval = self.tick_interval();
            if self.pending < interval {
                break;
            }
            self.pending -= interval;
            match self.step()? {
                Some(frame) => due.push(frame),
                None => {
                    self.pending = Duration::ZERO;
                    break;
                }
            }
        }
        Ok(due)
    }

    /// SVG document at the current playback speed.
    pub fn svg(&self) -> String {
        self.anim.generate(OutputKind::Svg, self.speed)
    }

    pub fn save_svg(&self, path: &Path) -> AnimatorResult<()> {
        std::fs::write(path, self.svg())
            .with_context(|| format!("write svg '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/driver.rs"]
mod tests;
