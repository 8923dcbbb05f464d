//! Run configuration and output dispatch for the `easy-animator` binary.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    emit::OutputKind,
    eval::frame::Frame,
    foundation::core::{Speed, Tick},
    foundation::error::{AnimatorError, AnimatorResult},
    model::animation::Animation,
    preview::{driver::PreviewDriver, raster},
    script::{builder::AnimationBuilder, reader},
};

/// Destination keyword that means standard output.
pub const STDOUT_KEYWORD: &str = "out";

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Text,
    Svg,
    Visual,
}

impl ViewKind {
    /// Emitter for the textual views; `None` for the visual one.
    pub fn output_kind(self) -> Option<OutputKind> {
        match self {
            Self::Text => Some(OutputKind::Text),
            Self::Svg => Some(OutputKind::Svg),
            Self::Visual => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
    Window,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct RunConfig {
    pub input: PathBuf,
    pub view: ViewKind,
    pub output: OutputTarget,
    pub speed: Speed,
    /// Visual view only: write every frame as a PNG here.
    pub frames_dir: Option<PathBuf>,
    /// Visual view only: print just this tick.
    pub tick: Option<Tick>,
}

impl RunConfig {
    /// Validate raw options. `out` of `None` or `"out"` means stdout; the visual view always
    /// targets the preview window and ignores `out`.
    pub fn new(
        input: impl Into<PathBuf>,
        view: ViewKind,
        out: Option<&str>,
        speed: i64,
    ) -> AnimatorResult<Self> {
        let input = input.into();
        if input.as_os_str().is_empty() {
            return Err(AnimatorError::configuration("an input file is required"));
        }
        let speed = Speed::new(speed)?;
        let output = match (view, out) {
            (ViewKind::Visual, _) => OutputTarget::Window,
            (_, None) => OutputTarget::Stdout,
            (_, Some(o)) if o == STDOUT_KEYWORD => OutputTarget::Stdout,
            (_, Some(o)) if o.trim().is_empty() => {
                return Err(AnimatorError::configuration("output path cannot be empty"));
            }
            (_, Some(o)) => OutputTarget::File(PathBuf::from(o)),
        };
        Ok(Self {
            input,
            view,
            output,
            speed,
            frames_dir: None,
            tick: None,
        })
    }

    pub fn with_frames_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.frames_dir = dir;
        self
    }

    pub fn with_tick(mut self, tick: Option<Tick>) -> Self {
        self.tick = tick;
        self
    }
}

fn write_frame(out: &mut dyn Write, frame: &Frame) -> std::io::Result<()> {
    writeln!(out, "t={}", frame.tick)?;
    for s in &frame.shapes {
        writeln!(out, "{s}")?;
    }
    Ok(())
}

fn write_target(dest: Option<&Path>, text: &str, stdout: &mut dyn Write) -> AnimatorResult<()> {
    match dest {
        Some(path) => write_file(path, text),
        None => {
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn write_file(path: &Path, text: &str) -> AnimatorResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

fn preview(cfg: &RunConfig, anim: &Animation, stdout: &mut dyn Write) -> AnimatorResult<()> {
    if let Some(dir) = &cfg.frames_dir {
        let n = raster::write_frames_png(anim, dir)?;
        tracing::info!(frames = n, dir = %dir.display(), "preview frames written");
        return Ok(());
    }
    if let Some(tick) = cfg.tick {
        write_frame(stdout, &anim.generate_frame(tick)?)?;
        return Ok(());
    }
    let mut driver = PreviewDriver::new(anim, cfg.speed);
    driver.play();
    while let Some(frame) = driver.step()? {
        write_frame(stdout, &frame)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Read the script named by `cfg` and produce the requested view.
///
/// `cfg.output` picks the path: the window runs the preview, stdout and files get the text or
/// SVG emitter output.
#[tracing::instrument(skip(stdout), fields(input = %cfg.input.display(), view = ?cfg.view))]
pub fn run(cfg: &RunConfig, stdout: &mut dyn Write) -> AnimatorResult<()> {
    let anim = reader::read_file(&cfg.input, AnimationBuilder::new())?;
    tracing::debug!(
        shapes = anim.shapes().len(),
        last_tick = anim.last_tick(),
        "animation loaded"
    );
    let dest = match &cfg.output {
        OutputTarget::Window => return preview(cfg, &anim, stdout),
        OutputTarget::Stdout => None,
        OutputTarget::File(path) => Some(path.as_path()),
    };
    let kind = cfg.view.output_kind().ok_or_else(|| {
        AnimatorError::configuration("the visual view can only target the preview window")
    })?;
    write_target(dest, &anim.generate(kind, cfg.speed), stdout)
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
