//! Easy-animator turns declarative shape animation scripts into text summaries, SVG/SMIL
//! documents, or rasterized preview frames.
//!
//! # Pipeline overview
//!
//! 1. **Read**: a whitespace-token script drives a [`TweenModelBuilder`].
//! 2. **Validate**: every shape and transformation is checked as it enters the [`Animation`]
//!    (lifetimes, references, same-kind overlap).
//! 3. **Emit**: [`Animation::generate`] dumps text or SVG at a playback speed;
//!    [`Animation::generate_frame`] tweens every active shape at a tick.
//! 4. **Preview** (optional): [`PreviewDriver`] paces frames and [`write_frames_png`] rasterizes
//!    them with `resvg`.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub mod config;
pub mod emit;
pub(crate) mod eval;
pub mod model;
pub mod preview;
pub mod script;

pub use crate::foundation::core::{Point, Speed, Tick, TickRange};
pub use crate::foundation::error::{AnimatorError, AnimatorResult};

pub use crate::animation::tween::{Lerp, tween};
pub use crate::config::{OutputTarget, RunConfig, ViewKind, run};
pub use crate::emit::OutputKind;
pub use crate::eval::frame::{Frame, Snapshot};
pub use crate::model::animation::Animation;
pub use crate::model::color::Color;
pub use crate::model::shape::{Shape, ShapeKind};
pub use crate::model::transform::{TransformKind, TransformOp, Transformation};
pub use crate::preview::driver::PreviewDriver;
pub use crate::preview::raster::{FrameRgba, render_frame_rgba, write_frames_png};
pub use crate::script::builder::{AnimationBuilder, TweenModelBuilder};
pub use crate::script::reader::{read_file, read_str};
