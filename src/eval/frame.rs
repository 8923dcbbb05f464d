use std::fmt;

use crate::{
    animation::tween::Lerp,
    emit::format::fmt1,
    foundation::core::{Point, Tick},
    foundation::error::{AnimatorError, AnimatorResult},
    model::{
        animation::Animation,
        color::Color,
        shape::{Shape, ShapeKind},
        transform::{TransformOp, Transformation},
    },
};

/// Rendered state of one shape at one tick.
///
/// `x`/`y` are integer pixel coordinates (anchor truncated toward zero); sizes and color stay
/// fractional. `kind` tells the preview whether `(x, y)` is a center or a min corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Snapshot {
    pub kind: ShapeKind,
    pub x: i64,
    pub y: i64,
    pub size_x: f64,
    pub size_y: f64,
    pub color: Color,
}

impl Snapshot {
    fn seed(shape: &Shape) -> Self {
        let anchor = shape.anchor();
        Self {
            kind: shape.kind(),
            x: anchor.x.trunc() as i64,
            y: anchor.y.trunc() as i64,
            size_x: shape.size_x(),
            size_y: shape.size_y(),
            color: shape.color(),
        }
    }

    fn set_position(&mut self, p: Point) {
        self.x = p.x.trunc() as i64;
        self.y = p.y.trunc() as i64;
    }

    /// Fold one transformation into this snapshot.
    ///
    /// Before `start` nothing changes; on `[start, end)` the controlled fields are tweened; from
    /// `end` on they hold the end value.
    pub fn apply(mut self, t: &Transformation, tick: Tick) -> Self {
        if !t.is_active(tick) {
            return self;
        }
        let finished = t.has_finished(tick);
        let (t0, t1) = (t.start(), t.end());
        match *t.op() {
            TransformOp::Move { from, to, .. } => {
                let p = if finished {
                    to
                } else {
                    <Point as Lerp>::lerp(&from, &to, t0, t1, tick)
                };
                self.set_position(p);
            }
            TransformOp::Scale {
                from_x,
                from_y,
                to_x,
                to_y,
                ..
            } => {
                if finished {
                    self.size_x = to_x;
                    self.size_y = to_y;
                } else {
                    self.size_x = f64::lerp(&from_x, &to_x, t0, t1, tick);
                    self.size_y = f64::lerp(&from_y, &to_y, t0, t1, tick);
                }
            }
            TransformOp::Recolor { from, to } => {
                self.color = if finished {
                    to
                } else {
                    Color::lerp(&from, &to, t0, t1, tick)
                };
            }
        }
        self
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shape {},{}, w {}, h {}, color {}",
            self.x,
            self.y,
            fmt1(self.size_x),
            fmt1(self.size_y),
            self.color
        )
    }
}

/// Everything visible at one tick, in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    pub tick: Tick,
    pub shapes: Vec<Snapshot>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[tracing::instrument(skip(anim))]
pub fn generate_frame(anim: &Animation, tick: Tick) -> AnimatorResult<Frame> {
    if tick < 0 {
        return Err(AnimatorError::out_of_range(format!(
            "tick cannot be less than zero (got {tick})"
        )));
    }
    let last = anim.last_tick();
    if tick >= last {
        return Err(AnimatorError::out_of_range(format!(
            "tick {tick} is at or past the last tick {last}"
        )));
    }

    let shapes = anim
        .shapes()
        .iter()
        .filter(|shape| shape.is_active(tick))
        .map(|shape| {
            anim.transformations_for(shape.name())
                .fold(Snapshot::seed(shape), |snap, t| snap.apply(t, tick))
        })
        .collect();

    Ok(Frame { tick, shapes })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
