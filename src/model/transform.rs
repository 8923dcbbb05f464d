use crate::{
    foundation::core::{Point, Tick, TickRange},
    foundation::error::{AnimatorError, AnimatorResult},
    model::{
        color::Color,
        shape::{ShapeKind, canonical_name},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    Move,
    Scale,
    Recolor,
}

/// Endpoints of a transformation, by kind.
///
/// `Move` and `Scale` carry the target's [`ShapeKind`] because the SVG attribute names and the
/// text wording depend on it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformOp {
    Move {
        from: Point,
        to: Point,
        shape: ShapeKind,
    },
    Scale {
        from_x: f64,
        from_y: f64,
        to_x: f64,
        to_y: f64,
        shape: ShapeKind,
    },
    Recolor {
        from: Color,
        to: Color,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Transformation {
    shape_name: String,
    range: TickRange, // [start, end]; sticky after end
    op: TransformOp,
}

impl Transformation {
    pub fn new(shape_name: &str, start: Tick, end: Tick, op: TransformOp) -> AnimatorResult<Self> {
        let shape_name = canonical_name(shape_name)?;
        let range = TickRange::new(start, end).map_err(|_| {
            AnimatorError::validation(format!(
                "transformation on '{shape_name}' must satisfy 0 <= start <= end (got {start}..{end})"
            ))
        })?;
        validate_op(&shape_name, &op)?;
        Ok(Self {
            shape_name,
            range,
            op,
        })
    }

    pub fn moving(
        shape_name: &str,
        shape: ShapeKind,
        from: Point,
        to: Point,
        start: Tick,
        end: Tick,
    ) -> AnimatorResult<Self> {
        Self::new(shape_name, start, end, TransformOp::Move { from, to, shape })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn scaling(
        shape_name: &str,
        shape: ShapeKind,
        from_x: f64,
        from_y: f64,
        to_x: f64,
        to_y: f64,
        start: Tick,
        end: Tick,
    ) -> AnimatorResult<Self> {
        Self::new(
            shape_name,
            start,
            end,
            TransformOp::Scale {
                from_x,
                from_y,
                to_x,
                to_y,
                shape,
            },
        )
    }

    pub fn recoloring(
        shape_name: &str,
        from: Color,
        to: Color,
        start: Tick,
        end: Tick,
    ) -> AnimatorResult<Self> {
        Self::new(shape_name, start, end, TransformOp::Recolor { from, to })
    }

    pub fn kind(&self) -> TransformKind {
        match self.op {
            TransformOp::Move { .. } => TransformKind::Move,
            TransformOp::Scale { .. } => TransformKind::Scale,
            TransformOp::Recolor { .. } => TransformKind::Recolor,
        }
    }

    pub fn shape_name(&self) -> &str {
        &self.shape_name
    }

    pub fn start(&self) -> Tick {
        self.range.start
    }

    pub fn end(&self) -> Tick {
        self.range.end
    }

    pub fn range(&self) -> TickRange {
        self.range
    }

    pub fn op(&self) -> &TransformOp {
        &self.op
    }

    /// Started at or before `tick`. Stays true forever after (transformations are sticky).
    pub fn is_active(&self, tick: Tick) -> bool {
        self.range.start <= tick
    }

    pub fn has_finished(&self, tick: Tick) -> bool {
        self.range.end <= tick
    }

    /// Largest x coordinate a move endpoint touches; 0 for kinds that do not move the anchor.
    pub fn max_x_coord(&self) -> f64 {
        match self.op {
            TransformOp::Move { from, to, .. } => from.x.max(to.x),
            TransformOp::Scale { .. } | TransformOp::Recolor { .. } => 0.0,
        }
    }

    /// Largest y coordinate a move endpoint touches; 0 for kinds that do not move the anchor.
    pub fn max_y_coord(&self) -> f64 {
        match self.op {
            TransformOp::Move { from, to, .. } => from.y.max(to.y),
            TransformOp::Scale { .. } | TransformOp::Recolor { .. } => 0.0,
        }
    }
}

fn validate_op(shape_name: &str, op: &TransformOp) -> AnimatorResult<()> {
    match *op {
        TransformOp::Move { from, to, .. } => {
            let all = [from.x, from.y, to.x, to.y];
            if all.iter().any(|v| !v.is_finite()) {
                return Err(AnimatorError::validation(format!(
                    "move on '{shape_name}' has a non-finite endpoint"
                )));
            }
        }
        TransformOp::Scale {
            from_x,
            from_y,
            to_x,
            to_y,
            ..
        } => {
            if !(from_x.is_finite() && from_x > 0.0 && from_y.is_finite() && from_y > 0.0) {
                return Err(AnimatorError::validation(format!(
                    "scale on '{shape_name}' must start from sizes > 0"
                )));
            }
            if !(to_x.is_finite() && to_x >= 0.0 && to_y.is_finite() && to_y >= 0.0) {
                return Err(AnimatorError::validation(format!(
                    "scale on '{shape_name}' must end at non-negative sizes"
                )));
            }
        }
        TransformOp::Recolor { .. } => {}
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/model/transform.rs"]
mod tests;
