use std::collections::HashMap;

use crate::{
    emit::{OutputKind, svg, text},
    eval::frame::{Frame, generate_frame},
    foundation::core::{Speed, Tick},
    foundation::error::{AnimatorError, AnimatorResult},
    model::{shape::Shape, transform::Transformation},
};

/// Validated set of shapes and the transformations applied to them.
///
/// Shapes keep declaration order, which is also paint order. Transformations are kept sorted by
/// `start` (stable, so equal starts keep insertion order) and indexed by shape name. Both lists
/// are insert-only; once handed to emitters or the frame generator the model is only read.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Animation {
    shapes: Vec<Shape>,
    transformations: Vec<Transformation>,
    #[serde(skip)]
    by_shape: HashMap<String, Vec<usize>>,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `shape` unless one with the same canonical name already exists.
    ///
    /// A repeated name is a no-op.
    pub fn add_shape(&mut self, shape: Shape) {
        if self.shape(shape.name()).is_some() {
            tracing::debug!(name = shape.name(), "ignoring duplicate shape declaration");
            return;
        }
        self.shapes.push(shape);
    }

    /// Case-insensitive lookup.
    pub fn shape(&self, name: &str) -> Option<&Shape> {
        let wanted = name.trim().to_uppercase();
        self.shapes.iter().find(|s| s.name() == wanted)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// All transformations, sorted by start tick.
    pub fn transformations(&self) -> &[Transformation] {
        &self.transformations
    }

    /// Transformations targeting `name`, sorted by start tick.
    pub fn transformations_for<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = &'a Transformation> + 'a {
        let wanted = name.trim().to_uppercase();
        self.by_shape
            .get(&wanted)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| &self.transformations[idx])
    }

    /// Validate and insert a transformation. On error the model is left untouched.
    pub fn add_transformation(&mut self, t: Transformation) -> AnimatorResult<()> {
        let shape = self.shape(t.shape_name()).ok_or_else(|| {
            AnimatorError::reference(format!(
                "animation does not contain a shape named '{}'",
                t.shape_name()
            ))
        })?;

        if !shape.lifetime().encloses(t.range()) {
            let msg = if t.start() < shape.appear() {
                format!(
                    "transformation on '{}' cannot begin (t={}) before the shape appears (t={})",
                    shape.name(),
                    t.start(),
                    shape.appear()
                )
            } else {
                format!(
                    "transformation on '{}' cannot end (t={}) after the shape disappears (t={})",
                    shape.name(),
                    t.end(),
                    shape.disappear()
                )
            };
            return Err(AnimatorError::timing(msg));
        }

        if let Some(existing) = self
            .transformations_for(t.shape_name())
            .find(|e| e.kind() == t.kind() && t.start() <= e.end())
        {
            return Err(AnimatorError::conflict(format!(
                "{:?} on '{}' starting at t={} overlaps an existing one ending at t={}",
                t.kind(),
                t.shape_name(),
                t.start(),
                existing.end()
            )));
        }

        // After every equal start, so ties keep insertion order.
        let pos = self
            .transformations
            .partition_point(|e| e.start() <= t.start());
        for indices in self.by_shape.values_mut() {
            for idx in indices.iter_mut().filter(|idx| **idx >= pos) {
                *idx += 1;
            }
        }
        match self.by_shape.get_mut(t.shape_name()) {
            Some(indices) => {
                let at = indices.partition_point(|&idx| idx < pos);
                indices.insert(at, pos);
            }
            None => {
                self.by_shape.insert(t.shape_name().to_string(), vec![pos]);
            }
        }
        self.transformations.insert(pos, t);
        Ok(())
    }

    /// Latest `disappear` across all shapes; 0 when empty.
    pub fn last_tick(&self) -> Tick {
        self.shapes.iter().map(Shape::disappear).max().unwrap_or(0)
    }

    /// Canvas width: the largest x any shape reaches.
    pub fn max_x(&self) -> f64 {
        self.shapes
            .iter()
            .map(|s| s.bounding_max_x(self.transformations_for(s.name())))
            .fold(0.0, f64::max)
    }

    /// Canvas height: the largest y any shape reaches.
    pub fn max_y(&self) -> f64 {
        self.shapes
            .iter()
            .map(|s| s.bounding_max_y(self.transformations_for(s.name())))
            .fold(0.0, f64::max)
    }

    /// Render the whole animation as text or SVG at `speed` ticks per second.
    pub fn generate(&self, kind: OutputKind, speed: Speed) -> String {
        match kind {
            OutputKind::Text => text::render(self, speed),
            OutputKind::Svg => svg::render(self, speed),
        }
    }

    /// Snapshots of every active shape at `tick`. Valid ticks are `0..last_tick()`.
    pub fn generate_frame(&self, tick: Tick) -> AnimatorResult<Frame> {
        generate_frame(self, tick)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/animation.rs"]
mod tests;
