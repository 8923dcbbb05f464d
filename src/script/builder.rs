//! Declarative construction of an [`Animation`], one call per script record.

use crate::{
    foundation::core::{Point, Tick},
    foundation::error::AnimatorResult,
    model::{
        animation::Animation,
        color::Color,
        shape::{Shape, ShapeKind},
        transform::Transformation,
    },
};

/// Contract a script reader drives.
///
/// Colors arrive as fractions in `[0, 1]`; implementations own the conversion to the model's
/// color space.
#[allow(clippy::too_many_arguments)]
pub trait TweenModelBuilder {
    type Output;

    fn build(self) -> Self::Output;

    fn add_rectangle(
        &mut self,
        name: &str,
        min_x: f64,
        min_y: f64,
        width: f64,
        height: f64,
        red: f64,
        green: f64,
        blue: f64,
        appear: Tick,
        disappear: Tick,
    ) -> AnimatorResult<&mut Self>;

    /// Equal radii produce a circle.
    fn add_oval(
        &mut self,
        name: &str,
        center_x: f64,
        center_y: f64,
        x_radius: f64,
        y_radius: f64,
        red: f64,
        green: f64,
        blue: f64,
        appear: Tick,
        disappear: Tick,
    ) -> AnimatorResult<&mut Self>;

    fn add_move(
        &mut self,
        name: &str,
        from_x: f64,
        from_y: f64,
        to_x: f64,
        to_y: f64,
        start: Tick,
        end: Tick,
    ) -> AnimatorResult<&mut Self>;

    fn add_color_change(
        &mut self,
        name: &str,
        from_red: f64,
        from_green: f64,
        from_blue: f64,
        to_red: f64,
        to_green: f64,
        to_blue: f64,
        start: Tick,
        end: Tick,
    ) -> AnimatorResult<&mut Self>;

    fn add_scale_to_change(
        &mut self,
        name: &str,
        from_sx: f64,
        from_sy: f64,
        to_sx: f64,
        to_sy: f64,
        start: Tick,
        end: Tick,
    ) -> AnimatorResult<&mut Self>;
}

/// Builder backed by a growing [`Animation`].
#[derive(Debug, Default)]
pub struct AnimationBuilder {
    anim: Animation,
}

impl AnimationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The one place fractional script colors become percentages.
    fn color(red: f64, green: f64, blue: f64) -> AnimatorResult<Color> {
        Color::new(red * 100.0, green * 100.0, blue * 100.0)
    }

    /// Kind of an already-declared shape. Moves and scales on unknown shapes are dropped.
    fn kind_of(&self, name: &str, what: &str) -> Option<ShapeKind> {
        let kind = self.anim.shape(name).map(Shape::kind);
        if kind.is_none() {
            tracing::warn!(name, what, "ignoring transformation on undeclared shape");
        }
        kind
    }
}

impl TweenModelBuilder for AnimationBuilder {
    type Output = Animation;

    fn build(self) -> Animation {
        tracing::debug!(
            shapes = self.anim.shapes().len(),
            transformations = self.anim.transformations().len(),
            "animation built"
        );
        self.anim
    }

    fn add_rectangle(
        &mut self,
        name: &str,
        min_x: f64,
        min_y: f64,
        width: f64,
        height: f64,
        red: f64,
        green: f64,
        blue: f64,
        appear: Tick,
        disappear: Tick,
    ) -> AnimatorResult<&mut Self> {
        let shape = Shape::rectangle(
            name,
            Self::color(red, green, blue)?,
            appear,
            disappear,
            Point::new(min_x, min_y),
            width,
            height,
        )?;
        self.anim.add_shape(shape);
        Ok(self)
    }

    fn add_oval(
        &mut self,
        name: &str,
        center_x: f64,
        center_y: f64,
        x_radius: f64,
        y_radius: f64,
        red: f64,
        green: f64,
        blue: f64,
        appear: Tick,
        disappear: Tick,
    ) -> AnimatorResult<&mut Self> {
        let color = Self::color(red, green, blue)?;
        let center = Point::new(center_x, center_y);
        let shape = if x_radius == y_radius {
            Shape::circle(name, color, appear, disappear, center, x_radius)?
        } else {
            Shape::oval(name, color, appear, disappear, center, x_radius, y_radius)?
        };
        self.anim.add_shape(shape);
        Ok(self)
    }

    fn add_move(
        &mut self,
        name: &str,
        from_x: f64,
        from_y: f64,
        to_x: f64,
        to_y: f64,
        start: Tick,
        end: Tick,
    ) -> AnimatorResult<&mut Self> {
        let Some(kind) = self.kind_of(name, "move") else {
            return Ok(self);
        };
        let t = Transformation::moving(
            name,
            kind,
            Point::new(from_x, from_y),
            Point::new(to_x, to_y),
            start,
            end,
        )?;
        self.anim.add_transformation(t)?;
        Ok(self)
    }

    fn add_color_change(
        &mut self,
        name: &str,
        from_red: f64,
        from_green: f64,
        from_blue: f64,
        to_red: f64,
        to_green: f64,
        to_blue: f64,
        start: Tick,
        end: Tick,
    ) -> AnimatorResult<&mut Self> {
        let t = Transformation::recoloring(
            name,
            Self::color(from_red, from_green, from_blue)?,
            Self::color(to_red, to_green, to_blue)?,
            start,
            end,
        )?;
        self.anim.add_transformation(t)?;
        Ok(self)
    }

    fn add_scale_to_change(
        &mut self,
        name: &str,
        from_sx: f64,
        from_sy: f64,
        to_sx: f64,
        to_sy: f64,
        start: Tick,
        end: Tick,
    ) -> AnimatorResult<&mut Self> {
        let Some(kind) = self.kind_of(name, "scale") else {
            return Ok(self);
        };
        let t = Transformation::scaling(name, kind, from_sx, from_sy, to_sx, to_sy, start, end)?;
        self.anim.add_transformation(t)?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/builder.rs"]
mod tests;
