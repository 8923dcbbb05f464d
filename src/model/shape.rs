use crate::{
    foundation::core::{Point, Tick, TickRange},
    foundation::error::{AnimatorError, AnimatorResult},
    model::{
        color::Color,
        transform::{TransformKind, Transformation},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Oval,
}

impl ShapeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Oval => "oval",
        }
    }

    /// Circles and ovals are anchored on their center, rectangles on a corner.
    pub fn is_elliptical(self) -> bool {
        matches!(self, Self::Circle | Self::Oval)
    }
}

/// One drawable: identity, initial geometry and lifetime.
///
/// `anchor` is the min corner for rectangles and the center for circles/ovals. `size_x`/`size_y`
/// are width/height for rectangles and the two radii otherwise (equal for circles).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Shape {
    name: String,
    kind: ShapeKind,
    color: Color,
    lifetime: TickRange,
    anchor: Point,
    size_x: f64,
    size_y: f64,
}

impl Shape {
    pub fn rectangle(
        name: &str,
        color: Color,
        appear: Tick,
        disappear: Tick,
        min_corner: Point,
        width: f64,
        height: f64,
    ) -> AnimatorResult<Self> {
        Self::new(
            name,
            ShapeKind::Rectangle,
            color,
            appear,
            disappear,
            min_corner,
            width,
            height,
        )
    }

    pub fn oval(
        name: &str,
        color: Color,
        appear: Tick,
        disappear: Tick,
        center: Point,
        x_radius: f64,
        y_radius: f64,
    ) -> AnimatorResult<Self> {
        Self::new(
            name,
            ShapeKind::Oval,
            color,
            appear,
            disappear,
            center,
            x_radius,
            y_radius,
        )
    }

    pub fn circle(
        name: &str,
        color: Color,
        appear: Tick,
        disappear: Tick,
        center: Point,
        radius: f64,
    ) -> AnimatorResult<Self> {
        Self::new(
            name,
            ShapeKind::Circle,
            color,
            appear,
            disappear,
            center,
            radius,
            radius,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn new(
        name: &str,
        kind: ShapeKind,
        color: Color,
        appear: Tick,
        disappear: Tick,
        anchor: Point,
        size_x: f64,
        size_y: f64,
    ) -> AnimatorResult<Self> {
        let name = canonical_name(name)?;
        if appear < 0 {
            return Err(AnimatorError::validation(format!(
                "shape '{name}' cannot appear before t=0"
            )));
        }
        if disappear < appear {
            return Err(AnimatorError::validation(format!(
                "shape '{name}' cannot disappear before it appears"
            )));
        }
        if !anchor.x.is_finite() || !anchor.y.is_finite() {
            return Err(AnimatorError::validation(format!(
                "shape '{name}' has a non-finite position"
            )));
        }
        if !(size_x.is_finite() && size_x > 0.0 && size_y.is_finite() && size_y > 0.0) {
            return Err(AnimatorError::validation(format!(
                "shape '{name}' sizes must both be larger than 0"
            )));
        }
        Ok(Self {
            name,
            kind,
            color,
            lifetime: TickRange {
                start: appear,
                end: disappear,
            },
            anchor,
            size_x,
            size_y,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn appear(&self) -> Tick {
        self.lifetime.start
    }

    pub fn disappear(&self) -> Tick {
        self.lifetime.end
    }

    pub fn lifetime(&self) -> TickRange {
        self.lifetime
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn size_x(&self) -> f64 {
        self.size_x
    }

    pub fn size_y(&self) -> f64 {
        self.size_y
    }

    pub fn is_active(&self, tick: Tick) -> bool {
        self.lifetime.contains(tick)
    }

    /// Largest x touched by the anchor (initially or as a move endpoint) plus the initial size.
    pub fn bounding_max_x<'a>(
        &self,
        transformations: impl IntoIterator<Item = &'a Transformation>,
    ) -> f64 {
        let reached = transformations
            .into_iter()
            .filter(|t| t.kind() == TransformKind::Move)
            .map(Transformation::max_x_coord)
            .fold(self.anchor.x, f64::max);
        reached + self.size_x
    }

    /// Largest y touched by the anchor (initially or as a move endpoint) plus the initial size.
    pub fn bounding_max_y<'a>(
        &self,
        transformations: impl IntoIterator<Item = &'a Transformation>,
    ) -> f64 {
        let reached = transformations
            .into_iter()
            .filter(|t| t.kind() == TransformKind::Move)
            .map(Transformation::max_y_coord)
            .fold(self.anchor.y, f64::max);
        reached + self.size_y
    }
}

/// Upper-case, trimmed form used for storage and every lookup.
pub fn canonical_name(name: &str) -> AnimatorResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AnimatorError::validation("shape name must be non-empty"));
    }
    Ok(trimmed.to_uppercase())
}

#[cfg(test)]
#[path = "../../tests/unit/model/shape.rs"]
mod tests;
