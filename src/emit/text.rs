use std::fmt::Write as _;

use crate::{
    emit::format::{fmt_pair, fmt1},
    foundation::core::{Speed, Tick},
    model::{
        animation::Animation,
        shape::{Shape, ShapeKind},
        transform::{TransformOp, Transformation},
    },
};

/// Human-readable summary: one block per shape, then one line per transformation.
#[tracing::instrument(skip(anim), fields(shapes = anim.shapes().len()))]
pub fn render(anim: &Animation, speed: Speed) -> String {
    let mut out = String::from("Shapes:\n");
    for shape in anim.shapes() {
        write_shape(&mut out, shape, speed);
        out.push('\n');
    }
    for t in anim.transformations() {
        write_transformation(&mut out, t, speed);
    }
    out
}

fn secs(speed: Speed, ticks: Tick) -> String {
    fmt1(speed.ticks_to_secs(ticks))
}

fn write_shape(out: &mut String, shape: &Shape, speed: Speed) {
    let a = shape.anchor();
    let geometry = match shape.kind() {
        ShapeKind::Rectangle => format!(
            "Min corner: {}, Width: {}, Height: {}",
            fmt_pair(a.x, a.y),
            fmt1(shape.size_x()),
            fmt1(shape.size_y())
        ),
        ShapeKind::Oval => format!(
            "Center: {}, X radius: {}, Y radius: {}",
            fmt_pair(a.x, a.y),
            fmt1(shape.size_x()),
            fmt1(shape.size_y())
        ),
        ShapeKind::Circle => format!(
            "Center: {}, Radius: {}",
            fmt_pair(a.x, a.y),
            fmt1(shape.size_x())
        ),
    };
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "Name: {}\nType: {}\n{}, Color: {}\nAppears at t={}s\nDisappears at t={}s\n",
        shape.name(),
        shape.kind().label(),
        geometry,
        shape.color(),
        secs(speed, shape.appear()),
        secs(speed, shape.disappear()),
    );
}

fn scale_size(kind: ShapeKind, x: f64, y: f64) -> String {
    match kind {
        ShapeKind::Rectangle => format!("Width: {}, Height: {}", fmt1(x), fmt1(y)),
        ShapeKind::Oval => format!("X radius: {}, Y radius: {}", fmt1(x), fmt1(y)),
        ShapeKind::Circle => format!("Radius: {}", fmt1(x)),
    }
}

fn write_transformation(out: &mut String, t: &Transformation, speed: Speed) {
    let action = match *t.op() {
        TransformOp::Move { from, to, .. } => format!(
            "moves from {} to {}",
            fmt_pair(from.x, from.y),
            fmt_pair(to.x, to.y)
        ),
        TransformOp::Scale {
            from_x,
            from_y,
            to_x,
            to_y,
            shape,
        } => format!(
            "scales from {} to {}",
            scale_size(shape, from_x, from_y),
            scale_size(shape, to_x, to_y)
        ),
        TransformOp::Recolor { from, to } => format!("changes color from {from} to {to}"),
    };
    let _ = writeln!(
        out,
        "Shape {} {} from t={}s to t={}s",
        t.shape_name(),
        action,
        secs(speed, t.start()),
        secs(speed, t.end()),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/emit/text.rs"]
mod tests;
