//! SVG 1.1 document with SMIL `<set>`/`<animate>` children.
//!
//! Every shape starts hidden and is made visible for its lifetime; each transformation becomes
//! one or two `<animate>` tags that freeze at their end value.

use std::fmt::Write as _;

use crate::{
    emit::format::{escape_attr, fmt1, round_i64},
    foundation::core::{Speed, Tick},
    model::{
        animation::Animation,
        shape::{Shape, ShapeKind},
        transform::{TransformOp, Transformation},
    },
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[tracing::instrument(skip(anim), fields(shapes = anim.shapes().len()))]
pub fn render(anim: &Animation, speed: Speed) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg width="{}" height="{}" version="1.1" xmlns="{SVG_NS}">"#,
        fmt1(anim.max_x()),
        fmt1(anim.max_y())
    );
    for shape in anim.shapes() {
        write_shape(&mut out, anim, shape, speed);
    }
    out.push_str("</svg>");
    out
}

fn element(kind: ShapeKind) -> &'static str {
    if kind.is_elliptical() { "ellipse" } else { "rect" }
}

/// `(begin, dur)` in milliseconds, one decimal each.
fn timing(speed: Speed, start: Tick, end: Tick) -> (String, String) {
    let begin = speed.ticks_to_millis(start);
    let finish = speed.ticks_to_millis(end);
    (fmt1(begin), fmt1(finish - begin))
}

fn write_shape(out: &mut String, anim: &Animation, shape: &Shape, speed: Speed) {
    let a = shape.anchor();
    let tag = element(shape.kind());
    let (x, y, w, h) = if shape.kind().is_elliptical() {
        ("cx", "cy", "rx", "ry")
    } else {
        ("x", "y", "width", "height")
    };
    let _ = writeln!(
        out,
        r#"<{tag} id="{}" {x}="{}" {y}="{}" {w}="{}" {h}="{}" fill="{}" visibility="hidden" >"#,
        escape_attr(shape.name()),
        round_i64(a.x),
        round_i64(a.y),
        round_i64(shape.size_x()),
        round_i64(shape.size_y()),
        shape.color().to_svg_rgb(),
    );

    let (begin, dur) = timing(speed, shape.appear(), shape.disappear());
    let _ = writeln!(
        out,
        r#"  <set attributeName="visibility" to="visible" begin="{begin}ms" duration="{dur}ms" fill="freeze"/>"#
    );

    for t in anim.transformations_for(shape.name()) {
        write_transformation(out, t, speed);
    }
    let _ = writeln!(out, "</{tag}>");
}

fn animate(out: &mut String, attr: &str, from: &str, to: &str, begin: &str, dur: &str) {
    let _ = writeln!(
        out,
        r#"  <animate attributeName="{attr}" from="{from}" to="{to}" begin="{begin}ms" dur="{dur}ms" fill="freeze"/>"#
    );
}

fn animate_int(out: &mut String, attr: &str, from: f64, to: f64, begin: &str, dur: &str) {
    animate(
        out,
        attr,
        &round_i64(from).to_string(),
        &round_i64(to).to_string(),
        begin,
        dur,
    );
}

fn write_transformation(out: &mut String, t: &Transformation, speed: Speed) {
    let (begin, dur) = timing(speed, t.start(), t.end());
    match *t.op() {
        TransformOp::Move { from, to, shape } => {
            let (ax, ay) = match shape {
                ShapeKind::Rectangle => ("x", "y"),
                ShapeKind::Circle | ShapeKind::Oval => ("cx", "cy"),
            };
            animate_int(out, ax, from.x, to.x, &begin, &dur);
            animate_int(out, ay, from.y, to.y, &begin, &dur);
        }
        TransformOp::Scale {
            from_x,
            from_y,
            to_x,
            to_y,
            shape,
        } => match shape {
            ShapeKind::Circle => animate_int(out, "r", from_x, to_x, &begin, &dur),
            ShapeKind::Oval => {
                animate_int(out, "rx", from_x, to_x, &begin, &dur);
                animate_int(out, "ry", from_y, to_y, &begin, &dur);
            }
            ShapeKind::Rectangle => {
                animate_int(out, "width", from_x, to_x, &begin, &dur);
                animate_int(out, "height", from_y, to_y, &begin, &dur);
            }
        },
        TransformOp::Recolor { from, to } => animate(
            out,
            "fill",
            &from.to_svg_rgb(),
            &to.to_svg_rgb(),
            &begin,
            &dur,
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/svg.rs"]
mod tests;
