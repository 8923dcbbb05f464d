//! Frame rasterization for the headless preview.
//!
//! A [`Frame`] is rewritten as a static SVG (no SMIL), parsed by `usvg` and drawn by `resvg`
//! onto an opaque white canvas.

use std::{fmt::Write as _, path::Path};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    eval::frame::{Frame, Snapshot},
    foundation::error::{AnimatorError, AnimatorResult},
    model::{animation::Animation, shape::ShapeKind},
};

const MAX_DIM: u32 = 16_384;

/// Straight (and, since the background is opaque, also premultiplied) RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Pixel size of the preview canvas for `anim`: its extents rounded up, at least 1x1.
pub fn canvas_size(anim: &Animation) -> AnimatorResult<(u32, u32)> {
    fn to_px(v: f64) -> AnimatorResult<u32> {
        let px = v.ceil().max(1.0);
        if !px.is_finite() || px > f64::from(MAX_DIM) {
            return Err(AnimatorError::out_of_range(format!(
                "canvas dimension {v} exceeds {MAX_DIM}"
            )));
        }
        Ok(px as u32)
    }
    Ok((to_px(anim.max_x())?, to_px(anim.max_y())?))
}

fn write_snapshot(out: &mut String, s: &Snapshot) {
    let [r, g, b] = s.color.to_rgb8();
    let _ = match s.kind {
        ShapeKind::Rectangle => writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="rgb({r},{g},{b})"/>"#,
            s.x, s.y, s.size_x, s.size_y
        ),
        ShapeKind::Circle | ShapeKind::Oval => writeln!(
            out,
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="rgb({r},{g},{b})"/>"#,
            s.x, s.y, s.size_x, s.size_y
        ),
    };
}

/// Static SVG for one frame, shapes painted in declaration order over a white background.
pub fn frame_svg(frame: &Frame, width: u32, height: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    for s in &frame.shapes {
        write_snapshot(&mut out, s);
    }
    out.push_str("</svg>\n");
    out
}

pub fn render_frame_rgba(frame: &Frame, width: u32, height: u32) -> AnimatorResult<FrameRgba> {
    let svg = frame_svg(frame, width, height);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .with_context(|| format!("parse frame svg for tick {}", frame.tick))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        AnimatorError::out_of_range(format!("failed to allocate {width}x{height} pixmap"))
    })?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    Ok(FrameRgba {
        width,
        height,
        data: pixmap.data().to_vec(),
    })
}

/// Render every tick in `0..last_tick` to `dir/frame_NNNNNN.png`. Returns the frame count.
#[tracing::instrument(skip(anim))]
pub fn write_frames_png(anim: &Animation, dir: &Path) -> AnimatorResult<usize> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create frames dir '{}'", dir.display()))?;
    let (width, height) = canvas_size(anim)?;

    let written = (0..anim.last_tick())
        .into_par_iter()
        .map(|tick| -> AnimatorResult<()> {
            let frame = anim.generate_frame(tick)?;
            let rgba = render_frame_rgba(&frame, width, height)?;
            let path = dir.join(format!("frame_{tick:06}.png"));
            image::save_buffer_with_format(
                &path,
                &rgba.data,
                rgba.width,
                rgba.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", path.display()))?;
            Ok(())
        })
        .collect::<AnimatorResult<Vec<()>>>()?
        .len();

    tracing::debug!(written, width, height, "frames written");
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/preview/raster.rs"]
mod tests;
