use super::*;
use crate::{
    foundation::core::Point,
    model::{color::Color, shape::Shape},
};

fn scene() -> Animation {
    let mut anim = Animation::new();
    anim.add_shape(
        Shape::rectangle(
            "R",
            Color::new(100.0, 0.0, 0.0).unwrap(),
            0,
            4,
            Point::new(0.0, 0.0),
            10.0,
            10.0,
        )
        .unwrap(),
    );
    anim.add_shape(
        Shape::oval(
            "O",
            Color::new(0.0, 0.0, 100.0).unwrap(),
            2,
            4,
            Point::new(30.0, 20.0),
            6.0,
            4.0,
        )
        .unwrap(),
    );
    anim
}

#[test]
fn canvas_covers_extents() {
    assert_eq!(canvas_size(&scene()).unwrap(), (36, 24));
    assert_eq!(canvas_size(&Animation::new()).unwrap(), (1, 1));
}

#[test]
fn frame_svg_lists_active_shapes() {
    let anim = scene();
    let svg = frame_svg(&anim.generate_frame(0).unwrap(), 36, 24);
    assert!(svg.contains(r#"<rect x="0" y="0" width="10" height="10" fill="rgb(255,0,0)"/>"#));
    assert!(!svg.contains("<ellipse"));

    let svg = frame_svg(&anim.generate_frame(3).unwrap(), 36, 24);
    assert!(svg.contains(r#"<ellipse cx="30" cy="20" rx="6" ry="4" fill="rgb(0,0,255)"/>"#));
}

#[test]
fn shapes_are_painted_over_white() {
    let anim = scene();
    let rgba = render_frame_rgba(&anim.generate_frame(3).unwrap(), 36, 24).unwrap();
    assert_eq!(rgba.data.len(), 36 * 24 * 4);
    assert_eq!(rgba.pixel(5, 5), Some([255, 0, 0, 255]));
    assert_eq!(rgba.pixel(30, 20), Some([0, 0, 255, 255]));
    assert_eq!(rgba.pixel(20, 2), Some([255, 255, 255, 255]));
    assert_eq!(rgba.pixel(36, 0), None);
}

#[test]
fn writes_one_png_per_tick() {
    let dir = std::env::temp_dir().join(format!("easy-animator-frames-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let written = write_frames_png(&scene(), &dir).unwrap();
    assert_eq!(written, 4);
    for tick in 0..4 {
        assert!(dir.join(format!("frame_{tick:06}.png")).is_file());
    }
    let img = image::open(dir.join("frame_000003.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (36, 24));
    assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}
