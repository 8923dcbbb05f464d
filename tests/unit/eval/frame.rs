use super::*;

fn color(r: f64, g: f64, b: f64) -> Color {
    Color::new(r, g, b).unwrap()
}

fn lines(frame: &Frame) -> Vec<String> {
    frame.shapes.iter().map(ToString::to_string).collect()
}

/// Circle A with a recolor, oval B with two consecutive scales, rectangle C with a move.
fn staged() -> Animation {
    let mut anim = Animation::new();
    anim.add_shape(
        Shape::circle("A", color(20.0, 30.0, 40.0), 1, 10, Point::new(25.0, 50.0), 20.0).unwrap(),
    );
    anim.add_shape(
        Shape::oval(
            "B",
            color(10.0, 20.0, 30.0),
            2,
            18,
            Point::new(50.0, 100.0),
            15.0,
            30.0,
        )
        .unwrap(),
    );
    anim.add_shape(
        Shape::rectangle(
            "C",
            color(70.0, 30.0, 10.0),
            5,
            15,
            Point::new(100.0, 200.0),
            20.0,
            40.0,
        )
        .unwrap(),
    );
    for t in [
        Transformation::recoloring("A", color(20.0, 30.0, 40.0), color(40.0, 60.0, 80.0), 4, 8),
        Transformation::scaling("B", ShapeKind::Oval, 15.0, 30.0, 30.0, 60.0, 7, 9),
        Transformation::scaling("B", ShapeKind::Oval, 30.0, 60.0, 60.0, 120.0, 14, 16),
        Transformation::moving(
            "C",
            ShapeKind::Rectangle,
            Point::new(100.0, 200.0),
            Point::new(150.0, 250.0),
            10,
            14,
        ),
    ] {
        anim.add_transformation(t.unwrap()).unwrap();
    }
    anim
}

#[test]
fn folds_tweens_and_sticky_ends() {
    let anim = staged();
    assert_eq!(
        lines(&anim.generate_frame(3).unwrap()),
        vec![
            "Shape 25,50, w 20.0, h 20.0, color (20.0,30.0,40.0)",
            "Shape 50,100, w 15.0, h 30.0, color (10.0,20.0,30.0)",
        ]
    );
    assert_eq!(
        lines(&anim.generate_frame(6).unwrap()),
        vec![
            "Shape 25,50, w 20.0, h 20.0, color (30.0,45.0,60.0)",
            "Shape 50,100, w 15.0, h 30.0, color (10.0,20.0,30.0)",
            "Shape 100,200, w 20.0, h 40.0, color (70.0,30.0,10.0)",
        ]
    );
    assert_eq!(
        lines(&anim.generate_frame(8).unwrap()),
        vec![
            "Shape 25,50, w 20.0, h 20.0, color (40.0,60.0,80.0)",
            "Shape 50,100, w 22.5, h 45.0, color (10.0,20.0,30.0)",
            "Shape 100,200, w 20.0, h 40.0, color (70.0,30.0,10.0)",
        ]
    );
    assert_eq!(
        lines(&anim.generate_frame(12).unwrap()),
        vec![
            "Shape 50,100, w 30.0, h 60.0, color (10.0,20.0,30.0)",
            "Shape 125,225, w 20.0, h 40.0, color (70.0,30.0,10.0)",
        ]
    );
    assert_eq!(
        lines(&anim.generate_frame(14).unwrap()),
        vec![
            "Shape 50,100, w 30.0, h 60.0, color (10.0,20.0,30.0)",
            "Shape 150,250, w 20.0, h 40.0, color (70.0,30.0,10.0)",
        ]
    );
    assert_eq!(
        lines(&anim.generate_frame(15).unwrap()),
        vec!["Shape 50,100, w 45.0, h 90.0, color (10.0,20.0,30.0)"]
    );
}

#[test]
fn frames_only_hold_active_shapes() {
    let anim = staged();
    assert!(anim.generate_frame(0).unwrap().is_empty());
    for tick in 0..anim.last_tick() {
        let frame = anim.generate_frame(tick).unwrap();
        let active = anim.shapes().iter().filter(|s| s.is_active(tick)).count();
        assert_eq!(frame.shapes.len(), active, "tick {tick}");
        assert_eq!(frame.tick, tick);
    }
}

#[test]
fn untransformed_shape_matches_its_declaration() {
    let mut anim = Animation::new();
    anim.add_shape(
        Shape::oval(
            "o",
            color(1.0, 2.0, 3.0),
            2,
            6,
            Point::new(10.7, -3.9),
            4.0,
            5.0,
        )
        .unwrap(),
    );
    for tick in 2..6 {
        let frame = anim.generate_frame(tick).unwrap();
        assert_eq!(
            frame.shapes,
            vec![Snapshot {
                kind: ShapeKind::Oval,
                x: 10,
                y: -3,
                size_x: 4.0,
                size_y: 5.0,
                color: color(1.0, 2.0, 3.0),
            }]
        );
    }
}

fn single_mover(end: Tick) -> Animation {
    let mut anim = Animation::new();
    anim.add_shape(
        Shape::rectangle("m", color(0.0, 0.0, 0.0), 0, 12, Point::new(0.0, 0.0), 5.0, 5.0)
            .unwrap(),
    );
    anim.add_transformation(
        Transformation::moving(
            "m",
            ShapeKind::Rectangle,
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            1,
            end,
        )
        .unwrap(),
    )
    .unwrap();
    anim
}

#[test]
fn move_is_tweened_at_midpoint() {
    let frame = single_mover(11).generate_frame(6).unwrap();
    assert_eq!((frame.shapes[0].x, frame.shapes[0].y), (50, 0));
}

#[test]
fn move_sticks_after_end() {
    let anim = single_mover(5);
    let frame = anim.generate_frame(9).unwrap();
    assert_eq!(frame.shapes[0].x, 100);
    let last = anim.generate_frame(anim.last_tick() - 1).unwrap();
    assert_eq!(last.shapes[0].x, 100);
}

#[test]
fn tweened_coordinates_truncate_toward_zero() {
    // 100 * 2/3 = 66.67
    let mut anim = Animation::new();
    anim.add_shape(
        Shape::circle("c", color(0.0, 0.0, 0.0), 0, 10, Point::new(0.0, 0.0), 1.0).unwrap(),
    );
    anim.add_transformation(
        Transformation::moving(
            "c",
            ShapeKind::Circle,
            Point::new(0.0, 0.0),
            Point::new(100.0, -100.0),
            0,
            3,
        )
        .unwrap(),
    )
    .unwrap();
    let s = anim.generate_frame(2).unwrap().shapes[0];
    assert_eq!((s.x, s.y), (66, -66));
}

#[test]
fn later_same_kind_transformation_supersedes_earlier() {
    let mut anim = Animation::new();
    anim.add_shape(
        Shape::circle("c", color(0.0, 0.0, 0.0), 0, 20, Point::new(0.0, 0.0), 1.0).unwrap(),
    );
    for (from, to, start, end) in [(0.0, 10.0, 0, 4), (50.0, 60.0, 10, 12)] {
        anim.add_transformation(
            Transformation::moving(
                "c",
                ShapeKind::Circle,
                Point::new(from, 0.0),
                Point::new(to, 0.0),
                start,
                end,
            )
            .unwrap(),
        )
        .unwrap();
    }
    assert_eq!(anim.generate_frame(7).unwrap().shapes[0].x, 10);
    assert_eq!(anim.generate_frame(11).unwrap().shapes[0].x, 55);
    assert_eq!(anim.generate_frame(15).unwrap().shapes[0].x, 60);
}
