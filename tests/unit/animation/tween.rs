use super::*;

#[test]
fn endpoints_and_midpoint() {
    assert_eq!(tween(0.0, 100.0, 1.0, 11.0, 1.0), 0.0);
    assert_eq!(tween(0.0, 100.0, 1.0, 11.0, 11.0), 100.0);
    assert_eq!(tween(0.0, 100.0, 1.0, 11.0, 6.0), 50.0);
    assert_eq!(tween(30.0, 60.0, 14.0, 16.0, 15.0), 45.0);
}

#[test]
fn does_not_clamp() {
    assert_eq!(tween(0.0, 10.0, 0.0, 10.0, 20.0), 20.0);
    assert_eq!(tween(0.0, 10.0, 0.0, 10.0, -10.0), -10.0);
}

#[test]
fn decreasing_values() {
    assert_eq!(tween(100.0, 0.0, 0.0, 4.0, 1.0), 75.0);
}

#[test]
fn point_and_color_are_component_wise() {
    let p = <Point as Lerp>::lerp(&Point::new(0.0, 10.0), &Point::new(100.0, 30.0), 0, 10, 5);
    assert_eq!(p, Point::new(50.0, 20.0));

    let a = Color::new(20.0, 30.0, 40.0).unwrap();
    let b = Color::new(40.0, 60.0, 80.0).unwrap();
    assert_eq!(
        Color::lerp(&a, &b, 4, 8, 6),
        Color::new(30.0, 45.0, 60.0).unwrap()
    );
}
