use super::*;

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn tmp(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("easy-animator-{}-{name}", std::process::id()))
}

#[test]
fn out_keyword_means_stdout() {
    let cfg = RunConfig::new("a.txt", ViewKind::Text, Some("out"), 1).unwrap();
    assert_eq!(cfg.output, OutputTarget::Stdout);
    let cfg = RunConfig::new("a.txt", ViewKind::Svg, None, 1).unwrap();
    assert_eq!(cfg.output, OutputTarget::Stdout);
    let cfg = RunConfig::new("a.txt", ViewKind::Svg, Some("anim.svg"), 1).unwrap();
    assert_eq!(cfg.output, OutputTarget::File(PathBuf::from("anim.svg")));
}

#[test]
fn visual_targets_the_window() {
    let cfg = RunConfig::new("a.txt", ViewKind::Visual, Some("x.svg"), 3).unwrap();
    assert_eq!(cfg.output, OutputTarget::Window);
    assert_eq!(cfg.speed.ticks_per_second(), 3);
}

#[test]
fn invalid_options_are_configuration_errors() {
    for (input, out, speed) in [("a.txt", None, 0), ("", None, 1), ("a.txt", Some(" "), 1)] {
        assert!(matches!(
            RunConfig::new(input, ViewKind::Text, out, speed),
            Err(AnimatorError::Configuration(_))
        ));
    }
}

#[test]
fn text_view_goes_to_stdout() {
    let cfg = RunConfig::new(data("smoke.txt"), ViewKind::Text, None, 1).unwrap();
    let mut buf = Vec::new();
    run(&cfg, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("Shapes:\nName: R\nType: rectangle\n"));
    assert!(text.contains("Shape R moves from (200.0,200.0) to (300.0,300.0) from t=10.0s to t=50.0s\n"));
}

#[test]
fn svg_view_writes_a_file() {
    let path = tmp("out.svg");
    let cfg = RunConfig::new(
        data("smoke.txt"),
        ViewKind::Svg,
        path.to_str(),
        10,
    )
    .unwrap();
    let mut buf = Vec::new();
    run(&cfg, &mut buf).unwrap();
    assert!(buf.is_empty());
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg width=\"560.0\" height=\"430.0\" "));
    assert!(svg.ends_with("</svg>"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn visual_view_prints_a_single_tick() {
    let cfg = RunConfig::new(data("smoke.txt"), ViewKind::Visual, None, 1)
        .unwrap()
        .with_tick(Some(0));
    let mut buf = Vec::new();
    run(&cfg, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "t=0\n");
}

#[test]
fn visual_view_steps_through_every_tick() {
    let cfg = RunConfig::new(data("smoke.txt"), ViewKind::Visual, None, 1).unwrap();
    let mut buf = Vec::new();
    run(&cfg, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.matches("t=").count(), 100);
    assert!(text.contains("t=1\nShape 200,200, w 50.0, h 100.0, color (100.0,0.0,0.0)\n"));
}

#[test]
fn view_and_target_must_agree() {
    assert_eq!(ViewKind::Text.output_kind(), Some(OutputKind::Text));
    assert_eq!(ViewKind::Svg.output_kind(), Some(OutputKind::Svg));
    assert_eq!(ViewKind::Visual.output_kind(), None);

    let mut cfg = RunConfig::new(data("smoke.txt"), ViewKind::Text, None, 1).unwrap();
    cfg.view = ViewKind::Visual;
    let mut buf = Vec::<u8>::new();
    assert!(matches!(
        run(&cfg, &mut buf),
        Err(AnimatorError::Configuration(_))
    ));
    assert!(buf.is_empty());
}

#[test]
fn missing_script_is_reported() {
    let cfg = RunConfig::new("/no/such/script.txt", ViewKind::Text, None, 1).unwrap();
    let err = run(&cfg, &mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, AnimatorError::Other(_)));
}
