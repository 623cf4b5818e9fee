use pathmarkup::{FillRule, Instruction, Point};

use crate::utils::{calls, parse};

#[test]
fn test_parse_move() {
    assert_eq!(
        calls("M10 10"),
        "c.begin_figure(Point::new(10.0, 10.0), true, false);\n\
         c.set_closed_state(false);\n"
    );
}

#[test]
fn test_parse_line() {
    assert_eq!(
        calls("M0 0L10 10"),
        "c.begin_figure(Point::new(0.0, 0.0), true, false);\n\
         c.line_to(Point::new(10.0, 10.0), true, false);\n\
         c.set_closed_state(false);\n"
    );
}

#[test]
fn test_parse_close() {
    assert_eq!(
        calls("M0 0L10 10z"),
        "c.begin_figure(Point::new(0.0, 0.0), true, false);\n\
         c.line_to(Point::new(10.0, 10.0), true, false);\n\
         c.set_closed_state(true);\n"
    );
}

#[test]
fn test_fill_rule_before_move() {
    let geom = parse("F 1M0,0");
    assert_eq!(geom.fill_rule, FillRule::Nonzero);
    assert_eq!(
        calls("F 1M0,0"),
        "c.set_fill_rule(FillRule::Nonzero);\n\
         c.begin_figure(Point::new(0.0, 0.0), true, false);\n\
         c.set_closed_state(false);\n"
    );

    // default is even-odd, and an explicit F0 matches it
    assert_eq!(parse("M0 0").fill_rule, FillRule::EvenOdd);
    assert_eq!(parse("F0 M0 0"), parse("M0 0"));
}

#[test]
fn test_implicit_line_after_move() {
    let expected = "c.begin_figure(Point::new(0.0, 0.0), true, false);\n\
                    c.line_to(Point::new(10.0, 10.0), true, false);\n\
                    c.line_to(Point::new(20.0, 20.0), true, false);\n\
                    c.set_closed_state(false);\n";
    for data in ["M0 0 10 10 20 20", "M0,0 10,10 20,20", "M0,0,10,10,20,20"] {
        assert_eq!(calls(data), expected, "{data}");
    }
}

#[test]
fn test_implicit_line_after_relative_move() {
    // deltas accumulate against the running current point
    let expected = "c.begin_figure(Point::new(0.0, 0.0), true, false);\n\
                    c.line_to(Point::new(10.0, 10.0), true, false);\n\
                    c.line_to(Point::new(30.0, 30.0), true, false);\n\
                    c.set_closed_state(false);\n";
    for data in ["m0 0 10 10 20 20", "m0,0 10,10 20,20", "m0,0,10,10,20,20"] {
        assert_eq!(calls(data), expected, "{data}");
    }
}

#[test]
fn test_implicit_repeat_other_commands() {
    assert_eq!(parse("M0 0 H 10 20 30"), parse("M0 0 H10 H20 H30"));
    assert_eq!(parse("M0 0 v 10 20"), parse("M0 0 V10 V30"));
    assert_eq!(
        parse("M0 0 c 1 1 2 2 3 3 1 1 2 2 3 3"),
        parse("M0 0 C 1 1 2 2 3 3 C 4 4 5 5 6 6")
    );
    assert_eq!(
        parse("M0 0 a 1 1 0 0 1 2 0 1 1 0 0 1 2 0"),
        parse("M0 0 A 1 1 0 0 1 2 0 A 1 1 0 0 1 4 0")
    );
}

#[test]
fn test_horizontal_vertical() {
    let geom = parse("M50 50 L100 100 L150 50 H200 V100Z");
    let ends: Vec<Point> = geom
        .instructions
        .iter()
        .filter_map(Instruction::end_point)
        .collect();
    assert_eq!(
        ends,
        vec![
            Point::new(50., 50.),
            Point::new(100., 100.),
            Point::new(150., 50.),
            Point::new(200., 50.),
            Point::new(200., 100.),
        ]
    );
}

#[test]
fn test_relative_curves() {
    assert_eq!(
        parse("M10 10 c 1 2 3 4 5 6 s 1 1 2 2"),
        parse("M10 10 C 11 12 13 14 15 16 S 16 17 17 18")
    );
    assert_eq!(
        parse("M10 10 q 5 5 10 0 t 10 0"),
        parse("M10 10 Q 15 15 20 10 T 30 10")
    );
}

#[test]
fn test_quadratic_as_cubic() {
    assert_eq!(
        calls("M0 0 Q 3 3 6 0"),
        "c.begin_figure(Point::new(0.0, 0.0), true, false);\n\
         c.bezier_to(Point::new(2.0, 2.0), Point::new(4.0, 2.0), Point::new(6.0, 0.0), true, false);\n\
         c.set_closed_state(false);\n"
    );
}

#[test]
fn test_arc() {
    assert_eq!(
        calls("M 80 200 A 100 50 45 1 0 100 50"),
        "c.begin_figure(Point::new(80.0, 200.0), true, false);\n\
         c.arc_to(Point::new(100.0, 50.0), Size::new(100.0, 50.0), 45.0, true, SweepDirection::Counterclockwise, true, false);\n\
         c.set_closed_state(false);\n"
    );
}

#[test]
fn test_arc_signed_radii() {
    // only the magnitude of a radius is used
    let expected = parse("M0 0 A 2 3 0 0 1 4 0");
    assert_eq!(parse("M0 0 A -2 -3 0 0 1 4 0"), expected);
    assert_eq!(parse("M0 0 A+2+3 0 0 1 4 0"), expected);
    assert_eq!(parse("M0 0 a -2,3 0 0 1 4 0"), expected);
    assert_eq!(
        pathmarkup::normalize("M0 0 A -2 -3 0 0 1 4 0").unwrap(),
        "M 0, 0 A 2, 3 0 0 1 4, 0"
    );
}
