use assertables::{assert_ends_with, assert_starts_with};
use pathmarkup::{format_geometry, normalize, FormatConfig};

use crate::utils::parse;

const VALID: &[&str] = &[
    "M5.5.5 5.5.5 5.5.5",
    "F1M9.0771,11C9.1161,10.701,9.1801,10.352,9.3031,10L9.0001,10 9.0001,6.166 3.0001,9.767 3.0001,10 \
     9.99999999997669E-05,10 9.99999999997669E-05,0 3.0001,0 3.0001,0.234 9.0001,3.834 9.0001,0 \
     12.0001,0 12.0001,8.062C12.1861,8.043 12.3821,8.031 12.5941,8.031 15.3481,8.031 15.7961,9.826 \
     15.9201,11L16.0001,16 9.0001,16 9.0001,12.562 9.0001,11z",
    "         M0 0",
    "F1 M24,14 A2,2,0,1,1,20,14 A2,2,0,1,1,24,14 z",
    "M0 0L10 10z",
    "M50 50 L100 100 L150 50",
    "M50 50L100 100L150 50",
    "M50,50 L100,100 L150,50",
    "M50 50 L-10 -10 L10 50",
    "M50 50L-10-10L10 50",
    "M50 50 L100 100 L150 50zM50 50 L70 70 L120 50z",
    "M 50 50 L 100 100 L 150 50",
    "M50 50 L100 100 L150 50 H200 V100Z",
    "M 80 200 A 100 50 45 1 0 100 50",
    "F1 M 16.6309 18.6563C 17.1309 8.15625 29.8809 14.1563 29.8809 14.1563C 30.8809 11.1563 34.1308 11.4063 \
     34.1308 11.4063C 33.5 12 34.6309 13.1563 34.6309 13.1563C 32.1309 13.1562 31.1309 14.9062 31.1309 14.9\
     062C 41.1309 23.9062 32.6309 27.9063 32.6309 27.9062C 24.6309 24.9063 21.1309 22.1562 16.6309 18.6563 Z \
     M 16.6309 19.9063C 21.6309 24.1563 25.1309 26.1562 31.6309 28.6562C 31.6309 28.6562 26.3809 39.1562 18\
     .3809 36.1563C 18.3809 36.1563 18 38 16.3809 36.9063C 15 36 16.3809 34.9063 16.3809 34.9063C 16.3809 34\
     .9063 10.1309 30.9062 16.6309 19.9063 Z ",
    "F1M16,12C16,14.209 14.209,16 12,16 9.791,16 8,14.209 8,12 8,11.817 8.03,11.644 8.054,11.467L6.585,10 4,10 \
     4,6.414 2.5,7.914 0,5.414 0,3.586 3.586,0 4.414,0 7.414,3 7.586,3 9,1.586 11.914,4.5 10.414,6 \
     12.461,8.046C14.45,8.278,16,9.949,16,12",
    "M10 10 h 5 v 5 q 1 2 3 4 t 5 5 s 1 1 2 2 c 1 2 3 4 5 6 a 5 5 30 1 1 10 10 z l 1 1",
];

#[test]
fn test_should_parse() {
    for data in VALID {
        parse(data);
    }
}

#[test]
fn test_format_equivalence() {
    let cases = [
        ("M5.5.5 5.5.5 5.5.5", "M 5.5, 0.5 L 5.5, 0.5 L 5.5, 0.5"),
        (
            "F1 M24,14 A2,2,0,1,1,20,14 A2,2,0,1,1,24,14 z",
            "F1 M 24, 14 A 2, 2 0 1 1 20, 14 A 2, 2 0 1 1 24, 14Z",
        ),
        (
            "F1M16,12C16,14.209 14.209,16 12,16 9.791,16 8,14.209 8,12 8,11.817 8.03,11.644 8.054,11.467L6.585,10 4,10 \
             4,6.414 2.5,7.914 0,5.414 0,3.586 3.586,0 4.414,0 7.414,3 7.586,3 9,1.586 11.914,4.5 10.414,6 \
             12.461,8.046C14.45,8.278,16,9.949,16,12",
            "F1 M 16, 12 C 16, 14.209 14.209, 16 12, 16 C 9.791, 16 8, 14.209 8, 12 C 8, 11.817 8.03, 11.644 8.054, 11.467 L 6.585, 10 \
             L 4, 10 L 4, 6.414 L 2.5, 7.914 L 0, 5.414 L 0, 3.586 L 3.586, 0 L 4.414, 0 L 7.414, 3 L 7.586, 3 L 9, 1.586 L \
             11.914, 4.5 L 10.414, 6 L 12.461, 8.046 C 14.45, 8.278 16, 9.949 16, 12",
        ),
    ];
    for (data, formatted) in cases {
        assert_eq!(parse(data), parse(formatted));
        // the canonical form is exactly the formatted variant
        assert_eq!(normalize(data).unwrap(), formatted);
    }
}

#[test]
fn test_roundtrip_idempotence() {
    for data in VALID {
        let geom = parse(data);
        let text = geom.to_string();
        assert_eq!(parse(&text), geom, "{data:?} -> {text:?}");
        // formatting is stable once canonical
        assert_eq!(normalize(&text).unwrap(), text);
    }
}

#[test]
fn test_normalize_shorthands() {
    let text = normalize("M10 10 h 5 v 5 q 3 3 6 0 Z").unwrap();
    assert_eq!(text, "M 10, 10 L 15, 10 L 15, 15 C 17, 17 19, 17 21, 15Z");

    let text = normalize("M0 0 L1 1 Z L 2 2").unwrap();
    assert_eq!(text, "M 0, 0 L 1, 1Z M 0, 0 L 2, 2");

    let text = normalize("M -1.01725E-005 -1.01725e-005").unwrap();
    assert_starts_with!(text, "M -0.0000101725");
    assert_ends_with!(text, ", -0.0000101725");
}

#[test]
fn test_format_precision() {
    let geom = parse("M 1.23456 2.5 L 3.333333 -0.0001");
    let cfg = FormatConfig { precision: Some(2) };
    assert_eq!(format_geometry(&geom, &cfg), "M 1.23, 2.5 L 3.33, 0");
}
