//! Property tests for the line parser.

use proptest::prelude::*;

use shapewatch::domain::services::{parse_line, LineParseError};
use shapewatch::ShapeKind;

fn kind_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("circle"),
        Just("Rectangle"),
        Just("SQUARE"),
        Just("triangle"),
    ]
    .prop_map(str::to_string)
}

fn color() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The parser never panics, whatever the line holds.
    #[test]
    fn property_parse_line_never_panics(text in "\\PC{0,64}") {
        let _ = parse_line(1, &text);
    }

    /// PROPERTY: Errors always carry the line number they were called with.
    #[test]
    fn property_errors_report_their_line(line in 1usize..10_000, text in "[a-z, 0-9.-]{0,24}") {
        if let Err(err) = parse_line(line, &text) {
            prop_assert_eq!(err.line(), line);
        }
    }

    /// PROPERTY: Well-formed lines parse and the area is non-negative.
    #[test]
    fn property_well_formed_lines_parse(
        kind in kind_token(),
        a in 0.0f64..1_000.0,
        b in 0.0f64..1_000.0,
        color in color(),
    ) {
        let parsed_kind = ShapeKind::from_token(&kind).unwrap();
        let line = match parsed_kind {
            ShapeKind::Circle | ShapeKind::Square => format!("{kind}, {a}, {color}"),
            ShapeKind::Rectangle | ShapeKind::Triangle => format!("{kind}, {a}, {b}, {color}"),
        };

        let shape = parse_line(1, &line).unwrap();
        prop_assert_eq!(shape.kind(), parsed_kind);
        prop_assert_eq!(shape.color(), color.as_str());
        prop_assert!(shape.area() >= 0.0);
    }

    /// PROPERTY: Tokens other than the four shape names are rejected by kind.
    #[test]
    fn property_unknown_kind_rejected(token in "[a-z]{1,10}") {
        prop_assume!(ShapeKind::from_token(&token).is_none());
        let result = parse_line(1, &format!("{token}, 1, 2, red"));
        let is_unknown_kind = matches!(result, Err(LineParseError::UnknownKind { .. }));
        prop_assert!(is_unknown_kind);
    }
}
