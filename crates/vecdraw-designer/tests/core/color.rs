use proptest::prelude::*;
use vecdraw_designer::Color;

#[test]
fn test_named_and_functional_agree() {
    assert_eq!(Color::parse("olive"), Color::parse("rgb(128,128,0)"));
    assert_eq!(Color::parse("white"), Color::parse("#fff"));
    assert_eq!(Color::parse("red"), Color::parse("#FF0000FF"));
}

#[test]
fn test_garbage_degrades_to_transparent() {
    for input in ["", "none", "bogus", "#12345", "rgb(1,2)", "rgba(1,2,3)", "hsl(0,0%,0%)"] {
        assert_eq!(Color::parse(input), Color::TRANSPARENT, "input {:?}", input);
    }
}

proptest! {
    #[test]
    fn prop_opaque_and_transparent_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), opaque in any::<bool>()) {
        let color = Color::rgba(r, g, b, if opaque { 255 } else { 0 });
        prop_assert_eq!(Color::parse(&color.to_string()), color);
    }

    #[test]
    fn prop_fractional_alpha_within_one_step(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
        let color = Color::rgba(r, g, b, a);
        let parsed = Color::parse(&color.to_string());
        prop_assert_eq!((parsed.r, parsed.g, parsed.b), (r, g, b));
        prop_assert!((i16::from(parsed.a) - i16::from(a)).abs() <= 1);
    }

    #[test]
    fn prop_parse_never_panics(text in ".{0,24}") {
        let _ = Color::parse(&text);
    }
}
