use faultline::config::{
    TrailFormat, NO_VALUE_IN_OPTION, NO_VALUE_PASSED, VALUE_NOT_PRESENT,
    VALUE_NOT_PRESENT_IN_OPTION,
};

#[test]
fn test_trail_format_default() {
    let format = TrailFormat::new();
    assert_eq!(format, TrailFormat::default());
    assert_eq!(format.quote, "'");
    assert_eq!(format.separator, " -> ");
}

#[test]
fn test_trail_format_builder() {
    let format = TrailFormat::new().with_quote("").with_separator(" / ");
    assert_eq!(format.render(["a", "b", "c"]), "a / b / c");
}

#[test]
fn test_trail_format_single_message() {
    assert_eq!(TrailFormat::new().render(["only"]), "'only'");
}

#[test]
fn test_default_messages() {
    assert_eq!(VALUE_NOT_PRESENT, "Value not present");
    assert_eq!(VALUE_NOT_PRESENT_IN_OPTION, "Value not present in Option");
    assert_eq!(NO_VALUE_PASSED, "No value passed to method");
    assert_eq!(NO_VALUE_IN_OPTION, "No value present in option");
}
