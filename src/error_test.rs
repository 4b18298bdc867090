use super::*;

#[test]
fn missing_element_names_the_selector() {
    let err = SetupError::missing("#contact form");
    assert_eq!(err.to_string(), "missing element: #contact form");
    assert!(err.is_missing_markup());
}

#[test]
fn js_errors_are_not_missing_markup() {
    let err = SetupError::Js("TypeError".to_owned());
    assert_eq!(err.to_string(), "js error: TypeError");
    assert!(!err.is_missing_markup());
}

#[test]
fn environment_errors_display() {
    assert_eq!(SetupError::NoWindow.to_string(), "window is not available");
    assert_eq!(SetupError::NoDocument.to_string(), "document is not available");
}
