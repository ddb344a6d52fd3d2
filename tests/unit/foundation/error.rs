use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramesmithError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FramesmithError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        FramesmithError::font_unavailable("Inter, Roboto")
            .to_string()
            .contains("font resource unavailable: Inter, Roboto")
    );
}

#[test]
fn compile_failures_have_readable_messages() {
    assert!(
        FramesmithError::MissingPayload
            .to_string()
            .starts_with("missing payload")
    );
    assert!(
        FramesmithError::NoScreensFound
            .to_string()
            .starts_with("no screens found")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramesmithError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
