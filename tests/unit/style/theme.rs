use super::*;

#[test]
fn security_uses_red_accent() {
    assert_eq!(resolve_theme(Some("security")).accent, "#DC2626");
}

#[test]
fn unknown_and_absent_keys_match_default() {
    let default = resolve_theme(Some("default"));
    assert_eq!(resolve_theme(Some("nonexistent")), default);
    assert_eq!(resolve_theme(None), default);
    assert_eq!(resolve_theme(Some("")), default);
}

#[test]
fn keys_match_exactly() {
    let default = resolve_theme(Some("default"));
    assert_eq!(resolve_theme(Some(" security ")), default);
    assert_eq!(resolve_theme(Some("Security")), default);
    assert_eq!(Theme::from_key(Some("testing")), Theme::Testing);
}

#[test]
fn analytics_has_dark_surface() {
    let t = resolve_theme(Some("analytics"));
    assert_eq!(t.surface, "#0B1120");
    assert_eq!(t.gradient, "linear #0EA5E9 → #22C55E");
}

#[test]
fn theme_tokens_are_valid_colors() {
    for theme in [Theme::Security, Theme::Analytics, Theme::Testing, Theme::Default] {
        let t = theme.tokens();
        assert!(crate::style::color::hex_to_color(t.surface).is_ok());
        assert!(crate::style::color::hex_to_color(t.accent).is_ok());
        assert_eq!(crate::style::gradient::scan_hex_colors(t.gradient).len(), 2);
    }
}
