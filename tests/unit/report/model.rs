use super::*;
use serde_json::json;

#[test]
fn missing_payload_is_rejected() {
    assert!(matches!(
        Report::from_payload(None),
        Err(FramesmithError::MissingPayload)
    ));
    assert!(matches!(
        Report::from_payload(Some(Value::Null)),
        Err(FramesmithError::MissingPayload)
    ));
    assert!(matches!(
        Report::from_reader("   \n".as_bytes()),
        Err(FramesmithError::MissingPayload)
    ));
}

#[test]
fn falsy_payloads_are_missing() {
    for payload in [json!(false), json!(0), json!(0.0), json!("")] {
        assert!(
            matches!(
                Report::from_payload(Some(payload.clone())),
                Err(FramesmithError::MissingPayload)
            ),
            "{payload}"
        );
    }
    // Truthy scalars are not missing; they just carry no screens.
    let report = Report::from_payload(Some(json!(true))).unwrap();
    assert!(report.screens.is_empty());
}

#[test]
fn top_level_fields_are_decoded() {
    let report = Report::from_payload(Some(json!({
        "project_name": "Shop",
        "screens": [{ "name": "Home", "layout": { "sections": [{ "component": "rounded_card" }] } }],
        "styles": { "colors": { "surface": "#F1F5F9" }, "theme": "testing" },
        "navigation_flow": [{ "from_screen": "Home", "to_screen": "Cart" }]
    })))
    .unwrap();
    assert_eq!(report.project_name.as_deref(), Some("Shop"));
    assert_eq!(report.screens.len(), 1);
    assert_eq!(report.screens[0].sections.len(), 1);
    assert_eq!(report.styles.colors.surface.as_deref(), Some("#F1F5F9"));
    assert_eq!(report.styles.theme.as_deref(), Some("testing"));
    assert_eq!(report.navigation_flow.len(), 1);
}

#[test]
fn nested_report_envelope_fills_missing_fields() {
    let report = Report::from_payload(Some(json!({
        "status": "success",
        "report": {
            "project_name": "Nested",
            "screens": [{ "name": "A" }, { "name": "B" }],
            "styles": { "theme": "security" },
            "navigation_flow": [{ "from_screen": "A", "to_screen": "B" }]
        }
    })))
    .unwrap();
    assert_eq!(report.project_name.as_deref(), Some("Nested"));
    assert_eq!(report.screens.len(), 2);
    assert_eq!(report.styles.theme.as_deref(), Some("security"));
    assert_eq!(report.navigation_flow.len(), 1);
}

#[test]
fn project_name_defaults_when_absent() {
    let report = Report::from_payload(Some(json!({ "screens": [] }))).unwrap();
    assert_eq!(report.project_name.as_deref(), Some(DEFAULT_PROJECT_NAME));
    assert!(report.screens.is_empty());
}

#[test]
fn bare_layout_array_is_accepted() {
    let report = Report::from_payload(Some(json!({
        "screens": [{ "name": "A", "layout": [{ "component": "bottom_sheet" }, { "component": "x" }] }]
    })))
    .unwrap();
    assert_eq!(report.screens[0].sections.len(), 2);
}

#[test]
fn wrongly_typed_fields_decode_as_absent() {
    let report = Report::from_payload(Some(json!({
        "screens": [{
            "name": "A",
            "cornerRadius": "twelve",
            "layout": { "sections": [
                { "component": "event_cards", "height": "300px", "grid_columns": "3", "items": "nope" },
                "not a section",
                { "component": "filter_chips", "items": ["One", 2], "activeIndex": 1 }
            ]},
            "interactions": [{ "action": "toggle" }, 42]
        }],
        "styles": "dark",
        "navigation_flow": [{ "from_screen": "A", "interaction": "click" }]
    })))
    .unwrap();
    let screen = &report.screens[0];
    assert_eq!(screen.corner_radius, None);
    assert_eq!(screen.sections.len(), 2);
    assert_eq!(screen.sections[0].height, Some(300.0));
    assert_eq!(screen.sections[0].grid_columns, Some(3));
    assert_eq!(screen.sections[0].items, None);
    assert_eq!(
        screen.sections[1].items.as_deref(),
        Some(&["One".to_owned(), "2".to_owned()][..])
    );
    assert_eq!(screen.sections[1].active_index, Some(1));
    assert_eq!(screen.interactions.len(), 1);
    assert!(report.styles.theme.is_none());
    assert!(report.navigation_flow[0].interaction.trigger.is_none());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Report::from_reader("{ \"screens\": [".as_bytes()).unwrap_err();
    assert!(matches!(err, FramesmithError::Serde(_)));
}
