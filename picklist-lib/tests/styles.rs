use picklist_lib::merge_styles;
use picklist_lib::styles::{Style, StyleProps, StyleSlot, StylesConfig};
use serde_json::{Value, json};

fn style(value: Value) -> Style {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn focused(is_focused: bool) -> StyleProps {
    style(json!({ "isFocused": is_focused }))
}

#[test]
fn test_unstyled_slot_keeps_base() {
    let styles = StylesConfig::new();
    let base = style(json!({ "color": "black" }));
    assert_eq!(styles.apply(StyleSlot::Control, base.clone(), &focused(false)), base);
}

#[test]
fn test_style_reads_props() {
    let styles = StylesConfig::new().with(StyleSlot::Control, |mut base, props| {
        if props.get("isFocused") == Some(&Value::Bool(true)) {
            base.insert("borderColor".to_string(), json!("blue"));
        }
        base
    });
    let out = styles.apply(StyleSlot::Control, Style::new(), &focused(true));
    assert_eq!(out.get("borderColor"), Some(&json!("blue")));
    let out = styles.apply(StyleSlot::Control, Style::new(), &focused(false));
    assert!(out.is_empty());
}

#[test]
fn test_merge_runs_source_then_target() {
    let source = StylesConfig::new().with_overrides(
        StyleSlot::Option,
        style(json!({ "color": "red", "padding": 4 })),
    );
    let target = StylesConfig::new().with(StyleSlot::Option, |mut base, _| {
        let padding = base.get("padding").and_then(Value::as_i64).unwrap_or(0);
        base.insert("padding".to_string(), json!(padding * 2));
        base.insert("color".to_string(), json!("green"));
        base
    });

    let merged = merge_styles(&source, &target);
    let out = merged.apply(StyleSlot::Option, Style::new(), &StyleProps::new());
    assert_eq!(Value::Object(out), json!({ "color": "green", "padding": 8 }));
}

#[test]
fn test_merge_keeps_one_sided_slots() {
    let source = StylesConfig::new().with_overrides(StyleSlot::Menu, style(json!({ "zIndex": 1 })));
    let target =
        StylesConfig::new().with_overrides(StyleSlot::Input, style(json!({ "margin": 0 })));

    let merged = merge_styles(&source, &target);
    assert_eq!(merged.slots().collect::<Vec<_>>(), vec![StyleSlot::Input, StyleSlot::Menu]);
    let props = StyleProps::new();
    assert_eq!(
        Value::Object(merged.apply(StyleSlot::Menu, Style::new(), &props)),
        json!({ "zIndex": 1 })
    );
    assert_eq!(
        Value::Object(merged.apply(StyleSlot::Input, Style::new(), &props)),
        json!({ "margin": 0 })
    );
    assert!(!merged.contains(StyleSlot::Control));
}

#[test]
fn test_slot_names_serialize_camel_case() {
    assert_eq!(serde_json::to_value(StyleSlot::MultiValueLabel).unwrap(), json!("multiValueLabel"));
    let slot: StyleSlot = serde_json::from_value(json!("menuList")).unwrap();
    assert_eq!(slot, StyleSlot::MenuList);
}
