use std::sync::{Arc, Mutex};

use picklist_lib::creatable::{CreatableOptions, CreateOptionPosition, Creatable};
use picklist_lib::option::record_field;
use picklist_lib::{
    Accessors, Action, Record, Select, SelectConfig, SelectState, SelectValue, record,
};

fn creatable_select(config: SelectConfig) -> (Select<Record>, Arc<Mutex<usize>>) {
    let notified = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&notified);
    let select = Select::new(config, Accessors::record())
        .with_options(vec![record("Apple", "apple"), record("Banana", "banana")])
        .with_creatable(Creatable::records())
        .on_change(move |_, _| *sink.lock().unwrap() += 1);
    (select, notified)
}

fn typed(input: &str, is_multi: bool) -> SelectState<Record> {
    SelectState {
        value: SelectValue::empty(is_multi),
        input: input.to_string(),
    }
}

#[test]
fn test_create_from_empty_input_is_noop() {
    let (mut select, notified) = creatable_select(SelectConfig::multi());
    let transition = select.create_option(&typed("", true)).unwrap();
    assert!(transition.is_noop());
    assert_eq!(*notified.lock().unwrap(), 0);
}

#[test]
fn test_create_duplicate_is_noop() {
    let (mut select, notified) = creatable_select(SelectConfig::multi());
    assert!(select.create_option(&typed("banana", true)).unwrap().is_noop());
    assert!(select.create_option(&typed("APPLE", true)).unwrap().is_noop());
    assert_eq!(*notified.lock().unwrap(), 0);
}

#[test]
fn test_create_rejected_by_validator() {
    let (select, notified) = creatable_select(SelectConfig::single());
    let mut select = select.with_creatable(
        Creatable::records().is_valid_new_option(|input, _, _| !input.contains(' ')),
    );
    assert!(select.create_option(&typed("two words", false)).unwrap().is_noop());
    assert_eq!(*notified.lock().unwrap(), 0);
}

#[test]
fn test_create_appends_in_multi_mode() {
    let (mut select, notified) = creatable_select(SelectConfig::multi());
    let mut state = SelectState {
        value: SelectValue::Multi(vec![record("Apple", "apple")]),
        input: "kiwi".to_string(),
    };
    let transition = select.create_option(&state).unwrap();
    let change = transition.change.as_ref().unwrap();
    assert_eq!(change.meta.action, Action::CreateOption);
    let created = change.meta.option.as_ref().unwrap();
    assert_eq!(record_field(created, "value").unwrap(), "kiwi");

    state.apply(&transition);
    assert_eq!(state.value.len(), 2);
    assert_eq!(state.input, "");
    assert_eq!(*notified.lock().unwrap(), 1);
}

#[test]
fn test_create_replaces_in_single_mode() {
    let (mut select, _) = creatable_select(SelectConfig::single());
    let mut state = SelectState {
        value: SelectValue::Single(record("Apple", "apple")),
        input: "kiwi".to_string(),
    };
    state.apply(&select.create_option(&state).unwrap());
    match &state.value {
        SelectValue::Single(option) => assert_eq!(record_field(option, "value").unwrap(), "kiwi"),
        other => panic!("expected a single value, got {other:?}"),
    }
}

#[test]
fn test_create_blocked_while_loading() {
    let config = SelectConfig::multi().create(CreatableOptions {
        allow_create_while_loading: false,
        ..Default::default()
    });
    let (mut select, notified) = creatable_select(config);
    select.set_loading(true);
    let state = typed("kiwi", true);
    assert!(!select.can_create(&state).unwrap());
    assert!(select.create_option(&state).unwrap().is_noop());
    assert!(select.menu_options(&state).unwrap().iter().all(|m| !m.is_new));
    assert_eq!(*notified.lock().unwrap(), 0);

    select.set_loading(false);
    assert!(select.can_create(&state).unwrap());
}

#[test]
fn test_create_allowed_while_loading_by_default() {
    let (mut select, _) = creatable_select(SelectConfig::multi());
    select.set_loading(true);
    assert!(!select.create_option(&typed("kiwi", true)).unwrap().is_noop());
}

#[test]
fn test_on_create_option_takes_over() {
    let created = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&created);
    let (select, notified) = creatable_select(SelectConfig::single());
    let mut select =
        select.on_create_option(move |input| sink.lock().unwrap().push(input.to_string()));

    let transition = select.create_option(&typed("kiwi", false)).unwrap();
    assert!(transition.change.is_none());
    assert_eq!(transition.text(), Some(""));
    assert_eq!(*created.lock().unwrap(), vec!["kiwi".to_string()]);
    assert_eq!(*notified.lock().unwrap(), 0);
}

#[test]
fn test_create_entry_position_in_menu() {
    let (select, _) = creatable_select(SelectConfig::single());
    let state = typed("an", false);
    let menu = select.menu_options(&state).unwrap();
    assert_eq!(menu.len(), 2);
    assert_eq!(menu[0].label, "Banana");
    assert!(menu[1].is_new);
    assert_eq!(menu[1].label, "Create \"an\"");
    assert_eq!(menu[1].value, "an");

    let config = SelectConfig::single().create(CreatableOptions {
        create_option_position: CreateOptionPosition::First,
        ..Default::default()
    });
    let (select, _) = creatable_select(config);
    let menu = select.menu_options(&state).unwrap();
    assert!(menu[0].is_new);
}

#[test]
fn test_custom_create_label() {
    let (select, _) = creatable_select(SelectConfig::single());
    let select = select
        .with_creatable(Creatable::records().format_create_label(|input| format!("Add {input}")));
    let menu = select.menu_options(&typed("kiwi", false)).unwrap();
    assert_eq!(menu.last().unwrap().label, "Add kiwi");
}

#[test]
fn test_create_skips_option_already_selected() {
    let (select, notified) = creatable_select(SelectConfig::multi());
    let mut select = select.with_creatable(Creatable::new(|input: &str, _: &str| {
        record(input, input.replace(' ', "-"))
    }));
    let state = SelectState {
        value: SelectValue::Multi(vec![record("Kiwi", "kiwi-fruit")]),
        input: "kiwi fruit".to_string(),
    };

    assert!(select.can_create(&state).unwrap());
    assert!(select.create_option(&state).unwrap().is_noop());
    assert_eq!(state.value.len(), 1);
    assert_eq!(*notified.lock().unwrap(), 0);
}

#[test]
fn test_create_skips_disabled_option() {
    let (select, notified) = creatable_select(SelectConfig::single());
    let mut select = select.option_disabled(|option: &Record, _| option.contains_key("__isNew__"));
    assert!(select.create_option(&typed("kiwi", false)).unwrap().is_noop());
    assert_eq!(*notified.lock().unwrap(), 0);
}
