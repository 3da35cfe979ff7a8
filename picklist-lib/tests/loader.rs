use picklist_lib::loader::{AsyncOptions, DefaultOptions, LoaderOptions};

fn names(options: &[&str]) -> Vec<String> {
    options.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_load_and_resolve() {
    let mut loader = AsyncOptions::new(LoaderOptions::default());
    let request = loader.input_change("ap").unwrap();
    assert_eq!(request.query, "ap");
    assert!(loader.is_loading());
    assert!(loader.options().is_empty());

    assert!(loader.resolve(&request, Some(names(&["apple", "apricot"]))));
    assert!(!loader.is_loading());
    assert_eq!(loader.options(), names(&["apple", "apricot"]).as_slice());
    assert_eq!(loader.loaded_input_value(), Some("ap"));
}

#[test]
fn test_stale_response_dropped() {
    let mut loader = AsyncOptions::new(LoaderOptions::default());
    let first = loader.input_change("a").unwrap();
    let second = loader.input_change("ap").unwrap();
    assert_ne!(first.id, second.id);

    assert!(!loader.resolve(&first, Some(names(&["avocado"]))));
    assert!(loader.is_loading());
    assert!(loader.resolve(&second, Some(names(&["apple"]))));
    assert_eq!(loader.options(), names(&["apple"]).as_slice());
}

#[test]
fn test_previous_results_stay_visible_while_loading() {
    let mut loader = AsyncOptions::new(LoaderOptions::default());
    let request = loader.input_change("a").unwrap();
    loader.resolve(&request, Some(names(&["apple", "avocado"])));

    let _ = loader.input_change("ap").unwrap();
    assert!(loader.is_loading());
    assert_eq!(loader.options().len(), 2);
}

#[test]
fn test_cache_hit_skips_load() {
    let mut loader = AsyncOptions::new(LoaderOptions { cache_options: true });
    let request = loader.input_change("ap").unwrap();
    loader.resolve(&request, Some(names(&["apple"])));
    let _ = loader.input_change("b");

    assert!(loader.input_change("ap").is_none());
    assert!(!loader.is_loading());
    assert_eq!(loader.options(), names(&["apple"]).as_slice());
    assert_eq!(loader.cached_queries(), 1);
}

#[test]
fn test_cache_dropped_when_setting_changes() {
    let mut loader = AsyncOptions::new(LoaderOptions { cache_options: true });
    let request = loader.input_change("ap").unwrap();
    loader.resolve(&request, Some(names(&["apple"])));
    loader.set_cache_options(false);
    assert_eq!(loader.cached_queries(), 0);
    assert!(loader.input_change("ap").is_some());
}

#[test]
fn test_without_cache_every_query_loads() {
    let mut loader = AsyncOptions::new(LoaderOptions::default());
    let request = loader.input_change("ap").unwrap();
    loader.resolve(&request, Some(names(&["apple"])));
    assert!(loader.input_change("ap").is_some());
    assert_eq!(loader.cached_queries(), 0);
}

#[test]
fn test_empty_query_resets_to_defaults() {
    let mut loader = AsyncOptions::new(LoaderOptions::default())
        .with_default_options(DefaultOptions::Provided(names(&["default"])));
    assert_eq!(loader.options(), names(&["default"]).as_slice());

    let request = loader.input_change("x").unwrap();
    assert!(loader.input_change("").is_none());
    assert!(!loader.is_loading());
    assert!(!loader.resolve(&request, Some(names(&["xylophone"]))));
    assert_eq!(loader.options(), names(&["default"]).as_slice());
}

#[test]
fn test_autoload_default_options() {
    let mut loader = AsyncOptions::<String>::new(LoaderOptions::default())
        .with_default_options(DefaultOptions::Autoload);
    let request = loader.mount().unwrap();
    assert_eq!(request.query, "");
    assert!(loader.is_loading());

    assert!(loader.resolve(&request, Some(names(&["first", "second"]))));
    assert!(!loader.is_loading());
    assert_eq!(loader.options().len(), 2);
}

#[test]
fn test_autoload_survives_typing() {
    let mut loader = AsyncOptions::<String>::new(LoaderOptions::default())
        .with_default_options(DefaultOptions::Autoload);
    let defaults = loader.mount().unwrap();
    let query = loader.input_change("s").unwrap();

    assert!(loader.resolve(&defaults, Some(names(&["first"]))));
    assert!(loader.is_loading());
    assert!(loader.resolve(&query, None));
    assert!(loader.options().is_empty());

    loader.input_change("");
    assert_eq!(loader.options(), names(&["first"]).as_slice());
}

#[test]
fn test_mount_without_autoload() {
    let mut loader = AsyncOptions::<String>::new(LoaderOptions::default());
    assert!(loader.mount().is_none());
    assert!(!loader.is_loading());
}
