// Chunk: docs/chunks/selector_widget - Integration tests for the selector engine
//!
//! End-to-end scenarios driven through the public API only.
//!
//! Each test plays a user session against an engine: raw keystrokes with
//! explicit timestamps, arrow keys, pointer events, and configuration
//! replacement, then checks the committed query, the results, the active
//! item, and the events the host would receive.

use std::fs;
use std::time::{Duration, Instant};

use serde_json::json;
use tempfile::TempDir;

use lite_complete::{
    AutocompleteConfig, AutocompleteEngine, AutocompleteEvent, Item, Key, KeyEvent, ListViewport,
    ScrollSignal,
};

const WINDOW: Duration = Duration::from_millis(250);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn names<P: Clone>(engine: &AutocompleteEngine<P>) -> Vec<&str> {
    engine.filtered().into_iter().map(|item| item.name()).collect()
}

fn press<P: Clone>(engine: &mut AutocompleteEngine<P>, key: Key) {
    engine.on_key(&KeyEvent::plain(key));
}

#[test]
fn test_typing_pi_then_selecting_first_result() {
    let config = AutocompleteConfig::with_items(vec![Item::new("Pizza", "P1"), Item::new("Pie", "P2")]);
    let (mut engine, events) = AutocompleteEngine::new(config);
    let t0 = Instant::now();

    engine.on_raw_input("p", t0);
    engine.on_raw_input("pi", t0 + ms(80));
    engine.poll(t0 + ms(80) + WINDOW);
    assert_eq!(engine.query(), "pi");
    assert_eq!(names(&engine), vec!["Pizza", "Pie"]);

    press(&mut engine, Key::Down);
    assert_eq!(engine.active().map(|item| item.name()), Some("Pizza"));

    press(&mut engine, Key::Return);
    assert_eq!(events.drain().collect::<Vec<_>>(), vec![AutocompleteEvent::ItemSelected("P1")]);
    assert_eq!(engine.input_text(), "Pizza");
    assert!(engine.active().is_none());
}

#[test]
fn test_burst_of_keystrokes_commits_once() {
    let config = AutocompleteConfig::demo();
    let (mut engine, _events) = AutocompleteEngine::new(config);
    let t0 = Instant::now();

    // "b", "bu", "bur" within 100ms
    engine.on_raw_input("b", t0);
    engine.on_raw_input("bu", t0 + ms(50));
    engine.on_raw_input("bur", t0 + ms(100));

    // Nothing is committed while the user is still typing
    for offset in [120, 200, 300] {
        assert!(!engine.poll(t0 + ms(offset)));
        assert_eq!(engine.query(), "");
    }

    assert_eq!(engine.next_deadline(), Some(t0 + ms(350)));
    assert!(engine.poll(t0 + ms(350)));
    assert_eq!(engine.query(), "bur");
    assert_eq!(names(&engine), vec!["Burger"]);
    assert_eq!(engine.next_deadline(), None);
}

#[test]
fn test_escape_clears_everything() {
    let (mut engine, events) = AutocompleteEngine::new(AutocompleteConfig::demo());
    let t0 = Instant::now();
    engine.on_focus();
    engine.on_raw_input("piz", t0);
    engine.poll(t0 + WINDOW);
    press(&mut engine, Key::Down);
    assert!(engine.active().is_some());

    press(&mut engine, Key::Escape);
    assert_eq!(events.try_recv(), Some(AutocompleteEvent::InputErased));
    assert_eq!(engine.query(), "");
    assert_eq!(engine.input_text(), "");
    assert!(engine.active().is_none());
    assert!(!engine.border_active());
    assert_eq!(names(&engine), vec!["Pizza", "Burger", "Kebab"]);
}

#[test]
fn test_configuration_replacement_refilters_with_current_query() {
    let (mut engine, _events) = AutocompleteEngine::new(AutocompleteConfig::demo());
    let t0 = Instant::now();
    engine.on_raw_input("p", t0);
    engine.poll(t0 + WINDOW);
    assert_eq!(names(&engine), vec!["Pizza"]);

    let config = AutocompleteConfig::with_items(vec![
        Item::new("Pasta", json!(1)),
        Item::new("Kebab", json!(2)),
        Item::new("Paella", json!(3)),
    ]);
    engine.set_configuration(config, t0 + ms(500));
    assert_eq!(engine.query(), "p");
    assert_eq!(names(&engine), vec!["Pasta", "Paella"]);
}

#[test]
fn test_wraparound_with_scroll_signals() {
    let config = AutocompleteConfig::with_items(vec![
        Item::new("A", 'a'),
        Item::new("B", 'b'),
        Item::new("C", 'c'),
    ]);
    let (mut engine, _events) = AutocompleteEngine::new(config);

    // Enter the list, then walk to the last row
    press(&mut engine, Key::Down);
    press(&mut engine, Key::Down);
    press(&mut engine, Key::Down);
    assert_eq!(engine.active().map(|item| item.name()), Some("C"));

    press(&mut engine, Key::Down);
    assert_eq!(engine.active().map(|item| item.name()), Some("A"));
    assert_eq!(engine.scroll_signal(), ScrollSignal::ScrollToTop);

    press(&mut engine, Key::Up);
    assert_eq!(engine.active().map(|item| item.name()), Some("C"));
    assert_eq!(engine.scroll_signal(), ScrollSignal::ScrollToBottom);
}

#[test]
fn test_max_results_and_min_characters() {
    let config = AutocompleteConfig::with_items(vec![
        Item::new("Pizza", 1),
        Item::new("Pie", 2),
        Item::new("Pita", 3),
    ])
    .min_characters(2)
    .max_results(2);
    let (mut engine, _events) = AutocompleteEngine::new(config);
    let t0 = Instant::now();

    engine.on_raw_input("p", t0);
    engine.poll(t0 + WINDOW);
    assert!(engine.filtered().is_empty());
    assert!(engine.is_query_too_short());

    engine.on_raw_input("PI", t0 + WINDOW);
    engine.poll(t0 + WINDOW * 2);
    assert_eq!(names(&engine), vec!["Pizza", "Pie"]);
}

#[test]
fn test_viewport_follows_navigation() {
    let items: Vec<_> = (0..8).map(|n| Item::new(format!("Item {n}"), n)).collect();
    let config = AutocompleteConfig::with_items(items).max_height_units(Some(3));
    let rows = config.max_height_units.map(|units| units as usize);
    let (mut engine, _events) = AutocompleteEngine::new(config);
    let mut viewport = ListViewport::new(engine.options().row_height, rows);
    let count = engine.filtered().len();

    let mut step = |engine: &mut AutocompleteEngine<i32>, key| {
        press(engine, key);
        viewport.apply(engine.scroll_signal(), count);
        viewport.visible_range(count)
    };

    assert_eq!(step(&mut engine, Key::Down), 0..3); // enter at row 0
    assert_eq!(step(&mut engine, Key::Down), 1..4);
    assert_eq!(step(&mut engine, Key::Up), 0..3);
    assert_eq!(step(&mut engine, Key::Up), 5..8); // wrap to the last row
    assert_eq!(engine.active_index(), Some(7));
}

#[test]
fn test_loaded_configuration_drives_engine() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("menu.json");
    fs::write(
        &path,
        r#"{
            "placeholder": "What are you hungry for?",
            "clearOnSelect": true,
            "items": [
                {"name": "Ramen", "payload": {"id": 10}},
                {"name": "Risotto", "item": {"id": 11}}
            ]
        }"#,
    )
    .unwrap();

    let config = AutocompleteConfig::<serde_json::Value>::load(&path).unwrap();
    let (mut engine, events) = AutocompleteEngine::new(config);
    assert_eq!(engine.view().placeholder, "What are you hungry for?");

    let risotto = engine.filtered_ids()[1];
    assert!(engine.on_click(risotto));
    assert_eq!(events.try_recv(), Some(AutocompleteEvent::ItemSelected(json!({"id": 11}))));
    assert_eq!(engine.input_text(), "");
}

#[test]
fn test_duplicate_names_are_distinct_items() {
    let config = AutocompleteConfig::with_items(vec![Item::new("Pie", "apple"), Item::new("Pie", "cherry")]);
    let (mut engine, events) = AutocompleteEngine::new(config);

    press(&mut engine, Key::Down);
    press(&mut engine, Key::Down);
    assert_eq!(engine.active_index(), Some(1));

    press(&mut engine, Key::Return);
    assert_eq!(events.try_recv(), Some(AutocompleteEvent::ItemSelected("cherry")));
}
