// Rendering tests for the terminal front end, drawn into ratatui's TestBackend.

use queryview::app::App;
use queryview::config::{Cli, Settings};
use queryview::meta::{KernelInfo, MetaState, UserDetails, Wrapped};
use queryview::source::Sources;
use queryview::types::Dataset;
use queryview::ui;
use ratatui::{Terminal, backend::TestBackend};
use serde_json::json;

fn settings(message: &str) -> Settings {
    let cli = Cli {
        message: Some(message.to_string()),
        ..Cli::default()
    };
    Settings::resolve(&cli, None)
}

fn dataset(value: serde_json::Value) -> Option<Dataset> {
    serde_json::from_value(value).unwrap()
}

fn meta() -> MetaState {
    MetaState {
        labels: Some(vec![Wrapped::new("Person".to_string())]),
        relationship_types: Some(vec![Wrapped::new("KNOWS".to_string())]),
        properties: Some(vec![Wrapped::new("name".to_string())]),
        user_details: Some(UserDetails {
            username: Some("neo4j".to_string()),
            roles: vec!["admin".to_string()],
            ..UserDetails::default()
        }),
        database_kernel_info: Some(KernelInfo {
            version: Some("3.2.0".to_string()),
            edition: Some("community".to_string()),
            db_name: Some("graph.db".to_string()),
            ..KernelInfo::default()
        }),
    }
}

/// Draw the app and return the screen as one string per line
fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    ui::render_ui(app, &mut terminal).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|line| line.contains(needle))
}

#[test]
fn absent_dataset_draws_fallback_message() {
    let app = App::new(settings("Nothing to show yet"), Sources::default(), None, &meta());
    let screen = draw(&app, 120, 40);

    assert!(screen_contains(&screen, "Nothing to show yet"));
    assert!(!screen_contains(&screen, "Results ("));
}

#[test]
fn empty_dataset_draws_empty_table() {
    let app = App::new(settings("unused"), Sources::default(), dataset(json!([])), &MetaState::default());
    let screen = draw(&app, 120, 40);

    assert!(screen_contains(&screen, "Results (0 rows)"));
    assert!(!screen_contains(&screen, "unused"));
}

#[test]
fn table_draws_header_and_cells() {
    let data = dataset(json!([["name", "age"], ["Ann", 30], ["Bo", null]]));
    let app = App::new(settings("unused"), Sources::default(), data, &meta());
    let screen = draw(&app, 120, 40);

    assert!(screen_contains(&screen, "Results (2 rows)"));
    assert!(screen_contains(&screen, "name"));
    assert!(screen_contains(&screen, "Ann"));
    assert!(screen_contains(&screen, "30"));
    assert!(screen_contains(&screen, "(empty)"));
}

#[test]
fn nested_values_draw_recursively() {
    let data = dataset(json!([["data", "obj"], [[1, 2, [3]], {"k": "v"}]]));
    let app = App::new(settings("unused"), Sources::default(), data, &MetaState::default());
    let screen = draw(&app, 120, 40);

    assert!(screen_contains(&screen, "[1, 2, [3]]"));
    assert!(screen_contains(&screen, "\"k\": \"v\""));
}

#[test]
fn drawer_lists_metadata_next_to_table() {
    let app = App::new(settings("unused"), Sources::default(), None, &meta());
    let screen = draw(&app, 140, 60);

    assert!(screen_contains(&screen, "Database Information"));
    assert!(screen_contains(&screen, "Person"));
    assert!(screen_contains(&screen, "KNOWS"));
    assert!(screen_contains(&screen, "Username: neo4j"));
    assert!(screen_contains(&screen, "Version: 3.2.0"));
}

#[test]
fn hidden_drawer_is_not_drawn_on_results_tab() {
    let mut app = App::new(settings("unused"), Sources::default(), None, &meta());
    app.toggle_drawer();
    let screen = draw(&app, 140, 60);

    assert!(!screen_contains(&screen, "Username: neo4j"));
}

#[test]
fn editor_shows_activated_command() {
    let mut app = App::new(settings("unused"), Sources::default(), None, &meta());
    app.switch_tab();
    app.activate_selected();
    assert_eq!(app.drain_bus(), 1);

    let screen = draw(&app, 140, 60);
    assert!(screen_contains(&screen, "$ MATCH (n) RETURN n LIMIT 25"));
}

#[test]
fn small_terminal_does_not_panic() {
    let data = dataset(json!([["a", "b", "c"], [{"x": {"y": [1, 2]}}, null, "long text value"]]));
    let app = App::new(settings("unused"), Sources::default(), data, &meta());
    draw(&app, 20, 10);
}

#[test]
fn footer_offers_enter_only_where_items_run() {
    let mut app = App::new(settings("unused"), Sources::default(), None, &meta());
    let screen = draw(&app, 140, 60);
    assert!(!screen_contains(&screen, "Enter: run item"));
    assert!(screen_contains(&screen, "Tab: Database Information"));

    app.switch_tab();
    let screen = draw(&app, 140, 60);
    assert!(screen_contains(&screen, "Enter: run item"));
}
