use crossterm::event::KeyCode;
use tracing::error;
use crate::app::App;

/// Handle a key press. Returns true when the application should quit.
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Tab => app.switch_tab(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Enter => {
            if let Some(command) = app.activate_selected() {
                app.notification = Some(format!("Sent to editor: {}", command));
            }
        }
        KeyCode::Char('d') => app.toggle_drawer(),
        KeyCode::Char('r') => {
            if let Err(e) = app.reload() {
                error!(error = %e, "reload failed");
                app.notification = Some(format!("Reload failed: {}", e));
            }
        }
        _ => {}
    }
    app.should_quit
}
