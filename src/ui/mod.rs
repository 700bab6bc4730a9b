pub mod terminal;
pub mod utils;
pub mod input;
pub mod renderers;

use std::io;
use ratatui::{backend::Backend, Terminal};
use crate::app::App;

// Re-export the main public functions
pub use terminal::{setup_terminal, restore_terminal};
pub use renderers::render;

/// Draw one frame of the whole interface
pub fn render_ui<B: Backend>(app: &App, terminal: &mut Terminal<B>) -> Result<(), io::Error> {
    terminal.draw(|f| render(f, app))?;
    Ok(())
}
