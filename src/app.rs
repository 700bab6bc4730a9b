//! Application state for the terminal front end.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use crate::bus::{BusMessage, ChannelBus, EditorAction, EventBus, SET_CONTENT};
use crate::config::Settings;
use crate::error::Result;
use crate::meta::MetaState;
use crate::panel::{ItemClick, PanelView, compose};
use crate::source::{self, Sources};
use crate::table::render_table;
use crate::types::{Dataset, TableView};

/// Active tab/view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Results,
    Info,
}

impl Tab {
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Results => "Results",
            Tab::Info => "Database Information",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Results => Tab::Info,
            Tab::Info => Tab::Results,
        }
    }
}

pub struct App {
    pub settings: Settings,
    pub sources: Sources,

    /// Rendered result table, rebuilt from scratch on every load.
    pub table: TableView,
    /// Rendered drawer, rebuilt from scratch on every load.
    pub panel: PanelView,

    pub active_tab: Tab,
    pub show_drawer: bool,
    pub selected_row: Option<usize>,
    /// Index into the drawer's clickable items.
    pub selected_item: usize,

    /// Last command the editor received over the bus.
    pub editor_content: Option<String>,
    pub notification: Option<String>,
    pub loaded_at: DateTime<Local>,
    pub should_quit: bool,

    bus: Arc<dyn EventBus>,
    bus_rx: UnboundedReceiver<BusMessage>,
}

impl App {
    pub fn new(settings: Settings, sources: Sources, dataset: Option<Dataset>, meta: &MetaState) -> Self {
        let (bus, bus_rx) = ChannelBus::new();
        let bus: Arc<dyn EventBus> = Arc::new(bus);
        let table = render_table(dataset.as_deref(), &settings.fallback_message);
        let panel = compose(meta, ItemClick::new(bus.clone()));
        let show_drawer = settings.show_drawer;

        let mut app = Self {
            settings,
            sources,
            table,
            panel,
            active_tab: Tab::Results,
            show_drawer,
            selected_row: None,
            selected_item: 0,
            editor_content: None,
            notification: None,
            loaded_at: Local::now(),
            should_quit: false,
            bus,
            bus_rx,
        };
        app.clamp_selection();
        app
    }

    /// Replace both views with fresh renders of the given inputs.
    pub fn apply(&mut self, dataset: Option<Dataset>, meta: &MetaState) {
        self.table = render_table(dataset.as_deref(), &self.settings.fallback_message);
        self.panel = compose(meta, ItemClick::new(self.bus.clone()));
        self.loaded_at = Local::now();
        self.clamp_selection();
    }

    /// Re-read the input files and re-render.
    pub fn reload(&mut self) -> Result<()> {
        if !self.sources.can_reload() {
            self.notification = Some("Input was read from stdin and cannot be reloaded".to_string());
            return Ok(());
        }
        let dataset = source::load_dataset(self.sources.data.as_deref())?;
        let meta = source::load_meta(self.sources.meta.as_deref())?;
        self.apply(dataset, &meta);
        info!(rows = self.table.rows().len(), "reloaded inputs");
        self.notification = Some(format!("Reloaded at {}", self.loaded_at.format("%H:%M:%S")));
        Ok(())
    }

    /// Pull pending bus messages into the editor. Returns how many were applied.
    pub fn drain_bus(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.bus_rx.try_recv() {
            if message.channel != SET_CONTENT {
                warn!(channel = %message.channel, "ignoring message on unknown channel");
                continue;
            }
            let EditorAction::SetContent { message: content } = message.action;
            self.editor_content = Some(content);
            applied += 1;
        }
        applied
    }

    pub fn select_next(&mut self) {
        match self.active_tab {
            Tab::Results => {
                let len = self.table.rows().len();
                if len == 0 {
                    return;
                }
                self.selected_row = Some(match self.selected_row {
                    Some(i) if i + 1 < len => i + 1,
                    Some(i) => i,
                    None => 0,
                });
            }
            Tab::Info => {
                let len = self.panel.clickable_items().len();
                if self.selected_item + 1 < len {
                    self.selected_item += 1;
                }
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.active_tab {
            Tab::Results => {
                self.selected_row = match self.selected_row {
                    Some(i) if i > 0 => Some(i - 1),
                    other => other,
                };
            }
            Tab::Info => {
                self.selected_item = self.selected_item.saturating_sub(1);
            }
        }
    }

    /// Activate the selected drawer item, which sends its command over the bus.
    pub fn activate_selected(&mut self) -> Option<String> {
        if self.active_tab != Tab::Info {
            return None;
        }
        self.panel.activate(self.selected_item).map(str::to_string)
    }

    pub fn switch_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn toggle_drawer(&mut self) {
        self.show_drawer = !self.show_drawer;
    }

    fn clamp_selection(&mut self) {
        let rows = self.table.rows().len();
        self.selected_row = match self.selected_row {
            _ if rows == 0 => None,
            Some(i) => Some(i.min(rows - 1)),
            None => None,
        };
        let items = self.panel.clickable_items().len();
        self.selected_item = self.selected_item.min(items.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cli;
    use crate::meta::Wrapped;
    use serde_json::json;

    fn settings() -> Settings {
        Settings::resolve(&Cli::default(), None)
    }

    fn dataset() -> Option<Dataset> {
        serde_json::from_value(json!([["a"], [1], [2]])).unwrap()
    }

    #[test]
    fn test_new_without_dataset_shows_message() {
        let app = App::new(settings(), Sources::default(), None, &MetaState::default());
        assert!(app.table.is_message());
        assert_eq!(app.selected_row, None);
        assert_eq!(app.panel.sections.len(), 4);
    }

    #[test]
    fn test_row_selection_stays_in_bounds() {
        let mut app = App::new(settings(), Sources::default(), dataset(), &MetaState::default());
        app.select_previous();
        assert_eq!(app.selected_row, None);
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_row, Some(1));
        app.select_previous();
        assert_eq!(app.selected_row, Some(0));
    }

    #[test]
    fn test_activation_reaches_editor_once() {
        let meta = MetaState {
            labels: Some(vec![Wrapped::new("Person".to_string())]),
            ..MetaState::default()
        };
        let mut app = App::new(settings(), Sources::default(), None, &meta);

        assert_eq!(app.activate_selected(), None);
        assert_eq!(app.drain_bus(), 0);

        app.switch_tab();
        app.select_next();
        let command = app.activate_selected();
        assert_eq!(command.as_deref(), Some("MATCH (n:`Person`) RETURN n LIMIT 25"));
        assert_eq!(app.drain_bus(), 1);
        assert_eq!(app.editor_content, command);
        assert_eq!(app.drain_bus(), 0);
    }

    #[test]
    fn test_apply_rerenders_and_clamps() {
        let mut app = App::new(settings(), Sources::default(), dataset(), &MetaState::default());
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_row, Some(1));

        app.apply(Some(vec![]), &MetaState::default());
        assert!(!app.table.is_message());
        assert_eq!(app.selected_row, None);

        app.apply(None, &MetaState::default());
        assert!(app.table.is_message());
    }

    #[test]
    fn test_reload_reads_sources() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        std::fs::write(&path, "[[\"x\"], [1]]").unwrap();
        let sources = Sources {
            data: Some(path.clone()),
            meta: None,
        };
        let mut app = App::new(settings(), sources, None, &MetaState::default());
        assert!(app.table.is_message());

        app.reload().unwrap();
        assert_eq!(app.table.rows().len(), 1);

        std::fs::write(&path, "null").unwrap();
        app.reload().unwrap();
        assert!(app.table.is_message());
    }
}
