use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use serde::Serialize;
use tracing::info;

use queryview::app::App;
use queryview::bus::ChannelBus;
use queryview::config::{Cli, Settings, load_config, reset_config, save_config};
use queryview::keys::SequentialKeys;
use queryview::logging::{LogTarget, init_logging};
use queryview::meta::MetaState;
use queryview::panel::{ItemClick, PanelView, compose};
use queryview::source::{Sources, load_dataset, load_meta};
use queryview::table::render_table_with;
use queryview::types::{Dataset, TableView};
use queryview::ui::{self, input::handle_key_event};

#[derive(Serialize)]
struct Snapshot<'a> {
    table: &'a TableView,
    panel: &'a PanelView,
}

/// Print both views as JSON. Keys are sequential so the output is reproducible.
fn print_json(settings: &Settings, dataset: Option<&Dataset>, meta: &MetaState) -> Result<()> {
    let table = render_table_with(
        dataset.map(Vec::as_slice),
        &settings.fallback_message,
        &mut SequentialKeys::default(),
    );
    let (bus, _rx) = ChannelBus::new();
    let panel = compose(meta, ItemClick::new(Arc::new(bus)));

    let json = serde_json::to_string_pretty(&Snapshot {
        table: &table,
        panel: &panel,
    })
    .context("failed to serialize rendered views")?;
    println!("{}", json);
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let poll_timeout = Duration::from_millis(100);

    loop {
        ui::render_ui(app, terminal)?;

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(app, key.code) {
                    return Ok(());
                }
            }
        }

        app.drain_bus();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.reset {
        if reset_config().context("failed to reset configuration")? {
            eprintln!("✓ Saved configuration removed");
        } else {
            eprintln!("No saved configuration found");
        }
        return Ok(());
    }

    let settings = Settings::resolve(&cli, load_config());
    let target = if cli.json { LogTarget::Stderr } else { LogTarget::File };
    let log_path = init_logging(&settings.log_level, target).context("failed to initialize logging")?;

    if cli.save {
        let path = save_config(&settings.to_saved()).context("failed to save configuration")?;
        eprintln!("✓ Configuration saved to {}", path.display());
    }

    let sources = Sources {
        data: cli.data.clone(),
        meta: cli.meta.clone(),
    };
    let dataset = load_dataset(sources.data.as_deref()).context("failed to load result set")?;
    let meta = load_meta(sources.meta.as_deref()).context("failed to load database metadata")?;

    if cli.json {
        return print_json(&settings, dataset.as_ref(), &meta);
    }

    info!(log = ?log_path, "starting terminal interface");
    let mut app = App::new(settings, sources, dataset, &meta);
    let mut terminal = ui::setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    ui::restore_terminal(&mut terminal)?;

    result
}
