//! Terminal viewer for graph database query results.
//!
//! The core is [`table::render_table`], which turns a header-plus-records dataset
//! into a [`types::TableView`], and [`panel::compose`], which builds the database
//! information drawer and forwards item activations to an injected event bus.
//! Everything under [`ui`] and [`app`] is the terminal front end on top of them.

pub mod app;
pub mod bus;
pub mod config;
pub mod error;
pub mod keys;
pub mod logging;
pub mod meta;
pub mod panel;
pub mod source;
pub mod table;
pub mod types;
pub mod ui;

pub use error::{Result, ViewError};
pub use panel::{ItemClick, PanelView, compose};
pub use table::{format_cell, render_table, render_table_with};
pub use types::{CellContent, CellValue, Dataset, Row, TableView};
