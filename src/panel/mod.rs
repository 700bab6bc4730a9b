//! Database information drawer.
//!
//! [`compose`] builds the four drawer sections from the metadata collections. Item
//! activation goes through the injected [`ItemClick`] handler, which sends exactly one
//! editor message per call.

pub mod items;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::bus::{self, EventBus, SET_CONTENT};
use crate::meta::{MetaState, unwrap_all};

pub const PANEL_TITLE: &str = "Database Information";

/// Click callback shared by every section of the panel.
#[derive(Clone)]
pub struct ItemClick {
    bus: Arc<dyn EventBus>,
}

impl ItemClick {
    pub fn new(bus: Arc<dyn EventBus>) -> Self {
        Self { bus }
    }

    /// Put `command` into the editor. One bus message per call.
    pub fn call(&self, command: &str) {
        info!(command, "metadata item activated");
        self.bus.send(SET_CONTENT, bus::set_content(command));
    }
}

impl fmt::Debug for ItemClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemClick").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaItem {
    pub text: String,
    /// Editor command sent on activation. Informational rows have none.
    pub command: Option<String>,
}

impl MetaItem {
    pub fn command(text: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            command: Some(command.into()),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            command: None,
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.command.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaList {
    pub title: String,
    pub items: Vec<MetaItem>,
    /// Shown under the items when the underlying collection is empty.
    pub placeholder: Option<String>,
}

impl MetaList {
    pub fn new(title: &str, items: Vec<MetaItem>, empty: bool, placeholder: &str) -> Self {
        Self {
            title: title.to_string(),
            items,
            placeholder: empty.then(|| placeholder.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Labels,
    RelationshipTypes,
    Properties,
    Details,
}

/// One drawer section. The container itself never takes clicks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSection {
    pub kind: SectionKind,
    pub disabled: bool,
    pub lists: Vec<MetaList>,
}

impl PanelSection {
    fn new(kind: SectionKind, lists: Vec<MetaList>) -> Self {
        Self {
            kind,
            disabled: true,
            lists,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub title: String,
    pub sections: Vec<PanelSection>,
    #[serde(skip)]
    on_item_click: ItemClick,
}

impl PanelView {
    /// Clickable items across all sections, in display order.
    pub fn clickable_items(&self) -> Vec<&MetaItem> {
        self.sections
            .iter()
            .flat_map(|section| section.lists.iter())
            .flat_map(|list| list.items.iter())
            .filter(|item| item.is_clickable())
            .collect()
    }

    /// Activate the `index`-th clickable item. Returns the dispatched command.
    pub fn activate(&self, index: usize) -> Option<&str> {
        let item = self.clickable_items().get(index).copied()?;
        let command = item.command.as_deref()?;
        self.on_item_click.call(command);
        Some(command)
    }
}

/// Assemble the drawer from the metadata collections.
///
/// Missing label, relationship and property collections render as empty sections.
pub fn compose(meta: &MetaState, on_item_click: ItemClick) -> PanelView {
    let labels = unwrap_all(meta.labels.as_deref().unwrap_or_default());
    let relationship_types = unwrap_all(meta.relationship_types.as_deref().unwrap_or_default());
    let properties = unwrap_all(meta.properties.as_deref().unwrap_or_default());

    debug!(
        labels = labels.len(),
        relationship_types = relationship_types.len(),
        properties = properties.len(),
        "composing info panel"
    );

    let sections = vec![
        PanelSection::new(SectionKind::Labels, vec![items::label_items(&labels)]),
        PanelSection::new(
            SectionKind::RelationshipTypes,
            vec![items::relationship_items(&relationship_types)],
        ),
        PanelSection::new(
            SectionKind::Properties,
            vec![items::property_items(&properties)],
        ),
        PanelSection::new(
            SectionKind::Details,
            vec![
                items::user_detail_items(meta.user_details.as_ref()),
                items::kernel_info_items(meta.database_kernel_info.as_ref()),
            ],
        ),
    ];

    PanelView {
        title: PANEL_TITLE.to_string(),
        sections,
        on_item_click,
    }
}
