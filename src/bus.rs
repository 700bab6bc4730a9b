//! Event bus seam between the info panel and the editor.
//!
//! The panel never talks to a global bus; it is handed an [`EventBus`] and sends one
//! [`SET_CONTENT`] message per item activation.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Channel name for replacing the editor content.
pub const SET_CONTENT: &str = "editor/SET_CONTENT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorAction {
    SetContent { message: String },
}

/// Build the action that puts `command` into the editor.
pub fn set_content(command: impl Into<String>) -> EditorAction {
    EditorAction::SetContent {
        message: command.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusMessage {
    pub channel: String,
    pub action: EditorAction,
}

pub trait EventBus: Send + Sync {
    fn send(&self, channel: &str, action: EditorAction);
}

/// Bus backed by an unbounded tokio channel. Sending never blocks.
#[derive(Debug, Clone)]
pub struct ChannelBus {
    tx: mpsc::UnboundedSender<BusMessage>,
}

impl ChannelBus {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<BusMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventBus for ChannelBus {
    fn send(&self, channel: &str, action: EditorAction) {
        debug!(channel, ?action, "bus send");
        let message = BusMessage {
            channel: channel.to_string(),
            action,
        };
        if self.tx.send(message).is_err() {
            warn!(channel, "bus receiver dropped, message discarded");
        }
    }
}
