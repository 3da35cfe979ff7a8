//! A select instance driven by [`Command`]s.

use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Result, anyhow};
use picklist_lib::creatable::Creatable;
use picklist_lib::{Accessors, OptionEntry, Record, Select, SelectConfig, SelectEvent, SelectState};
use serde_json::{Value, json};

use crate::commands::Command;

/// One select, its controlled state, and the notifications it produced.
pub struct Session {
    select: Select<Record>,
    state: SelectState<Record>,
    notifications: Receiver<Value>,
}

impl Session {
    pub fn new(config: SelectConfig, entries: Vec<OptionEntry<Record>>, creatable: bool) -> Self {
        let (tx, notifications) = mpsc::channel();
        let input_tx = tx.clone();
        let state = SelectState::new(config.is_multi);

        let mut select = Select::new(config, Accessors::record())
            .with_entries(entries)
            .on_change(move |value, meta| {
                forward(&tx, json!({ "event": "change", "value": value, "meta": meta }));
            })
            .on_input_change(move |text, meta| {
                let line = json!({ "event": "input", "text": text, "action": meta.action });
                forward(&input_tx, line);
            });
        if creatable {
            select = select.with_creatable(Creatable::records());
        }

        Self {
            select,
            state,
            notifications,
        }
    }

    pub fn state(&self) -> &SelectState<Record> {
        &self.state
    }

    /// Run one command and return the JSON lines it produced.
    pub fn execute(&mut self, command: Command) -> Result<Vec<Value>> {
        let event = match command {
            Command::Select(value) => SelectEvent::SelectOption {
                option: self.find(&value)?,
            },
            Command::Toggle(value) => SelectEvent::ToggleOption {
                option: self.find(&value)?,
            },
            Command::Deselect(value) => SelectEvent::DeselectOption {
                option: self.find(&value)?,
            },
            Command::Remove(value) => SelectEvent::RemoveValue {
                option: self.find(&value)?,
            },
            Command::Pop => SelectEvent::PopValue,
            Command::Clear => SelectEvent::Clear,
            Command::Create => SelectEvent::CreateOption,
            Command::Type(text) => SelectEvent::InputChange { text },
            Command::Blur => SelectEvent::InputBlur,
            Command::Close => SelectEvent::MenuClose,
            Command::Backspace => SelectEvent::Backspace,
            Command::Escape { menu_open } => SelectEvent::Escape { menu_open },
            Command::Set(value) => SelectEvent::SetValue { value },
            Command::Menu => {
                let menu = self.select.menu_options(&self.state)?;
                return Ok(vec![json!({ "event": "menu", "options": menu })]);
            }
            Command::State => {
                return Ok(vec![json!({ "event": "state", "state": self.state })]);
            }
        };

        let transition = self.select.dispatch(&self.state, event)?;
        self.state.apply(&transition);
        Ok(self.notifications.try_iter().collect())
    }

    /// Look up an option by its value, falling back to the selection so
    /// created options can be removed again.
    fn find(&self, value: &str) -> Result<Record> {
        let accessors = self.select.accessors();
        let known = self.select.all_options();
        for option in known.iter().chain(self.state.value.as_slice()) {
            if accessors.value(option)? == value {
                return Ok(option.clone());
            }
        }
        Err(anyhow!("no option with value {value:?}"))
    }
}

/// Queue a notification line. Returns `false` when the session is gone.
fn forward(tx: &Sender<Value>, line: Value) -> bool {
    match tx.send(line) {
        Ok(()) => true,
        Err(mpsc::SendError(line)) => {
            log::debug!("Dropped notification {line}: session closed");
            false
        }
    }
}
