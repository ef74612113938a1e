//! Command registry: the single source of truth for which names exist.

use std::collections::HashMap;
use std::fmt;

use crate::error::{ShellError, ShellResult};
use crate::executor::Builtin;
use crate::rterm_log_warn;

/// One declared command.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    pub name: &'static str,
    pub description: &'static str,
    /// `None` for commands that are declared but have no handler yet.
    pub builtin: Option<&'static dyn Builtin>,
}

impl RegistryEntry {
    pub const fn implemented(name: &'static str, description: &'static str, builtin: &'static dyn Builtin) -> Self {
        Self {
            name,
            description,
            builtin: Some(builtin),
        }
    }

    pub const fn declared(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            builtin: None,
        }
    }

    pub fn is_implemented(&self) -> bool {
        self.builtin.is_some()
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("implemented", &self.is_implemented())
            .finish()
    }
}

/// Read-only table of commands, in declaration order.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry. Names are stored lowercase; the first declaration
    /// of a duplicated name wins.
    pub fn new(entries: impl IntoIterator<Item = RegistryEntry>) -> Self {
        let mut kept = Vec::new();
        let mut index = HashMap::new();
        for entry in entries {
            debug_assert_eq!(entry.name, entry.name.to_lowercase(), "registry names must be lowercase");
            if index.contains_key(entry.name) {
                rterm_log_warn!(name = entry.name, "duplicate registry entry ignored");
                continue;
            }
            index.insert(entry.name, kept.len());
            kept.push(entry);
        }
        Self { entries: kept, index }
    }

    /// Look an entry up, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.index
            .get(name.to_lowercase().as_str())
            .map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Resolve a command name to its handler.
    pub fn dispatch(&self, name: &str) -> ShellResult<&'static dyn Builtin> {
        let entry = self
            .get(name)
            .ok_or_else(|| ShellError::command_not_found(name))?;
        entry
            .builtin
            .ok_or_else(|| ShellError::not_implemented(entry.name))
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names starting with `prefix`, case-insensitive, in declaration order.
    /// An empty prefix matches nothing.
    pub fn complete(&self, prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .map(|e| e.name)
            .filter(|name| name.starts_with(&prefix))
            .collect()
    }
}
