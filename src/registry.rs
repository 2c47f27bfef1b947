//! Tagged directory registry
//!
//! The on-disk shape is a single `[directories]` table mapping each tag to an
//! array of absolute directory paths:
//!
//! ```toml
//! [directories]
//! default = [
//!     "/home/me/src/api",
//!     "/home/me/src/web",
//! ]
//! ```
//!
//! The editable document is kept next to the typed view so that saving only
//! touches the arrays we appended to.

use crate::config::ConfigStore;
use crate::utils::error::{AppError, AppResult};
use crate::utils::output::{OutputStyle, write_indexed};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use toml_edit::{Array, DocumentMut, Item, Table, Value};
use tracing::debug;

pub const DIRECTORIES_KEY: &str = "directories";
pub const DEFAULT_TAG: &str = "default";

const ARRAY_INDENT: &str = "\n    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: String,
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct Registry {
    document: DocumentMut,
    entries: Vec<TagEntry>,
}

impl Registry {
    /// Validate a parsed document and build the typed view over it
    pub fn from_document(document: DocumentMut) -> Result<Self, String> {
        let mut entries = Vec::new();

        if let Some(item) = document.get(DIRECTORIES_KEY) {
            let table = item
                .as_table_like()
                .ok_or_else(|| format!("`{}` must be a table", DIRECTORIES_KEY))?;

            for (tag, value) in table.iter() {
                let array = value
                    .as_array()
                    .ok_or_else(|| format!("tag `{}` must be an array of strings", tag))?;

                let paths = array
                    .iter()
                    .map(|v| {
                        v.as_str()
                            .map(PathBuf::from)
                            .ok_or_else(|| format!("tag `{}` contains a non-string entry", tag))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                entries.push(TagEntry {
                    tag: tag.to_string(),
                    paths,
                });
            }
        }

        Ok(Self { document, entries })
    }

    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.tag.as_str())
    }

    pub fn entry(&self, tag: &str) -> Option<&TagEntry> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    /// Paths under `tag` in stored order; empty for an unknown tag
    pub fn paths(&self, tag: &str) -> &[PathBuf] {
        self.entry(tag).map(|e| e.paths.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, tag: &str, path: &Path) -> bool {
        self.paths(tag).iter().any(|p| p == path)
    }

    /// Append `path` to `tag`, creating the table and the tag on demand
    pub fn push(&mut self, tag: &str, path: &str) {
        let item = self
            .document
            .entry(DIRECTORIES_KEY)
            .or_insert(Item::Table(Table::new()));
        if !item.is_table_like() {
            *item = Item::Table(Table::new());
        }
        let Some(table) = item.as_table_like_mut() else {
            return;
        };

        let slot = table
            .entry(tag)
            .or_insert(Item::Value(Value::Array(Array::new())));
        if !slot.is_array() {
            *slot = Item::Value(Value::Array(Array::new()));
        }
        if let Some(array) = slot.as_array_mut() {
            array.push(path);
            format_multiline(array);
        }

        match self.entries.iter_mut().find(|e| e.tag == tag) {
            Some(entry) => entry.paths.push(PathBuf::from(path)),
            None => self.entries.push(TagEntry {
                tag: tag.to_string(),
                paths: vec![PathBuf::from(path)],
            }),
        }
    }

    pub fn to_toml_string(&self) -> String {
        self.document.to_string()
    }
}

/// One value per line, indented, with a trailing comma
fn format_multiline(array: &mut Array) {
    for value in array.iter_mut() {
        value.decor_mut().set_prefix(ARRAY_INDENT);
        value.decor_mut().set_suffix("");
    }
    array.set_trailing_comma(true);
    array.set_trailing("\n");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(PathBuf),
    Missing,
    NotADirectory,
    Duplicate(PathBuf),
    NotUtf8(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddResult {
    pub input: PathBuf,
    pub outcome: AddOutcome,
}

impl AddResult {
    pub fn is_added(&self) -> bool {
        matches!(self.outcome, AddOutcome::Added(_))
    }

    /// Warning text for a skipped path, `None` when it was added
    pub fn warning(&self) -> Option<String> {
        let input = self.input.display();
        match &self.outcome {
            AddOutcome::Added(_) => None,
            AddOutcome::Missing => Some(format!("{} does not exist.", input)),
            AddOutcome::NotADirectory => Some(format!("{} is not a directory.", input)),
            AddOutcome::Duplicate(resolved) => Some(format!(
                "{} is already in the list ({}).",
                input,
                resolved.display()
            )),
            AddOutcome::NotUtf8(resolved) => Some(format!(
                "{} cannot be stored: {} is not valid UTF-8.",
                input,
                resolved.display()
            )),
        }
    }
}

pub fn validate_tag(tag: &str) -> AppResult<()> {
    if tag.trim().is_empty() {
        return Err(AppError::Input("tag cannot be empty".to_string()));
    }
    Ok(())
}

/// Register each valid directory under `tag` in memory.
///
/// Invalid inputs are reported in the returned list and never abort the batch.
pub fn add_directories(
    registry: &mut Registry,
    tag: &str,
    inputs: &[PathBuf],
) -> AppResult<Vec<AddResult>> {
    validate_tag(tag)?;

    let results = inputs
        .iter()
        .map(|input| {
            let outcome = classify(registry, tag, input);
            if let AddOutcome::Added(resolved) = &outcome {
                if let Some(s) = resolved.to_str() {
                    registry.push(tag, s);
                }
            }
            AddResult {
                input: input.clone(),
                outcome,
            }
        })
        .collect();

    Ok(results)
}

fn classify(registry: &Registry, tag: &str, input: &Path) -> AddOutcome {
    if !input.exists() {
        return AddOutcome::Missing;
    }
    if !input.is_dir() {
        return AddOutcome::NotADirectory;
    }
    let resolved = match std::fs::canonicalize(input) {
        Ok(resolved) => resolved,
        Err(e) => {
            debug!(input = %input.display(), error = %e, "cannot resolve path");
            return AddOutcome::Missing;
        }
    };
    if resolved.to_str().is_none() {
        return AddOutcome::NotUtf8(resolved);
    }
    if registry.contains(tag, &resolved) {
        return AddOutcome::Duplicate(resolved);
    }
    AddOutcome::Added(resolved)
}

/// Load, register, and persist once after the whole batch
pub fn add(store: &ConfigStore, tag: &str, inputs: &[PathBuf]) -> AppResult<Vec<AddResult>> {
    let mut registry = store.load()?;
    let results = add_directories(&mut registry, tag, inputs)?;

    if results.iter().any(AddResult::is_added) {
        store.save(&registry)?;
    }
    Ok(results)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSelection<'a> {
    Tag(&'a str),
    All,
}

/// Print matching tags with their 1-based numbered paths.
///
/// Returns how many path lines were written.
pub fn write_listing<W: Write + ?Sized>(
    out: &mut W,
    registry: &Registry,
    selection: ListSelection<'_>,
) -> io::Result<usize> {
    let mut written = 0;
    for entry in registry.entries() {
        if let ListSelection::Tag(tag) = selection {
            if entry.tag != tag {
                continue;
            }
        }
        writeln!(out, "{}:", OutputStyle::tag(&entry.tag))?;
        for (i, path) in entry.paths.iter().enumerate() {
            write_indexed(out, i + 1, &path.display().to_string())?;
            written += 1;
        }
    }
    Ok(written)
}
