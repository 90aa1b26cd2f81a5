//! Champion catalog: load `champion.json` into an ordered list of (key, name) records.
//!
//! Order follows the `data` object as written in the document (serde_json `preserve_order`),
//! and that order is the order of the generated array.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::ser::Serializer;
use serde_json::Value;

use crate::core::error::GenError;

/// One champion: numeric key and display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChampionRecord {
    pub key: u32,
    pub name: String,
}

/// Records of the `data` object, keyed by their internal id, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, ChampionRecord)>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in document order.
    pub fn records(&self) -> impl Iterator<Item = &ChampionRecord> {
        self.entries.iter().map(|(_, record)| record)
    }

    /// First record with the given key.
    pub fn find_by_key(&self, key: u32) -> Option<&ChampionRecord> {
        self.records().find(|r| r.key == key)
    }

    /// First record whose name matches exactly (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&ChampionRecord> {
        self.records().find(|r| r.name == name)
    }

    /// Resolve a query to the other half of its pair: a numeric query yields the
    /// champion's name, anything else is treated as a name and yields its key.
    pub fn lookup(&self, query: &str) -> Option<String> {
        match query.parse::<u32>() {
            Ok(key) => self.find_by_key(key).map(|r| r.name.clone()),
            Err(_) => self.find_by_name(query).map(|r| r.key.to_string()),
        }
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(id, record)| (id, record)))
    }
}

/// Read and parse the catalog file at `path`.
pub fn load(path: &Path) -> Result<Catalog, GenError> {
    let content = fs::read(path).map_err(|e| GenError::io(path, e))?;
    // Non-UTF-8 input is a JSON error, not an I/O one.
    let document: Value = serde_json::from_slice(&content).map_err(|source| GenError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = from_value(&document)?;
    log::debug!("loaded {} champions from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Build a catalog from an already-parsed document. Fails on the first bad record.
pub fn from_value(document: &Value) -> Result<Catalog, GenError> {
    let data = document
        .get("data")
        .ok_or_else(|| GenError::missing("top-level object", "data"))?;
    let data = data
        .as_object()
        .ok_or_else(|| GenError::invalid("top-level object", "data", "expected an object"))?;

    let mut seen = HashSet::with_capacity(data.len());
    let mut entries = Vec::with_capacity(data.len());
    for (id, raw) in data {
        let record = parse_record(id, raw)?;
        if !seen.insert(record.key) {
            log::warn!("duplicate key {} (record '{}')", record.key, id);
        }
        entries.push((id.clone(), record));
    }
    Ok(Catalog { entries })
}

fn parse_record(id: &str, raw: &Value) -> Result<ChampionRecord, GenError> {
    let context = format!("record '{}'", id);
    let fields = raw
        .as_object()
        .ok_or_else(|| GenError::invalid(&context, "record", "expected an object"))?;

    let key = fields
        .get("key")
        .filter(|v| !v.is_null())
        .ok_or_else(|| GenError::missing(&context, "key"))?;
    let key = parse_key(key).ok_or_else(|| {
        GenError::invalid(&context, "key", format!("expected a u32, got {}", key))
    })?;

    let name = fields
        .get("name")
        .filter(|v| !v.is_null())
        .ok_or_else(|| GenError::missing(&context, "name"))?;
    let name = name.as_str().ok_or_else(|| {
        GenError::invalid(&context, "name", format!("expected a string, got {}", name))
    })?;

    Ok(ChampionRecord {
        key,
        name: name.to_string(),
    })
}

/// Keys arrive as decimal strings in Data Dragon files, but plain numbers are accepted too.
/// The parsed value is what gets emitted, so `"007"` and `"+7"` both become `7`.
fn parse_key(value: &Value) -> Option<u32> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    }
}
