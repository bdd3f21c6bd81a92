//! Descriptor catalog: the set of operations the engine advertises.
//!
//! The engine installation ships one `*.api.json` file per service,
//! each listing the operations that service accepts and their fields.
//! The catalog is loaded once at Provider construction and gates every
//! call afterwards.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Filename suffix identifying a descriptor file.
const DESCRIPTOR_SUFFIX: &str = ".api.json";

/// One field of an operation descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Field type, as the descriptor file spells it.
    #[serde(rename = "type")]
    pub ty: String,
}

/// One operation advertised by the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationDescriptor {
    /// Wire-level operation name.
    pub name: String,
    /// Declared parameters.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

/// On-disk shape of a single descriptor file.
#[derive(Debug, Deserialize)]
struct DescriptorFile {
    /// Service the file describes (interface, l2, mpls, ...).
    #[allow(dead_code)]
    service: String,
    /// Operations the service accepts.
    operations: Vec<OperationDescriptor>,
}

/// The merged set of operations from every descriptor file found.
#[derive(Debug)]
pub struct Catalog {
    /// Operations keyed by wire name.
    ops: BTreeMap<String, OperationDescriptor>,
}

impl Catalog {
    /// Walks `dir` recursively and loads every `*.api.json` file.
    ///
    /// Fails if the walk fails, any descriptor fails to parse, or no
    /// descriptor file is found at all.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut ops = BTreeMap::new();
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            if !file_name.ends_with(DESCRIPTOR_SUFFIX) {
                continue;
            }
            let data = fs::read_to_string(entry.path())?;
            let file: DescriptorFile =
                serde_json::from_str(&data).map_err(|e| Error::Descriptor {
                    path: entry.path().to_owned(),
                    source: e,
                })?;
            for op in file.operations {
                ops.insert(op.name.clone(), op);
            }
        }
        if ops.is_empty() {
            return Err(Error::EmptyCatalog(dir.to_owned()));
        }
        Ok(Self { ops })
    }

    /// Returns `true` if the catalog advertises `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Looks up an operation descriptor by wire name.
    pub fn get(&self, name: &str) -> Option<&OperationDescriptor> {
        self.ops.get(name)
    }

    /// Number of operations in the catalog.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the catalog is empty (never the case after a
    /// successful [`Catalog::load`]).
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterates over operation names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ops.keys().map(String::as_str)
    }
}
