use crate::domain::ports::DocumentStore;
use crate::utils::error::{PatchError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;

#[derive(Debug, Clone, Default)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for FsStore {
    fn read_text(&self, path: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|e| PatchError::io(path, e))
    }

    fn write_text(&self, path: &str, text: &str) -> Result<()> {
        fs::write(path, text).map_err(|e| PatchError::io(path, e))
    }
}

/// 記憶體內的檔案表
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(path: &str, text: &str) -> Self {
        let store = Self::new();
        store
            .files
            .borrow_mut()
            .insert(path.to_string(), text.to_string());
        store
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl DocumentStore for MemoryStore {
    fn read_text(&self, path: &str) -> Result<String> {
        self.get(path).ok_or_else(|| {
            PatchError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file in memory store"),
            )
        })
    }

    fn write_text(&self, path: &str, text: &str) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_string(), text.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
