use super::{decode, encode, BookStore};
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "phone_book.bin";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// A store for `file_name` inside `root`.
    pub fn in_dir(root: &Path, file_name: &str) -> Self {
        Self::new(root.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(BookError::Io)?;
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        let root = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        self.ensure_dir(&root)?;

        let blob = encode(book)?;

        let tmp_file = root.join(format!(".book-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, &blob).map_err(BookError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(BookError::Io)?;

        debug!(path = %self.path.display(), records = book.len(), "saved address book");
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        let blob = fs::read(&self.path).map_err(BookError::Io)?;
        let book = decode(&blob)?;
        debug!(path = %self.path.display(), records = book.len(), "loaded address book");
        Ok(book)
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}
