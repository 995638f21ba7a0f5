use std::collections::{BTreeMap, BTreeSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::FileSystem;

/// In-memory filesystem for service tests.
///
/// Directories are implied by the files below them and can also be created
/// explicitly. Writes into a directory registered as read-only fail with
/// `PermissionDenied`, as does removing a file registered as undeletable.
pub struct MemoryFileSystem {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    read_only: Mutex<BTreeSet<PathBuf>>,
    undeletable: Mutex<BTreeSet<PathBuf>>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(BTreeMap::new()),
            dirs: Mutex::new(BTreeSet::from([PathBuf::from("/")])),
            read_only: Mutex::new(BTreeSet::new()),
            undeletable: Mutex::new(BTreeSet::new()),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/specs")),
        }
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.with_bytes(path, content.as_bytes())
    }

    pub fn with_bytes(self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        let path = normalize_path(&path.into());
        self.files.lock().unwrap().insert(path, content.to_vec());
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = normalize_path(&path.into());
        self.dirs.lock().unwrap().insert(path);
        self
    }

    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        let path = normalize_path(&path.into());
        self.read_only.lock().unwrap().insert(path);
        self
    }

    pub fn with_undeletable(self, path: impl Into<PathBuf>) -> Self {
        let path = normalize_path(&path.into());
        self.undeletable.lock().unwrap().insert(path);
        self
    }

    pub fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self
    }

    pub fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }

    /// Contents of a file as text, for assertions.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        let normalized = normalize_path(path.as_ref());
        self.files
            .lock()
            .unwrap()
            .get(&normalized)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn all_dirs(&self) -> BTreeSet<PathBuf> {
        let mut dirs = self.dirs.lock().unwrap().clone();
        for path in dirs.clone() {
            dirs.extend(path.ancestors().map(Path::to_path_buf));
        }
        for file in self.files.lock().unwrap().keys() {
            dirs.extend(file.ancestors().skip(1).map(Path::to_path_buf));
        }
        dirs
    }

    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only
            .lock()
            .unwrap()
            .iter()
            .any(|dir| path.starts_with(dir))
    }
}

impl FileSystem for MemoryFileSystem {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        let normalized = normalize_path(path);
        self.files
            .lock()
            .unwrap()
            .get(&normalized)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        let normalized = normalize_path(path);
        if self.is_read_only(&normalized) {
            return Err(Error::new(ErrorKind::PermissionDenied, "read-only"));
        }
        let parent_exists = normalized
            .parent()
            .is_none_or(|parent| self.all_dirs().contains(parent));
        if !parent_exists {
            return Err(Error::new(ErrorKind::NotFound, "parent directory not found"));
        }
        self.files
            .lock()
            .unwrap()
            .insert(normalized, contents.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);
        let is_file = self.files.lock().unwrap().contains_key(&normalized);
        is_file || self.all_dirs().contains(&normalized)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.all_dirs().contains(&normalize_path(path))
    }

    fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        let normalized = normalize_path(path);
        if self.is_read_only(&normalized) && !self.is_dir(&normalized) {
            return Err(Error::new(ErrorKind::PermissionDenied, "read-only"));
        }
        self.dirs.lock().unwrap().insert(normalized);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> std::io::Result<()> {
        let normalized = normalize_path(path);
        if self.undeletable.lock().unwrap().contains(&normalized) {
            return Err(Error::new(ErrorKind::PermissionDenied, "undeletable"));
        }
        self.files
            .lock()
            .unwrap()
            .remove(&normalized)
            .map(|_| ())
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn remove_dir_all(&self, path: &Path) -> std::io::Result<()> {
        let normalized = normalize_path(path);
        if !self.is_dir(&normalized) {
            return Err(Error::new(ErrorKind::NotFound, "directory not found"));
        }
        self.files
            .lock()
            .unwrap()
            .retain(|file, _| !file.starts_with(&normalized));
        self.dirs
            .lock()
            .unwrap()
            .retain(|dir| !dir.starts_with(&normalized));
        Ok(())
    }

    fn walk_files(&self, root: &Path) -> std::io::Result<Vec<PathBuf>> {
        let normalized = normalize_path(root);
        if !self.exists(&normalized) {
            return Err(Error::new(ErrorKind::NotFound, "directory not found"));
        }
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|file| file.starts_with(&normalized))
            .cloned()
            .collect())
    }

    fn subdirectories(&self, path: &Path) -> std::io::Result<Vec<String>> {
        let normalized = normalize_path(path);
        if !self.is_dir(&normalized) {
            return Err(Error::new(ErrorKind::NotFound, "directory not found"));
        }
        Ok(self
            .all_dirs()
            .iter()
            .filter(|dir| dir.parent() == Some(normalized.as_path()))
            .filter_map(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

pub fn normalize_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let mut components = Vec::new();
    for part in path_str.split('/') {
        match part {
            ".." => {
                components.pop();
            }
            "." | "" => {}
            _ => components.push(part),
        }
    }
    PathBuf::from(format!("/{}", components.join("/")))
}
