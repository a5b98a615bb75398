//! File system access for the graph builder
//!
//! The builder only ever needs two primitives: list one directory and open
//! one file, both addressed by module-relative paths. [`OsSourceTree`] reads
//! the real file system under a module root; [`MemorySourceTree`] holds an
//! in-memory tree, and [`CountingSourceTree`] records how often each
//! primitive was used.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    /// Regular file (or a link to one)
    pub is_file: bool,
}

/// Module-relative access to a source tree
pub trait SourceTree {
    /// List the entries of `dir`, sorted by name
    fn list_dir(&self, dir: &str) -> io::Result<Vec<DirEntryInfo>>;

    /// Open `file` for reading
    fn open(&self, file: &str) -> io::Result<Box<dyn BufRead>>;

    /// Path to show in diagnostics for a module-relative path
    fn display_path(&self, rel: &str) -> PathBuf {
        PathBuf::from(rel)
    }
}

/// Source tree on the local file system
#[derive(Debug, Clone)]
pub struct OsSourceTree {
    root: PathBuf,
}

impl OsSourceTree {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        if self.root == Path::new(".") {
            PathBuf::from(rel)
        } else {
            self.root.join(rel)
        }
    }
}

impl SourceTree for OsSourceTree {
    fn list_dir(&self, dir: &str) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.resolve(dir))? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let is_file = if file_type.is_symlink() {
                fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false)
            } else {
                file_type.is_file()
            };
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_file,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn open(&self, file: &str) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(self.resolve(file))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn display_path(&self, rel: &str) -> PathBuf {
        self.resolve(rel)
    }
}

/// Source tree held in memory. Directories exist implicitly once a file
/// below them is added.
#[derive(Debug, Clone, Default)]
pub struct MemorySourceTree {
    // directory -> entry name -> file content, `None` for subdirectories
    dirs: BTreeMap<String, BTreeMap<String, Option<String>>>,
}

impl MemorySourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`MemorySourceTree::add_file`]
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.add_file(path, content);
        self
    }

    /// Add a file at a module-relative path such as `pkg/util/util.go`
    pub fn add_file(&mut self, path: &str, content: &str) {
        let (dir, name) = split_path(path);
        self.add_dir(&dir);
        self.dirs
            .entry(dir)
            .or_default()
            .insert(name, Some(content.to_string()));
    }

    /// Add an empty directory and all of its parents
    pub fn add_dir(&mut self, dir: &str) {
        let mut current = dir.to_string();
        loop {
            self.dirs.entry(current.clone()).or_default();
            if current == "." {
                break;
            }
            let (parent, name) = split_path(&current);
            self.dirs
                .entry(parent.clone())
                .or_default()
                .entry(name)
                .or_insert(None);
            current = parent;
        }
    }
}

impl SourceTree for MemorySourceTree {
    fn list_dir(&self, dir: &str) -> io::Result<Vec<DirEntryInfo>> {
        let entries = self.dirs.get(dir).ok_or_else(|| not_found(dir))?;
        Ok(entries
            .iter()
            .map(|(name, content)| DirEntryInfo {
                name: name.clone(),
                is_file: content.is_some(),
            })
            .collect())
    }

    fn open(&self, file: &str) -> io::Result<Box<dyn BufRead>> {
        let (dir, name) = split_path(file);
        match self.dirs.get(&dir).and_then(|entries| entries.get(&name)) {
            Some(Some(content)) => Ok(Box::new(Cursor::new(content.clone().into_bytes()))),
            _ => Err(not_found(file)),
        }
    }
}

/// Wraps a source tree and counts calls per path
#[derive(Debug)]
pub struct CountingSourceTree<T> {
    inner: T,
    list_calls: RefCell<HashMap<String, usize>>,
    open_calls: RefCell<HashMap<String, usize>>,
}

impl<T: SourceTree> CountingSourceTree<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            list_calls: RefCell::new(HashMap::new()),
            open_calls: RefCell::new(HashMap::new()),
        }
    }

    /// How often `dir` was listed
    pub fn list_calls(&self, dir: &str) -> usize {
        self.list_calls.borrow().get(dir).copied().unwrap_or(0)
    }

    pub fn total_list_calls(&self) -> usize {
        self.list_calls.borrow().values().sum()
    }

    /// How often `file` was opened
    pub fn open_calls(&self, file: &str) -> usize {
        self.open_calls.borrow().get(file).copied().unwrap_or(0)
    }
}

impl<T: SourceTree> SourceTree for CountingSourceTree<T> {
    fn list_dir(&self, dir: &str) -> io::Result<Vec<DirEntryInfo>> {
        *self.list_calls.borrow_mut().entry(dir.to_string()).or_insert(0) += 1;
        self.inner.list_dir(dir)
    }

    fn open(&self, file: &str) -> io::Result<Box<dyn BufRead>> {
        *self.open_calls.borrow_mut().entry(file.to_string()).or_insert(0) += 1;
        self.inner.open(file)
    }

    fn display_path(&self, rel: &str) -> PathBuf {
        self.inner.display_path(rel)
    }
}

/// Join a module-relative directory and an entry name
pub fn join_rel(dir: &str, name: &str) -> String {
    if dir == "." {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

fn split_path(path: &str) -> (String, String) {
    match path.rsplit_once('/') {
        Some((dir, name)) => (dir.to_string(), name.to_string()),
        None => (".".to_string(), path.to_string()),
    }
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{}: no such file or directory", path))
}
