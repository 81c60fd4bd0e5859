use std::path::{Path, PathBuf};

/// A placeholder file staged in memory before it is written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderFile {
    /// Full path of the file, `target_dir/filename`.
    pub destination: PathBuf,
    /// Marker line naming the file.
    pub content: String,
}
impl PlaceholderFile {
    pub fn new(target_dir: &Path, filename: &str) -> Self {
        Self {
            destination: target_dir.join(filename),
            content: placeholder_content(filename),
        }
    }
}

/// Represents every placeholder file a run will write, in input order.
///
/// Duplicate filenames are kept as separate entries so that the reported count
/// matches the input. Applying the plan writes them in order, the last one wins.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub target_dir: PathBuf,
    pub entries: Vec<PlaceholderFile>,
}
impl ScaffoldPlan {
    pub fn new(target_dir: &Path) -> Self {
        Self {
            target_dir: target_dir.to_path_buf(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Content written into a placeholder file: a single comment line, no trailing newline.
pub fn placeholder_content(filename: &str) -> String {
    format!("// {}", filename)
}
