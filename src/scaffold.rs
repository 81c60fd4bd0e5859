use crate::{
    errors::{FileOperation, IoError},
    plan::{PlaceholderFile, ScaffoldPlan},
    preview::preview_as_tree,
};
use colored::Colorize;
use miette::Diagnostic;
use std::{fmt, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("Filesystem error while scaffolding")]
    #[diagnostic(code(husk::scaffold::filesystem))]
    Filesystem(#[from] IoError),
}
impl ScaffoldError {
    /// The filesystem operation that failed.
    pub fn operation(&self) -> FileOperation {
        match self {
            Self::Filesystem(error) => error.operation,
        }
    }
}

/// Outcome of a scaffold run, shown to the operator as a single summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of filenames processed, duplicates included.
    pub count: usize,
    pub target_dir: std::path::PathBuf,
    pub dry_run: bool,
}
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "Would create" } else { "Created" };

        write!(
            f,
            "{} {} files in the '{}' folder.",
            verb,
            self.count,
            self.target_dir.display()
        )
    }
}

/// Stages one [`PlaceholderFile`] per filename under `target_dir`, in order.
pub fn plan<S: AsRef<str>>(target_dir: &Path, filenames: &[S]) -> ScaffoldPlan {
    let mut plan = ScaffoldPlan::new(target_dir);

    for filename in filenames {
        plan.entries
            .push(PlaceholderFile::new(target_dir, filename.as_ref()));
    }

    log::debug!(
        "planned {} placeholder files under {}",
        plan.len(),
        target_dir.display()
    );

    plan
}

/// Creates the target directory and writes every staged file.
///
/// The first failure aborts the run. Files written before it stay on disk.
///
/// # Errors
///
/// Returns [`ScaffoldError::Filesystem`] if the directory cannot be created or a
/// file cannot be written.
pub fn apply(plan: &ScaffoldPlan) -> Result<Report, ScaffoldError> {
    create_directory(&plan.target_dir)?;

    for entry in &plan.entries {
        write_file(&entry.destination, &entry.content)?;
    }

    Ok(Report {
        count: plan.len(),
        target_dir: plan.target_dir.clone(),
        dry_run: false,
    })
}

/// Prints what `apply` would write without touching the filesystem.
pub fn preview(plan: &ScaffoldPlan) -> Report {
    preview_as_tree(plan);

    Report {
        count: plan.len(),
        target_dir: plan.target_dir.clone(),
        dry_run: true,
    }
}

/// Ensures `target_dir` exists and writes a placeholder file for each of `filenames`.
///
/// Re-running on the same directory succeeds and rewrites the same content.
pub fn run<S: AsRef<str>>(target_dir: &Path, filenames: &[S]) -> Result<Report, ScaffoldError> {
    apply(&plan(target_dir, filenames))
}

/// Creates all directories in the specified path if they do not exist.
fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    std::fs::create_dir_all(path).map_err(|error| IoError::mkdir(path, error))?;

    log::debug!("ensured directory: {}", path.display());

    Ok(())
}

/// Creates or truncates the file at `path` and writes `contents` into it.
fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    std::fs::write(path, contents).map_err(|error| IoError::write(path, error))?;

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());

    println!("{} {}", "create".green(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn entries_in(dir: &Path) -> Vec<String> {
        let mut entries: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        entries.sort();
        entries
    }

    #[test]
    fn test_run_writes_placeholder_per_filename() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("abd");

        let report = run(&target, &names(&[".gitignore", "package.json"])).unwrap();

        assert_eq!(report.count, 2);
        assert_eq!(
            fs::read_to_string(target.join(".gitignore")).unwrap(),
            "// .gitignore"
        );
        assert_eq!(
            fs::read_to_string(target.join("package.json")).unwrap(),
            "// package.json"
        );
    }

    #[test]
    fn test_run_creates_missing_intermediate_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a").join("b").join("c");

        run(&target, &["one.txt", "two.txt", "three.txt"]).unwrap();

        assert_eq!(entries_in(&target), vec!["one.txt", "three.txt", "two.txt"]);
    }

    #[test]
    fn test_run_twice_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("pages");
        let files = names(&["Index.tsx", "NotFound.tsx"]);

        let first = run(&target, &files).unwrap();
        let second = run(&target, &files).unwrap();

        assert_eq!(first, second);
        assert_eq!(entries_in(&target), vec!["Index.tsx", "NotFound.tsx"]);
        assert_eq!(
            fs::read_to_string(target.join("Index.tsx")).unwrap(),
            "// Index.tsx"
        );
    }

    #[test]
    fn test_run_with_duplicates_counts_every_entry() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("dups");

        let report = run(&target, &["a.js", "b.js", "a.js"]).unwrap();

        assert_eq!(report.count, 3);
        assert_eq!(entries_in(&target), vec!["a.js", "b.js"]);
        assert_eq!(fs::read_to_string(target.join("a.js")).unwrap(), "// a.js");
    }

    #[test]
    fn test_run_leaves_unrelated_files_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("existing");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("notes.md"), "keep me").unwrap();
        fs::write(target.join("index.html"), "<html></html>").unwrap();

        run(&target, &["index.html"]).unwrap();

        assert_eq!(
            fs::read_to_string(target.join("notes.md")).unwrap(),
            "keep me"
        );
        assert_eq!(
            fs::read_to_string(target.join("index.html")).unwrap(),
            "// index.html"
        );
    }

    #[test]
    fn test_run_fails_when_target_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("collision");
        fs::write(&target, "not a directory").unwrap();

        let error = run(&target, &["a.txt"]).unwrap_err();

        assert_eq!(error.operation(), FileOperation::Mkdir);
    }

    #[test]
    fn test_run_aborts_on_first_write_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("partial");

        let error = run(&target, &["first.txt", "missing/second.txt", "third.txt"]).unwrap_err();

        assert_eq!(error.operation(), FileOperation::Write);
        assert!(target.join("first.txt").exists());
        assert!(!target.join("third.txt").exists());
    }

    #[test]
    fn test_preview_does_not_touch_filesystem() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("dry");

        let report = preview(&plan(&target, &["a.txt", "b.txt"]));

        assert!(report.dry_run);
        assert_eq!(report.count, 2);
        assert!(!target.exists());
    }

    #[test]
    fn test_report_display() {
        let report = Report {
            count: 2,
            target_dir: "abd".into(),
            dry_run: false,
        };

        assert_eq!(report.to_string(), "Created 2 files in the 'abd' folder.");

        let dry = Report {
            dry_run: true,
            ..report
        };

        assert_eq!(dry.to_string(), "Would create 2 files in the 'abd' folder.");
    }
}
