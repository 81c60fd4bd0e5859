use crate::errors::IoError;
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_PRESET: &str = "web";

const WEB_FOLDER: &str = "abd";
const WEB_FILES: &[&str] = &[
    ".gitignore",
    "components.json",
    "eslint.config.js",
    "index.html",
    "package.json",
    "postcss.config.js",
    "README.md",
    "tailwind.config.ts",
    "tsconfig.app.json",
    "tsconfig.json",
    "tsconfig.node.json",
    "vite.config.ts",
];

const PAGES_FOLDER: &str = "pages";
const PAGES_FILES: &[&str] = &["Index.tsx", "NotFound.tsx"];

#[derive(Error, Debug, Diagnostic)]
pub enum ManifestError {
    #[error("I/O error within manifest domain")]
    #[diagnostic(code(husk::manifest::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(code(husk::manifest::parse_toml), help("Review toml file"))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Preset not found with name: {name}")]
    #[diagnostic(
        code(husk::manifest::preset_not_found),
        help("Available presets: {available}")
    )]
    PresetNotFound { name: String, available: String },

    #[error("Preset '{name}' has an empty folder")]
    #[diagnostic(
        code(husk::manifest::empty_folder),
        help("Set `folder` to the directory the files should be created in")
    )]
    EmptyFolder { name: String },

    #[error("Preset '{name}' has no files")]
    #[diagnostic(
        code(husk::manifest::empty_files),
        help("List at least one filename under `files`")
    )]
    EmptyFiles { name: String },

    #[error("Preset '{name}' has an empty filename at position {index}")]
    #[diagnostic(code(husk::manifest::empty_file_name))]
    EmptyFileName { name: String, index: usize },
}

/// A target folder together with the ordered filenames to create in it.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Preset {
    pub folder: String,
    pub files: Vec<String>,
}
impl Preset {
    pub fn new<S: Into<String>>(folder: S, files: Vec<String>) -> Self {
        Self {
            folder: folder.into(),
            files,
        }
    }

    fn from_static(folder: &str, files: &[&str]) -> Self {
        Self::new(folder, files.iter().map(|f| f.to_string()).collect())
    }

    /// Checks that the folder and every filename are non-empty.
    /// Duplicate filenames are allowed.
    pub fn validate(&self, name: &str) -> Result<(), ManifestError> {
        if self.folder.is_empty() {
            return Err(ManifestError::EmptyFolder {
                name: name.to_string(),
            });
        }

        if self.files.is_empty() {
            return Err(ManifestError::EmptyFiles {
                name: name.to_string(),
            });
        }

        if let Some(index) = self.files.iter().position(|file| file.is_empty()) {
            return Err(ManifestError::EmptyFileName {
                name: name.to_string(),
                index,
            });
        }

        Ok(())
    }

    pub fn target_dir(&self) -> &Path {
        Path::new(&self.folder)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Manifest(pub IndexMap<String, Preset>);
impl Manifest {
    /// The presets shipped with husk.
    pub fn builtin() -> Self {
        let mut presets = IndexMap::new();

        presets.insert(
            DEFAULT_PRESET.to_string(),
            Preset::from_static(WEB_FOLDER, WEB_FILES),
        );
        presets.insert(
            "pages".to_string(),
            Preset::from_static(PAGES_FOLDER, PAGES_FILES),
        );

        Self(presets)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|error| IoError::read(path, error))?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        toml::from_str(content).map_err(|err| ManifestError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Loads the manifest at `path`, or the built-in presets when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self, ManifestError> {
        match path {
            Some(path) => {
                log::debug!("loading manifest from: {}", path);
                Self::from_file(path)
            }
            None => {
                log::debug!("using built-in presets");
                Ok(Self::builtin())
            }
        }
    }

    /// Looks up a preset by name and validates it.
    pub fn preset(&self, name: &str) -> Result<&Preset, ManifestError> {
        let preset = self
            .0
            .get(name)
            .ok_or_else(|| ManifestError::PresetNotFound {
                name: name.to_string(),
                available: self.names().join(", "),
            })?;

        preset.validate(name)?;

        Ok(preset)
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FileOperation;

    #[test]
    fn test_builtin_default_preset() {
        let manifest = Manifest::builtin();
        let preset = manifest.preset(DEFAULT_PRESET).unwrap();

        assert_eq!(preset.folder, "abd");
        assert_eq!(preset.files.len(), 12);
        assert_eq!(preset.files.first().map(String::as_str), Some(".gitignore"));
        assert_eq!(manifest.names(), vec!["web", "pages"]);
    }

    #[test]
    fn test_parse_keeps_preset_order() {
        let content = r#"
[zeta]
folder = "z"
files = ["a.txt"]

[alpha]
folder = "a"
files = ["b.txt", "c.txt"]
"#;
        let manifest = Manifest::parse(content, Path::new("husk.toml")).unwrap();

        assert_eq!(manifest.names(), vec!["zeta", "alpha"]);
        assert_eq!(
            manifest.preset("alpha").unwrap(),
            &Preset::new("a", vec!["b.txt".into(), "c.txt".into()])
        );
    }

    #[test]
    fn test_parse_rejects_missing_files_key() {
        let content = "[broken]\nfolder = \"x\"\n";
        let result = Manifest::parse(content, Path::new("husk.toml"));

        assert!(matches!(result, Err(ManifestError::ParseToml { .. })));
    }

    #[test]
    fn test_preset_not_found_lists_available() {
        let error = Manifest::builtin().preset("nope").unwrap_err();

        match error {
            ManifestError::PresetNotFound { name, available } => {
                assert_eq!(name, "nope");
                assert_eq!(available, "web, pages");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_empty_inputs() {
        assert!(matches!(
            Preset::new("", vec!["a".into()]).validate("p"),
            Err(ManifestError::EmptyFolder { .. })
        ));
        assert!(matches!(
            Preset::new("dir", vec![]).validate("p"),
            Err(ManifestError::EmptyFiles { .. })
        ));
        assert!(matches!(
            Preset::new("dir", vec!["a".into(), "".into()]).validate("p"),
            Err(ManifestError::EmptyFileName { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_allows_duplicates() {
        let preset = Preset::new("dir", vec!["a".into(), "a".into()]);

        assert!(preset.validate("p").is_ok());
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = Manifest::from_file(tmp.path().join("absent.toml"));

        match result {
            Err(ManifestError::Io(error)) => assert_eq!(error.operation, FileOperation::Read),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
