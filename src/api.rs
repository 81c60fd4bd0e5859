use crate::{
    manifest::{self, Manifest, Preset},
    scaffold::{self, Report},
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HuskError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] manifest::ManifestError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),
}

fn scaffold_preset(preset: &Preset, dry_run: bool) -> Result<Report, HuskError> {
    let plan = scaffold::plan(preset.target_dir(), &preset.files);

    if dry_run {
        return Ok(scaffold::preview(&plan));
    }

    Ok(scaffold::apply(&plan)?)
}

/// Creates the placeholder files described by the preset `name`.
///
/// Presets come from the manifest at `manifest_path`, or the built-in presets when
/// it is `None`. With `dry_run`, the files are previewed and nothing is written.
///
/// # Errors
///
/// Returns a [`HuskError`] if:
///
/// - The manifest cannot be read or parsed.
/// - The preset does not exist or has an empty folder, file list, or filename.
/// - The target directory or any file cannot be created or written to.
pub fn create_preset(
    manifest_path: Option<&str>,
    name: &str,
    dry_run: bool,
) -> Result<Report, HuskError> {
    let manifest = Manifest::load(manifest_path)?;

    let preset = manifest.preset(name)?;

    log::debug!(
        "scaffolding preset '{}' into '{}'",
        name,
        preset.folder
    );

    scaffold_preset(preset, dry_run)
}

/// Creates placeholder `files` inside `folder`, given directly instead of through a preset.
///
/// # Errors
///
/// Returns a [`HuskError`] if the inputs are empty or a filesystem operation fails.
pub fn create_files(folder: &str, files: &[String], dry_run: bool) -> Result<Report, HuskError> {
    let preset = Preset::new(folder, files.to_vec());

    preset.validate("command line")?;

    scaffold_preset(&preset, dry_run)
}

/// Loads the available presets.
///
/// # Errors
///
/// Returns a [`HuskError`] if the manifest cannot be read or parsed.
pub fn list_presets(manifest_path: Option<&str>) -> Result<Manifest, HuskError> {
    Ok(Manifest::load(manifest_path)?)
}
