use crate::{
    errors::{FileOperation, IoError},
    layout::Layout,
};
use colored::Colorize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Creates every folder and file described by `layout` under `base_dir`.
///
/// Entries are applied in order. Directory creation is recursive and does
/// not fail when the directory already exists; template layouts rely on
/// this to reuse parent paths such as `client/src` and
/// `client/src/components`. Files are created empty, overwriting any
/// same-named artifact without an existence check.
///
/// Side effects are strictly additive and there is no rollback: when a
/// later entry fails, everything created before it stays on disk.
///
/// # Errors
///
/// Returns an [`IoError`] when the underlying directory creation or file
/// write is denied.
pub fn materialize(base_dir: &Path, layout: &Layout) -> Result<(), IoError> {
    for entry in &layout.entries {
        create_folder_and_files(base_dir, Path::new(&entry.folder), &entry.files)?;
    }

    Ok(())
}

/// Creates `root/folder` together with any missing ancestors, then each
/// non-empty name in `files` as an empty artifact directly inside it.
/// Empty names are slot placeholders and are skipped. Returns the absolute
/// folder path.
pub fn create_folder_and_files(
    root: &Path,
    folder: &Path,
    files: &[String],
) -> Result<PathBuf, IoError> {
    let dir = root.join(folder);

    fs::create_dir_all(&dir)
        .map_err(|error| IoError::new(FileOperation::Mkdir, dir.clone(), error))?;

    log::debug!("directory ready: {}", dir.display());

    for name in files {
        if name.is_empty() {
            continue;
        }

        create_empty_file(&dir, name)?;
    }

    Ok(dir)
}

/// Creates a single zero-length artifact named `file_name` inside `dir`,
/// overwriting any previous artifact of that name.
pub fn create_empty_file(dir: &Path, file_name: &str) -> Result<PathBuf, IoError> {
    let path = dir.join(file_name);

    fs::write(&path, "")
        .map_err(|error| IoError::new(FileOperation::Write, path.clone(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(path)
}
