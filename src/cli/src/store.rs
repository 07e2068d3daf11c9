//! Cube state files: the serialized sticker string and nothing else.

use std::{fs, io, path::Path};

use color_eyre::eyre::WrapErr;
use log::debug;
use twisty_core::Cube;

/// Write `cube` to `path`, replacing any previous contents.
///
/// # Errors
///
/// Fails if the file cannot be written.
pub fn save(cube: &Cube, path: &Path) -> color_eyre::Result<()> {
    fs::write(path, cube.to_cube_string())
        .wrap_err_with(|| format!("Failed to save cube to {}", path.display()))?;
    debug!("Saved {cube} to {}", path.display());
    Ok(())
}

/// Read a cube from `path`, detecting its size. Surrounding whitespace is
/// ignored.
///
/// # Errors
///
/// Fails if the file cannot be read or does not hold a valid cube.
pub fn load(path: &Path) -> color_eyre::Result<Cube> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read cube from {}", path.display()))?;
    let cube = text
        .trim()
        .parse::<Cube>()
        .wrap_err_with(|| format!("Invalid cube in {}", path.display()))?;
    debug!("Loaded {cube} from {}", path.display());
    Ok(cube)
}

/// Like [`load`], but a missing file is `Ok(None)`.
///
/// # Errors
///
/// See [`load`].
pub fn load_if_present(path: &Path) -> color_eyre::Result<Option<Cube>> {
    match fs::metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        _ => load(path).map(Some),
    }
}
