//! Capability-based file access for instance inputs and model exports,
//! built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open an existing file for reading.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Whether `path` names a regular file rather than a directory or other
/// entry.
///
/// A missing path surfaces as an [`io::ErrorKind::NotFound`] error.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent(path)?;
    dir.metadata(name).map(|metadata| metadata.is_file())
}

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => {
            fs_utf8::Dir::create_ambient_dir_all(parent, ambient_authority())
        }
        _ => Ok(()),
    }
}

/// Create or truncate `path` for writing, creating missing parent
/// directories first.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_parent(path)?;
    dir.create(name)
}

/// Open the directory holding `path` and return it with the file name.
fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} does not name a file"),
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}
