//! Serialization and file output.
//!
//! Every artifact is rendered fully in memory, then written to a temporary
//! file beside its destination and renamed over it, so readers never see a
//! half-written index.

pub mod timelinejs;

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tempfile::{Builder, NamedTempFile};

use crate::error::{IndexError, IndexResult};

pub use timelinejs::{age_phrase, to_timelinejs_csv, AGE_PHRASES, TIMELINEJS_HEADERS};

/// Pretty-printed JSON with two-space indentation
pub fn to_pretty_json<T: Serialize>(value: &T) -> IndexResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Replace `path` with `contents`, creating parent directories as needed
pub fn write_atomic(path: &Path, contents: &str) -> IndexResult<()> {
    let write_err = |source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = temp_file_for(parent, path).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

/// Temporary file in `parent` carrying the permissions `path` should end
/// up with: those of the existing file, otherwise what a plain create
/// under the current umask would give.
fn temp_file_for(parent: &Path, path: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".tmp-");

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        // Mode is passed to open(2), so the umask still applies
        builder.permissions(Permissions::from_mode(0o666));
    }

    let tmp = builder.tempfile_in(parent)?;
    match std::fs::metadata(path) {
        Ok(existing) => tmp.as_file().set_permissions(existing.permissions())?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    Ok(tmp)
}
