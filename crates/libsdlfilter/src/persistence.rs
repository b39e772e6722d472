use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, WriteOutputError>;

const BACKUP_PREFIX: &str = ".bk.";

#[derive(Debug, thiserror::Error)]
pub enum ReadSourceError {
    #[error("schema source {0:?} does not exist or is not a file")]
    NotAFile(PathBuf),

    #[error("schema source {0:?} is not valid UTF-8")]
    NotUtf8(PathBuf),

    #[error("failed to read schema source {path:?}: {err}")]
    Unreadable {
        err: std::io::Error,
        path: PathBuf,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum WriteOutputError {
    #[error("failed to back up {dest_path:?} to {backup_path:?}: {err}")]
    BackupFailed {
        backup_path: PathBuf,
        dest_path: PathBuf,
        err: std::io::Error,
    },

    #[error("destination path {0:?} has no file name")]
    MissingFileName(PathBuf),

    #[error("failed to write {dest_path:?}: {err}")]
    WriteFailed {
        dest_path: PathBuf,
        err: std::io::Error,
    },
}

/// Reads the schema text at `source_path`.
pub fn read_source(source_path: &Path) -> std::result::Result<String, ReadSourceError> {
    if !source_path.is_file() {
        return Err(ReadSourceError::NotAFile(source_path.to_path_buf()));
    }
    std::fs::read_to_string(source_path).map_err(|err| match err.kind() {
        ErrorKind::InvalidData => ReadSourceError::NotUtf8(source_path.to_path_buf()),
        _ => ReadSourceError::Unreadable {
            err,
            path: source_path.to_path_buf(),
        },
    })
}

/// The sibling path a destination file is backed up to before being
/// overwritten: `dir/.bk.<basename>`.
pub fn backup_path(dest_path: &Path) -> Result<PathBuf> {
    let file_name = dest_path.file_name()
        .ok_or_else(|| WriteOutputError::MissingFileName(dest_path.to_path_buf()))?;
    let mut backup_name = std::ffi::OsString::from(BACKUP_PREFIX);
    backup_name.push(file_name);
    Ok(dest_path.with_file_name(backup_name))
}

/// Writes `content` to `dest_path`.
///
/// When `dest_path` already exists its current content is first copied to
/// [`backup_path`], replacing any earlier backup. Returns the backup path if
/// one was written.
pub fn write_with_backup(dest_path: &Path, content: &str) -> Result<Option<PathBuf>> {
    let backup =
        if dest_path.exists() {
            let backup_path = backup_path(dest_path)?;
            std::fs::copy(dest_path, &backup_path)
                .map_err(|err| WriteOutputError::BackupFailed {
                    backup_path: backup_path.to_owned(),
                    dest_path: dest_path.to_path_buf(),
                    err,
                })?;
            log::debug!("Backed up {dest_path:?} to {backup_path:?}.");
            Some(backup_path)
        } else {
            None
        };

    std::fs::write(dest_path, content)
        .map_err(|err| WriteOutputError::WriteFailed {
            dest_path: dest_path.to_path_buf(),
            err,
        })?;

    Ok(backup)
}
