use crate::domain::models::{InstallReport, RcStatus, ScriptStatus};
use crate::services::storage::write_atomic;
use sha2::{Digest, Sha256};
use std::io;
use std::path::{Path, PathBuf};

pub const SHELL_SCRIPT: &str = include_str!("../../shell/claude-emotion.sh");
pub const SCRIPT_FILE_NAME: &str = "claude-emotion.sh";
const RC_MARKER: &str = "# claude-emotion shell integration";

#[derive(thiserror::Error, Debug)]
pub enum InstallError {
    #[error("no install location: HOME is not set and no --shell-dir was given")]
    NoInstallDir,
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct InstallTarget {
    pub script_dir: PathBuf,
    /// `None` leaves every rc file alone.
    pub rc_file: Option<PathBuf>,
}

/// Writes the integration script into `target.script_dir` and makes the rc
/// file source it. Safe to re-run: identical content is left in place.
pub fn install_shell(target: &InstallTarget) -> Result<InstallReport, InstallError> {
    // The rc line must not depend on the working directory of future shells.
    let script_dir = absolute(&target.script_dir)?;
    std::fs::create_dir_all(&script_dir).map_err(|source| InstallError::CreateDir {
        path: script_dir.clone(),
        source,
    })?;

    let script_path = script_dir.join(SCRIPT_FILE_NAME);
    let digest = sha256_hex(SHELL_SCRIPT.as_bytes());
    let status = match std::fs::read(&script_path) {
        Ok(existing) if sha256_hex(&existing) == digest => ScriptStatus::Unchanged,
        Ok(_) => {
            write_script(&script_path)?;
            ScriptStatus::Updated
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            write_script(&script_path)?;
            ScriptStatus::Installed
        }
        Err(source) => {
            return Err(InstallError::Read {
                path: script_path,
                source,
            })
        }
    };
    tracing::debug!(path = %script_path.display(), ?status, "shell script");

    let rc_file = target.rc_file.as_deref().map(absolute).transpose()?;
    let rc_status = match &rc_file {
        Some(rc) => ensure_sourced(rc, &script_path)?,
        None => RcStatus::Skipped,
    };
    tracing::debug!(?rc_file, ?rc_status, "rc file");

    Ok(InstallReport {
        script_path: script_path.to_string_lossy().to_string(),
        status,
        sha256: digest,
        rc_file: rc_file.map(|p| p.to_string_lossy().to_string()),
        rc_status,
    })
}

fn absolute(path: &Path) -> Result<PathBuf, InstallError> {
    std::path::absolute(path).map_err(|source| InstallError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Follows a symlinked rc file (dotfile managers link `~/.zshrc`) so the
/// rename lands on the real file and the link survives.
fn rc_write_target(rc: &Path) -> Result<PathBuf, InstallError> {
    let is_link = std::fs::symlink_metadata(rc)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return Ok(rc.to_path_buf());
    }
    match std::fs::canonicalize(rc) {
        Ok(real) => Ok(real),
        // Dangling link: write where it points.
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let link = std::fs::read_link(rc).map_err(|source| InstallError::Read {
                path: rc.to_path_buf(),
                source,
            })?;
            Ok(match rc.parent() {
                Some(parent) if link.is_relative() => parent.join(link),
                _ => link,
            })
        }
        Err(source) => Err(InstallError::Read {
            path: rc.to_path_buf(),
            source,
        }),
    }
}

fn write_script(path: &Path) -> Result<(), InstallError> {
    write_atomic(path, SHELL_SCRIPT.as_bytes()).map_err(|source| InstallError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Appends a guarded `source` line to `rc` unless some uncommented line
/// already mentions the script path.
fn ensure_sourced(rc: &Path, script_path: &Path) -> Result<RcStatus, InstallError> {
    let rc = &rc_write_target(rc)?;
    let mut content = match std::fs::read_to_string(rc) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(InstallError::Read {
                path: rc.to_path_buf(),
                source,
            })
        }
    };

    let script = script_path.to_string_lossy();
    let already = content
        .lines()
        .any(|l| !l.trim_start().starts_with('#') && l.contains(script.as_ref()));
    if already {
        return Ok(RcStatus::Present);
    }

    if !content.is_empty() {
        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push('\n');
    }
    content.push_str(RC_MARKER);
    content.push('\n');
    content.push_str(&source_line(script_path));
    content.push('\n');

    if let Some(parent) = rc.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| InstallError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_atomic(rc, content.as_bytes()).map_err(|source| InstallError::Write {
        path: rc.to_path_buf(),
        source,
    })?;
    Ok(RcStatus::Added)
}

/// The script uses bash/zsh syntax, so the line is a no-op under plain `sh`.
pub fn source_line(script_path: &Path) -> String {
    let quoted = shell_quote(&script_path.to_string_lossy());
    format!("[ -n \"${{BASH_VERSION:-}}${{ZSH_VERSION:-}}\" ] && [ -f {quoted} ] && . {quoted}")
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
