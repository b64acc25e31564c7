use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

pub fn config_dir(home: &Path) -> PathBuf {
    home.join(".config/claude-emotion")
}

pub fn config_path(home: &Path) -> PathBuf {
    config_dir(home).join("config.toml")
}

/// Where `--install-shell` puts the script unless told otherwise.
pub fn default_script_dir(home: &Path) -> PathBuf {
    config_dir(home)
}

/// Picks the rc file for the user's login shell (`$SHELL`). The script needs
/// bash or zsh, so any other shell gets `None` and no rc file is touched.
pub fn default_rc_file(home: &Path, login_shell: Option<&str>) -> Option<PathBuf> {
    let shell = login_shell
        .and_then(|s| Path::new(s).file_name())
        .and_then(|s| s.to_str())?;
    match shell {
        "zsh" => Some(home.join(".zshrc")),
        "bash" => Some(home.join(".bashrc")),
        _ => None,
    }
}

/// Replaces `path` with `contents` so readers only ever see the old or the new file.
///
/// The temp file lives next to `path` so the final rename stays on one
/// filesystem. An existing file's permissions carry over; new files get 0644.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    write_atomic_with(path, |f| f.write_all(contents))
}

/// Like [`write_atomic`], with `fill` producing the contents. If `fill` or
/// any later step fails, the temp file is removed and `path` is untouched.
pub fn write_atomic_with(
    path: &Path,
    fill: impl FnOnce(&mut File) -> io::Result<()>,
) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    fill(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;

    match std::fs::metadata(path) {
        Ok(meta) => std::fs::set_permissions(tmp.path(), meta.permissions())?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o644))?;
            }
        }
        Err(e) => return Err(e),
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
