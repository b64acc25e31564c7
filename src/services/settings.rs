use crate::cli::{Cli, DecorationStyle};
use crate::domain::models::ConfigFile;
use crate::services::storage::{config_path, default_rc_file, default_script_dir};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything one invocation needs, after flags, env and the config file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub style: DecorationStyle,
    /// `None` only when there is neither a HOME nor an explicit directory.
    pub shell_dir: Option<PathBuf>,
    /// `None` when rc updates are turned off or no rc file can be derived.
    pub rc_file: Option<PathBuf>,
}

/// Reads the config file under `home`. A missing file or an unknown home yields defaults.
pub fn load_config(home: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    let Some(home) = home else {
        return Ok(ConfigFile::default());
    };
    let path = config_path(home);
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
}

/// Flags and env (both arrive through clap) win over the config file, which wins over defaults.
pub fn resolve(
    cli: &Cli,
    config: &ConfigFile,
    home: Option<&Path>,
    login_shell: Option<&str>,
) -> Settings {
    let style = cli.style.or(config.style).unwrap_or_default();

    let shell_dir = cli
        .shell_dir
        .clone()
        .or_else(|| config.shell.dir.clone())
        .or_else(|| home.map(default_script_dir));

    let update_rc =
        !cli.no_rc && (cli.rc_file.is_some() || config.shell.update_rc.unwrap_or(true));
    let rc_file = if update_rc {
        cli.rc_file
            .clone()
            .or_else(|| config.shell.rc_file.clone())
            .or_else(|| home.and_then(|h| default_rc_file(h, login_shell)))
    } else {
        None
    };

    Settings {
        style,
        shell_dir,
        rc_file,
    }
}
