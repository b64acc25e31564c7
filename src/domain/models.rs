use crate::cli::DecorationStyle;
use crate::domain::emotion::Emotion;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionEntry {
    pub tag: &'static str,
    pub label: &'static str,
    pub face: &'static str,
    pub art: &'static str,
}

impl From<Emotion> for EmotionEntry {
    fn from(e: Emotion) -> Self {
        Self {
            tag: e.tag(),
            label: e.label(),
            face: e.face(),
            art: e.art(),
        }
    }
}

/// `$HOME/.config/claude-emotion/config.toml`
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub style: Option<DecorationStyle>,
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub rc_file: Option<PathBuf>,
    #[serde(default)]
    pub update_rc: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStatus {
    Installed,
    Updated,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RcStatus {
    Added,
    Present,
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub script_path: String,
    pub status: ScriptStatus,
    pub sha256: String,
    pub rc_file: Option<String>,
    pub rc_status: RcStatus,
}
