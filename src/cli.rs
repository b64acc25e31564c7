use clap::{ArgGroup, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const BIN_NAME: &str = "claude-emotion";

#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    version,
    about = "Render the emotion tag at the start of a Claude response as ASCII art",
    after_help = "Pipe a response in, or pass it as arguments:\n  echo '[helpful] Sure thing' | claude-emotion\n  claude-emotion '[analytical] Let us look at this'"
)]
#[command(group(
    ArgGroup::new("mode")
        .args(["list_emotions", "install_shell", "print_shell", "text"])
        .multiple(false)
))]
pub struct Cli {
    #[arg(long, help = "List the known emotion tags")]
    pub list_emotions: bool,
    #[arg(long, help = "Install the shell integration script and source it from your rc file")]
    pub install_shell: bool,
    #[arg(long, help = "Print the shell integration script to stdout")]
    pub print_shell: bool,
    #[arg(long, help = "Output machine-readable JSON (--list-emotions, --install-shell)")]
    pub json: bool,
    #[arg(
        long,
        value_enum,
        env = "CLAUDE_EMOTION_STYLE",
        help = "Decoration style for a recognized tag"
    )]
    pub style: Option<DecorationStyle>,
    #[arg(
        long,
        value_name = "DIR",
        env = "CLAUDE_EMOTION_SHELL_DIR",
        help = "Directory the shell integration script is installed into"
    )]
    pub shell_dir: Option<PathBuf>,
    #[arg(
        long,
        value_name = "FILE",
        env = "CLAUDE_EMOTION_RC_FILE",
        help = "Shell rc file that should source the integration script"
    )]
    pub rc_file: Option<PathBuf>,
    #[arg(
        long,
        conflicts_with = "rc_file",
        help = "Install the script without touching any rc file"
    )]
    pub no_rc: bool,
    #[arg(
        value_name = "TEXT",
        help = "Response text to decorate; read from stdin when omitted"
    )]
    pub text: Vec<String>,
}

/// The single operation one invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Filter,
    ListEmotions,
    InstallShell,
    PrintShell,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.list_emotions {
            Mode::ListEmotions
        } else if self.install_shell {
            Mode::InstallShell
        } else if self.print_shell {
            Mode::PrintShell
        } else {
            Mode::Filter
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DecorationStyle {
    /// Framed banner with the label and art, followed by the response.
    #[default]
    Box,
    /// Face and label on the same line as the response.
    Compact,
}
