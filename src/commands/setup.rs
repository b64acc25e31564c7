use crate::cli::{Cli, Mode};
use crate::domain::models::{InstallReport, RcStatus, ScriptStatus};
use crate::services::output::print_one;
use crate::services::settings::Settings;
use crate::services::shell::{
    install_shell, source_line, InstallError, InstallTarget, SHELL_SCRIPT,
};
use std::io::Write;
use std::path::Path;

pub fn handle_setup_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<bool> {
    match cli.mode() {
        Mode::InstallShell => {
            let script_dir = settings
                .shell_dir
                .clone()
                .ok_or(InstallError::NoInstallDir)?;
            let report = install_shell(&InstallTarget {
                script_dir,
                rc_file: settings.rc_file.clone(),
            })?;
            tracing::info!(
                script = %report.script_path,
                status = ?report.status,
                rc_status = ?report.rc_status,
                "shell integration installed"
            );
            print_one(cli.json, report, install_summary)?;
        }
        Mode::PrintShell => {
            let mut out = std::io::stdout().lock();
            out.write_all(SHELL_SCRIPT.as_bytes())?;
            out.flush()?;
        }
        Mode::Filter | Mode::ListEmotions => return Ok(false),
    }
    Ok(true)
}

fn install_summary(r: &InstallReport) -> String {
    let script = Path::new(&r.script_path);
    let mut lines = vec![match r.status {
        ScriptStatus::Installed => format!("installed {}", r.script_path),
        ScriptStatus::Updated => format!("updated {}", r.script_path),
        ScriptStatus::Unchanged => format!("{} is up to date", r.script_path),
    }];
    let rc = r.rc_file.as_deref().unwrap_or_default();
    match r.rc_status {
        RcStatus::Added => lines.push(format!("added source line to {rc}")),
        RcStatus::Present => lines.push(format!("{rc} already sources it")),
        RcStatus::Skipped => {
            lines.push("rc file left untouched; add this line to your shell rc:".to_string());
            lines.push(format!("  {}", source_line(script)));
        }
    }
    if r.rc_status == RcStatus::Added || r.status != ScriptStatus::Unchanged {
        lines.push("restart your terminal to pick up the changes".to_string());
    }
    lines.join("\n")
}
