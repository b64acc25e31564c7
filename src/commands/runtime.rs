use crate::cli::{Cli, Mode};
use crate::services::filter::{filter_stream, process};
use crate::services::output::print_out;
use crate::services::settings::Settings;
use crate::services::tags::list_emotions;
use std::io::{self, Write};

pub fn handle_runtime_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    match cli.mode() {
        Mode::ListEmotions => {
            print_out(cli.json, &list_emotions(), |e| {
                format!("{}\t{}\t{}", e.tag, e.label, e.face)
            })?;
        }
        Mode::Filter => run_filter(cli, settings)?,
        Mode::InstallShell | Mode::PrintShell => {}
    }
    Ok(())
}

fn run_filter(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let result = if cli.text.is_empty() {
        filter_stream(io::stdin().lock(), io::stdout().lock(), settings.style).map(|emotion| {
            tracing::debug!(?emotion, "stdin filtered");
        })
    } else {
        let mut out = process(&cli.text.join(" "), settings.style);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(out.as_bytes()).and_then(|()| stdout.flush())
    };

    match result {
        // The reader went away (e.g. `| head`); nothing left to deliver.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(Into::into),
    }
}
