use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

/// Prints `data` as a `{"ok": true, "data": [...]}` envelope, or one `row` per item.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        )?;
    } else {
        for d in data {
            writeln!(out, "{}", row(d))?;
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        )?;
    } else {
        writeln!(out, "{}", row(&data))?;
    }
    Ok(())
}
