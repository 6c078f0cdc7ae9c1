use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use linkcheck_lib::{
    LocalPathReport, SchemeReport, StorageConfig, classify, get_local_path, validate_local_path,
};

use crate::args::{Action, Cli};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
pub struct ResolveRow {
    pub input: String,
    pub resolved: Option<String>,
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
pub struct CheckRow {
    pub input: String,
    #[cfg_attr(feature = "with-serde", serde(flatten))]
    pub report: LocalPathReport,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub code: Option<&'static str>,
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(untagged))]
pub enum OutputRow {
    Scheme(SchemeReport),
    Resolve(ResolveRow),
    Check(CheckRow),
}

impl OutputRow {
    /// Negative rows drive exit code 2.
    pub fn ok(&self) -> bool {
        match self {
            Self::Scheme(report) => report.is_known(),
            Self::Resolve(row) => row.resolved.is_some(),
            Self::Check(row) => row.report.valid,
        }
    }
}

pub fn make_row(action: Action, input: &str, config: &StorageConfig) -> OutputRow {
    match action {
        Action::Classify => OutputRow::Scheme(classify(input)),
        Action::Resolve => OutputRow::Resolve(ResolveRow {
            input: input.to_string(),
            resolved: get_local_path(input, config).map(|p| p.to_string_lossy().into_owned()),
        }),
        Action::CheckPath => {
            let result = validate_local_path(input);
            let code = result.as_ref().err().map(|err| err.code());
            OutputRow::Check(CheckRow {
                input: input.to_string(),
                report: LocalPathReport::from(result),
                code,
            })
        }
    }
}

pub fn write_reports(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    let bytes = match cli.format.as_str() {
        "human" => {
            write_human(rows);
            return Ok(());
        }
        "json" => render_json(rows)?,
        "ndjson" => render_ndjson(rows)?,
        "csv" => render_csv(rows)?,
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    };
    emit(&bytes, cli.out.as_deref())
}

pub fn any_negative(rows: &[OutputRow]) -> bool {
    rows.iter().any(|row| !row.ok())
}

fn write_human(rows: &[OutputRow]) {
    for row in rows {
        println!("{}", human_line(row));
    }
}

fn human_line(row: &OutputRow) -> String {
    match row {
        OutputRow::Scheme(report) if report.is_known() => {
            let kinds: Vec<&str> = report.matches().iter().map(|k| k.as_str()).collect();
            format!("[OK]    {} :: {}", report.input, kinds.join(", "))
        }
        OutputRow::Scheme(report) => format!("[UNKNOWN] {}", report.input),
        OutputRow::Resolve(ResolveRow {
            input,
            resolved: Some(path),
        }) => format!("[OK]    {input} -> {path}"),
        OutputRow::Resolve(ResolveRow { input, .. }) => {
            format!("[SKIP]  {input} :: not a local: destination")
        }
        OutputRow::Check(row) if row.report.valid => format!("[OK]    {}", row.input),
        OutputRow::Check(row) => format!("[INVALID] {} :: {}", row.input, row.report.reason),
    }
}

#[cfg(feature = "with-serde")]
fn render_json(rows: &[OutputRow]) -> Result<Vec<u8>> {
    let mut buf = serde_json::to_vec_pretty(rows)?;
    buf.push(b'\n');
    Ok(buf)
}

#[cfg(not(feature = "with-serde"))]
fn render_json(_: &[OutputRow]) -> Result<Vec<u8>> {
    bail!("format=json nécessite la feature 'with-serde'")
}

// une ligne JSON par entrée
#[cfg(feature = "with-serde")]
fn render_ndjson(rows: &[OutputRow]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    for row in rows {
        serde_json::to_writer(&mut buf, row)?;
        buf.push(b'\n');
    }
    Ok(buf)
}

#[cfg(not(feature = "with-serde"))]
fn render_ndjson(_: &[OutputRow]) -> Result<Vec<u8>> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn render_csv(rows: &[OutputRow]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.write_record(csv_record(row))?;
    }
    wtr.into_inner()
        .map_err(|err| err.into_error())
        .context("flush csv buffer")
}

#[cfg(not(feature = "with-csv"))]
fn render_csv(_: &[OutputRow]) -> Result<Vec<u8>> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

// colonnes: entrée, statut, détail
#[cfg(feature = "with-csv")]
fn csv_record(row: &OutputRow) -> Vec<String> {
    match row {
        OutputRow::Scheme(report) => {
            let kinds: Vec<&str> = report.matches().iter().map(|k| k.as_str()).collect();
            vec![
                report.input.clone(),
                report.primary.as_str().to_string(),
                kinds.join("|"),
            ]
        }
        OutputRow::Resolve(r) => vec![
            r.input.clone(),
            r.resolved.is_some().to_string(),
            r.resolved.clone().unwrap_or_default(),
        ],
        OutputRow::Check(r) => vec![
            r.input.clone(),
            r.code.unwrap_or("ok").to_string(),
            r.report.reason.clone(),
        ],
    }
}

/// `--out` gets the whole report through a rename, stdout otherwise.
fn emit(bytes: &[u8], out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => write_all_atomically(path, bytes),
        None => io::stdout().lock().write_all(bytes).context("write stdout"),
    }
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    let tmp = format!("{path}.tmp");
    let mut f = File::create(&tmp).with_context(|| format!("create {tmp}"))?;
    f.write_all(bytes)?;
    f.sync_all()?;
    drop(f);
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_report_negative_outcomes() {
        let cfg = StorageConfig::new("/base");
        assert!(make_row(Action::Classify, "https://example.com", &cfg).ok());
        assert!(!make_row(Action::Classify, "nothing", &cfg).ok());
        assert!(make_row(Action::Resolve, "local:dl", &cfg).ok());
        assert!(!make_row(Action::Resolve, "gdrive:dl", &cfg).ok());
        assert!(!make_row(Action::CheckPath, "", &cfg).ok());
    }

    #[test]
    fn human_lines() {
        let cfg = StorageConfig::new("/base");
        let row = make_row(Action::Resolve, "local:dl", &cfg);
        assert_eq!(human_line(&row), "[OK]    local:dl -> /base/dl");

        let row = make_row(Action::CheckPath, "rel", &cfg);
        assert_eq!(
            human_line(&row),
            "[INVALID] rel :: Path must be absolute, got relative path: rel"
        );

        let row = make_row(Action::Classify, "rcl", &cfg);
        assert_eq!(human_line(&row), "[OK]    rcl :: rclone_path");
    }

    #[test]
    fn out_file_is_replaced_whole() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("report.ndjson");
        let out = out.to_str().expect("utf-8 temp path");

        std::fs::write(out, b"stale").expect("seed");
        emit(b"{\"ok\":true}\n", Some(out)).expect("emit");

        assert_eq!(std::fs::read(out).expect("read"), b"{\"ok\":true}\n");
        assert!(!std::path::Path::new(&format!("{out}.tmp")).exists());
    }
}
