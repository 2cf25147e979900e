use tabled::{builder::Builder, settings::Style, Table, Tabled};

use std::path::Path;
use std::{fmt, fs, io};

use log::debug;
use serde::Serialize;

use crate::{Error, Instruction, Opcode, Result, ValidationReport, MAX_INSTRUCTIONS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Json,
}

enum Status {
    Ok,
    UnknownOpcode,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::UnknownOpcode => write!(f, "unknown opcode"),
        }
    }
}

#[derive(Tabled)]
struct InstructionRow {
    line: usize,
    op: String,
    args: String,
    comment: String,
    status: Status,
}

impl InstructionRow {
    fn new(ins: &Instruction) -> Self {
        let status = if Opcode::is_known(&ins.op) {
            Status::Ok
        } else {
            Status::UnknownOpcode
        };

        Self {
            line: ins.line,
            op: ins.op.clone(),
            args: ins.args.clone(),
            comment: ins.comment.clone(),
            status,
        }
    }
}

/// A validated input, as emitted by `--format json`.
#[derive(Serialize)]
pub struct FileReport {
    pub file: String,
    pub report: ValidationReport,
}

/// Validates each input and prints its report. An empty list, or a `-`
/// entry, reads from stdin. JSON output is a single array with one entry
/// per input.
///
/// Returns whether every input was valid.
pub fn check<P: AsRef<Path>>(paths: &[P], format: Format) -> Result<bool> {
    let reports = if paths.is_empty() {
        vec![check_one(Path::new("-"))?]
    } else {
        paths
            .iter()
            .map(|path| check_one(path.as_ref()))
            .collect::<Result<Vec<_>>>()?
    };

    match format {
        Format::Table => {
            for r in &reports {
                println!("{}", render_table(&r.file, &r.report));
            }
        }
        Format::Json => println!("{}", render_json(&reports)?),
    }

    Ok(reports.iter().all(|r| r.report.valid()))
}

fn check_one(path: &Path) -> Result<FileReport> {
    let (file, source) = read_source(path)?;
    debug!("checking {file}");

    let report = crate::validate(&source);

    Ok(FileReport { file, report })
}

fn read_source(path: &Path) -> Result<(String, String)> {
    if path == Path::new("-") {
        let name = "<stdin>".to_owned();
        let source = io::read_to_string(io::stdin()).map_err(|source| Error::Read {
            path: name.clone(),
            source,
        })?;
        return Ok((name, source));
    }

    let name = path.display().to_string();
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: name.clone(),
        source,
    })?;

    Ok((name, source))
}

pub fn render_table(name: &str, report: &ValidationReport) -> String {
    let rows: Vec<_> = report.instructions().iter().map(InstructionRow::new).collect();
    let table = Table::new(rows).with(Style::sharp()).to_string();

    let mut out = format!("--- {name} ---\n{table}\n");

    if report.valid() {
        out.push_str(&format!(
            "valid ({}/{} instructions)",
            report.instructions().len(),
            MAX_INSTRUCTIONS
        ));
    } else {
        out.push_str("invalid:");
        for e in report.errors() {
            out.push_str(&format!("\n  {e}"));
        }
    }

    out
}

pub fn render_json(reports: &[FileReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

pub fn list_opcodes() {
    let mut builder = Builder::default();
    builder.push_record(["opcode"]);

    for op in Opcode::ALL {
        builder.push_record([op.mnemonic()]);
    }

    let table = builder.build().with(Style::sharp()).to_string();
    println!("{table}");
    println!("max instructions: {MAX_INSTRUCTIONS}");
}
