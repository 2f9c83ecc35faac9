//! Cellgrid - set cells from the command line and print their values.

use anyhow::{Context, Result, anyhow};
use cellgrid_core::{CellRef, EmptyCellPolicy, MessageSink, Sheet, TableAdapter, load_config};
use cellgrid_engine::engine::EvalOptions;
use std::env;
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage: cellgrid [OPTIONS] [CELL=CONTENT]...");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [CELL=CONTENT]            Set a cell, e.g. A0=1.5 or B3==A0");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -g, --get <CELL>          Print the value of a cell (can be repeated)");
    eprintln!("  -s, --show                Print the whole grid");
    eprintln!("  -k, --keep-going          Report errors and continue instead of stopping");
    eprintln!("  --config <FILE>           Load configuration from FILE");
    eprintln!("  --no-config               Ignore the user configuration file");
    eprintln!("  --strict-empty            Referencing an empty cell is an invalid value");
    eprintln!("  -h, --help                Print help");
}

#[derive(Debug, Default)]
struct Options {
    assignments: Vec<(CellRef, String)>,
    gets: Vec<CellRef>,
    show: bool,
    keep_going: bool,
    config_file: Option<PathBuf>,
    no_config: bool,
    strict_empty: bool,
}

/// Returns None when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "-g" | "--get" => {
                i += 1;
                let label = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--get requires a cell"))?;
                options.gets.push(parse_cell(label)?);
            }
            "-s" | "--show" => options.show = true,
            "-k" | "--keep-going" => options.keep_going = true,
            "--config" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_file = Some(PathBuf::from(path));
            }
            "--no-config" => options.no_config = true,
            "--strict-empty" => options.strict_empty = true,
            arg if arg.starts_with('-') => return Err(anyhow!("Unknown option: {}", arg)),
            arg => options.assignments.push(parse_assignment(arg)?),
        }
        i += 1;
    }

    if options.gets.is_empty() {
        options.show = true;
    }
    Ok(Some(options))
}

fn parse_cell(label: &str) -> Result<CellRef> {
    label.parse::<CellRef>().map_err(|e| anyhow!(e))
}

/// `B3==A0` sets B3 to the formula `=A0`; `B3=` empties B3.
fn parse_assignment(arg: &str) -> Result<(CellRef, String)> {
    let (label, content) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected CELL=CONTENT, got: {}", arg))?;
    Ok((parse_cell(label)?, content.to_string()))
}

/// Prints every message to stderr and remembers how many there were.
#[derive(Default)]
struct StderrSink {
    count: usize,
}

impl MessageSink for StderrSink {
    fn display_message(&mut self, message: &str) {
        self.count += 1;
        eprintln!("Error: {}", message);
    }
}

fn render_table(labels: Vec<String>, rows: Vec<Vec<String>>) -> String {
    let mut out = String::new();
    out.push('\t');
    out.push_str(&labels.join("\t"));
    out.push('\n');
    for (row, values) in rows.into_iter().enumerate() {
        out.push_str(&row.to_string());
        out.push('\t');
        out.push_str(&values.join("\t"));
        out.push('\n');
    }
    out
}

fn column_labels(sheet: &Sheet) -> Vec<String> {
    (0..sheet.column_count())
        .filter_map(|col| sheet.column_label(col))
        .map(str::to_string)
        .collect()
}

/// Stop at the first error.
fn run_strict(sheet: &mut Sheet, options: &Options) -> Result<i32> {
    for (cell_ref, content) in &options.assignments {
        sheet
            .set_content(cell_ref.row, cell_ref.col, content)
            .with_context(|| format!("Setting {}", cell_ref))?;
    }
    for cell_ref in &options.gets {
        let value = sheet
            .get_value(cell_ref.row, cell_ref.col)
            .with_context(|| format!("Reading {}", cell_ref))?;
        println!("{}", value);
    }
    if options.show {
        let labels = column_labels(sheet);
        print!("{}", render_table(labels, sheet.values()?));
    }
    Ok(0)
}

/// Route every error through the display adapter and carry on.
fn run_lenient(sheet: &mut Sheet, options: &Options) -> i32 {
    let labels = column_labels(sheet);
    let mut table = TableAdapter::new(sheet, StderrSink::default());
    for (cell_ref, content) in &options.assignments {
        table.set_value_at(content, cell_ref.row, cell_ref.col);
    }
    for cell_ref in &options.gets {
        println!("{}", table.get_value_at(cell_ref.row, cell_ref.col));
    }
    if options.show {
        let rows = (0..table.row_count())
            .map(|row| {
                (0..table.column_count())
                    .map(|col| table.get_value_at(row, col))
                    .collect()
            })
            .collect();
        print!("{}", render_table(labels, rows));
    }
    if table.sink().count > 0 { 1 } else { 0 }
}

fn run(args: &[String]) -> Result<i32> {
    let Some(options) = parse_args(args)? else {
        print_usage();
        return Ok(0);
    };

    let mut eval_options = if options.no_config {
        EvalOptions::default()
    } else {
        let (config, warnings) = load_config(options.config_file.as_deref());
        for warning in warnings {
            eprintln!("Warning: {}", warning);
        }
        config.eval_options()
    };
    if options.strict_empty {
        eval_options.empty_cells = EmptyCellPolicy::Reject;
    }
    tracing::debug!(?eval_options, "starting");

    let mut sheet = Sheet::with_options(eval_options);
    if options.keep_going {
        Ok(run_lenient(&mut sheet, &options))
    } else {
        run_strict(&mut sheet, &options)
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
