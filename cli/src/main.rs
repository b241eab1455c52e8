use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use yaml_plain::text::normalize_line_endings;
use yaml_plain::{Error as ScanError, ParseOptions, PlainScalarReport};

#[derive(Parser, Debug)]
#[command(name = "yaml-plain", version, about = "Scan a YAML plain scalar")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Byte offset of the scalar's first character in the input.
    #[arg(long, value_name = "number", default_value_t = 0)]
    offset: usize,

    /// Minimum indentation of continuation lines.
    #[arg(long, value_name = "number", default_value_t = 0)]
    indent: usize,

    /// Scan as if inside a flow collection.
    #[arg(long)]
    flow: bool,

    /// Fail when the scalar starts with a character a plain scalar may not start with.
    #[arg(long)]
    strict: bool,

    /// Print the report on a single line.
    #[arg(long)]
    compact: bool,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yaml_plain=warn,yaml_plain_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let input = read_input(args.input.as_deref())?;
    let normalized = normalize_line_endings(&input);
    let start = normalized.normalized_offset(args.offset);
    debug!(
        offset = args.offset,
        start,
        crlf = normalized.cr_offsets.len(),
        "scanning plain scalar"
    );

    let options = ParseOptions::new()
        .with_indent(args.indent)
        .with_in_flow(args.flow);
    let node = yaml_plain::scan_plain_with_options(normalized.as_str(), start, &options)?;
    let report = PlainScalarReport::from_node(&node)
        .ok_or("scalar was not scanned")?
        .with_original_ranges(&normalized.cr_offsets);

    if args.strict {
        if let Some(error) = report.errors.first() {
            return Err(error.clone().into_error(normalized.as_str()).into());
        }
    }

    with_output_writer(args.output.as_deref(), |writer| {
        write_json(writer, &report, args.compact)
    })
}

fn read_input(input: Option<&str>) -> yaml_plain::Result<String> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path)
            .map_err(|err| ScanError::io(format!("cannot read {path}: {err}"))),
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json<T: Serialize>(
    writer: &mut dyn Write,
    value: &T,
    compact: bool,
) -> Result<(), Box<dyn Error>> {
    if compact {
        serde_json::to_writer(&mut *writer, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}
