use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::{ArgAction, Parser};
use qsparser::{DecodeOptions, Duplicates, Value};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "qsparse", version, about = "Decode nested query strings to JSON")]
struct Args {
    /// Query string or full URL. Omit or use '-' to read from stdin.
    query: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Indentation size; 0 prints compact JSON (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Maximum bracket nesting per key.
    #[arg(long = "max-depth", value_name = "number")]
    max_depth: Option<usize>,

    /// Keep key segments percent-encoded.
    #[arg(long = "raw-keys", action = ArgAction::SetFalse, default_value_t = true)]
    decode_keys: bool,

    /// Treat null/nil/none as plain text.
    #[arg(long = "no-null-literals", action = ArgAction::SetFalse, default_value_t = true)]
    null_literals: bool,

    /// Fail when a key is assigned more than once.
    #[arg(long = "reject-duplicates")]
    reject_duplicates: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let input = read_input(args.query.as_deref())?;
    let options = decode_options(&args);

    let map = qsparser::parse_with_options(query_part(&input), &options)?;
    let value = Value::Mapping(map);

    let output_target = OutputTarget::from_arg(args.output.as_deref());
    with_output_writer(output_target.path(), |writer| {
        write_json(writer, &value, args.indent)
    })?;
    if let OutputTarget::File(path) = &output_target {
        println!("✔ Decoded query → {path}");
    }
    Ok(())
}

fn decode_options(args: &Args) -> DecodeOptions {
    let mut options = DecodeOptions::new()
        .with_decode_keys(args.decode_keys)
        .with_null_literals(args.null_literals);
    if let Some(max_depth) = args.max_depth {
        options = options.with_max_depth(max_depth);
    }
    if args.reject_duplicates {
        options = options.with_duplicates(Duplicates::Reject);
    }
    options
}

fn read_input(query: Option<&str>) -> Result<String, Box<dyn Error>> {
    match query {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            let trimmed = buf.trim_end_matches(['\r', '\n']).len();
            buf.truncate(trimmed);
            Ok(buf)
        }
        Some(query) => Ok(query.to_string()),
    }
}

/// Accepts a bare query, `?query`, or a full URL; drops any `#fragment`.
fn query_part(input: &str) -> &str {
    let query = match input.split_once('?') {
        Some((_, query)) => query,
        None => input,
    };
    match query.split_once('#') {
        Some((query, _)) => query,
        None => query,
    }
}

#[derive(Clone, Debug)]
enum OutputTarget {
    Stdout,
    File(String),
}

impl OutputTarget {
    fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some(path) if path != "-" => OutputTarget::File(path.to_string()),
            _ => OutputTarget::Stdout,
        }
    }

    fn path(&self) -> Option<&str> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path.as_str()),
        }
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json(writer: &mut dyn Write, value: &Value, indent: usize) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}
