mod error;
mod output;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use astgen_emit::{TypeNames, UnionEmitter};
use astgen_parser::{parse_schema, parse_schema_source};
use astgen_syntax::bootstrap::{EXPR_BASE, EXPR_SPECS};
use astgen_syntax::error::{Error, ErrorKind};
use astgen_syntax::schema::{is_identifier, UnionSchema};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::error::RunError;
use crate::output::Freshness;

#[derive(Parser, Debug)]
#[command(name = "astgen", version, about = "Generate an AST enum module from a node schema")]
struct Cli {
    /// Directory the `<base>/mod.rs` module is generated under
    out_dir: PathBuf,

    /// Read node specifications from this file instead of the built-in Expr schema
    #[arg(short = 's', long = "schema")]
    schema: Option<PathBuf>,

    /// Name of the generated enum
    #[arg(short = 'b', long = "base", default_value = EXPR_BASE)]
    base: String,

    /// Type name a leading field is boxed for (defaults to the base name)
    #[arg(short = 'e', long = "element")]
    element: Option<String>,

    /// Exit non-zero if the module on disk differs from what would be generated
    #[arg(long = "check", default_value_t = false, conflicts_with = "stdout")]
    check: bool,

    /// Print the module to stdout instead of writing it
    #[arg(long = "stdout", default_value_t = false)]
    stdout: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ASTGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn render_error(kind: &str, source: &str, err: &Error) {
    eprintln!("{} [{}]: {}", kind.red().bold(), err.kind.label(), err.msg.red());
    if let (Some(line), Some(col)) = (err.line, err.col) {
        eprintln!("  --> line {}, column {}", line, col);
        if let Some(src_line) = source.lines().nth(line - 1) {
            let line_num_str = format!("{:3} | ", line);
            eprintln!("     |");
            eprintln!("{}{}", line_num_str.bright_black(), src_line);

            let mut marker = String::new();
            marker.push_str(&" ".repeat(line_num_str.len()));
            if col > 1 {
                marker.push_str(&" ".repeat(col - 1));
            }
            marker.push('^');
            eprintln!("{}{}", marker.red(), " error here".red());
            eprintln!("     |");
        }
    }

    let help = match err.kind {
        ErrorKind::MissingDelimiter => "Write each node as: Name | Field1, Field2",
        ErrorKind::EmptyField => "Every variant needs at least one field and no empty entries between commas.",
        ErrorKind::EmptyVariantList => "Add at least one 'Name | Fields' line to the schema.",
        ErrorKind::DuplicateVariant => "Variant names must be unique within a schema.",
        ErrorKind::InvalidName => "Names are identifiers: letters, digits and '_', not starting with a digit.",
        ErrorKind::Unbalanced => "Check that every '<', '(' and '[' in a field type is closed.",
        ErrorKind::UnexpectedToken => "Only one '|' is allowed per line; fields are separated by ','.",
    };
    eprintln!("{}", format!("Help: {}", help).yellow());
}

/// Parse the configured schema, returning it with the text it came from.
fn load_schema(cli: &Cli) -> Result<UnionSchema, RunError> {
    let (parsed, text) = match &cli.schema {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| RunError::ReadSchema {
                path: path.clone(),
                source,
            })?;
            (parse_schema_source(&cli.base, &text), text)
        }
        None => (parse_schema(&cli.base, EXPR_SPECS), EXPR_SPECS.join("\n")),
    };
    parsed.map_err(|err| RunError::Schema { err, text })
}

fn type_names(cli: &Cli) -> Result<TypeNames, RunError> {
    let names = TypeNames::new(cli.base.clone());
    match &cli.element {
        Some(element) if !is_identifier(element) => Err(RunError::Schema {
            err: Error::new(
                ErrorKind::InvalidName,
                format!("Element type name '{}' is not an identifier", element),
            ),
            text: String::new(),
        }),
        Some(element) => Ok(names.with_element(element.clone())),
        None => Ok(names),
    }
}

fn run(cli: &Cli) -> Result<ExitCode, RunError> {
    let schema = load_schema(cli)?;
    let names = type_names(cli)?;
    tracing::debug!(base = %names.base, element = %names.element, "generating");
    let text = UnionEmitter::new(names).emit(&schema.variants);

    if cli.stdout {
        print!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    let path = output::module_path(&cli.out_dir, &schema);
    if cli.check {
        return Ok(match output::check_current(&path, &text)? {
            Freshness::UpToDate => {
                println!("{}: ok", path.display());
                ExitCode::SUCCESS
            }
            Freshness::Stale => {
                eprintln!("{}: {}", path.display(), "out of date".red());
                ExitCode::FAILURE
            }
            Freshness::Missing => {
                eprintln!("{}: {}", path.display(), "missing".red());
                ExitCode::FAILURE
            }
        });
    }

    output::write_atomic(&path, &text)?;
    println!("{} {}", "Generated".green().bold(), path.display());
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(code) => code,
        Err(RunError::Schema { err, text }) => {
            render_error("Schema error", &text, &err);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e.to_string().red());
            ExitCode::FAILURE
        }
    }
}
