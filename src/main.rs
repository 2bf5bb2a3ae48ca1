//! simdgen command-line front end.
//!
//! Each subcommand prints generated text to stdout for redirecting into the
//! target sources; logs and errors go to stderr.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use simdgen::beautify::{beautify, Indent};
use simdgen::fixture::{self, FixtureOptions, OperandValues};
use simdgen::simd::LaneOp;
use simdgen::table::{self, LaneFormat};
use simdgen::{Error, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simdgen")]
#[command(about = "Generate SIMD opcode tables and WAST fixtures")]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-type rows for a lane instruction
    LaneTable {
        /// Instruction to generate: const, build or add
        #[arg(long, default_value = "build")]
        op: LaneOp,

        /// Encoding of the first row (hex with 0x, or decimal)
        #[arg(long, default_value = "0xf1", value_parser = table::parse_opcode)]
        first_opcode: u32,

        /// Output: table, lexer or case
        #[arg(long, default_value = "table")]
        format: LaneFormat,
    },

    /// Lexer rules for every row of an opcode table
    LexerRules {
        /// Opcode table source (or - for stdin)
        table: PathBuf,

        /// Token class the rules return
        #[arg(long, default_value = "BINARY")]
        token: String,
    },

    /// One instruction call per row of an opcode table
    OpTests {
        /// Opcode table source (or - for stdin)
        table: PathBuf,

        /// JSON object of extra operand values, keyed by type name (or - for
        /// stdin when the table is a file)
        #[arg(long)]
        values: Option<PathBuf>,

        /// Mnemonic to leave out (repeatable; replaces the default list)
        #[arg(long)]
        skip: Vec<String>,

        /// Do not skip any mnemonic
        #[arg(long, conflicts_with = "skip")]
        no_skip: bool,
    },

    /// Module adding two constant vectors of every type
    AddModule {
        /// Export name of the function
        #[arg(long, default_value = fixture::DEFAULT_EXPORT)]
        export: String,

        /// Leave out the licence banner
        #[arg(long)]
        no_banner: bool,
    },

    /// Module extracting every lane of every type
    ExtractModule {
        /// Leave out the licence banner
        #[arg(long)]
        no_banner: bool,
    },

    /// Re-indent a .wast file
    Beautify {
        /// Input file (or - for stdin)
        file: PathBuf,

        /// Indent with this many spaces instead of tabs
        #[arg(long)]
        spaces: Option<usize>,
    },
}

fn read_input(path: &Path) -> Result<String> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(io_error)
    }
}

fn run(command: Commands) -> Result<String> {
    match command {
        Commands::LaneTable {
            op,
            first_opcode,
            format,
        } => table::lane_table(op, first_opcode, format),

        Commands::LexerRules { table, token } => {
            let entries = table::parse_table(&read_input(&table)?)?;
            table::lexer_rules(&entries, &token)
        }

        Commands::OpTests {
            table,
            values,
            skip,
            no_skip,
        } => {
            if table == Path::new("-") && values.as_deref() == Some(Path::new("-")) {
                return Err(Error::Usage(
                    "the table and --values cannot both be read from stdin".to_string(),
                ));
            }
            let entries = table::parse_table(&read_input(&table)?)?;
            let values = match values {
                Some(path) => OperandValues::from_json(&read_input(&path)?)?,
                None => OperandValues::default(),
            };
            let skip: Vec<String> = if no_skip {
                Vec::new()
            } else if skip.is_empty() {
                fixture::DEFAULT_SKIP.iter().map(|s| s.to_string()).collect()
            } else {
                skip
            };
            fixture::op_tests(&entries, &values, &skip)
        }

        Commands::AddModule { export, no_banner } => fixture::add_module(&FixtureOptions {
            banner: !no_banner,
            export,
        }),

        Commands::ExtractModule { no_banner } => fixture::extract_module(&FixtureOptions {
            banner: !no_banner,
            ..FixtureOptions::default()
        }),

        Commands::Beautify { file, spaces } => {
            let source = read_input(&file)?;
            let indent = spaces.map_or(Indent::Tab, Indent::Spaces);
            debug!(file = %file.display(), ?indent, "beautifying");
            Ok(beautify(&source, indent))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "simdgen=debug" } else { "simdgen=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(cli.command) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
