mod config;
mod output;

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use flag_syntax_core::{SyntaxError, parse, tokenize};
use tracing::{Level, debug};

use crate::config::CliConfig;
use crate::output::{
    OutputFormat, TokenFormat, format_statement, format_syntax_error, format_tokens,
};

#[derive(Debug, Parser)]
#[command(name = "flag-syntax")]
#[command(version)]
#[command(about = "Parse and inspect compact flag syntax definitions")]
struct Cli {
    /// Path to a YAML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log parser activity to stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a definition and print its syntax tree.
    Parse(ParseArgs),
    /// Lex a definition and print its token stream.
    Tokens(TokensArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Definition such as "-x [-t title] <id>...", or "-" to read one line from stdin.
    #[arg(allow_hyphen_values = true)]
    definition: String,
    /// Output format (default: from config, else json).
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
struct TokensArgs {
    /// Definition to lex, or "-" to read one line from stdin.
    #[arg(allow_hyphen_values = true)]
    definition: String,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: TokenFormat,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let result = load_config(cli.config.as_ref()).and_then(|config| match cli.command {
        Command::Parse(args) => run_parse(args, &config),
        Command::Tokens(args) => run_tokens(args, &config),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig, String> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    debug!(path = %path.display(), "loading config");
    CliConfig::load(path).map_err(|err| format!("{} ({err})", path.display()))
}

fn run_parse(args: ParseArgs, config: &CliConfig) -> Result<(), String> {
    let definition = resolve_definition(args.definition)?;
    let format = args.format.unwrap_or(config.output.format);

    let statement = parse(&definition).map_err(|err| {
        format_syntax_error(&definition, &err, config.diagnostics.show_source)
    })?;

    let rendered = format_statement(&statement, format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn run_tokens(args: TokensArgs, config: &CliConfig) -> Result<(), String> {
    let definition = resolve_definition(args.definition)?;

    let tokens = tokenize(&definition).map_err(|err| {
        format_syntax_error(&definition, &SyntaxError::from(err), config.diagnostics.show_source)
    })?;

    let rendered = format_tokens(&tokens, args.format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Returns the definition argument, reading the first stdin line for `-`.
fn resolve_definition(definition: String) -> Result<String, String> {
    if definition != "-" {
        return Ok(definition);
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| format!("Failed to read definition from stdin: {err}"))?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
