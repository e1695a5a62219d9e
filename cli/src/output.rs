//! Output formatting for parsed statements, token streams, and errors.

use flag_syntax_core::{StatementNode, SyntaxError, Token};
use serde::{Deserialize, Serialize};

/// Output formats for a parsed statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON tree.
    #[default]
    Json,
    /// YAML tree.
    Yaml,
    /// Canonical one-line usage form.
    Usage,
    /// Indented text outline.
    Tree,
}

/// Output formats for a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TokenFormat {
    /// Pretty-printed JSON array.
    Json,
    /// YAML sequence.
    Yaml,
    /// Aligned position, kind, and literal columns.
    Table,
}

/// Formats a statement in the requested output format.
pub fn format_statement(statement: &StatementNode, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(statement)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(statement).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Usage => Ok(statement.to_string()),
        OutputFormat::Tree => Ok(statement_to_tree(statement)),
    }
}

/// Formats a token stream in the requested output format.
pub fn format_tokens(tokens: &[Token], format: TokenFormat) -> Result<String, String> {
    match format {
        TokenFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        TokenFormat::Yaml => {
            serde_yaml::to_string(tokens).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        TokenFormat::Table => Ok(tokens_to_table(tokens)),
    }
}

/// Renders a syntax error, optionally echoing the definition with a caret
/// under the offending character.
pub fn format_syntax_error(definition: &str, err: &SyntaxError, show_source: bool) -> String {
    let mut out = err.to_string();
    if show_source {
        let column = definition
            .get(..err.pos())
            .map_or(0, |prefix| prefix.chars().count());
        out.push_str(&format!("\n  {definition}\n  {}^", " ".repeat(column)));
    }
    out
}

fn statement_to_tree(statement: &StatementNode) -> String {
    let mut out = String::new();
    let flag = &statement.flag;
    let params = &statement.params;

    out.push_str(&format!("flag {} (name: {})\n", flag.literal, flag.name));

    if !params.flag_params.is_empty() {
        out.push_str("  flag params:\n");
        for param in &params.flag_params {
            if param.takes_value() {
                out.push_str(&format!(
                    "    {} (flag: {}, value: {})\n",
                    param.literal, param.flag.name, param.name
                ));
            } else {
                out.push_str(&format!(
                    "    {} (flag: {})\n",
                    param.literal, param.flag.name
                ));
            }
        }
    }

    if !params.positional_params.is_empty() {
        out.push_str("  positional params:\n");
        for param in &params.positional_params {
            out.push_str(&format!("    {} (name: {})\n", param.literal, param.name));
        }
    }

    if let Some(list) = &params.positional_param_list {
        out.push_str("  positional param list:\n");
        out.push_str(&format!("    {} (name: {})\n", list.literal, list.name));
    }

    if !params.optional_params.is_empty() {
        out.push_str("  optional params:\n");
        for param in &params.optional_params {
            out.push_str(&format!("    {} (name: {})\n", param.literal, param.name));
        }
    }

    out
}

fn tokens_to_table(tokens: &[Token]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>4}  {:<26}  {}\n", "POS", "KIND", "LITERAL"));
    for token in tokens {
        out.push_str(&format!(
            "{:>4}  {:<26}  {}\n",
            token.pos,
            token.kind.to_string(),
            token.literal
        ));
    }
    out
}
