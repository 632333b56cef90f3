use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{Editor, Input, Select, theme::ColorfulTheme};
use regex::Regex;
use sql_batch_helper::{
    ChunkSize, SqlValue,
    application::commands::{RenderSqlCommand, SqlRequest},
};

const DEFAULT_START_COLUMN: &str = "start_date";
const DEFAULT_END_COLUMN: &str = "end_date";

static DATE_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}( \d{2}:\d{2}:\d{2})?$").expect("date pattern should be valid")
});

#[derive(Debug, Parser)]
#[command(
    name = "sql-batch-helper",
    version,
    about = "Generate batch UPDATE statements and chunk-safe WHERE conditions"
)]
struct CliArgs {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Build one UPDATE ... CASE WHEN statement from a JSON payload
    BatchUpdate {
        #[arg(long, short = 'i', help = "JSON file with table, columns, rows, condition_keys, condition_column")]
        input: PathBuf,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Filter a table by a value list split into bounded IN clauses
    WhereIn {
        #[arg(long, short = 't')]
        table: String,
        #[arg(long, short = 'c')]
        column: String,
        #[arg(long, short = 'v', value_delimiter = ',', help = "Comma separated values")]
        values: Vec<String>,
        #[arg(long, short = 'f', help = "Read values from file, one per line")]
        values_file: Option<PathBuf>,
        #[arg(long, short = 'n', default_value_t = ChunkSize::DEFAULT)]
        chunk_size: usize,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Filter a table by rows whose date range intersects [from, to]
    Overlap {
        #[arg(long, short = 't')]
        table: String,
        #[arg(long, short = 's', default_value = DEFAULT_START_COLUMN)]
        start_column: String,
        #[arg(long, short = 'e', default_value = DEFAULT_END_COLUMN)]
        end_column: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

pub fn collect_render_command() -> Result<RenderSqlCommand> {
    if env::args_os().len() == 1 {
        return collect_interactive_command();
    }
    collect_command_from_args(CliArgs::parse())
}

fn collect_command_from_args(args: CliArgs) -> Result<RenderSqlCommand> {
    match args.command {
        CliCommand::BatchUpdate { input, output } => Ok(RenderSqlCommand {
            request: SqlRequest::BatchUpdate {
                payload_json: read_non_empty_file(&input, "Batch update JSON")?,
            },
            output_path: output,
        }),
        CliCommand::WhereIn {
            table,
            column,
            values,
            values_file,
            chunk_size,
            output,
        } => Ok(RenderSqlCommand {
            request: SqlRequest::WhereInChunk {
                table: ensure_non_empty_value(table, "Table")?,
                column: ensure_non_empty_value(column, "Column")?,
                values: read_values_from_sources(values, values_file)?,
                chunk_size,
            },
            output_path: output,
        }),
        CliCommand::Overlap {
            table,
            start_column,
            end_column,
            from,
            to,
            output,
        } => Ok(RenderSqlCommand {
            request: SqlRequest::TimeIntersect {
                table: ensure_non_empty_value(table, "Table")?,
                start_column: ensure_non_empty_value(start_column, "Start column")?,
                end_column: ensure_non_empty_value(end_column, "End column")?,
                start_date: ensure_date_literal(from, "--from")?,
                end_date: ensure_date_literal(to, "--to")?,
            },
            output_path: output,
        }),
    }
}

fn collect_interactive_command() -> Result<RenderSqlCommand> {
    let theme = ColorfulTheme::default();

    println!();
    println!(
        "{}",
        style(" SQL BATCH HELPER ")
            .black()
            .on_cyan()
            .bold()
            .underlined()
    );
    println!("{}", style("Batch UPDATE and chunk-safe WHERE builder").dim());
    println!();

    let operations = [
        "Batch UPDATE from JSON",
        "Chunked IN filter",
        "Date range overlap filter",
    ];
    let operation_index = Select::with_theme(&theme)
        .with_prompt("Operation")
        .default(0)
        .items(&operations)
        .interact()?;

    let request = match operation_index {
        0 => collect_batch_update_request(&theme)?,
        1 => collect_where_in_request(&theme)?,
        _ => collect_overlap_request(&theme)?,
    };

    let output_name: String = Input::with_theme(&theme)
        .with_prompt("Output file (empty prints to terminal)")
        .allow_empty(true)
        .interact_text()?;
    let output_name = output_name.trim();

    Ok(RenderSqlCommand {
        request,
        output_path: (!output_name.is_empty()).then(|| PathBuf::from(output_name)),
    })
}

fn collect_batch_update_request(theme: &ColorfulTheme) -> Result<SqlRequest> {
    let source_options = ["Edit JSON in your editor", "Load JSON from file"];
    let source_index = Select::with_theme(theme)
        .with_prompt("Batch update source")
        .default(0)
        .items(&source_options)
        .interact()?;

    let payload_json = if source_index == 0 {
        let edited_json = Editor::new()
            .extension(".json")
            .edit("")?
            .ok_or_else(|| anyhow!("No JSON input detected from editor"))?;
        ensure_non_empty_value(edited_json, "Batch update JSON")?
    } else {
        let json_file_path: String = Input::with_theme(theme)
            .with_prompt("JSON file path")
            .interact_text()?;
        read_non_empty_file(Path::new(json_file_path.trim()), "Batch update JSON")?
    };

    Ok(SqlRequest::BatchUpdate { payload_json })
}

fn collect_where_in_request(theme: &ColorfulTheme) -> Result<SqlRequest> {
    let table = prompt_non_empty(theme, "Table", None)?;
    let column = prompt_non_empty(theme, "Column", Some("id"))?;
    let raw_values = prompt_non_empty(theme, "Values (comma separated)", None)?;

    let chunk_size: usize = Input::with_theme(theme)
        .with_prompt("Chunk size")
        .default(ChunkSize::DEFAULT)
        .validate_with(|value: &usize| {
            if *value == 0 {
                Err("Chunk size must be greater than 0")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(SqlRequest::WhereInChunk {
        table,
        column,
        values: parse_values(raw_values.split(',')),
        chunk_size,
    })
}

fn collect_overlap_request(theme: &ColorfulTheme) -> Result<SqlRequest> {
    let table = prompt_non_empty(theme, "Table", None)?;
    let start_column = prompt_non_empty(theme, "Start date column", Some(DEFAULT_START_COLUMN))?;
    let end_column = prompt_non_empty(theme, "End date column", Some(DEFAULT_END_COLUMN))?;
    let start_date = prompt_date(theme, "From (YYYY-MM-DD)")?;
    let end_date = prompt_date(theme, "To (YYYY-MM-DD)")?;

    Ok(SqlRequest::TimeIntersect {
        table,
        start_column,
        end_column,
        start_date,
        end_date,
    })
}

fn prompt_non_empty(theme: &ColorfulTheme, prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme);
    input = input.with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let value = input
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("Value must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_date(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &String| {
            if DATE_LITERAL.is_match(value.trim()) {
                Ok(())
            } else {
                Err("Date must look like YYYY-MM-DD")
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn read_values_from_sources(
    values: Vec<String>,
    values_file: Option<PathBuf>,
) -> Result<Vec<SqlValue>> {
    match (values.is_empty(), values_file) {
        (false, Some(_)) => Err(anyhow!(
            "Please provide only one of --values or --values-file"
        )),
        (false, None) => Ok(parse_values(values.iter().map(String::as_str))),
        (true, Some(file_path)) => {
            let content = read_non_empty_file(&file_path, "Values file")?;
            Ok(parse_values(content.lines()))
        }
        (true, None) => Err(anyhow!(
            "One of --values or --values-file is required for where-in"
        )),
    }
}

/// Integer-looking entries become integers, everything else text. Blank
/// entries are skipped.
fn parse_values<'a>(raw_values: impl Iterator<Item = &'a str>) -> Vec<SqlValue> {
    raw_values
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| match value.parse::<i64>() {
            Ok(number) => SqlValue::Int(number),
            Err(_) => SqlValue::from(value),
        })
        .collect()
}

fn ensure_date_literal(value: String, field_name: &str) -> Result<String> {
    let trimmed = value.trim();
    if !DATE_LITERAL.is_match(trimmed) {
        return Err(anyhow!(
            "{field_name} must be a date like 2024-01-31, but got {value}"
        ));
    }
    Ok(trimmed.to_string())
}

fn read_non_empty_file(path: &Path, field_name: &str) -> Result<String> {
    let content = fs::read_to_string(path)
        .map_err(|error| anyhow!("Unable to read file {}: {error}", path.display()))?;
    ensure_non_empty_value(content, field_name)
}

fn ensure_non_empty_value(value: String, field_name: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(anyhow!("{field_name} must not be empty"));
    }
    Ok(value)
}
