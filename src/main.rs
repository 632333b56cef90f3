mod interfaces;

use anyhow::Result;
use console::style;
use sql_batch_helper::{
    MySqlQuoter, application::use_cases::render_sql::RenderSqlUseCase,
};
use tracing_subscriber::EnvFilter;

use crate::interfaces::cli::collect_render_command;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let command = collect_render_command()?;
    let use_case = RenderSqlUseCase::new(MySqlQuoter);

    let result = use_case.execute(command)?;
    match result.output_path {
        Some(output_path) => println!(
            "{} {}",
            style("Generated SQL has been saved to").green(),
            style(output_path.display()).bold(),
        ),
        None => println!("{}", result.sql),
    }
    Ok(())
}
