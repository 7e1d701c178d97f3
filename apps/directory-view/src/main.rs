mod config;
mod tui;

use std::io::Write;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use platform_obs::{LogSink, ObsConfig, init_tracing};
use products_hr::{DirectoryView, Employee, FilterCriteria, LoadStatus, render};
use reqwest::Url;
use serde::Serialize;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "directory-view", version, about = "Searchable employee directory")]
struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "URL",
        help = "Directory document URL (overrides DIRECTORY_URL)"
    )]
    url: Option<Url>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse and filter the directory interactively (default).
    Browse(QueryArgs),
    /// Fetch once, filter, print the result and exit.
    Search(SearchCommand),
}

#[derive(Args, Debug, Default)]
struct QueryArgs {
    #[arg(long, default_value = "", help = "Name contains (case-insensitive)")]
    name: String,
    #[arg(long, default_value = "", help = "Designation contains (case-insensitive)")]
    designation: String,
    #[arg(long, default_value = "", help = "Any skill contains (case-insensitive)")]
    skills: String,
}

impl From<QueryArgs> for FilterCriteria {
    fn from(value: QueryArgs) -> Self {
        FilterCriteria::new(value.name, value.designation, value.skills)
    }
}

#[derive(Args, Debug)]
struct SearchCommand {
    #[command(flatten)]
    query: QueryArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    total: usize,
    employees: Vec<&'a Employee>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::load()?.with_url_override(cli.url);
    match cli.command {
        Some(Command::Search(cmd)) => {
            init_tracing(ObsConfig::default().with_sink(LogSink::Stderr))?;
            run_search(&config, cmd).await
        }
        Some(Command::Browse(query)) => run_browse(&config, query).await,
        None => run_browse(&config, QueryArgs::default()).await,
    }
}

async fn run_browse(config: &AppConfig, query: QueryArgs) -> Result<()> {
    // The UI owns the terminal; logs go to a file or nowhere.
    let sink = config
        .log_file
        .clone()
        .map_or(LogSink::Off, LogSink::File);
    init_tracing(ObsConfig::default().with_sink(sink))?;
    tracing::info!(url = %config.directory_url, "starting directory browser");
    tui::run(config.loader()?, query.into()).await
}

async fn run_search(config: &AppConfig, cmd: SearchCommand) -> Result<()> {
    let loader = config.loader()?;
    let mut view = DirectoryView::new();
    view.set_criteria(cmd.query.into());
    view.apply_load(loader.fetch().await);

    let mut stdout = std::io::stdout().lock();
    match cmd.format {
        OutputFormat::Text => {
            stdout.write_all(render::to_text(&render::lines(&view)).as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &search_output(&view))?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn search_output(view: &DirectoryView) -> SearchOutput<'_> {
    let error = match view.status() {
        LoadStatus::Failed(reason) => Some(reason.as_str()),
        _ => None,
    };
    SearchOutput {
        error,
        total: view.directory().len(),
        employees: view.visible().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use products_hr::RetrievalError;

    #[test]
    fn search_flags_become_criteria() {
        let cli = Cli::parse_from([
            "directory-view",
            "search",
            "--name",
            "an",
            "--skills",
            "sql",
            "--format",
            "json",
        ]);
        let Some(Command::Search(cmd)) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(cmd.format, OutputFormat::Json);
        let criteria: FilterCriteria = cmd.query.into();
        assert_eq!(criteria, FilterCriteria::new("an", "", "sql"));
    }

    #[test]
    fn browse_is_the_default_command() {
        let cli = Cli::parse_from(["directory-view", "--url", "http://localhost/x.json"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.url.unwrap().as_str(), "http://localhost/x.json");
    }

    #[test]
    fn json_output_reports_failures_distinctly() {
        let mut view = DirectoryView::new();
        view.apply_load(Err(RetrievalError::Cancelled));
        let value = serde_json::to_value(search_output(&view)).unwrap();
        assert_eq!(value["error"], "retrieval cancelled");
        assert_eq!(value["total"], 0);
        assert_eq!(value["employees"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn json_output_lists_visible_employees() {
        let mut view = DirectoryView::new();
        view.apply_load(Ok(vec![
            Employee::new(1, "Ann").with_skills(["SQL"]),
            Employee::new(2, "Bo").with_skills(["Photoshop"]),
        ]));
        view.set_criteria(FilterCriteria::new("zzz", "zzz", "sql"));
        let value = serde_json::to_value(search_output(&view)).unwrap();
        assert!(value.get("error").is_none());
        assert_eq!(value["total"], 2);
        assert_eq!(value["employees"][0]["name"], "Ann");
        assert_eq!(value["employees"].as_array().map(Vec::len), Some(1));
    }
}
