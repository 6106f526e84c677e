//! nbdiff - render Jupyter notebooks and compare submissions with a reference
//!
//! Writes HTML fragments (or, with `--standalone`, complete pages) to stdout
//! or to the file given with `--output`.

mod logger;
mod page;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notebook_diff::display::{display_notebook, display_notebook_diff};
use notebook_diff::{CellRenderer, DisplayRequest, Displayed, ViewOptions};
use notebook_diff_config::RenderConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nbdiff", version)]
#[command(about = "Render Jupyter notebooks and compare them cell by cell")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Emit a complete HTML page with the stylesheet embedded
    #[arg(long, global = true)]
    standalone: bool,

    /// Config file to use instead of .nbdiff.toml lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write a debug log file
    #[arg(long, global = true)]
    debug_log: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single notebook with its outputs
    View {
        /// Notebook (.ipynb) to render
        notebook: PathBuf,
    },
    /// Compare a submission against the reference solution
    Diff {
        /// Reference solution notebook
        reference: PathBuf,

        /// Submitted notebook
        submission: PathBuf,

        /// Exit with status 1 when the notebooks differ
        #[arg(long)]
        fail_on_change: bool,
    },
    /// Render any file: notebooks as notebooks, everything else as source
    Show {
        /// File to render
        file: PathBuf,

        /// Reference notebook to compare against
        #[arg(short, long)]
        reference: Option<PathBuf>,
    },
    /// Print the stylesheet for the configured highlighter
    Css,
}

/// A rendered fragment and what the command should exit with
struct Rendered {
    title: String,
    html: String,
    exit: ExitCode,
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn file_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn render_view(content: &str, renderer: &CellRenderer, view: &ViewOptions) -> Result<String> {
    match display_notebook(content, renderer, view) {
        Displayed::Failed { error, .. } => Err(error).context("Error loading notebook"),
        displayed => Ok(displayed.into_html()),
    }
}

fn render_diff(
    reference: &str,
    submission: &str,
    renderer: &CellRenderer,
    view: &ViewOptions,
    fail_on_change: bool,
) -> Result<(String, ExitCode)> {
    match display_notebook_diff(reference, submission, renderer, view) {
        Displayed::NotebookDiff { html, summary } => {
            eprintln!("{}", summary);
            let exit = if fail_on_change && !summary.is_identical() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
            Ok((html, exit))
        }
        Displayed::Failed { error, .. } => Err(error).context("Error comparing notebooks"),
        displayed => Ok((displayed.into_html(), ExitCode::SUCCESS)),
    }
}

/// Display dispatch; parse failures still produce the alert fragment
fn render_show(request: &DisplayRequest<'_>, renderer: &CellRenderer, view: &ViewOptions) -> Rendered {
    let displayed = notebook_diff::display(request, renderer, view);
    let exit = if displayed.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };
    Rendered {
        title: request.file_name.to_string(),
        html: displayed.into_html(),
        exit,
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => RenderConfig::load_from(path),
        None => Ok(RenderConfig::load()),
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    log::debug!("Render config: {:?}", config);

    let renderer = config.renderer();
    let view = config.view_options();
    let highlighter_css = renderer.stylesheet();

    let rendered = match &cli.command {
        Commands::Css => {
            write_output(
                cli.output.as_deref(),
                &page::stylesheet(highlighter_css.as_deref()),
            )?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::View { notebook } => Rendered {
            title: file_title(notebook),
            html: render_view(&read_file(notebook)?, &renderer, &view)
                .with_context(|| format!("Failed to render {}", notebook.display()))?,
            exit: ExitCode::SUCCESS,
        },
        Commands::Diff {
            reference,
            submission,
            fail_on_change,
        } => {
            let (html, exit) = render_diff(
                &read_file(reference)?,
                &read_file(submission)?,
                &renderer,
                &view,
                *fail_on_change,
            )?;
            Rendered {
                title: file_title(submission),
                html,
                exit,
            }
        }
        Commands::Show { file, reference } => {
            let content = read_file(file)?;
            let reference = reference.as_deref().map(read_file).transpose()?;
            let title = file_title(file);
            let request =
                DisplayRequest::new(&title, &content).with_reference(reference.as_deref());
            render_show(&request, &renderer, &view)
        }
    };

    let content = if cli.standalone {
        page::standalone(&rendered.title, &rendered.html, highlighter_css.as_deref())
    } else {
        rendered.html
    };
    write_output(cli.output.as_deref(), &content)?;

    Ok(rendered.exit)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(log_file) = logger::init(cli.debug_log)? {
        eprintln!("Debug log: {}", log_file.display());
    }
    log::info!("Starting nbdiff");

    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    const REFERENCE: &str = r##"{"cells": [
        {"cell_type": "markdown", "source": "# Task"},
        {"cell_type": "code", "source": "x = 1"}
    ]}"##;
    const SUBMISSION: &str = r##"{"cells": [
        {"cell_type": "markdown", "source": "# Task"},
        {"cell_type": "code", "source": "x = 2"}
    ]}"##;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_diff_with_global_flags() {
        let cli = Cli::try_parse_from([
            "nbdiff",
            "diff",
            "ref.ipynb",
            "sub.ipynb",
            "--fail-on-change",
            "--standalone",
            "-o",
            "out.html",
        ])
        .unwrap();
        assert!(cli.standalone);
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        match cli.command {
            Commands::Diff {
                reference,
                submission,
                fail_on_change,
            } => {
                assert_eq!(reference, PathBuf::from("ref.ipynb"));
                assert_eq!(submission, PathBuf::from("sub.ipynb"));
                assert!(fail_on_change);
            }
            _ => panic!("expected diff command"),
        }
    }

    #[test]
    fn test_parse_show_with_reference() {
        let cli = Cli::try_parse_from(["nbdiff", "show", "a.ipynb", "--reference", "r.ipynb"])
            .unwrap();
        match cli.command {
            Commands::Show { file, reference } => {
                assert_eq!(file, PathBuf::from("a.ipynb"));
                assert_eq!(reference, Some(PathBuf::from("r.ipynb")));
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_render_view() {
        let html = render_view(REFERENCE, &CellRenderer::new(), &ViewOptions::default()).unwrap();
        assert!(html.contains("<h1>Task</h1>"));
        assert!(html.contains("x = 1"));
    }

    #[test]
    fn test_render_view_invalid_json_is_an_error() {
        let err =
            render_view("not json", &CellRenderer::new(), &ViewOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Error loading notebook");
    }

    #[test]
    fn test_render_diff_fail_on_change() {
        let renderer = CellRenderer::new();
        let view = ViewOptions::default();

        let (html, exit) = render_diff(REFERENCE, SUBMISSION, &renderer, &view, true).unwrap();
        assert!(html.contains("diff-removed"));
        assert!(html.contains("diff-added"));
        assert_eq!(exit, ExitCode::from(1));

        let (_, exit) = render_diff(REFERENCE, REFERENCE, &renderer, &view, true).unwrap();
        assert_eq!(exit, ExitCode::SUCCESS);

        let (_, exit) = render_diff(REFERENCE, SUBMISSION, &renderer, &view, false).unwrap();
        assert_eq!(exit, ExitCode::SUCCESS);
    }

    #[test]
    fn test_render_diff_invalid_submission_is_an_error() {
        let err = render_diff(
            REFERENCE,
            "{}",
            &CellRenderer::new(),
            &ViewOptions::default(),
            false,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Error comparing notebooks");
    }

    #[test]
    fn test_render_show_failure_keeps_alert() {
        let request = DisplayRequest::new("broken.ipynb", "[");
        let rendered = render_show(&request, &CellRenderer::new(), &ViewOptions::default());
        assert!(rendered.html.contains("alert-danger"));
        assert!(rendered.html.contains("Error loading notebook"));
        assert_eq!(rendered.exit, ExitCode::FAILURE);
    }

    #[test]
    fn test_render_show_source_file() {
        let request = DisplayRequest::new("solution.py", "print('<hi>')");
        let rendered = render_show(&request, &CellRenderer::new(), &ViewOptions::default());
        assert!(rendered.html.contains("source-file"));
        assert!(rendered.html.contains("&lt;hi&gt;"));
        assert_eq!(rendered.title, "solution.py");
        assert_eq!(rendered.exit, ExitCode::SUCCESS);
    }

    #[test]
    fn test_file_title() {
        assert_eq!(file_title(Path::new("/tmp/work/sub.ipynb")), "sub.ipynb");
    }
}
