//! `folio` command line entry point.
//!
//! # Responsibility
//! - Run the static site build.
//! - Query the project list (filters, detail routing, option sets) from a
//!   terminal using the same controller as the generated pages.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use folio_core::{
    build_site, default_log_level, init_logging, render_state, route_from_path, FileSource,
    FilterCriteria, LogTarget, PageState, Route, SiteLayout, ViewController,
};
use log::info;
use std::path::PathBuf;

const STDERR_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Project portfolio builder")]
struct Cli {
    /// trace|debug|info|warn|error; `warn` on stderr unless set.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr otherwise.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copy assets and write every page into the output directory.
    Build {
        /// Project root containing `public/` and `src/`.
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Output directory (defaults to `<root>/dist`).
        #[arg(long)]
        out: Option<PathBuf>,
        /// URL prefix for sub-path deployments, e.g. `/my-portfolio`.
        #[arg(long, default_value = "")]
        base_path: String,
    },
    /// Print projects that pass the given filters.
    List {
        #[command(flatten)]
        data: DataArgs,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        tech: Option<String>,
        #[arg(long = "type")]
        kind: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Render the detail fragment for a project id or a `/projects/<id>` path.
    Show {
        target: String,
        #[command(flatten)]
        data: DataArgs,
    },
    /// Print the year, technology and type option sets.
    Options {
        #[command(flatten)]
        data: DataArgs,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Build { .. } => "build",
            Self::List { .. } => "list",
            Self::Show { .. } => "show",
            Self::Options { .. } => "options",
        }
    }
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Portfolio data document.
    #[arg(long, default_value = "src/data/projects.json")]
    data: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let target = LogTarget::from_dir_arg(cli.log_dir.as_deref()).map_err(anyhow::Error::msg)?;
    let level = effective_log_level(cli.log_level.as_deref(), &target);
    init_logging(level, target).map_err(anyhow::Error::msg)?;
    info!(
        "event=cli_command module=cli status=start command={}",
        cli.command.name()
    );

    match cli.command {
        Command::Build {
            root,
            out,
            base_path,
        } => {
            let mut layout = SiteLayout::rooted(&root).with_base_path(base_path);
            if let Some(out) = out {
                layout = layout.with_dist_dir(out);
            }
            let report = build_site(&layout)
                .with_context(|| format!("build failed for `{}`", root.display()))?;
            println!(
                "built {} pages for {} projects ({} assets copied, {} skipped)",
                report.pages_written, report.projects, report.assets_copied, report.assets_skipped
            );
        }
        Command::List {
            data,
            year,
            tech,
            kind,
            search,
        } => {
            let mut view = open_view(&data)?;
            let update = view.criteria_changed(FilterCriteria {
                year,
                tech,
                kind,
                search_query: search,
            });
            for project in view.visible_projects() {
                println!("{}\t{}\t{}", project.id, project.year, project.title);
            }
            println!("{}", update.count_label);
        }
        Command::Show { target, data } => {
            let view = match ViewController::load(&FileSource::new(&data.data)) {
                Ok(view) => view,
                Err(state) => {
                    println!("{}", render_state(&state, &[]));
                    std::process::exit(1);
                }
            };
            let route = if target.contains('/') {
                route_from_path(&target)
            } else {
                Route::Project(target)
            };
            let state = view.resolve(&route);
            println!("{}", render_state(&state, view.store().projects()));
            if state == PageState::NotFound {
                std::process::exit(2);
            }
        }
        Command::Options { data } => {
            let view = open_view(&data)?;
            let options = view.options();
            let years: Vec<String> = options.years.iter().map(|year| year.to_string()).collect();
            println!("years: {}", years.join(", "));
            println!("technologies: {}", options.technologies.join(", "));
            println!("types: {}", options.types.join(", "));
        }
    }
    Ok(())
}

/// Explicit `--log-level` wins; stderr defaults to `warn`.
fn effective_log_level<'a>(flag: Option<&'a str>, target: &LogTarget) -> &'a str {
    flag.unwrap_or(match target {
        LogTarget::Stderr => STDERR_LOG_LEVEL,
        LogTarget::Directory(_) => default_log_level(),
    })
}

fn open_view(data: &DataArgs) -> anyhow::Result<ViewController> {
    match ViewController::load(&FileSource::new(&data.data)) {
        Ok(view) => Ok(view),
        Err(PageState::LoadFailed(message)) => bail!("Failed to load projects: {message}"),
        Err(_) => bail!("Failed to load projects"),
    }
}
