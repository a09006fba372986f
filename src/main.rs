use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use jsonsift::cli::{handle_error, Args, CliConfig, CliResult, CliUtils, OutputFormat};
use jsonsift::error::{ScanError, ScanErrorKind};
use jsonsift::formatter::Report;
use jsonsift::inspection::InspectionEngine;
use jsonsift::parser::{directory::find_json_files, JsonSource};
use jsonsift::session::Session;

/// One selected document
#[derive(Debug, Clone)]
struct Selection {
    label: String,
    source: JsonSource,
}

/// Report of one selection, as written in JSON output
#[derive(Serialize)]
struct SourceReport<'a> {
    source: &'a str,
    #[serde(flatten)]
    report: &'a Report,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    if let Err(error) = CliConfig::from_args(args).and_then(|config| run(&config)) {
        handle_error(&error);
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(args: &Args) {
    let default_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(config: &CliConfig) -> CliResult<()> {
    log::debug!("Writing reports to {}", config.output_description());

    let selections = collect_selections(config)?;
    let mut session = Session::new(InspectionEngine::new(config.scan_config.clone()));

    if selections.is_empty() {
        CliUtils::show_warning(
            "No input provided. Pass a file, a directory, or --stdin",
            config.is_quiet(),
        );
        return write_output(
            config,
            &render(config, &[(String::new(), session.report())], false)?,
        );
    }

    let progress = (selections.len() > 1 && !config.is_quiet())
        .then(|| CliUtils::create_progress_bar(selections.len() as u64));

    let mut reports = Vec::with_capacity(selections.len());
    for selection in &selections {
        if let Some(pb) = &progress {
            pb.set_message(selection.label.clone());
        }

        match load_selection(&mut session, selection) {
            Ok(()) => reports.push((selection.label.clone(), session.report())),
            Err(e) => {
                // A selection that cannot be read leaves nothing selected
                session.clear();
                if !config.continue_on_error() {
                    if let Some(pb) = &progress {
                        pb.finish_and_clear();
                    }
                    return Err(e);
                }
                CliUtils::show_error(&format!("{}: {}", selection.label, e.user_message()));
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    write_output(config, &render(config, &reports, selections.len() > 1)?)
}

fn load_selection(session: &mut Session, selection: &Selection) -> CliResult<()> {
    let content = session.engine().read_source(&selection.source)?;
    session.load(&content)
}

fn collect_selections(config: &CliConfig) -> CliResult<Vec<Selection>> {
    let mut selections = Vec::new();

    if config.args.stdin {
        selections.push(Selection {
            label: "standard input".to_string(),
            source: JsonSource::Stdin,
        });
    }

    for input in &config.args.inputs {
        let path = PathBuf::from(input);
        if path.is_file() {
            selections.push(Selection {
                label: input.clone(),
                source: JsonSource::File(path),
            });
        } else if path.is_dir() {
            let files = find_json_files(&path, config.args.recursive).map_err(|e| {
                ScanError::scan_with_source(
                    ScanErrorKind::io(e.to_string(), Some(path.clone())),
                    e.into(),
                )
            })?;
            if files.is_empty() {
                CliUtils::show_warning(
                    &format!("No JSON files found in {}", path.display()),
                    config.is_quiet(),
                );
            }
            selections.extend(files.into_iter().map(|file| Selection {
                label: file.display().to_string(),
                source: JsonSource::File(file),
            }));
        } else if looks_like_inline_json(input) {
            selections.push(Selection {
                label: "inline JSON".to_string(),
                source: JsonSource::String(input.clone()),
            });
        } else {
            return Err(ScanError::scan(ScanErrorKind::io(
                "Input path does not exist".to_string(),
                Some(path),
            )));
        }
    }

    Ok(selections)
}

/// Arguments opening an object or array are documents, even malformed ones
fn looks_like_inline_json(input: &str) -> bool {
    matches!(input.trim_start().chars().next(), Some('{' | '['))
}

/// Render the reports; several selections are labeled one by one
fn render(config: &CliConfig, reports: &[(String, Report)], labeled: bool) -> CliResult<String> {
    match config.args.format {
        OutputFormat::Text => {
            let color = config.use_color();
            let text = match reports {
                [(_, report)] if !labeled => report.render_text(color),
                _ => reports
                    .iter()
                    .map(|(label, report)| {
                        format!("==> {} <==\n{}", label, report.render_text(color))
                            .trim_end()
                            .to_string()
                    })
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            };
            Ok(text)
        }
        OutputFormat::Json => {
            let text = match reports {
                [(_, report)] if !labeled => report.to_json(),
                _ => serde_json::to_string_pretty(
                    &reports
                        .iter()
                        .map(|(label, report)| SourceReport {
                            source: label,
                            report,
                        })
                        .collect::<Vec<_>>(),
                ),
            }
            .context("Failed to serialize report")?;
            Ok(text)
        }
    }
}

fn write_output(config: &CliConfig, text: &str) -> CliResult<()> {
    match &config.args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            CliUtils::show_success(
                &format!("Report written to {}", path.display()),
                config.is_quiet(),
            );
        }
        None if text.is_empty() => {}
        None => println!("{}", text),
    }
    Ok(())
}
