use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use inspector_core::{
    launch_har_viewer, update, CompletionCatalog, DisplayNode, Mode, Msg, PageState, PageStatus,
    RenderRequest, EXAMPLE_SCRIPT,
};
use inspector_engine::{save_artifact, TransportSettings};
use inspector_logging::{inspector_error, inspector_info, inspector_warn, LogDestination};
use log::LevelFilter;

use super::cli::{Cli, Commands};
use super::config::{self, InspectorConfig};
use super::effects::EffectRunner;
use super::present::{render_page, TerminalHarViewer};

struct RenderOptions {
    url: String,
    script: Option<PathBuf>,
    example_script: bool,
    service: Option<String>,
    wait: Option<f64>,
    save_dir: Option<PathBuf>,
    config: Option<PathBuf>,
}

pub fn run() -> anyhow::Result<ExitCode> {
    match Cli::parse().command {
        Commands::Render {
            url,
            script,
            example_script,
            service,
            wait,
            save_dir,
            config,
        } => run_render(RenderOptions {
            url,
            script,
            example_script,
            service,
            wait,
            save_dir,
            config,
        }),
        Commands::Complete { line, docs } => {
            inspector_logging::initialize(LogDestination::Terminal, LevelFilter::Warn, None);
            run_complete(&line, &docs)
        }
    }
}

fn run_render(options: RenderOptions) -> anyhow::Result<ExitCode> {
    let (config, config_problem) = match config::load(options.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (InspectorConfig::default(), Some(err)),
    };
    inspector_logging::initialize(config.log_destination, config.level_filter(), None);
    if let Some(err) = config_problem {
        inspector_warn!("{}; using default configuration", err);
    }

    let request = build_request(&options, &config)?;
    let service_url = options.service.as_deref().unwrap_or(&config.service_url);
    let settings = TransportSettings {
        max_bytes: config.max_response_bytes,
        ..TransportSettings::new(service_url).context("invalid service url")?
    };
    let runner = EffectRunner::new(settings)?;

    let (mut state, effects) = update(PageState::new(), Msg::RenderRequested(request));
    runner.enqueue(effects);
    while state.in_flight().is_some() {
        let Some(msg) = runner.next_msg() else {
            anyhow::bail!("inspector worker stopped before answering");
        };
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);
    }

    let view = state.view();
    if state.consume_dirty() {
        for line in render_page(&view) {
            println!("{line}");
        }
    }

    if let Some(tree) = &view.tree {
        let mut viewer = TerminalHarViewer::new();
        if launch_har_viewer(tree, &mut viewer) {
            for line in viewer.lines() {
                println!("{line}");
            }
        }
        if let Some(dir) = options.save_dir.as_ref().or(config.artifact_dir.as_ref()) {
            save_artifacts(tree, dir);
        }
    }

    Ok(match view.status {
        PageStatus::Success | PageStatus::EmptyResult => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

/// Script source comes from `--script`, the example script, or nowhere (plain
/// render). Without either option `lua_enabled` picks the example script.
fn build_request(
    options: &RenderOptions,
    config: &InspectorConfig,
) -> anyhow::Result<RenderRequest> {
    let source = match &options.script {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?,
        ),
        None if options.example_script || config.lua_enabled => Some(EXAMPLE_SCRIPT.to_string()),
        None => None,
    };

    let request = match source {
        Some(source) => RenderRequest::script(&options.url, &source),
        None => RenderRequest::new(Mode::Render, &options.url),
    };
    Ok(request.with_param("wait", Some(options.wait.unwrap_or(config.wait))))
}

fn save_artifacts(tree: &DisplayNode, dir: &Path) {
    for artifact in tree.walk().into_iter().flat_map(|node| &node.artifacts) {
        match save_artifact(dir, artifact) {
            Ok(path) => inspector_info!("Saved {:?}", path),
            Err(err) => inspector_error!(
                "Failed to save {} into {:?}: {}",
                artifact.suggested_file_name,
                dir,
                err
            ),
        }
    }
}

fn run_complete(line: &str, docs: &Path) -> anyhow::Result<ExitCode> {
    let document = fs::read_to_string(docs)
        .with_context(|| format!("failed to read documentation {}", docs.display()))?;
    let catalog = CompletionCatalog::from_json(&document)?;
    for candidate in catalog.complete(line) {
        if candidate.short_doc.is_empty() {
            println!("{}", candidate.name);
        } else {
            println!("{}  {}", candidate.name, candidate.short_doc);
        }
    }
    Ok(ExitCode::SUCCESS)
}
