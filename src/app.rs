// src/app.rs
use std::{
    io::{self, BufRead, Write},
    sync::{Mutex, PoisonError},
};

use anyhow::Result;
use chord_kernel_domain::flag_unlikely;
use chord_kernel_infra::FileCorpusStore;
use chord_kernel_shared_kernel::{ErrorContext, InversionMode, LookBack, Progression, StyleKey};
use chord_kernel_usecase::{ScoreProgression, ScoreRequest};
use tracing::{debug, warn};

use crate::{
    cli::OutputFormat,
    config::{Config, FALLBACK_STYLES},
    presentation::{self, ConsoleObserver},
    prompt::Prompter,
};

pub fn run(config: Config) -> Result<()> {
    run_with_io(config, io::stdin().lock(), io::stdout())
}

pub fn run_with_io<R, W>(config: Config, input: R, output: W) -> Result<()>
where
    R: BufRead,
    W: Write + Send,
{
    let store = FileCorpusStore::new(&config.datasets);
    let mut prompter = Prompter::new(input, output);
    let request = resolve_request(&config, &store, &mut prompter)?;
    let (_, output) = prompter.into_parts();
    debug!(
        style = %request.style,
        look_back = request.look_back.get(),
        tokens = request.progression.len(),
        "scoring progression"
    );

    let out = Mutex::new(output);
    let observer = ConsoleObserver::new(&out);
    let usecase = ScoreProgression::new(&store);
    let usecase = if config.verbose && config.format == OutputFormat::Table {
        usecase.with_observer(&observer)
    } else {
        usecase
    };
    let report = usecase
        .run(&request)
        .with_context(|| format!("failed to score progression against '{}'", request.style))?;

    let mut output = out.into_inner().unwrap_or_else(PoisonError::into_inner);
    let flagged = flag_unlikely(&report.positions, config.threshold);
    presentation::emit(&mut output, &report, &flagged, config.format, config.threshold)?;
    output.flush()?;
    Ok(())
}

/// Fills every value missing from `config`, prompting in interactive mode.
fn resolve_request<R: BufRead, W: Write>(
    config: &Config,
    store: &FileCorpusStore,
    prompter: &mut Prompter<R, W>,
) -> Result<ScoreRequest> {
    let interactive = config.is_interactive();

    let style = match &config.style {
        Some(style) => style.clone(),
        None if interactive => prompter.style(&config.default_style, &known_styles(store))?,
        None => config.default_style.clone(),
    };
    let mode = match config.inversions {
        Some(mode) => mode,
        None if interactive => prompter.inversions()?,
        None => InversionMode::Simple,
    };
    let look_back = match config.look_back {
        Some(look_back) => look_back,
        None if interactive => prompter.look_back()?,
        None => LookBack::DEFAULT,
    };
    let raw = match &config.progression {
        Some(raw) => raw.clone(),
        None => prompter.progression(mode)?,
    };

    Ok(ScoreRequest::new(Progression::parse(&raw), style).mode(mode).look_back(look_back))
}

/// Styles with a plain corpus on disk, or the built-in list when none can be found.
fn known_styles(store: &FileCorpusStore) -> Vec<StyleKey> {
    match store.available_styles(InversionMode::Simple) {
        Ok(styles) if !styles.is_empty() => styles,
        Ok(_) => fallback_styles(),
        Err(e) => {
            warn!("{e}; offering built-in styles");
            fallback_styles()
        }
    }
}

fn fallback_styles() -> Vec<StyleKey> {
    FALLBACK_STYLES.iter().filter_map(|s| StyleKey::new(s).ok()).collect()
}
