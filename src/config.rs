// src/config.rs
use std::path::PathBuf;

use chord_kernel_domain::validate_threshold;
use chord_kernel_shared_kernel::{ChordKernelError, InversionMode, LookBack, PresentationError, StyleKey};

use crate::cli::{Args, OutputFormat};

pub const DEFAULT_STYLE: &str = "monteverdi";

/// Styles offered when the dataset directory cannot be listed.
pub const FALLBACK_STYLES: [&str; 2] = ["monteverdi", "bach"];

/// Top-level configuration derived from CLI arguments.
///
/// `None` fields are asked for interactively, or take their defaults when a
/// progression was supplied up front.
#[derive(Debug, Clone)]
pub struct Config {
    pub datasets: PathBuf,
    pub style: Option<StyleKey>,
    pub default_style: StyleKey,
    pub inversions: Option<InversionMode>,
    pub look_back: Option<LookBack>,
    pub progression: Option<String>,
    pub threshold: f64,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl Config {
    /// No prompts are shown when the progression is already known.
    pub fn is_interactive(&self) -> bool {
        self.progression.is_none()
    }
}

impl TryFrom<Args> for Config {
    type Error = ChordKernelError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let style = args.style.map(StyleKey::new).transpose()?;
        let look_back = args.look_back.map(LookBack::new).transpose()?;
        let threshold = validate_threshold(args.threshold)?;
        // Prompts share stdout with the report.
        if args.format == OutputFormat::Json && args.progression.is_none() {
            return Err(PresentationError::InvalidValue {
                flag: "--format".into(),
                value: "json".into(),
                reason: "requires --progression".into(),
            }
            .into());
        }

        Ok(Self {
            datasets: args.datasets,
            style,
            default_style: StyleKey::new(DEFAULT_STYLE)?,
            inversions: match (args.inversions, args.no_inversions) {
                (true, _) => Some(InversionMode::WithInversions),
                (_, true) => Some(InversionMode::Simple),
                _ => None,
            },
            look_back,
            progression: args.progression,
            threshold,
            format: args.format,
            verbose: !args.quiet,
        })
    }
}
