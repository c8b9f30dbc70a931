// src/prompt.rs
use std::io::{BufRead, Write};

use chord_kernel_shared_kernel::{
    ApplicationError, InversionMode, LookBack, PresentationError, Result, StyleKey,
};

/// Sequential question/answer session over any line-based input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes `prompt` and returns the trimmed answer.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| PresentationError::Prompt { prompt: prompt.trim().to_string(), source })?;
        if read == 0 {
            return Err(PresentationError::InputClosed { prompt: prompt.trim().to_string() }.into());
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer is one of `known`; blank picks `default`.
    ///
    /// An empty `known` list accepts any well-formed key. When `default` is
    /// not among `known`, the first known style is offered instead.
    pub fn style(&mut self, default: &StyleKey, known: &[StyleKey]) -> Result<StyleKey> {
        let default = match known.first() {
            Some(first) if !known.contains(default) => first,
            _ => default,
        };
        let others: Vec<&str> = known.iter().filter(|k| *k != default).map(StyleKey::as_str).collect();
        let prompt = if others.is_empty() {
            format!("Style ([{default}]): ")
        } else {
            format!("Style ([{default}]/{}): ", others.join("/"))
        };

        loop {
            let answer = self.ask(&prompt)?;
            let candidate = if answer.is_empty() { Ok(default.clone()) } else { StyleKey::new(&answer) };
            match candidate {
                Ok(style) if known.is_empty() || known.contains(&style) => return Ok(style),
                _ => {
                    let err = ApplicationError::UnknownStyle {
                        style: answer,
                        known: known.iter().map(ToString::to_string).collect(),
                    };
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    pub fn inversions(&mut self) -> Result<InversionMode> {
        let answer = self.ask("Use Inversions (y/[n]): ")?;
        Ok(InversionMode::from_flag(answer.to_lowercase().contains('y')))
    }

    pub fn look_back(&mut self) -> Result<LookBack> {
        let answer = self.ask(&format!("Size of desired context ([{}]): ", LookBack::DEFAULT))?;
        if answer.is_empty() {
            return Ok(LookBack::DEFAULT);
        }
        Ok(answer.parse::<LookBack>()?)
    }

    pub fn progression(&mut self, mode: InversionMode) -> Result<String> {
        writeln!(self.output, "The progression is a comma-separated string of chords.")?;
        writeln!(self.output, "  Ex, I,V,I,iv")?;
        if mode.is_enabled() {
            writeln!(self.output, "To define inversions, follow each roman numeral with parenthesis.")?;
            writeln!(self.output, "  Ex, V(0) is V in root position, V(1) is first inversion, etc")?;
        }
        let answer = self.ask("Your Chord Progression: ")?;
        writeln!(self.output)?;
        Ok(answer)
    }
}
