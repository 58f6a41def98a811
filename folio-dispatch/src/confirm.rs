//! Confirmation before launching the renderer.
//!
//! Rendering takes over a desktop application, so a batch only starts after
//! a [`Confirm`] implementation agrees. The CLI prompts on the terminal;
//! `--yes` and tests use [`AssumeYes`].

use std::io::{BufRead, Write};

/// Capability asked once before a batch starts.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Always agrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Writes the prompt to `output` and reads one answer line from `input`.
///
/// `y` or `yes` (any case) agrees; anything else, including end of input or
/// a read error, declines.
#[derive(Debug)]
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirm<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process terminal.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        let _ = write!(self.output, "{prompt} (y/n): ");
        let _ = self.output.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}
