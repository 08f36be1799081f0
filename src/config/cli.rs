use crate::core::{InputSource, OutputSink};
use crate::domain::model::Tone;
use crate::utils::error::Result;
use console::{style, StyledObject, Term};
use std::io::BufRead;

/// Stream that carries prompts and messages. With `--json` stdout belongs to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChannel {
    Stdout,
    Stderr,
}

impl PromptChannel {
    pub fn for_run(json: bool) -> Self {
        if json {
            PromptChannel::Stderr
        } else {
            PromptChannel::Stdout
        }
    }

    pub fn term(&self) -> Term {
        match self {
            PromptChannel::Stdout => Term::stdout(),
            PromptChannel::Stderr => Term::stderr(),
        }
    }

    // color detection follows the stream actually written to
    fn paint<D>(&self, styled: StyledObject<D>) -> StyledObject<D> {
        match self {
            PromptChannel::Stdout => styled.for_stdout(),
            PromptChannel::Stderr => styled.for_stderr(),
        }
    }
}

/// Colored output on the prompt channel.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    channel: PromptChannel,
    term: Term,
    color: bool,
}

impl ConsoleSink {
    pub fn new(channel: PromptChannel, color: bool) -> Self {
        Self {
            channel,
            term: channel.term(),
            color,
        }
    }

    pub fn channel(&self) -> PromptChannel {
        self.channel
    }
}

impl OutputSink for ConsoleSink {
    fn clear(&mut self) -> Result<()> {
        if self.term.is_term() {
            self.term.clear_screen()?;
        }
        Ok(())
    }

    fn emit(&mut self, tone: Tone, message: &str) -> Result<()> {
        if !self.color {
            self.term.write_line(message)?;
            return Ok(());
        }

        let styled = match tone {
            Tone::Success => style(message).green(),
            Tone::Warning => style(message).yellow(),
            Tone::Danger => style(message).red(),
        };
        self.term.write_line(&self.channel.paint(styled).to_string())?;
        Ok(())
    }
}

/// Prompts on the prompt channel and reads answers line by line from stdin.
#[derive(Debug, Clone)]
pub struct TerminalInput {
    channel: PromptChannel,
    term: Term,
}

impl TerminalInput {
    pub fn new(channel: PromptChannel) -> Self {
        Self {
            channel,
            term: channel.term(),
        }
    }

    pub fn channel(&self) -> PromptChannel {
        self.channel
    }
}

impl InputSource for TerminalInput {
    fn ask(&mut self, question: &str, default: f64) -> Result<Option<String>> {
        self.term.write_str(&format!(
            "{} {} {} ",
            self.channel.paint(style("?").green()),
            self.channel.paint(style(question).bold()),
            self.channel.paint(style(format!("({})", default)).dim())
        ))?;
        self.term.flush()?;

        // raw stdin rather than Term::read_line, which cannot report end of input
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
