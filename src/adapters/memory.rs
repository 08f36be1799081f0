use crate::core::{InputSource, OutputSink};
use crate::domain::model::Tone;
use crate::utils::error::Result;
use std::collections::VecDeque;

/// Replays a fixed list of answers, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl InputSource for ScriptedInput {
    fn ask(&mut self, question: &str, _default: f64) -> Result<Option<String>> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Keeps every emitted line with its tone.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub clears: usize,
    pub lines: Vec<(Tone, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, line)| line.as_str()).collect()
    }

    pub fn last(&self) -> Option<&(Tone, String)> {
        self.lines.last()
    }
}

impl OutputSink for RecordingSink {
    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn emit(&mut self, tone: Tone, message: &str) -> Result<()> {
        self.lines.push((tone, message.to_string()));
        Ok(())
    }
}
