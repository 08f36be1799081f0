use crate::domain::model::{HoursPolicy, Tone};
use crate::utils::error::Result;

/// Prompt collaborator. Returns `None` once input is exhausted.
pub trait InputSource {
    fn ask(&mut self, question: &str, default: f64) -> Result<Option<String>>;
}

/// Styled output collaborator.
pub trait OutputSink {
    fn clear(&mut self) -> Result<()>;
    fn emit(&mut self, tone: Tone, message: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn seconds_in_year(&self) -> f64;
    fn hours_policy(&self) -> HoursPolicy;
    fn clear_screen(&self) -> bool;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn ask(&mut self, question: &str, default: f64) -> Result<Option<String>> {
        (**self).ask(question, default)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn emit(&mut self, tone: Tone, message: &str) -> Result<()> {
        (**self).emit(tone, message)
    }
}
