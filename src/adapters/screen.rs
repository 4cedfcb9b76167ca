use std::fmt;

use crate::adapters::notice::Notice;

/// What one screen action renders: bound data lines plus at most one notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenOutput {
    pub lines: Vec<String>,
    pub notice: Option<Notice>,
}

impl ScreenOutput {
    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            notice: None,
        }
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            lines: Vec::new(),
            notice: Some(notice),
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn is_error(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_error)
    }
}

impl fmt::Display for ScreenOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        if let Some(notice) = &self.notice {
            writeln!(f, "{}", notice)?;
        }
        Ok(())
    }
}
