//! Instruction parsing and the guided-mode cursor.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ENUMERATOR_RE: OnceLock<Regex> = OnceLock::new();
static STEP_LABEL_RE: OnceLock<Regex> = OnceLock::new();

// "1." / "2)" plus trailing whitespace
fn enumerator_regex() -> &'static Regex {
    ENUMERATOR_RE.get_or_init(|| {
        Regex::new(r"^[0-9]+[.)]\s*")
            .unwrap_or_else(|error| panic!("enumerator regex failed to compile: {error}"))
    })
}

// "Step 3:" in any case
fn step_label_regex() -> &'static Regex {
    STEP_LABEL_RE.get_or_init(|| {
        Regex::new(r"(?i)^step\s+[0-9]+:\s*")
            .unwrap_or_else(|error| panic!("step label regex failed to compile: {error}"))
    })
}

/// Split free-text instructions into an ordered list of steps.
///
/// Each non-blank line becomes one step with any leading `1.`, `1)` or
/// `Step 1:` label removed. Labels are stripped until none is left, so
/// feeding the output back in returns it unchanged.
pub fn parse_steps(instructions: &str) -> Vec<String> {
    instructions
        .split('\n')
        .map(strip_labels)
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_labels(line: &str) -> &str {
    let mut step = line.trim();
    loop {
        let before = step.len();
        for re in [enumerator_regex(), step_label_regex()] {
            if let Some(m) = re.find(step) {
                step = step[m.end()..].trim_start();
            }
        }
        if step.len() == before {
            return step.trim_end();
        }
    }
}

/// Result of advancing the guided cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMove {
    /// Moved to the step at this index.
    Advanced(usize),
    /// Was on the last step; guided mode has been left.
    Finished,
    /// Guided mode is off; nothing moved.
    Inactive,
}

/// Position within a recipe's parsed steps while cooking along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCursor {
    index: usize,
    guided: bool,
}

impl StepCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_guided(&self) -> bool {
        self.guided
    }

    /// Switch between guided and full-list display, restarting at step 0.
    pub fn toggle_guided(&mut self) {
        self.guided = !self.guided;
        self.index = 0;
    }

    /// Back to step 0 with guided mode off.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one step, or leave guided mode when already on the last one.
    /// Does nothing outside guided mode.
    pub fn next(&mut self, step_count: usize) -> StepMove {
        if !self.guided {
            return StepMove::Inactive;
        }
        self.clamp(step_count);
        if self.index + 1 < step_count {
            self.index += 1;
            StepMove::Advanced(self.index)
        } else {
            self.guided = false;
            StepMove::Finished
        }
    }

    /// Go back one step; stays on step 0.  Does nothing outside guided mode.
    pub fn previous(&mut self, step_count: usize) {
        if !self.guided {
            return;
        }
        self.clamp(step_count);
        self.index = self.index.saturating_sub(1);
    }

    /// Keep the index within `[0, step_count - 1]`.
    pub fn clamp(&mut self, step_count: usize) {
        self.index = self.index.min(step_count.saturating_sub(1));
    }

    /// One-based "step i of n" position, or `None` when there are no steps.
    pub fn progress(&self, step_count: usize) -> Option<(usize, usize)> {
        if step_count == 0 {
            return None;
        }
        Some((self.index.min(step_count - 1) + 1, step_count))
    }
}
