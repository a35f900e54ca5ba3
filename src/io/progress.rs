//! Terminal spinner reporting the current pipeline stage

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix:.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static DONE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("✓ [{elapsed_precise}] {prefix:.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner that names each stage of a command as it runs
///
/// A hidden spinner is used when progress is disabled, so callers report
/// stages unconditionally.
pub struct StageProgress {
    bar: ProgressBar,
    started: Instant,
    stages: Vec<(String, Duration)>,
    stage_started: Instant,
}

impl StageProgress {
    /// Create a visible spinner labelled with the command name
    pub fn new(command: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(command.to_owned());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self::with_bar(bar)
    }

    /// Create a spinner that draws nothing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        let now = Instant::now();
        Self {
            bar,
            started: now,
            stages: Vec::new(),
            stage_started: now,
        }
    }

    /// Close the current stage and start a new one
    pub fn stage(&mut self, name: &str) {
        self.close_stage();
        self.bar.set_message(name.to_owned());
        self.stage_started = Instant::now();
    }

    /// Names and durations of completed stages, oldest first
    pub fn completed(&self) -> &[(String, Duration)] {
        &self.stages
    }

    /// Whether the spinner draws to the terminal
    pub fn is_visible(&self) -> bool {
        !self.bar.is_hidden()
    }

    /// Close the last stage and leave a summary line
    pub fn finish(mut self) -> Vec<(String, Duration)> {
        self.close_stage();
        self.bar.set_style(DONE_STYLE.clone());
        self.bar
            .finish_with_message(format!("done in {:?}", self.started.elapsed()));
        self.stages
    }

    fn close_stage(&mut self) {
        let message = self.bar.message();
        if !message.is_empty() {
            self.stages.push((message, self.stage_started.elapsed()));
        }
    }
}
