//! Simulated analysis progress.

use foresight_core::{Canvas, Color, Rect};
use serde::{Deserialize, Serialize};

use crate::theme;

/// Timer interval (ms); each interval adds one percent.
pub const INTERVAL_MS: f64 = 100.0;

/// Progress of a simulated data analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisProgress {
    /// Percent complete (0 to 100)
    percent: u8,
    /// Wall time not yet converted into an interval
    carry_ms: f64,
    /// Track color
    track_color: Color,
    /// Fill color
    fill_color: Color,
}

impl Default for AnalysisProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProgress {
    /// Progress at 0%.
    #[must_use]
    pub fn new() -> Self {
        Self {
            percent: 0,
            carry_ms: 0.0,
            track_color: Color::WHITE.with_alpha(0.2),
            fill_color: theme::sky(1.0),
        }
    }

    /// Percent complete.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// True once 100% is reached; the timer stops there.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.percent >= 100
    }

    /// Run one interval. Returns the new percentage.
    pub fn tick(&mut self) -> u8 {
        if !self.is_done() {
            self.percent += 1;
        }
        self.percent
    }

    /// Convert `elapsed_ms` of wall time into whole intervals, keeping the
    /// remainder for the next call. Returns the number of intervals run.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if self.is_done() {
            self.carry_ms = 0.0;
            return 0;
        }

        self.carry_ms += elapsed_ms.max(0.0);
        let mut ran = 0;
        while self.carry_ms >= INTERVAL_MS && !self.is_done() {
            self.carry_ms -= INTERVAL_MS;
            self.tick();
            ran += 1;
        }
        if self.is_done() {
            self.carry_ms = 0.0;
        }
        ran
    }

    /// Status line for the current percentage. Empty before the first tick.
    #[must_use]
    pub fn status(&self) -> String {
        match self.percent {
            0 => String::new(),
            n @ 1..=30 => format!("Connecting to Data Source: {n}% Complete"),
            31..=75 => "Analyzing Data Schema and Generating Initial Insights...".to_string(),
            76..=99 => "Finalizing Strategic Models: Insights Ready to Reveal...".to_string(),
            _ => "Insights Generated. Strategic Dashboard Ready.".to_string(),
        }
    }

    /// Paint the track and a fill proportional to progress.
    pub fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        canvas.fill_rect(bounds, self.track_color.into());
        if self.percent == 0 {
            return;
        }
        let fill_alpha = if self.is_done() { 1.0 } else { 0.8 };
        let width = bounds.width * f32::from(self.percent) / 100.0;
        canvas.fill_rect(
            Rect::new(bounds.x, bounds.y, width, bounds.height),
            self.fill_color.with_alpha(fill_alpha).into(),
        );
    }
}
