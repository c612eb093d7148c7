//! Page transition sequencer.
//!
//! A triggered transition runs exit, logo and enter phases back to back and
//! reports completion once, as the enter phase begins. The host navigates on
//! that event.

use foresight_core::{Canvas, Color, Rect};

/// Exit phase length (ms).
pub const EXIT_MS: f64 = 350.0;
/// Logo interstitial length (ms).
pub const LOGO_MS: f64 = 1000.0;
/// Enter phase length (ms).
pub const ENTER_MS: f64 = 650.0;

/// Transition phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Nothing shown
    #[default]
    Idle,
    /// Current page fading out
    Exit,
    /// Logo interstitial
    Logo,
    /// Next page fading in
    Enter,
}

impl TransitionPhase {
    /// Lowercase phase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Exit => "exit",
            Self::Logo => "logo",
            Self::Enter => "enter",
        }
    }
}

/// Event emitted by [`PageTransition::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The logo phase ended; navigate now.
    Complete,
}

/// Timer-driven transition state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageTransition {
    phase: TransitionPhase,
    elapsed_ms: f64,
    completed: bool,
}

impl PageTransition {
    /// Idle transition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Time since the trigger (ms).
    #[must_use]
    pub const fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// True while any phase other than idle is showing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    /// Start the transition. Ignored while one is running.
    pub fn trigger(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = TransitionPhase::Exit;
        self.elapsed_ms = 0.0;
        self.completed = false;
        true
    }

    /// Advance by `dt_ms`.
    pub fn advance(&mut self, dt_ms: f64) -> Option<TransitionEvent> {
        if !self.is_active() {
            return None;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        let t = self.elapsed_ms;
        self.phase = if t < EXIT_MS {
            TransitionPhase::Exit
        } else if t < EXIT_MS + LOGO_MS {
            TransitionPhase::Logo
        } else if t < EXIT_MS + LOGO_MS + ENTER_MS {
            TransitionPhase::Enter
        } else {
            TransitionPhase::Idle
        };

        if !self.completed && t >= EXIT_MS + LOGO_MS {
            self.completed = true;
            return Some(TransitionEvent::Complete);
        }
        None
    }

    /// Opacity of the black backdrop.
    #[must_use]
    pub fn backdrop_alpha(&self) -> f32 {
        match self.phase {
            TransitionPhase::Logo => 1.0,
            _ => 0.0,
        }
    }

    /// Paint the backdrop over `bounds`.
    pub fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        let alpha = self.backdrop_alpha();
        if alpha > 0.0 {
            canvas.fill_rect(bounds, Color::BLACK.with_alpha(alpha).into());
        }
    }
}
