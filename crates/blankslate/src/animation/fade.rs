//! Fade-in of the overlay's content wrapper.

use std::time::Duration;

use super::easing::{Easing, ease};

/// Current state of a fade.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FadeState {
    /// Not fading; content is fully opaque.
    #[default]
    Idle,
    /// Fade in progress.
    Running {
        /// Current opacity from 0.0 to 1.0.
        alpha: f32,
    },
}

impl FadeState {
    /// The opacity to apply for this state.
    pub fn alpha(&self) -> f32 {
        match self {
            FadeState::Idle => 1.0,
            FadeState::Running { alpha } => *alpha,
        }
    }
}

/// Drives an alpha ramp from 0 to 1 over a fixed duration.
///
/// The host loop advances it by the frame delta; nothing here reads the
/// wall clock, which keeps the overlay deterministic under test.
#[derive(Debug, Clone)]
pub struct FadeIn {
    easing: Easing,
    duration: Duration,
    elapsed: Duration,
    running: bool,
}

impl FadeIn {
    /// Create an idle fade.
    pub fn new() -> Self {
        Self {
            easing: Easing::EaseOut,
            duration: Duration::ZERO,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    /// Get the easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing curve.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Duration of the current or last fade.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether a fade is in progress.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start fading in over `duration`.
    ///
    /// A zero duration snaps straight to opaque and returns `Idle`.
    pub fn start(&mut self, duration: Duration) -> FadeState {
        self.duration = duration;
        self.elapsed = Duration::ZERO;
        self.running = !duration.is_zero();
        self.state()
    }

    /// Stop immediately at full opacity.
    pub fn finish(&mut self) {
        self.running = false;
        self.elapsed = self.duration;
    }

    /// Advance by `dt` and return the new state.
    pub fn advance(&mut self, dt: Duration) -> FadeState {
        if !self.running {
            return FadeState::Idle;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.running = false;
        }
        self.state()
    }

    /// The current state without advancing.
    pub fn state(&self) -> FadeState {
        if !self.running {
            return FadeState::Idle;
        }
        let progress = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        FadeState::Running {
            alpha: ease(self.easing, progress),
        }
    }
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new()
    }
}
