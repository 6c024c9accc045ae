//! Alert pattern engine for the buzzer.
//!
//! Turns the per-cycle [`AlertPattern`] into a time-varying on/off level.
//! The main loop calls [`tick`](AlertPatternEngine::tick) once per sampling
//! cycle and feeds the result into `BuzzerDriver::set()`.
//!
//! | Pattern      | Output                            |
//! |--------------|-----------------------------------|
//! | Silent       | Off                               |
//! | Intermittent | Square wave, 50% duty             |
//! | Continuous   | Solid on                          |
//!
//! Stack-allocated, no heap, host-testable.

use crate::level::AlertPattern;

pub struct AlertPatternEngine {
    phase_ms: u32,
    period_ms: u32,
    active: AlertPattern,
}

impl AlertPatternEngine {
    /// `period_ms` is the full intermittent cycle (on + off).
    pub fn new(period_ms: u32) -> Self {
        Self {
            phase_ms: 0,
            period_ms: period_ms.max(2),
            active: AlertPattern::Silent,
        }
    }

    /// Select the pattern for this cycle. Changing pattern resets the
    /// phase so an intermittent alert always starts with the on half.
    pub fn set_pattern(&mut self, pattern: AlertPattern) {
        if pattern != self.active {
            self.phase_ms = 0;
            self.active = pattern;
        }
    }

    /// Advance by `delta_ms` and return whether the buzzer should be on.
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        let out = match self.active {
            AlertPattern::Silent => false,
            AlertPattern::Continuous => true,
            AlertPattern::Intermittent => (self.phase_ms % self.period_ms) < self.period_ms / 2,
        };
        self.phase_ms = self.phase_ms.wrapping_add(delta_ms);
        out
    }

    pub fn active(&self) -> AlertPattern {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_is_always_off() {
        let mut engine = AlertPatternEngine::new(1000);
        engine.set_pattern(AlertPattern::Silent);
        for _ in 0..8 {
            assert!(!engine.tick(500));
        }
    }

    #[test]
    fn continuous_is_always_on() {
        let mut engine = AlertPatternEngine::new(1000);
        engine.set_pattern(AlertPattern::Continuous);
        for _ in 0..8 {
            assert!(engine.tick(500));
        }
    }

    #[test]
    fn intermittent_alternates_at_half_period() {
        let mut engine = AlertPatternEngine::new(1000);
        engine.set_pattern(AlertPattern::Intermittent);
        // 500 ms steps against a 1000 ms period: on, off, on, off...
        assert!(engine.tick(500));
        assert!(!engine.tick(500));
        assert!(engine.tick(500));
        assert!(!engine.tick(500));
    }

    #[test]
    fn pattern_change_resets_phase() {
        let mut engine = AlertPatternEngine::new(1000);
        engine.set_pattern(AlertPattern::Intermittent);
        let _ = engine.tick(500); // phase now in the off half
        engine.set_pattern(AlertPattern::Silent);
        engine.set_pattern(AlertPattern::Intermittent);
        // Fresh phase: back to the on half.
        assert!(engine.tick(500));
    }

    #[test]
    fn reselecting_same_pattern_keeps_phase() {
        let mut engine = AlertPatternEngine::new(1000);
        engine.set_pattern(AlertPattern::Intermittent);
        let _ = engine.tick(500);
        engine.set_pattern(AlertPattern::Intermittent);
        // Phase advanced to 500: off half.
        assert!(!engine.tick(500));
    }
}
