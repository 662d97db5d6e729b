//! Volume and mute coupling
//!
//! Volume is a linear 0.0-1.0 level handed straight to the media engine.
//! Mute is not a separate gain stage: muting drives the level to 0 and
//! unmuting restores the last audible level, so the pair can never show an
//! inconsistent combination.

/// Volume controller with mute memory
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0.0 - 1.0)
    level: f32,

    /// Mute state
    muted: bool,

    /// Last nonzero level, restored on unmute
    remembered: f32,
}

impl Volume {
    /// Create new volume controller
    ///
    /// A zero initial level starts muted and remembers full volume.
    pub fn new(level: f32) -> Self {
        let level = clamp_level(level).unwrap_or(1.0);

        Self {
            level,
            muted: level == 0.0,
            remembered: if level > 0.0 { level } else { 1.0 },
        }
    }

    /// Set volume level, clamped to 0.0 - 1.0
    ///
    /// Exactly 0 mutes; any audible level unmutes. Returns false when the
    /// input was NaN and nothing changed.
    pub fn set_level(&mut self, level: f32) -> bool {
        let Some(level) = clamp_level(level) else {
            return false;
        };

        self.level = level;
        if level == 0.0 {
            self.muted = true;
        } else {
            self.muted = false;
            self.remembered = level;
        }
        true
    }

    /// Get current volume level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level that unmuting would restore
    pub fn remembered(&self) -> f32 {
        self.remembered
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.level = if self.remembered > 0.0 {
                self.remembered
            } else {
                1.0
            };
            self.muted = false;
        } else {
            if self.level > 0.0 {
                self.remembered = self.level;
            }
            self.level = 0.0;
            self.muted = true;
        }
    }

    /// Level after stepping up or down by `step`
    pub fn stepped(&self, step: f32) -> f32 {
        (self.level + step).clamp(0.0, 1.0)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn clamp_level(level: f32) -> Option<f32> {
    if level.is_nan() {
        None
    } else {
        Some(level.clamp(0.0, 1.0))
    }
}
