//! Error types for playback control

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Playback errors surfaced on the snapshot
///
/// None of these are fatal to the controller. `Display` renders the
/// user-facing message; the technical cause is kept in the variant payload
/// for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PlaybackError {
    /// The media engine could not load or decode the item
    #[error("Unable to load audio. Please try again.")]
    #[serde(rename = "load-error")]
    Load { detail: String },

    /// The engine refused to start playback of a newly selected item
    #[error("Unable to play audio. Please try again.")]
    #[serde(rename = "playback-start-failed")]
    StartFailed { reason: String },

    /// The engine refused to resume playback after a pause
    #[error("Unable to play audio. Please try again.")]
    #[serde(rename = "playback-resume-failed")]
    ResumeFailed { reason: String },
}

impl PlaybackError {
    /// Create a load error
    pub fn load(detail: impl Into<String>) -> Self {
        Self::Load {
            detail: detail.into(),
        }
    }

    /// Create a playback-start error
    pub fn start_failed(reason: impl Into<String>) -> Self {
        Self::StartFailed {
            reason: reason.into(),
        }
    }

    /// Create a playback-resume error
    pub fn resume_failed(reason: impl Into<String>) -> Self {
        Self::ResumeFailed {
            reason: reason.into(),
        }
    }

    /// Taxonomy tag for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Load { .. } => ErrorKind::LoadError,
            Self::StartFailed { .. } => ErrorKind::PlaybackStartFailed,
            Self::ResumeFailed { .. } => ErrorKind::PlaybackResumeFailed,
        }
    }

    /// Technical cause reported by the media engine
    pub fn detail(&self) -> &str {
        match self {
            Self::Load { detail } => detail,
            Self::StartFailed { reason } | Self::ResumeFailed { reason } => reason,
        }
    }
}

/// Error taxonomy tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    LoadError,
    PlaybackStartFailed,
    PlaybackResumeFailed,
}

impl ErrorKind {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoadError => "load-error",
            Self::PlaybackStartFailed => "playback-start-failed",
            Self::PlaybackResumeFailed => "playback-resume-failed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Invalid playback configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Skip step must be a positive, finite number of seconds
    #[error("Invalid skip step: {0} (must be a positive number of seconds)")]
    InvalidSkipStep(f64),

    /// Volume step must lie in (0, 1]
    #[error("Invalid volume step: {0} (must be in (0, 1])")]
    InvalidVolumeStep(f32),

    /// Initial volume must lie in [0, 1]
    #[error("Invalid initial volume: {0} (must be in [0, 1])")]
    InvalidInitialVolume(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_taxonomy() {
        assert_eq!(PlaybackError::load("404").kind().as_str(), "load-error");
        assert_eq!(
            PlaybackError::start_failed("NotAllowedError").kind().as_str(),
            "playback-start-failed"
        );
        assert_eq!(
            PlaybackError::resume_failed("AbortError").kind().to_string(),
            "playback-resume-failed"
        );
    }

    #[test]
    fn display_is_user_facing() {
        let err = PlaybackError::load("MEDIA_ERR_SRC_NOT_SUPPORTED");
        assert_eq!(err.to_string(), "Unable to load audio. Please try again.");
        assert_eq!(err.detail(), "MEDIA_ERR_SRC_NOT_SUPPORTED");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(PlaybackError::start_failed("denied")).unwrap();
        assert_eq!(json["kind"], "playback-start-failed");
        assert_eq!(json["reason"], "denied");
    }
}
