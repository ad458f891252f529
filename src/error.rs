// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for everything that can go wrong outside the formulas.
//!
//! The scoring functions are total, so nothing in `scoring` returns a
//! `Result`. Failures come from the edges: the filesystem, the drawing
//! backend, and user-supplied plans, flags and fonts.

use std::path::PathBuf;

/// Errors raised while configuring, sampling or rendering plots.
#[derive(Debug, thiserror::Error)]
pub enum RankplotError {
    #[error("I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("drawing failed: {reason}")]
    Draw { reason: String },

    #[error("unknown scenario: {name}")]
    UnknownScenario { name: String },

    #[error("unknown colormap: {name} (expected plasma, viridis or inferno)")]
    UnknownColormap { name: String },

    #[error("invalid scale '{label}': {reason}")]
    InvalidScale { label: String, reason: String },

    #[error("invalid normalization: {reason}")]
    InvalidNorm { reason: String },

    #[error("invalid resolution {0}: need at least 2 samples per axis")]
    InvalidResolution(usize),

    #[error("invalid plan: {0}")]
    Plan(#[from] serde_json::Error),

    #[error("font {path} could not be loaded: {reason}")]
    Font { path: PathBuf, reason: String },

    #[error("invalid reference date '{input}': {source}")]
    ReferenceDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl RankplotError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RankplotError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap any displayable drawing-backend error.
    pub fn draw(err: impl std::fmt::Display) -> Self {
        RankplotError::Draw {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RankplotError>;
