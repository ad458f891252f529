// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Font registration for plot labels.
//!
//! Text is rasterized with ab_glyph, which needs font bytes registered up
//! front. We take an explicit path if one is configured, otherwise probe a few
//! well-known system locations. No font means no text: the heatmaps still
//! render, just without titles and tick labels.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use plotters::style::{register_font, FontStyle};

use crate::error::{RankplotError, Result};

/// Family name every label is drawn with.
pub const FONT_FAMILY: &str = "sans-serif";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Result of system probing, cached for the process.
static SYSTEM_FONT: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Make a label font available. Returns whether text can be drawn.
///
/// An explicit path that cannot be loaded is an error; a missing system font
/// is only a warning.
pub fn prepare_font(explicit: Option<&Path>) -> Result<bool> {
    if let Some(path) = explicit {
        load(path)?;
        return Ok(true);
    }

    let found = SYSTEM_FONT.get_or_init(|| {
        SYSTEM_FONTS
            .iter()
            .map(PathBuf::from)
            .find(|candidate| load(candidate).is_ok())
    });

    match found {
        Some(path) => {
            tracing::debug!(font = %path.display(), "using system font");
            Ok(true)
        }
        None => {
            tracing::warn!("no usable system font found; rendering plots without labels");
            Ok(false)
        }
    }
}

/// Font files already read, by path. `None` marks a file that failed to
/// register, so it is never read again.
type FontCache = HashMap<PathBuf, Option<&'static [u8]>>;

static LOADED: OnceLock<Mutex<FontCache>> = OnceLock::new();

fn cache() -> &'static Mutex<FontCache> {
    LOADED.get_or_init(|| Mutex::new(HashMap::new()))
}

fn load(path: &Path) -> Result<()> {
    let invalid = || RankplotError::Font {
        path: path.to_path_buf(),
        reason: "not a valid TrueType/OpenType font".to_string(),
    };

    let mut loaded = cache().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let cached = loaded.get(path).copied();
    let bytes = match cached {
        Some(Some(bytes)) => bytes,
        Some(None) => return Err(invalid()),
        None => {
            let bytes = fs::read(path).map_err(|e| RankplotError::Font {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            // plotters keeps registered fonts for the life of the process, so
            // each file is leaked at most once.
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if register_font(FONT_FAMILY, FontStyle::Normal, bytes).is_err() {
                loaded.insert(path.to_path_buf(), None);
                return Err(invalid());
            }
            loaded.insert(path.to_path_buf(), Some(bytes));
            return Ok(());
        }
    };

    // Re-register so the most recently requested font is the one drawn.
    register_font(FONT_FAMILY, FontStyle::Normal, bytes).map_err(|_| invalid())
}
