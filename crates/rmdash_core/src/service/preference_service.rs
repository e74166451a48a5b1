//! Theme preference use-cases.
//!
//! # Responsibility
//! - Read the persisted theme at startup and write it on every toggle.
//!
//! # Invariants
//! - A missing or unrecognized stored value reads as [`Theme::Light`].
//! - Service layer remains storage-agnostic.

use crate::model::preference::Theme;
use crate::repo::preference_repo::{PreferenceRepository, RepoResult};
use log::{info, warn};

/// Storage key of the theme flag.
pub const THEME_KEY: &str = "theme";

/// Use-case service wrapper for UI preferences.
pub struct PreferenceService<R: PreferenceRepository> {
    repo: R,
}

impl<R: PreferenceRepository> PreferenceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the stored theme, defaulting to light.
    pub fn load_theme(&self) -> RepoResult<Theme> {
        let theme = match self.repo.get_preference(THEME_KEY)? {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!("event=theme_load module=preferences status=skip reason=unrecognized");
                Theme::default()
            }),
            None => Theme::default(),
        };
        info!(
            "event=theme_load module=preferences status=ok theme={}",
            theme.as_str()
        );
        Ok(theme)
    }

    pub fn set_theme(&self, theme: Theme) -> RepoResult<()> {
        self.repo.set_preference(THEME_KEY, theme.as_str())?;
        info!(
            "event=theme_save module=preferences status=ok theme={}",
            theme.as_str()
        );
        Ok(())
    }

    /// Flips `current`, persists it and returns the new theme.
    pub fn toggle_theme(&self, current: Theme) -> RepoResult<Theme> {
        let next = current.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
