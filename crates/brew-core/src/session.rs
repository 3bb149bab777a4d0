//! Builder for assembling a brew session from configuration and an optional
//! recipe file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    cue::ToneEmitter,
    error::BrewError,
    models::RecipeDocument,
    params::validate_volume,
    timer::TimerEngine,
    Result, Schedule,
};

/// Builder for creating and configuring [`Session`] instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    config_path: Option<PathBuf>,
    recipe_path: Option<PathBuf>,
    volume: Option<f32>,
    muted: bool,
    no_color: bool,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom configuration file path.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/brew/config.json` when that
    /// file exists and built-in defaults otherwise.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Seeds the schedule from a recipe JSON file instead of the default
    /// recipe.
    pub fn with_recipe_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.recipe_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the configured cue volume.
    pub fn with_volume(mut self, volume: Option<f32>) -> Self {
        if volume.is_some() {
            self.volume = volume;
        }
        self
    }

    /// Starts every timer session muted, keeping the configured volume for
    /// the `m` key to restore.
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Forces plain output regardless of the configuration.
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Builds the configured session.
    ///
    /// # Errors
    ///
    /// Returns `BrewError::FileSystem` if a named file cannot be read,
    /// `BrewError::Serialization` if it is malformed, and
    /// `BrewError::InvalidInput` for out-of-range values.
    pub fn build(self) -> Result<Session> {
        let mut config = Config::load_or_default(self.config_path.as_deref())?;

        if let Some(volume) = self.volume {
            config.volume = validate_volume(volume)?;
        }
        if self.no_color {
            config.color = false;
        }

        let schedule = match &self.recipe_path {
            Some(path) => load_recipe(path)?,
            None => Schedule::default(),
        };

        log::debug!(
            "Session ready: {} steps, volume {:.2}",
            schedule.len(),
            config.volume
        );
        Ok(Session {
            config,
            schedule,
            muted: self.muted,
        })
    }
}

/// Reads a recipe document and turns it into a schedule.
pub fn load_recipe(path: &Path) -> Result<Schedule> {
    let contents = fs::read_to_string(path).map_err(|e| BrewError::file_system(path, e))?;
    let recipe: RecipeDocument = serde_json::from_str(&contents)?;
    Schedule::from_recipe(&recipe)
}

/// One run of the application: the builder's schedule and the settings every
/// timer session starts from.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub schedule: Schedule,
    /// Timer sessions start muted; the configured volume is kept for unmuting.
    pub muted: bool,
}

impl Session {
    /// Opens a fresh timer session over a copy of the current schedule.
    ///
    /// Called every time the user enters timer mode; nothing carries over
    /// from a previous timer session.
    pub fn timer<E: ToneEmitter>(&self, emitter: E) -> TimerEngine<E> {
        TimerEngine::new(self.schedule.clone(), emitter)
            .with_volume(self.config.volume)
            .with_preparation_cues(self.config.preparation_cues)
            .with_muted(self.muted)
    }
}
