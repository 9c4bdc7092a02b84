//! Loader for the RON controller tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ControllerConfig;
use super::validation::validate_config;
use crate::core::GameState;
use crate::movement::StartingAbilities;

/// Directory holding the data files, relative to the working directory.
pub const CONTENT_DIR: &str = "assets/data";

/// File name of the controller tuning inside [`CONTENT_DIR`].
pub const CONTROLLER_FILE: &str = "controller.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON source for a single struct, naming `file` in any error.
pub fn parse_single<T>(source: &str, file: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(source)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&contents, &file_name)
}

/// Load `controller.ron` from `base_path`.
pub fn load_controller_config(base_path: &Path) -> Result<ControllerConfig, ContentLoadError> {
    load_single_file::<ControllerConfig>(&base_path.join(CONTROLLER_FILE))
}

/// Load and validate the tuning, publish it as resources and start playing.
///
/// A missing, unreadable or invalid file falls back to compiled defaults.
pub(crate) fn load_controller_content(
    mut commands: Commands,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let config = match load_controller_config(Path::new(CONTENT_DIR)) {
        Ok(config) => {
            let errors = validate_config(&config);
            if errors.is_empty() {
                info!("[CONTENT] {}", config.summary());
                config
            } else {
                for error in &errors {
                    error!("[CONTENT] {}", error);
                }
                warn!(
                    "[CONTENT] {} tuning error(s), using default controller tuning",
                    errors.len()
                );
                ControllerConfig::default()
            }
        }
        Err(e) => {
            warn!("[CONTENT] {}; using default controller tuning", e);
            ControllerConfig::default()
        }
    };

    commands.insert_resource(config.movement);
    commands.insert_resource(config.camera);
    commands.insert_resource(config.feedback);
    commands.insert_resource(StartingAbilities(config.abilities));
    next_state.set(GameState::Playing);
}
