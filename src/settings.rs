use std::path::{Path, PathBuf};

use config::Config;
use serde::Deserialize;

use crate::error::ExtractError;

pub const DEFAULT_BASE_NAME: &str = "output";

/// Where and under what name the CSV is written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub base_name: String,
}

impl Settings {
    /// Layer built-in defaults, an optional TOML file, then explicit overrides.
    pub fn load(
        config_file: Option<&Path>,
        output_dir: Option<&Path>,
        base_name: Option<&str>,
    ) -> Result<Self, ExtractError> {
        let mut builder = Config::builder()
            .set_default("output_dir", ".")?
            .set_default("base_name", DEFAULT_BASE_NAME)?;

        if let Some(file) = config_file {
            builder = builder.add_source(
                config::File::from(file)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        if let Some(dir) = output_dir {
            builder = builder.set_override("output_dir", dir.to_string_lossy().into_owned())?;
        }
        if let Some(name) = base_name {
            builder = builder.set_override("base_name", name)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ExtractError> {
        if self.base_name.trim().is_empty() {
            return Err(ExtractError::InvalidSetting("base_name must not be empty".into()));
        }
        if self.base_name.contains(['/', '\\']) {
            return Err(ExtractError::InvalidSetting(format!(
                "base_name must be a plain file name, got {:?}",
                self.base_name
            )));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_dir: PathBuf::from("."),
            base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }
}
