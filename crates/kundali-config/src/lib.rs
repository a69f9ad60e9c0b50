use kundali::EngineSettings;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Locations probed for the engine config, relative to the working directory.
/// The second entry covers binaries run from inside `crates/<name>`.
pub const CONFIG_PATHS: [&str; 2] = ["configs/kundali.toml", "../../configs/kundali.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    engine: Option<EngineSettings>,
}

/// Contents of the first config file found, or `None` when there is none.
pub fn read_kundali_toml_text() -> Option<String> {
    CONFIG_PATHS.iter().find_map(|p| {
        let text = fs::read_to_string(p).ok()?;
        log::debug!("loaded engine config from {}", p);
        Some(text)
    })
}

/// Parse and validate the `[engine]` section of a TOML document. A document
/// without that section yields the defaults.
pub fn load_engine_settings_from_str(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse kundali.toml: {e}"))?;
    let settings = root.engine.unwrap_or_default();
    settings
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid [engine] config: {e}"))?;
    Ok(settings)
}

pub fn load_engine_settings_from_path(path: &Path) -> anyhow::Result<EngineSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    load_engine_settings_from_str(&text)
}

/// Load settings from the first of [`CONFIG_PATHS`] that exists, falling back
/// to [`EngineSettings::default`] when none does.
pub fn load_engine_settings() -> anyhow::Result<EngineSettings> {
    match read_kundali_toml_text() {
        Some(text) => load_engine_settings_from_str(&text),
        None => {
            log::debug!("no kundali.toml found in {:?}, using defaults", CONFIG_PATHS);
            Ok(EngineSettings::default())
        }
    }
}
