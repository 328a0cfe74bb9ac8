//! Editor configuration: keybindings loaded from JSON

use std::path::{Path, PathBuf};

use profile_dispatch_core::Keybindings;

/// Command that quits the editor
pub const CMD_QUIT: &str = "quit";
/// Command that activates the New Profile button from anywhere
pub const CMD_NEW_PROFILE: &str = "new_profile";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub keybindings: Keybindings,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            keybindings: default_keybindings(),
        }
    }
}

/// Built-in bindings, overridden per command by the user file
pub fn default_keybindings() -> Keybindings {
    Keybindings::new()
        .with(CMD_QUIT, &["q", "esc", "ctrl+c"])
        .with(CMD_NEW_PROFILE, &["n"])
}

/// Config loading error type
#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, serde_json::Error),
    /// One key bound to two commands
    Conflict {
        path: PathBuf,
        key: String,
        first: String,
        second: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Could not read {}: {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Invalid keybindings in {}: {}", path.display(), e)
            }
            ConfigError::Conflict {
                path,
                key,
                first,
                second,
            } => write!(
                f,
                "Key '{}' is bound to both '{}' and '{}' in {}",
                key,
                first,
                second,
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
            ConfigError::Conflict { .. } => None,
        }
    }
}

/// Default location of the user keybindings file
pub fn default_keybindings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("profile-editor").join("keybindings.json"))
}

impl EditorConfig {
    /// Merge user keybindings JSON over the defaults
    ///
    /// The merged map must not bind one key to two commands.
    pub fn from_keybindings_json(path: &Path, json: &str) -> Result<Self, ConfigError> {
        let user: Keybindings = serde_json::from_str(json)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        let keybindings = Keybindings::merge(default_keybindings(), user);

        if let Some((key, first, second)) = keybindings.find_conflict() {
            return Err(ConfigError::Conflict {
                path: path.to_path_buf(),
                key: key.to_string(),
                first: first.to_string(),
                second: second.to_string(),
            });
        }

        Ok(Self { keybindings })
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and the built-in bindings otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_keybindings_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => {
                    tracing::debug!("No keybindings file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let json = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
        let config = Self::from_keybindings_json(&path, &json)?;
        tracing::info!(path = %path.display(), "Keybindings loaded");
        Ok(config)
    }
}
