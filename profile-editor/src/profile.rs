//! Profile documents and loading them from disk
//!
//! A profile describes the fields of a data set to generate:
//!
//! ```json
//! {
//!   "schemaVersion": "0.7",
//!   "description": "Customer records",
//!   "fields": [
//!     { "name": "id", "type": "integer", "nullable": false },
//!     { "name": "email", "type": "string", "nullable": true }
//!   ],
//!   "constraints": [ { "field": "id", "greaterThan": 0 } ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A loaded profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<ProfileField>,
    /// Constraint rules, kept opaque
    #[serde(default)]
    pub constraints: Vec<serde_json::Value>,
}

/// One field declared by a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub nullable: bool,
}

/// Profile loading error type
#[derive(Debug)]
pub enum ProfileLoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ProfileLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileLoadError::Io(e) => write!(f, "Could not read profile: {}", e),
            ProfileLoadError::Parse(e) => write!(f, "Malformed profile JSON: {}", e),
            ProfileLoadError::Invalid(reason) => write!(f, "Invalid profile: {}", reason),
        }
    }
}

impl std::error::Error for ProfileLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileLoadError::Io(e) => Some(e),
            ProfileLoadError::Parse(e) => Some(e),
            ProfileLoadError::Invalid(_) => None,
        }
    }
}

impl Profile {
    /// Parse and validate a profile document
    pub fn from_json_str(json: &str) -> Result<Self, ProfileLoadError> {
        let profile: Profile = serde_json::from_str(json).map_err(ProfileLoadError::Parse)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Field names must be non-empty and unique
    pub fn validate(&self) -> Result<(), ProfileLoadError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(ProfileLoadError::Invalid("field with empty name".into()));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(ProfileLoadError::Invalid(format!(
                    "duplicate field '{}'",
                    field.name
                )));
            }
        }
        Ok(())
    }
}

/// Read a profile from a JSON file
pub fn load_profile(path: &Path) -> Result<Profile, ProfileLoadError> {
    let json = std::fs::read_to_string(path).map_err(ProfileLoadError::Io)?;
    let profile = Profile::from_json_str(&json)?;
    tracing::info!(
        path = %path.display(),
        fields = profile.fields.len(),
        "Profile loaded"
    );
    Ok(profile)
}
