//! Generation profiles
//!
//! A profile names the template and output paths, the comment markers that
//! delimit the macro regions, the generated macro names and the scaffold
//! lines to strip. The built-in profile matches the stock hashmap template;
//! a TOML file can override any section.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or validating a profile
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse profile TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid profile: {0}")]
    Invalid(String),
}

/// Comment markers delimiting the two macro regions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Markers {
    pub declarations_start: String,
    pub declarations_stop: String,
    pub definitions_start: String,
    pub definitions_stop: String,
}

/// Names of the generated function-like macros
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MacroNames {
    pub declare: String,
    pub define: String,
}

/// A complete generation profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Optional profile name
    pub name: Option<String>,
    /// Template to read
    pub input: PathBuf,
    /// Header to write
    pub output: PathBuf,
    pub markers: Markers,
    pub macros: MacroNames,
    /// Lines dropped wherever they appear (compared trimmed)
    pub scaffold: Vec<String>,
}

/// TOML structure for deserializing profiles; every section is optional
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlProfile {
    name: Option<String>,
    paths: Option<TomlPaths>,
    markers: Option<Markers>,
    macros: Option<MacroNames>,
    scaffold: Option<TomlScaffold>,
}

#[derive(Deserialize)]
struct TomlPaths {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

#[derive(Deserialize)]
struct TomlScaffold {
    lines: Vec<String>,
}

/// Built-in profile for the stock hashmap template
const DEFAULT_PROFILE: &str = r##"
name = "hashmap"

[paths]
input = "hashmap.in.h"
output = "hashmap.h"

[markers]
declarations_start = "/* Declarations start here */"
declarations_stop = "/* Declarations stop here */"
definitions_start = "/* Definitions start here */"
definitions_stop = "/* Definitions stop here */"

[macros]
declare = "HASHMAP_DECLARE"
define = "HASHMAP_DEFINE"

# Present only so the template compiles on its own
[scaffold]
lines = [
    "typedef int CustomValue;",
    "typedef const char *CustomKey;",
    "#ifndef HASH_CALLBACK",
    "#define HASH_CALLBACK NULL",
    "#endif /* HASH_CALLBACK */",
    "#ifndef COMPARISON_CALLBACK",
    "#define COMPARISON_CALLBACK NULL",
    "#endif /* COMPARISON_CALLBACK */",
]
"##;

impl Profile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string
    ///
    /// Sections missing from `content` are taken from the built-in profile.
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(content)?;
        let base = match Self::builtin() {
            Ok(base) => base,
            Err(e) => return Err(ProfileError::Invalid(format!("built-in profile: {}", e))),
        };

        let (input, output) = match parsed.paths {
            Some(paths) => (
                paths.input.unwrap_or(base.input),
                paths.output.unwrap_or(base.output),
            ),
            None => (base.input, base.output),
        };

        let profile = Profile {
            name: parsed.name.or(base.name),
            input,
            output,
            markers: parsed.markers.unwrap_or(base.markers),
            macros: parsed.macros.unwrap_or(base.macros),
            scaffold: parsed.scaffold.map(|s| s.lines).unwrap_or(base.scaffold),
        };
        profile.validate()?;
        Ok(profile)
    }

    fn builtin() -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(DEFAULT_PROFILE)?;
        match (parsed.paths, parsed.markers, parsed.macros, parsed.scaffold) {
            (Some(paths), Some(markers), Some(macros), Some(scaffold)) => Ok(Profile {
                name: parsed.name,
                input: paths.input.unwrap_or_default(),
                output: paths.output.unwrap_or_default(),
                markers,
                macros,
                scaffold: scaffold.lines,
            }),
            _ => Err(ProfileError::Invalid(
                "built-in profile is missing a section".to_string(),
            )),
        }
    }

    /// Check markers and macro names for usability
    pub fn validate(&self) -> Result<(), ProfileError> {
        let markers = [
            &self.markers.declarations_start,
            &self.markers.declarations_stop,
            &self.markers.definitions_start,
            &self.markers.definitions_stop,
        ];
        if markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ProfileError::Invalid("markers must not be empty".to_string()));
        }
        for (i, a) in markers.iter().enumerate() {
            // One marker containing another would make the line ambiguous
            if markers[i + 1..].iter().any(|b| a.contains(b.as_str()) || b.contains(a.as_str())) {
                return Err(ProfileError::Invalid(format!(
                    "marker '{}' overlaps another marker",
                    a
                )));
            }
        }

        for name in [&self.macros.declare, &self.macros.define] {
            let valid = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                return Err(ProfileError::Invalid(format!(
                    "'{}' is not a valid macro name",
                    name
                )));
            }
        }
        if self.macros.declare == self.macros.define {
            return Err(ProfileError::Invalid(
                "declare and define macros must differ".to_string(),
            ));
        }

        Ok(())
    }

    /// Override the template path
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    /// Override the output path
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::builtin().expect("Built-in profile should be valid TOML")
    }
}
