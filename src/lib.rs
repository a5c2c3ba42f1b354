//! hashmap-gen - generates the production hashmap header from its template
//!
//! The template is an ordinary C header that compiles on its own. Two
//! comment-delimited regions in it become the bodies of the function-like
//! macros `HASHMAP_DECLARE` and `HASHMAP_DEFINE`, with placeholder names
//! rewritten into macro parameter references.
//!
//! # Example
//!
//! ```rust
//! use hashmap_gen::generate;
//!
//! let header = generate(
//!     "/* Declarations start here */\nvoid hashmap_init(Hashmap *map);\n/* Declarations stop here */\n",
//! ).unwrap();
//! assert!(header.contains("void Functions_Prefix_##_init(Struct_Name_ *map);"));
//! ```

pub mod error;
pub mod generator;
pub mod parser;
pub mod profile;
pub mod renderer;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use error::StructureError;
pub use generator::{expand, BlockKind, BlockSummary, Generated};
pub use profile::{Profile, ProfileError};
pub use renderer::{render_header, HeaderLine};

/// Errors that can occur during a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Template could not be read
    #[error("failed to read template '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Header could not be written
    #[error("failed to write header '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Malformed macro regions
    #[error("malformed template: {0}")]
    Structure(#[from] StructureError),

    /// Unusable profile
    #[error("{0}")]
    Profile(#[from] ProfileError),
}

/// Configuration for a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Paths, markers, macro names and scaffold lines
    pub profile: Profile,
    /// Debug mode: print a block summary to stderr
    pub debug: bool,
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Generate a header from template source with the built-in profile
pub fn generate(source: &str) -> Result<String, StructureError> {
    let generated = generate_with_config(source, &GenerateConfig::default())?;
    Ok(generated.header())
}

/// Generate header lines from template source with custom configuration
///
/// # Example
///
/// ```rust
/// use hashmap_gen::{generate_with_config, GenerateConfig, Profile};
///
/// let profile = Profile::from_str("[macros]\ndeclare = \"MAP_DECLARE\"\ndefine = \"MAP_DEFINE\"").unwrap();
/// let config = GenerateConfig::new().with_profile(profile);
///
/// let generated = generate_with_config(
///     "/* Declarations start here */\nCustomKey k;\n/* Declarations stop here */\n",
///     &config,
/// ).unwrap();
/// assert!(generated.header().starts_with("#define MAP_DECLARE("));
/// ```
pub fn generate_with_config(
    source: &str,
    config: &GenerateConfig,
) -> Result<Generated, StructureError> {
    let generated = expand(source, &config.profile)?;

    if config.debug {
        eprintln!("=== Macro Blocks ===");
        for block in &generated.blocks {
            eprintln!(
                "[{}] {} lines {}-{} ({} body lines)",
                block.kind, block.macro_name, block.opened_at, block.closed_at, block.body_lines
            );
        }
        eprintln!("scaffold lines dropped: {}", generated.scaffold_dropped);
        eprintln!("====================");
    }

    Ok(generated)
}

/// Read a template from disk
pub fn read_template(path: &Path) -> Result<String, GenerateError> {
    fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a rendered header to disk in one operation
pub fn write_header(path: &Path, contents: &str) -> Result<(), GenerateError> {
    fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the profile's template, generate, and write the profile's output
///
/// Nothing is written unless generation succeeds.
pub fn generate_file(config: &GenerateConfig) -> Result<Generated, GenerateError> {
    let source = read_template(&config.profile.input)?;
    let generated = generate_with_config(&source, config)?;
    write_header(&config.profile.output, &generated.header())?;
    Ok(generated)
}
