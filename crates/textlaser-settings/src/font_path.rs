//! Font search path
//!
//! Fonts are looked up by file name in an ordered list of directories:
//! user-supplied directories first, then `./cxf_fonts`, the directory named by
//! the `cxf_fonts` (or `CXF_FONTS`) environment variable, and `~/.cxf_fonts`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Font file used when none is requested.
pub const DEFAULT_FONT: &str = "normal.cxf";

const ENV_VARS: [&str; 2] = ["cxf_fonts", "CXF_FONTS"];

/// Ordered list of font directories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSearchPath {
    dirs: Vec<PathBuf>,
}

impl FontSearchPath {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// The built-in directory list.
    pub fn standard() -> Self {
        let mut dirs = vec![PathBuf::from("./cxf_fonts")];
        for var in ENV_VARS {
            if let Some(dir) = std::env::var_os(var).filter(|v| !v.is_empty()) {
                let dir = PathBuf::from(dir);
                if !dirs.contains(&dir) {
                    dirs.push(dir);
                }
            }
        }
        if let Some(home) = dirs::home_dir() {
            dirs.push(home.join(".cxf_fonts"));
        }
        Self { dirs }
    }

    /// Put extra directories in front of the existing ones.
    pub fn with_extra_dirs(mut self, extra: &[PathBuf]) -> Self {
        let mut dirs = extra.to_vec();
        dirs.append(&mut self.dirs);
        self.dirs = dirs;
        self
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Find a font file. The search directories are tried in order; a name
    /// that is itself a path to an existing file is accepted last.
    pub fn locate(&self, name: &str) -> SettingsResult<PathBuf> {
        for dir in &self.dirs {
            let candidate = dir.join(name);
            debug!(candidate = %candidate.display(), "looking for font");
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        let direct = Path::new(name);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }

        Err(SettingsError::FontNotFound {
            name: name.to_string(),
            searched: self.dirs.clone(),
        })
    }
}
