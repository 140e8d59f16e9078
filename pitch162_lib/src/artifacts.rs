//! Raw page dumps for offline inspection of the site's markup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Default dump directory, relative to the working directory.
pub const DEFAULT_HTML_DIR: &str = "br_debug_html";

/// Writes one `.html` file per fetched page.
#[derive(Debug, Clone)]
pub struct HtmlDump {
    dir: PathBuf,
}

impl HtmlDump {
    /// Creates the dump directory if needed.
    pub fn create(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.html", safe_file_stem(url)))
    }

    /// Writes `html` under the file name derived from `url`.
    pub fn save(&self, url: &str, html: &str) -> io::Result<PathBuf> {
        let path = self.path_for(url);
        fs::write(&path, html)?;
        Ok(path)
    }
}

/// Lowercased URL with each run of non-alphanumerics replaced by `_`.
pub fn safe_file_stem(url: &str) -> String {
    NON_ALNUM.replace_all(&url.to_lowercase(), "_").into_owned()
}
