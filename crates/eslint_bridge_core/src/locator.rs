//! Upward search for the ESLint configuration governing a file.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

/// Config file names ESLint itself recognizes, in lookup order.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &[
    "eslint.config.js",
    "eslint.config.mjs",
    "eslint.config.cjs",
    "eslint.config.ts",
    "eslint.config.mts",
    "eslint.config.cts",
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.yaml",
    ".eslintrc.yml",
    ".eslintrc.json",
    ".eslintrc",
];

/// Maximum number of parent traversals during a search.
pub const MAX_ASCENT_DEPTH: usize = 100;

/// Candidate names and bounds for a config search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSearchSpec {
    names: Vec<String>,
    max_depth: usize,
}

impl ConfigSearchSpec {
    /// Creates a search probing `names` in order at each level.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            max_depth: MAX_ASCENT_DEPTH,
        }
    }

    /// Sets the ascent bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Candidate names in probe order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Searches upward from `start_dir`.
    ///
    /// Level `i` is `start_dir` with `i` parent traversals applied. All names
    /// are tried at a level before moving up. The search ends at the
    /// filesystem root or once `i` exceeds the ascent bound.
    pub fn locate(&self, start_dir: impl AsRef<Path>) -> Option<PathBuf> {
        let start = absolutize(start_dir.as_ref());
        let mut current: &Path = &start;

        for depth in 0..=self.max_depth {
            for name in &self.names {
                let candidate = current.join(name);
                if candidate.exists() {
                    debug!("Found config at depth {}: {}", depth, candidate.display());
                    return Some(candidate);
                }
            }

            current = current.parent()?;
        }

        debug!(
            "Stopped config search after {} levels from {}",
            self.max_depth,
            start.display()
        );
        None
    }
}

impl Default for ConfigSearchSpec {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_NAMES.iter().copied())
    }
}

/// Finds the nearest config file for `start_dir` among `names`.
pub fn locate<S: AsRef<str>>(start_dir: impl AsRef<Path>, names: &[S]) -> Option<PathBuf> {
    ConfigSearchSpec::new(names.iter().map(|n| n.as_ref().to_string())).locate(start_dir)
}

/// Makes `path` absolute and removes `.`/`..` components lexically.
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to leave the root.
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
