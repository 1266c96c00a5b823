//! Path normalization and noise filtering
//!
//! Input paths arrive as plain strings from whatever produced the list.
//! Separators are unified to `/` and anything matching a noise pattern
//! (editor temp files, build output, lockfiles, OS artifacts) is dropped
//! before the tree is built.

use std::sync::OnceLock;

use regex::RegexSet;

use crate::error::{FiletreeError, Result};

/// Built-in exclusion patterns, tested against the normalized path
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    // Editor backup / lock files
    r"~$",
    r"^#.*#$",
    r"^\.#",
    // Temp and swap files
    r"\.tmp$",
    r"\.bak$",
    r"\.swp$",
    r"\.swo$",
    // macOS directory service store
    r"\.DS_Store$",
    // Build output and dependency directories
    r"\.next/",
    r"node_modules/",
    r"dist/",
    r"build/",
    // Package manager lockfiles
    r"package-lock\.json$",
    r"yarn\.lock$",
    r"pnpm-lock\.yaml$",
    // Bundler output
    r"(?i-u:\bwebpack\b)",
    r"\.next/static/webpack/",
];

static DEFAULT_SET: OnceLock<RegexSet> = OnceLock::new();

fn default_set() -> &'static RegexSet {
    DEFAULT_SET.get_or_init(|| {
        RegexSet::new(DEFAULT_EXCLUDE_PATTERNS).unwrap_or_else(|_| RegexSet::empty())
    })
}

/// Replace every backslash with a forward slash
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Check a normalized path against the built-in patterns
pub fn is_excluded(path: &str) -> bool {
    default_set().is_match(path)
}

/// Normalizes and filters path lists
#[derive(Debug, Clone)]
pub struct PathFilter {
    /// Built-in patterns enabled
    use_defaults: bool,
    /// User-supplied patterns
    extra: Option<RegexSet>,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            use_defaults: true,
            extra: None,
        }
    }
}

impl PathFilter {
    /// Create a filter from the built-in set (optional) plus extra regexes
    pub fn new(use_defaults: bool, extra_patterns: &[String]) -> Result<Self> {
        // Compile one by one so the error names the offending pattern
        for pattern in extra_patterns {
            regex::Regex::new(pattern)
                .map_err(|e| FiletreeError::pattern(pattern.as_str(), e.to_string()))?;
        }

        let extra = if extra_patterns.is_empty() {
            None
        } else {
            let set = RegexSet::new(extra_patterns)
                .map_err(|e| FiletreeError::pattern(extra_patterns.join(" "), e.to_string()))?;
            Some(set)
        };

        Ok(Self {
            use_defaults,
            extra,
        })
    }

    /// A filter that lets everything through
    pub fn none() -> Self {
        Self {
            use_defaults: false,
            extra: None,
        }
    }

    /// Whether a normalized path matches any active pattern
    pub fn is_excluded(&self, path: &str) -> bool {
        (self.use_defaults && is_excluded(path))
            || self.extra.as_ref().is_some_and(|set| set.is_match(path))
    }

    /// Normalize every path and keep the ones no pattern matches, in input order
    pub fn apply<I, S>(&self, paths: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dropped = 0usize;
        let kept: Vec<String> = paths
            .into_iter()
            .map(|p| normalize_separators(p.as_ref()))
            .filter(|p| {
                let excluded = self.is_excluded(p);
                if excluded {
                    dropped += 1;
                }
                !excluded
            })
            .collect();

        if dropped > 0 {
            tracing::debug!(kept = kept.len(), dropped, "filtered path list");
        }
        kept
    }
}

/// Normalize and filter with the built-in patterns only
pub fn filter_paths<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PathFilter::default().apply(paths)
}
