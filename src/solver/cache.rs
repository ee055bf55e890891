//! Persisted score cache
//!
//! Memoizes average scores for the offline ranking tool. The cache file holds
//! one `<word> <score>` entry per line and is rewritten in full on save; a
//! missing file loads as an empty cache.

use rustc_hash::FxHashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// In-memory score cache backed by a flat file
#[derive(Debug, Default, Clone)]
pub struct ScoreCache {
    entries: FxHashMap<String, f64>,
}

impl ScoreCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a cache from a file
    ///
    /// A missing file yields an empty cache. Malformed lines are skipped.
    ///
    /// # Errors
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e),
        };

        let mut entries = FxHashMap::default();
        for line in content.lines() {
            let mut parts = line.split_whitespace();
            if let (Some(word), Some(score)) = (parts.next(), parts.next())
                && let Ok(score) = score.parse::<f64>()
            {
                entries.insert(word.to_string(), score);
            }
        }

        Ok(Self { entries })
    }

    /// Write the whole cache back to a file, replacing previous contents
    ///
    /// Entries are written in sorted order so saves are deterministic.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut sorted: Vec<(&String, &f64)> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut file = fs::File::create(path)?;
        for (word, score) in sorted {
            writeln!(file, "{word} {score}")?;
        }
        Ok(())
    }

    /// Look up a cached score
    #[must_use]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    /// Insert or replace a score
    pub fn insert(&mut self, word: impl Into<String>, score: f64) {
        self.entries.insert(word.into(), score);
    }

    /// Number of cached entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("wordle_coach_cache_{name}"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let cache = ScoreCache::load(temp_path("does_not_exist")).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn insert_and_get() {
        let mut cache = ScoreCache::new();
        assert_eq!(cache.get("crane"), None);

        cache.insert("crane", 2.125);
        assert_eq!(cache.get("crane"), Some(2.125));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn save_and_reload_round_trip() {
        let path = temp_path("round_trip");
        let mut cache = ScoreCache::new();
        cache.insert("crane", 2.125);
        cache.insert("slate", 1.75);

        cache.save(&path).unwrap();
        let reloaded = ScoreCache::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("crane"), Some(2.125));
        assert_eq!(reloaded.get("slate"), Some(1.75));
    }

    #[test]
    fn save_rewrites_previous_contents() {
        let path = temp_path("rewrite");

        let mut first = ScoreCache::new();
        first.insert("crane", 2.0);
        first.insert("slate", 1.5);
        first.save(&path).unwrap();

        let mut second = ScoreCache::new();
        second.insert("grape", 1.0);
        second.save(&path).unwrap();

        let reloaded = ScoreCache::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get("crane"), None);
        assert_eq!(reloaded.get("grape"), Some(1.0));
    }

    #[test]
    fn malformed_lines_skipped() {
        let path = temp_path("malformed");
        fs::write(&path, "crane 2.125\nnot-a-pair\nslate abc\ngrape 1.0\n").unwrap();

        let cache = ScoreCache::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("crane"), Some(2.125));
        assert_eq!(cache.get("grape"), Some(1.0));
    }
}
