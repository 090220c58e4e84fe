//! Batch Processing Module
//!
//! File collection and result counters for batch conversions.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Source formats accepted for HEIC conversion.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub fn collect_files(dir: &Path, extensions: &[&str], recursive: bool) -> Vec<PathBuf> {
    let walker = if recursive {
        WalkDir::new(dir).follow_links(true)
    } else {
        WalkDir::new(dir).max_depth(1)
    };

    walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| crate::common_utils::has_extension(e.path(), extensions))
        .map(|e| e.path().to_path_buf())
        .collect()
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: Vec<(PathBuf, String)>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self {
            total: 0,
            succeeded: 0,
            failed: 0,
            skipped: 0,
            errors: Vec::new(),
        }
    }

    pub fn success(&mut self) {
        self.total += 1;
        self.succeeded += 1;
    }

    pub fn fail(&mut self, path: PathBuf, error: String) {
        self.total += 1;
        self.failed += 1;
        self.errors.push((path, error));
    }

    pub fn skip(&mut self) {
        self.total += 1;
        self.skipped += 1;
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.succeeded as f64 / self.total as f64) * 100.0
        }
    }
}

impl Default for BatchResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_collect_files_filters_extensions() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("a.jpg"));
        touch(&temp.path().join("b.PNG"));
        touch(&temp.path().join("c.jpeg"));
        touch(&temp.path().join("notes.txt"));
        touch(&temp.path().join("d.gif"));

        let mut files = collect_files(temp.path(), SUPPORTED_IMAGE_EXTENSIONS, true);
        files.sort();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.jpeg"]);
    }

    #[test]
    fn test_collect_files_recursive() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        touch(&temp.path().join("top.jpg"));
        touch(&sub.join("deep.png"));

        let recursive = collect_files(temp.path(), SUPPORTED_IMAGE_EXTENSIONS, true);
        assert_eq!(recursive.len(), 2);

        let flat = collect_files(temp.path(), SUPPORTED_IMAGE_EXTENSIONS, false);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].file_name().unwrap(), "top.jpg");
    }

    #[test]
    fn test_collect_files_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(collect_files(temp.path(), SUPPORTED_IMAGE_EXTENSIONS, true).is_empty());
    }

    #[test]
    fn test_batch_result_new() {
        let result = BatchResult::new();
        assert_eq!(result.total, 0);
        assert_eq!(result.succeeded, 0);
        assert_eq!(result.failed, 0);
        assert_eq!(result.skipped, 0);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_batch_result_mixed() {
        let mut result = BatchResult::new();
        result.success();
        result.success();
        result.fail(PathBuf::from("test.png"), "Error".to_string());
        result.skip();

        assert_eq!(result.total, 4);
        assert_eq!(result.succeeded, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_total_equals_sum() {
        let mut result = BatchResult::new();
        result.success();
        result.fail(PathBuf::from("f1.png"), "E".to_string());
        result.skip();
        result.skip();

        assert_eq!(
            result.total,
            result.succeeded + result.failed + result.skipped
        );
    }

    #[test]
    fn test_success_rate() {
        let result = BatchResult::new();
        assert!((result.success_rate() - 100.0).abs() < 0.01);

        let mut result = BatchResult::new();
        result.success();
        result.fail(PathBuf::from("test.png"), "Error".to_string());
        assert!((result.success_rate() - 50.0).abs() < 0.01);

        let mut result = BatchResult::new();
        for i in 0..4 {
            result.fail(PathBuf::from(format!("f{}.png", i)), "E".to_string());
        }
        assert!((result.success_rate() - 0.0).abs() < 0.01);
    }
}
