use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;

/// A corpus file found in the corpus directory.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// File name, used as the document identifier.
    pub name: String,
    /// Fully resolved absolute path.
    pub absolute_path: PathBuf,
}

/// Extension of the files treated as plain-text documents.
const DOCUMENT_EXTENSION: &str = "txt";

/// List the plain-text documents directly inside `root`.
///
/// Only regular files (or symlinks to them) ending in `.txt` are returned.
/// Hidden entries and subdirectories are skipped. Results are sorted by name.
pub fn discover_files(root: &Path) -> Result<Vec<DiscoveredFile>> {
    let mut results = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            let path = entry.path();
            warn!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };

        // Hidden files (editor swaps, `.draft.txt`) are not corpus documents.
        if name.starts_with('.') || !is_document(Path::new(name)) {
            continue;
        }

        let file_type = entry.file_type()?;
        let absolute_path = if file_type.is_file() {
            entry.path().canonicalize()?
        } else if file_type.is_symlink() {
            match entry.path().canonicalize() {
                Ok(p) if p.is_file() => p,
                // Broken or pointing at a directory
                _ => continue,
            }
        } else {
            continue;
        };

        results.push(DiscoveredFile {
            name: name.to_owned(),
            absolute_path,
        });
    }

    results.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(results)
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == DOCUMENT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(files: &[DiscoveredFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn discovers_only_txt() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("python.txt"), "Python").unwrap();
        std::fs::write(tmp.path().join("notes.md"), "# Notes").unwrap();
        std::fs::write(tmp.path().join("image.png"), "binary").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        assert_eq!(names(&files), vec!["python.txt"]);
        assert!(files[0].absolute_path.is_absolute());
    }

    #[test]
    fn skips_hidden_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(".draft.txt"), "secret").unwrap();
        std::fs::write(tmp.path().join("visible.txt"), "hello").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        assert_eq!(names(&files), vec!["visible.txt"]);
    }

    #[test]
    fn does_not_recurse() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("nested.txt");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("deep.txt"), "deep").unwrap();
        std::fs::write(tmp.path().join("top.txt"), "top").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        assert_eq!(names(&files), vec!["top.txt"]);
    }

    #[test]
    fn results_are_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("z.txt"), "z").unwrap();
        std::fs::write(tmp.path().join("a.txt"), "a").unwrap();
        std::fs::write(tmp.path().join("m.txt"), "m").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        assert_eq!(names(&files), vec!["a.txt", "m.txt", "z.txt"]);
    }

    #[test]
    fn empty_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(discover_files(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(discover_files(&tmp.path().join("missing")).is_err());
    }
}
