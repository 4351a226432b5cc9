//! Recursive PDF renaming behind the `rename` subcommand.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::fs::{is_hidden_name, is_pdf_name, make_filename_safe, make_unique_path};

/// One completed rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Recursively rename every PDF under `root` to its filesystem-safe name.
///
/// The tree is enumerated fully before any file is moved, so renames never
/// feed back into the walk. Files whose names are already safe are left
/// alone; destination collisions get a `_1`, `_2`, … suffix before the
/// extension. Returns the (old, new) pair for every file actually moved.
///
/// A missing `root` is the one fatal condition ([`Error::MissingRoot`]).
/// Mid-walk I/O faults propagate and abort the run.
pub fn rename_pdfs(root: &Path) -> Result<Vec<RenameRecord>> {
    if !root.is_dir() {
        return Err(Error::MissingRoot(root.to_path_buf()));
    }

    let mut pdf_paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if is_hidden_name(name) || !is_pdf_name(name) {
            continue;
        }
        pdf_paths.push(entry.into_path());
    }

    let mut renamed = Vec::new();
    for path in pdf_paths {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let safe_name = make_filename_safe(file_name);
        if safe_name == file_name {
            continue;
        }

        let parent = path.parent().ok_or_else(|| Error::Rename {
            path: path.clone(),
            message: "file has no parent directory".to_string(),
        })?;

        let destination = make_unique_path(&parent.join(&safe_name));
        debug!(from = %path.display(), to = %destination.display(), "renaming");
        fs::rename(&path, &destination)?;

        renamed.push(RenameRecord {
            from: path,
            to: destination,
        });
    }

    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path, content: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_renames_unsafe_names() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("papers");
        touch(&root.join("2023/mains/Essay/My Paper (final).pdf"), b"pdf");

        let renamed = rename_pdfs(&root).unwrap();

        assert_eq!(renamed.len(), 1);
        assert_eq!(
            renamed[0].to,
            root.join("2023/mains/Essay/my_paper_final_.pdf")
        );
        assert!(renamed[0].to.is_file());
        assert!(!renamed[0].from.exists());
    }

    #[test]
    fn test_already_safe_tree_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("papers");
        touch(&root.join("2023/mains/Essay/already_safe.pdf"), b"pdf");

        let renamed = rename_pdfs(&root).unwrap();
        assert!(renamed.is_empty());
        assert!(root.join("2023/mains/Essay/already_safe.pdf").is_file());
    }

    #[test]
    fn test_collision_gets_numeric_suffix_without_data_loss() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("papers");
        touch(&root.join("sample test.pdf"), b"new content");
        touch(&root.join("sample_test.pdf"), b"old content");

        let renamed = rename_pdfs(&root).unwrap();

        assert_eq!(renamed.len(), 1);
        assert_eq!(renamed[0].to, root.join("sample_test_1.pdf"));
        assert_eq!(
            fs::read(root.join("sample_test.pdf")).unwrap(),
            b"old content"
        );
        assert_eq!(
            fs::read(root.join("sample_test_1.pdf")).unwrap(),
            b"new content"
        );
    }

    #[test]
    fn test_skips_hidden_and_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("papers");
        touch(&root.join(".Hidden File.pdf"), b"h");
        touch(&root.join("Not A Pdf.txt"), b"t");
        touch(&root.join("Upper Case.PDF"), b"p");

        let renamed = rename_pdfs(&root).unwrap();

        assert_eq!(renamed.len(), 1);
        assert_eq!(renamed[0].to, root.join("upper_case.pdf"));
        assert!(root.join(".Hidden File.pdf").is_file());
        assert!(root.join("Not A Pdf.txt").is_file());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = rename_pdfs(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::MissingRoot(_)));
    }
}
