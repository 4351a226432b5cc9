//! Index builder: scans the papers tree and emits the JSON artifacts.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::catalog::category::Category;
use crate::catalog::exam_type::normalize_exam_type;
use crate::catalog::paper::Paper;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, pdf_file_names, subdir_names};

/// Everything discovered in one scan of the papers tree.
///
/// Built bottom-up while walking `root/<year>/<examType>/<category>/*.pdf`.
/// Map insertion order is what the JSON artifacts serialize in: years
/// descending, everything below in first-seen order.
#[derive(Debug, Default)]
pub struct PaperIndex {
    /// Year labels, descending.
    pub years: Vec<String>,
    /// Year -> normalized exam types, first-seen order.
    pub paper_types: IndexMap<String, Vec<String>>,
    /// "year/examType" -> category records, first-seen order.
    pub categories: IndexMap<String, Vec<Category>>,
    /// All discovered papers, in discovery order.
    pub papers: Vec<Paper>,
}

/// Counts reported after a scan.
#[derive(Debug, Clone, Copy)]
pub struct IndexSummary {
    pub years: usize,
    pub paper_types: usize,
    pub categories: usize,
    pub papers: usize,
}

impl PaperIndex {
    /// Scan the papers tree rooted at `root`.
    ///
    /// Returns [`Error::MissingRoot`] if `root` is not a directory; callers
    /// decide whether that is fatal.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::MissingRoot(root.to_path_buf()));
        }

        let mut index = PaperIndex::default();

        let mut year_dirs = subdir_names(root)?;
        year_dirs.reverse();

        for year in year_dirs {
            let year_path = root.join(&year);
            index.years.push(year.clone());
            index.paper_types.insert(year.clone(), Vec::new());

            for type_dir in subdir_names(&year_path)? {
                let type_path = year_path.join(&type_dir);
                let exam_type = normalize_exam_type(&type_dir);

                let types = index.paper_types.entry(year.clone()).or_default();
                if !types.contains(&exam_type) {
                    types.push(exam_type.clone());
                }

                let key = format!("{}/{}", year, exam_type);
                index.categories.entry(key.clone()).or_default();

                for category_dir in subdir_names(&type_path)? {
                    let category_path = type_path.join(&category_dir);
                    let category = Category::from_folder(&category_dir);
                    let category_id = category.id.clone();

                    let entries = index.categories.entry(key.clone()).or_default();
                    if !entries.contains(&category) {
                        entries.push(category);
                    }

                    for file_name in pdf_file_names(&category_path)? {
                        debug!(year = %year, exam_type = %exam_type, file = %file_name, "indexing paper");
                        index.papers.push(Paper::new(
                            &year,
                            &type_dir,
                            &exam_type,
                            &category_dir,
                            &category_id,
                            &file_name,
                        ));
                    }
                }
            }
        }

        Ok(index)
    }

    /// Write the four JSON artifacts into `config_dir`, creating it first.
    ///
    /// Files are fully overwritten on each run.
    pub fn write_to(&self, config_dir: &Path) -> Result<()> {
        ensure_dir(config_dir)?;

        fs::write(
            config_dir.join("years.json"),
            serde_json::to_string_pretty(&self.years)?,
        )?;
        fs::write(
            config_dir.join("paper_types.json"),
            serde_json::to_string_pretty(&self.paper_types)?,
        )?;
        fs::write(
            config_dir.join("categories.json"),
            serde_json::to_string_pretty(&self.categories)?,
        )?;
        fs::write(
            config_dir.join("papers.json"),
            serde_json::to_string_pretty(&self.papers)?,
        )?;

        Ok(())
    }

    /// Counts of everything discovered.
    pub fn summary(&self) -> IndexSummary {
        IndexSummary {
            years: self.years.len(),
            paper_types: self.paper_types.values().map(Vec::len).sum(),
            categories: self.categories.values().map(Vec::len).sum(),
            papers: self.papers.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"%PDF-1.4").unwrap();
    }

    #[test]
    fn test_scan_single_paper() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("papers");
        touch(&root.join("2023/mains/General Studies Paper I/sample test.pdf"));

        let index = PaperIndex::scan(&root).unwrap();

        assert_eq!(index.years, vec!["2023"]);
        assert_eq!(index.paper_types["2023"], vec!["mains"]);

        let cats = &index.categories["2023/mains"];
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].id, "gs1");
        assert_eq!(cats[0].name, "General Studies Paper I");
        assert_eq!(cats[0].folder, "General Studies Paper I");

        assert_eq!(index.papers.len(), 1);
        let paper = &index.papers[0];
        assert_eq!(paper.id, "2023-mains-gs1");
        assert_eq!(paper.file_name, "sample_test.pdf");
        assert_eq!(
            paper.title,
            "UPSC Main Examination 2023 - General Studies Paper I"
        );
    }

    #[test]
    fn test_years_descending_and_type_folding() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("papers");
        touch(&root.join("2022/Prelims/CSAT/a.pdf"));
        touch(&root.join("2023/Preliminary Examination/CSAT/b.pdf"));
        touch(&root.join("2023/Mains/Essay/c.pdf"));

        let index = PaperIndex::scan(&root).unwrap();

        assert_eq!(index.years, vec!["2023", "2022"]);
        // Both prelim-prefixed folders normalize to the same token.
        assert_eq!(index.paper_types["2023"], vec!["mains", "prelims"]);
        assert_eq!(index.paper_types["2022"], vec!["prelims"]);
        assert!(index.categories.contains_key("2023/prelims"));
        assert!(index.categories.contains_key("2022/prelims"));
    }

    #[test]
    fn test_duplicate_paper_ids_in_one_category() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("papers");
        touch(&root.join("2023/mains/Essay/first.pdf"));
        touch(&root.join("2023/mains/Essay/second.pdf"));

        let index = PaperIndex::scan(&root).unwrap();

        // Paper ids are category-level only, so both files share one id.
        assert_eq!(index.papers.len(), 2);
        assert_eq!(index.papers[0].id, "2023-mains-essay");
        assert_eq!(index.papers[1].id, "2023-mains-essay");
        assert_ne!(index.papers[0].file_name, index.papers[1].file_name);

        // But the category list holds a single record.
        assert_eq!(index.categories["2023/mains"].len(), 1);
    }

    #[test]
    fn test_skips_hidden_and_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("papers");
        touch(&root.join("2023/mains/Essay/real.pdf"));
        touch(&root.join("2023/mains/Essay/.hidden.pdf"));
        fs::write(root.join("2023/mains/Essay/notes.txt"), b"n").unwrap();
        fs::create_dir_all(root.join(".cache/mains/Essay")).unwrap();

        let index = PaperIndex::scan(&root).unwrap();

        assert_eq!(index.years, vec!["2023"]);
        assert_eq!(index.papers.len(), 1);
        assert_eq!(index.papers[0].original_file_name, "real.pdf");
    }

    #[test]
    fn test_missing_root_is_error_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("does-not-exist");

        let err = PaperIndex::scan(&root).unwrap_err();
        assert!(matches!(err, Error::MissingRoot(_)));

        let out = dir.path().join("config");
        assert!(!out.exists());
    }

    #[test]
    fn test_write_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("papers");
        touch(&root.join("2023/mains/General Studies Paper I/sample test.pdf"));

        let index = PaperIndex::scan(&root).unwrap();
        let out = dir.path().join("config");
        index.write_to(&out).unwrap();

        let years: Vec<String> =
            serde_json::from_str(&fs::read_to_string(out.join("years.json")).unwrap()).unwrap();
        assert_eq!(years, vec!["2023"]);

        let papers: Vec<serde_json::Value> =
            serde_json::from_str(&fs::read_to_string(out.join("papers.json")).unwrap()).unwrap();
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0]["fileName"], "sample_test.pdf");
        assert_eq!(papers[0]["categoryId"], "gs1");

        // 2-space indentation on every artifact.
        let raw = fs::read_to_string(out.join("categories.json")).unwrap();
        assert!(raw.contains("\n  \""));

        let summary = index.summary();
        assert_eq!(summary.years, 1);
        assert_eq!(summary.paper_types, 1);
        assert_eq!(summary.categories, 1);
        assert_eq!(summary.papers, 1);
    }
}
