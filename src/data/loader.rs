// ============================================================
// Layer 4 - Corpus Loader
// ============================================================
// Loads every .txt and .docx file in a directory as a Document.
//
// .docx files are ZIP archives of XML; docx-rs gives us a typed
// tree to walk:
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text
//
// All text is passed through normalize_text before it becomes
// a Document. Files are returned sorted by name so the corpus
// order does not depend on the filesystem.

use anyhow::{Context, Result};
use docx_rs::read_docx;
use std::{fs, path::{Path, PathBuf}};

use crate::data::preprocessor::normalize_text;
use crate::domain::document::Document;

/// Loads all supported files from a directory.
pub struct CorpusLoader {
    dir: PathBuf,
}

impl CorpusLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load_all(&self) -> Result<Vec<Document>> {
        // Missing directory → empty corpus, so the tool still runs
        if !self.dir.exists() {
            tracing::warn!(
                "Docs directory '{}' does not exist - returning empty corpus",
                self.dir.display()
            );
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            paths.push(entry?.path());
        }
        paths.sort();

        let mut docs = Vec::new();
        for path in paths {
            let loaded = match path.extension().and_then(|e| e.to_str()) {
                Some("txt")  => load_text(&path),
                Some("docx") => load_docx(&path),
                _            => continue,
            };

            // One unreadable file should not sink the whole corpus
            match loaded {
                Ok(doc) if doc.text.is_empty() => {
                    tracing::debug!("Skipping empty document '{}'", doc.source);
                }
                Ok(doc) => {
                    tracing::debug!("Loaded: {} ({} chars)", doc.source, doc.text.len());
                    docs.push(doc);
                }
                Err(e) => tracing::warn!("Skipping '{}': {}", path.display(), e),
            }
        }

        tracing::info!("Loaded {} documents from '{}'", docs.len(), self.dir.display());
        Ok(docs)
    }
}

fn load_text(path: &Path) -> Result<Document> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    Ok(Document::new(source_name(path), normalize_text(&raw)))
}

fn load_docx(path: &Path) -> Result<Document> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let docx = read_docx(&bytes).map_err(|e| {
        anyhow::anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e)
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect();

    Ok(Document::new(source_name(path), normalize_text(&paragraphs.join("\n"))))
}

/// Concatenate the text runs of one paragraph. Runs are pieces of
/// the same sentence, so they are joined without a separator.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    use docx_rs::{ParagraphChild, RunChild};

    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_is_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let docs = CorpusLoader::new(dir.path().join("nope")).load_all().unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_loads_text_files_sorted_and_normalised() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "Lyon   is a city.").unwrap();
        fs::write(dir.path().join("a.txt"), "Paris\tis the capital.").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        fs::write(dir.path().join("empty.txt"), "   \n").unwrap();

        let docs = CorpusLoader::new(dir.path()).load_all().unwrap();
        assert_eq!(
            docs,
            vec![
                Document::new("a.txt", "Paris is the capital."),
                Document::new("b.txt", "Lyon is a city."),
            ]
        );
    }

    #[test]
    fn test_broken_docx_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.docx"), b"not a zip").unwrap();
        fs::write(dir.path().join("ok.txt"), "fine").unwrap();

        let docs = CorpusLoader::new(dir.path()).load_all().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "ok.txt");
    }
}
