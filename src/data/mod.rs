// ============================================================
// Layer 4 - Text Data
// ============================================================
// Turns files on disk into normalised Documents and provides the
// keyword scoring shared by retrieval and extraction:
//
//   .txt / .docx files
//       │
//       ▼
//   CorpusLoader   → reads files, extracts raw text
//       │
//       ▼
//   preprocessor   → normalises whitespace, splits sentences
//       │
//       ▼
//   keywords       → key terms + weighted whole-word overlap

/// Loads .txt and .docx files from a directory
pub mod loader;

/// Text normalisation and sentence splitting
pub mod preprocessor;

/// Question key terms and overlap scoring
pub mod keywords;
