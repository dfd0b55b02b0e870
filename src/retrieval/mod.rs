// ============================================================
// Layer 5 - Document Retrieval
// ============================================================
// Two interchangeable DocumentRetriever implementations:
//
//   directory.rs - local .txt / .docx corpus, ranked by keyword
//                  overlap with the question
//   mock.rs      - fixed documents from a JSON fixture, used when
//                  a real search should not be made
//
// Which one is used is decided once, from PipelineConfig, when
// the application layer wires up the pipeline.

/// Local corpus retriever
pub mod directory;

/// Fixture-backed retriever
pub mod mock;
