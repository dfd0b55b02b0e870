// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// answering pipeline works with. Nothing in here touches the
// filesystem, regex tables or the command line.
//
//   question.rs - Question text and its (coarse, fine) TypeLabel
//   document.rs - Opaque retrieved Document
//   answer.rs   - AnswerCandidate, CachedAnswers, AnswerResult
//   traits.rs   - Collaborator contracts the pipeline depends on
//   errors.rs   - Typed, recoverable failures
//
// Keeping these pure means the orchestrator can be driven
// entirely by in-memory fakes in tests.

// A normalised question and its classified answer type
pub mod question;

// A retrieved document, passed through untouched
pub mod document;

// Ranked answer candidates and the cached outcome of a question
pub mod answer;

// Core abstractions (traits) that other layers implement
pub mod traits;

// NoExtractorError and CacheError
pub mod errors;
