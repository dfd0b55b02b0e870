// ============================================================
// Layer 5 - Answer Extraction
// ============================================================
//   registry.rs - (coarse, fine) → extraction strategy lookup,
//                 fixed at start-up
//   pattern.rs  - generic strategy: regex spans scored by the
//                 relevance of the sentences they occur in

/// Extractor registry and the default registrations
pub mod registry;

/// Regex span extractor
pub mod pattern;
