// ============================================================
// Layer 5 - Question Classification
// ============================================================
// Produces the (coarse, fine) answer type of a question.
//
// The classifier is built once per process (rule table compiled
// up front) and shared by every question the pipeline answers.

/// Ordered regex rule table classifier
pub mod rules;
