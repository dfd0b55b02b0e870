// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Workflow coordination only: no regex tables, no file formats,
// no printing. The CLI layer calls in here; this layer calls the
// domain traits.

// The classify → resolve → retrieve → extract → cache orchestrator
pub mod answer_pipeline;

// Wires concrete collaborators into the pipeline
pub mod ask_use_case;
