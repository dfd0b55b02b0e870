// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by the CLI and application layers:
//
//   config.rs       - PipelineConfig, loaded from JSON and
//                     overridden by command line toggles. Passed
//                     explicitly into the pipeline.
//
//   cache_writer.rs - Append-only JSON-lines question cache.
//                     Best-effort: write failures are logged,
//                     never propagated to the answer.

/// Pipeline configuration loading and saving
pub mod config;

/// Question/answer cache log
pub mod cache_writer;
