//! Stage agents and pipeline orchestration
//!
//! Three stages (entity enrichment, per-entity news aggregation, and
//! per-entity sentiment analysis), each one model call bound to an input
//! payload, an output schema, and a tool set. The orchestrator sequences
//! them, fanning the news and sentiment stages out concurrently per
//! discovered entity, and assembles the final report in discovery order.

pub mod error;
pub mod orchestrator;
pub mod outputs;
pub mod prompts;
pub mod stage;

pub use error::{PipelineError, Result, StageError};
pub use orchestrator::Pipeline;
pub use stage::{StageConfig, StageRunner};
