//! The three study pipeline steps. Each reads the accumulated
//! [`PipelineState`](crate::models::domain::PipelineState), makes exactly one
//! completion call and returns the fields it produced.

pub mod evaluator;
pub mod quiz_generator;
pub mod summarizer;
