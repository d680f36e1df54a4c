pub mod completion_service;
pub mod nodes;
pub mod orchestrator_steps;
pub mod pipeline_service;
pub mod step_executor;
