pub mod completion;
pub mod pipeline_state;
pub use completion::Completion;
pub use pipeline_state::{PipelineState, StateUpdate};
