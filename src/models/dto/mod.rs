pub mod request;
pub mod response;

pub use request::{EvalRequest, StudyRequest};
pub use response::{EvalResponse, HealthResponse, StudyResponse};
