pub mod health_handler;
pub mod study_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, root};
pub use study_handler::{evaluate, study};

/// JSON extractor settings: bodies that cannot be decoded become a
/// `400` [`AppError::ValidationError`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| AppError::from(err).into())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(root)
        .service(health_check)
        .service(study)
        .service(evaluate);
}
