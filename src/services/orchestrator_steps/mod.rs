pub mod study_steps;
