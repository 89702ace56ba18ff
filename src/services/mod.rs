pub mod email_service;
pub mod submission_service;
