//! Headless counterpart of the submission form: field state, the submit
//! lifecycle, and the HTTP call to `/api/submit`.

pub mod api;
pub mod form;

pub use api::{ApiClient, SubmitError, SubmitPayload};
pub use form::{IntakeForm, SubmitStatus, DESCRIPTION_MAX_CHARS};
