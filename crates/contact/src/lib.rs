//! Contact-form domain for the portfolio site.
//!
//! Everything here is pure: the submission payload and its validation rules,
//! HTML escaping for values interpolated into email bodies, and the rendering
//! of the two outbound messages (owner notification and submitter
//! acknowledgement). Transport and HTTP concerns live in the server crate.

mod escape;
mod message;
mod submission;

pub use escape::escape_html;
pub use message::{EmailContent, OWNER_EMAIL, acknowledgement_email, notification_email};
pub use submission::{ContactSubmission, MIN_MESSAGE_LEN, ValidationError};
