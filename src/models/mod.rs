pub mod agenda;
pub mod announcement;
pub mod church;
pub mod collaborator;
pub mod field;
pub mod offer;
pub mod report;
pub mod testimonial;
pub mod token;
pub mod user;
pub mod volunteer;

pub use agenda::Agenda;
pub use announcement::Announcement;
pub use church::Church;
pub use collaborator::Collaborator;
pub use field::Field;
pub use offer::Offer;
pub use report::Report;
pub use testimonial::Testimonial;
pub use token::{OneTimeToken, TokenType};
pub use user::{Role, User};
pub use volunteer::Volunteer;

use chrono::{DateTime, Utc};

/// Soft-delete state as a tagged value instead of an ambient nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    Active,
    Deleted(DateTime<Utc>),
}

impl DeleteStatus {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteStatus::Deleted(_))
    }
}

impl From<Option<DateTime<Utc>>> for DeleteStatus {
    fn from(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            None => DeleteStatus::Active,
            Some(at) => DeleteStatus::Deleted(at),
        }
    }
}
