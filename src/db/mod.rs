pub mod entity;
pub mod repository;

pub mod agendas;
pub mod announcements;
pub mod churches;
pub mod collaborators;
pub mod fields;
pub mod offers;
pub mod reports;
pub mod testimonials;
pub mod tokens;
pub mod users;
pub mod volunteers;
