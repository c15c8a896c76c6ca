pub mod auth;
pub mod crud;
pub mod user;

use axum::Router;

use crate::models::{
    Agenda, Announcement, Church, Collaborator, Field, Offer, Report, Testimonial, Volunteer,
};
use crate::routes::crud::crud_routes;
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .nest("/auth", auth::routes())
        .nest("/user", user::routes())
        .nest("/agenda", crud_routes::<Agenda>())
        .nest("/announcement", crud_routes::<Announcement>())
        .nest("/church", crud_routes::<Church>())
        .nest("/collaborator", crud_routes::<Collaborator>())
        .nest("/field", crud_routes::<Field>())
        .nest("/offer", crud_routes::<Offer>())
        .nest("/report", crud_routes::<Report>())
        .nest("/testimonial", crud_routes::<Testimonial>())
        .nest("/volunteer", crud_routes::<Volunteer>())
}
