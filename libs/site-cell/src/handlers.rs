use axum::{extract::Query, Json};
use tracing::debug;

use crate::models::{AboutPage, CarouselQuery, HomePage, ServicesPage};
use crate::services::{about_page, home_page, services_page};

#[axum::debug_handler]
pub async fn home(Query(query): Query<CarouselQuery>) -> Json<HomePage> {
    debug!("Rendering home page (doctor={:?}, testimonial={:?})", query.doctor, query.testimonial);
    Json(home_page(&query))
}

#[axum::debug_handler]
pub async fn about() -> Json<AboutPage> {
    Json(about_page())
}

#[axum::debug_handler]
pub async fn services() -> Json<ServicesPage> {
    Json(services_page())
}
