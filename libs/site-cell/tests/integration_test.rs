use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use site_cell::router::site_routes;

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = site_routes().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_home_page_defaults() {
    let (status, page) = get_json("/").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(page["hero"]["title"], "Restore Balance. Heal Naturally.");
    assert_eq!(page["welcome_title"], "Welcome to Punarvasu Clinic");
    assert_eq!(page["doctors"]["index"], 0);
    assert_eq!(page["testimonials"]["index"], 0);
    assert_eq!(page["cta"]["link"], "/appointments");
}

#[tokio::test]
async fn test_home_carousels_wrap() {
    let (_, page) = get_json("/?doctor=-1&testimonial=4").await;

    let doctors = &page["doctors"];
    let total = doctors["total"].as_u64().unwrap();
    assert_eq!(doctors["index"].as_u64().unwrap(), total - 1);
    assert_eq!(doctors["next_index"], 0);

    // three testimonials: 4 wraps to 1
    assert_eq!(page["testimonials"]["index"], 1);
}

#[tokio::test]
async fn test_about_page_contact() {
    let (status, page) = get_json("/about").await;
    assert_eq!(status, StatusCode::OK);

    let contact = &page["contact"];
    assert_eq!(contact["address_lines"][0], "123 Wellness Street");
    assert_eq!(contact["phone"], "(555) 123-4567");
    assert_eq!(contact["email"], "info@punarvasu.com");
    assert_eq!(contact["hours"][2]["hours"], "Closed");
    assert_eq!(page["values"].as_array().unwrap().len(), 6);
    assert!(page["doctors"][0]["book_label"].as_str().unwrap().starts_with("Book with "));
}

#[tokio::test]
async fn test_services_page_groups() {
    let (status, page) = get_json("/services").await;
    assert_eq!(status, StatusCode::OK);

    let categories: Vec<&str> = page["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec!["External Therapies", "Detoxification", "Internal Medicine", "Lifestyle"]
    );
    assert_eq!(page["groups"][1]["heading"], "Panchakarma & Detoxification");
}
