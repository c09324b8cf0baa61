use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use patient_cell::router::patient_routes;
use shared_utils::test_utils::{JwtTestUtils, MockClinicResponses, TestConfig, TestUser, TEST_JWT_SECRET};

fn create_test_app(rpc_url: &str) -> Router {
    patient_routes(TestConfig::with_rpc_url(rpc_url).to_arc())
}

fn patient_token() -> String {
    JwtTestUtils::create_test_token(&TestUser::patient("patient@example.com"), TEST_JWT_SECRET, Some(1))
}

fn request(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token));

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_registration_form_starts_with_defaults() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(&mock_server.uri());

    let response = app.oneshot(request("GET", "/register", &patient_token(), None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json_response = read_json(response).await;
    assert_eq!(json_response["status"], "ready");
    assert_eq!(json_response["page"]["draft"]["gender"], "male");
    assert_eq!(json_response["page"]["submit_label"], "Complete Registration");
    assert_eq!(json_response["page"]["blood_group_options"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_registration_submit_sends_normalized_input() {
    let mock_server = MockServer::start().await;
    let token = patient_token();

    Mock::given(method("POST"))
        .and(path("/trpc/patient.register"))
        .and(header("Authorization", format!("Bearer {}", token)))
        .and(body_json(json!({
            "name": "Asha Verma",
            "age": 34,
            "gender": "female",
            "bloodGroup": "O+",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::envelope(
            MockClinicResponses::patient_profile(77, "Asha Verma"),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());

    let update = json!({
        "name": "Asha Verma",
        "age": "34",
        "gender": "female",
        "contact_info": "",
        "address": "  ",
        "blood_group": "O+",
    });
    let response = app
        .clone()
        .oneshot(request("PUT", "/register", &token, Some(update)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let files = json!({ "files": [{ "file_name": "bloodwork.pdf", "size_bytes": 52344, "content_type": "application/pdf" }] });
    let response = app
        .clone()
        .oneshot(request("POST", "/register/files", &token, Some(files)))
        .await
        .unwrap();
    assert_eq!(read_json(response).await["draft"]["files"][0]["file_name"], "bloodwork.pdf");

    let response = app
        .clone()
        .oneshot(request("POST", "/register/submit", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json_response = read_json(response).await;
    assert_eq!(json_response["redirect"], "/patients/dashboard");
    assert_eq!(json_response["profile"]["id"], 77);

    // draft discarded
    let form = read_json(app.oneshot(request("GET", "/register", &token, None)).await.unwrap()).await;
    assert_eq!(form["page"]["draft"]["name"], "");
    assert!(form["page"]["draft"]["files"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_registration_failure_keeps_draft() {
    let mock_server = MockServer::start().await;
    let token = patient_token();

    Mock::given(method("POST"))
        .and(path("/trpc/patient.register"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());
    app.clone()
        .oneshot(request("PUT", "/register", &token, Some(json!({ "name": "Asha Verma" }))))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(request("POST", "/register/submit", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(read_json(response).await["alert"], "Registration failed. Please try again.");

    let form = read_json(app.oneshot(request("GET", "/register", &token, None)).await.unwrap()).await;
    assert_eq!(form["page"]["draft"]["name"], "Asha Verma");
    assert_eq!(form["page"]["pending"], false);
}

#[tokio::test]
async fn test_registration_requires_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/trpc/patient.register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());
    let response = app
        .oneshot(request("POST", "/register/submit", &patient_token(), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["alert"], "Full name is required");
}

#[tokio::test]
async fn test_unsupported_report_is_rejected() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(&mock_server.uri());

    let files = json!({ "files": [{ "file_name": "installer.exe", "size_bytes": 10, "content_type": null }] });
    let response = app
        .oneshot(request("POST", "/register/files", &patient_token(), Some(files)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_anonymous_submit_is_unauthorized() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(&mock_server.uri());

    let request = Request::builder()
        .method("POST")
        .uri("/register/submit")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dashboard_requires_login() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(&mock_server.uri());

    let request = Request::builder().uri("/dashboard").body(Body::empty()).unwrap();
    let json_response = read_json(app.oneshot(request).await.unwrap()).await;

    assert_eq!(json_response["status"], "login_required");
    assert_eq!(json_response["page"]["message"], "Please log in to access your dashboard.");
}

#[tokio::test]
async fn test_dashboard_panels() {
    let mock_server = MockServer::start().await;
    let token = patient_token();

    Mock::given(method("GET"))
        .and(path("/trpc/patient.getProfile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::envelope(
            MockClinicResponses::patient_profile(77, "Asha Verma"),
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trpc/patient.getAppointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::envelope(json!([
            MockClinicResponses::appointment(9, 77, 3, "2024-06-10T08:30:00Z", "completed"),
        ]))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trpc/patient.getMedicalHistory"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());
    let json_response = read_json(app.oneshot(request("GET", "/dashboard", &token, None)).await.unwrap()).await;

    let page = &json_response["page"];
    assert_eq!(page["welcome_name"], "Asha Verma");
    assert_eq!(page["profile"]["data"]["kind"], "profile");
    assert_eq!(page["profile"]["data"]["blood_group"], "O+");
    assert_eq!(page["appointments"]["data"][0]["title"], "Appointment #9");
    assert_eq!(page["appointments"]["data"][0]["status_label"], "Completed");
    assert_eq!(page["appointments"]["data"][0]["when_label"], "Monday, June 10, 2024 at 02:00 PM");
    assert_eq!(page["medical_history"]["state"], "unavailable");
}

#[tokio::test]
async fn test_dashboard_without_profile_links_to_registration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trpc/patient.getProfile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::envelope(json!(null))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trpc/patient.getAppointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::envelope(json!([]))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trpc/patient.getMedicalHistory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockClinicResponses::envelope(json!([]))))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());
    let json_response = read_json(
        app.oneshot(request("GET", "/dashboard", &patient_token(), None)).await.unwrap(),
    )
    .await;

    let page = &json_response["page"];
    assert_eq!(page["welcome_name"], "Test User");
    assert_eq!(page["profile"]["data"]["kind"], "incomplete");
    assert_eq!(page["profile"]["data"]["register_link"], "/patients/register");
    assert_eq!(page["book_link"], "/appointments");
}
