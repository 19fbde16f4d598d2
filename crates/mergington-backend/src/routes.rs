use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers;

/// Where `/` sends browsers.
pub const INDEX_PATH: &str = "/static/index.html";

fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        let dev_ports = [3000, 5173, 8000, 8080, 8081];
        dev_ports
            .iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        // Production origins - add your domains here
        vec![]
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

async fn root() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, INDEX_PATH)])
}

fn activity_routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .route("/activities", get(handlers::activities::list))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/{activity_name}/participants",
            delete(handlers::activities::unregister),
        )
}

/// Setup the routes for the server, the static front end, CORS and tracing.
pub fn setup_routes(state: Arc<crate::AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health::get))
        .merge(activity_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use mergington::data::{Activities, Activity, ErrorResponse, MessageResponse};
    use mergington::serde::de::DeserializeOwned;
    use mergington::serde_json;
    use tower::ServiceExt;

    use crate::AppState;
    use crate::services::ActivityServiceInMemory;

    fn app() -> Router {
        let state = Arc::new(AppState::new(ActivityServiceInMemory::new()));
        setup_routes(state, concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
    }

    async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(app: &Router, method: Method, uri: &str) -> (StatusCode, T) {
        let (status, body) = send(app, method, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn roster(app: &Router, activity: &str) -> Vec<String> {
        let (_, activities): (_, Activities) = send_json(app, Method::GET, "/activities").await;
        activities
            .get(activity)
            .map(|activity: &Activity| {
                activity
                    .participants
                    .iter()
                    .map(|p| p.as_str().to_lowercase())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_root_redirects_to_front_end() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], INDEX_PATH);
    }

    #[tokio::test]
    async fn test_list_activities() {
        let app = app();
        let (status, activities): (_, Activities) = send_json(&app, Method::GET, "/activities").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!activities.is_empty());
        for name in ["Basketball", "Chess Club", "Gym Class"] {
            assert!(activities.get(name).is_some(), "{name} missing");
        }
    }

    #[tokio::test]
    async fn test_list_activities_shape() {
        let app = app();
        let (_, json): (_, serde_json::Value) = send_json(&app, Method::GET, "/activities").await;

        let chess = &json["Chess Club"];
        assert_eq!(chess["max_participants"], 12);
        assert_eq!(chess["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess["participants"][0], "michael@mergington.edu");
    }

    #[tokio::test]
    async fn test_signup_and_unregister_cycle() {
        let app = app();

        let (status, body): (_, MessageResponse) = send_json(
            &app,
            Method::POST,
            "/activities/Chess%20Club/signup?email=tester%40example.com",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Signed up tester@example.com for Chess Club");
        assert!(roster(&app, "Chess Club").await.contains(&"tester@example.com".to_string()));

        let (status, body): (_, MessageResponse) = send_json(
            &app,
            Method::DELETE,
            "/activities/Chess%20Club/participants?email=tester%40example.com",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.message.contains("Unregistered"));
        assert!(!roster(&app, "Chess Club").await.contains(&"tester@example.com".to_string()));
    }

    #[tokio::test]
    async fn test_signup_twice_is_bad_request() {
        let app = app();
        let uri = "/activities/Basketball/signup?email=dup%40example.com";

        let (status, _) = send(&app, Method::POST, uri).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body): (_, ErrorResponse) = send_json(&app, Method::POST, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, "Student already signed up for this activity");
    }

    #[tokio::test]
    async fn test_signup_unknown_activity() {
        let app = app();
        let (status, body): (_, ErrorResponse) = send_json(
            &app,
            Method::POST,
            "/activities/Knitting/signup?email=a%40example.com",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "Activity not found");
    }

    #[tokio::test]
    async fn test_signup_without_email_is_rejected() {
        let app = app();
        let (status, body): (_, ErrorResponse) =
            send_json(&app, Method::POST, "/activities/Basketball/signup").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.detail.contains("email"), "{}", body.detail);
        assert_eq!(roster(&app, "Basketball").await, ["alex@mergington.edu"]);
    }

    #[tokio::test]
    async fn test_signup_with_repeated_email_is_json_error() {
        let app = app();
        let (status, body): (_, ErrorResponse) = send_json(
            &app,
            Method::POST,
            "/activities/Chess%20Club/signup?email=x%40example.com&email=y%40example.com",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.detail.contains("duplicate field"), "{}", body.detail);
        assert_eq!(roster(&app, "Chess Club").await.len(), 2);
    }

    #[tokio::test]
    async fn test_unregister_with_repeated_email_is_json_error() {
        let app = app();
        let (status, body): (_, ErrorResponse) = send_json(
            &app,
            Method::DELETE,
            "/activities/Chess%20Club/participants?email=a&email=b",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.detail.is_empty());
        assert_eq!(roster(&app, "Chess Club").await.len(), 2);
    }

    #[tokio::test]
    async fn test_undecodable_activity_name_is_json_error() {
        let app = app();
        for (method, uri) in [
            (Method::POST, "/activities/%FF/signup?email=a%40example.com"),
            (Method::DELETE, "/activities/%FF/participants?email=a%40example.com"),
        ] {
            let (status, body): (_, ErrorResponse) = send_json(&app, method, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(!body.detail.is_empty());
        }
    }

    #[tokio::test]
    async fn test_unregister_is_case_insensitive() {
        let app = app();
        let (status, body): (_, MessageResponse) = send_json(
            &app,
            Method::DELETE,
            "/activities/Chess%20Club/participants?email=%20Michael%40MERGINGTON.edu%20",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.message,
            "Unregistered michael@mergington.edu from Chess Club"
        );
        assert_eq!(roster(&app, "Chess Club").await, ["daniel@mergington.edu"]);
    }

    #[tokio::test]
    async fn test_unregister_errors() {
        let app = app();

        let (status, body): (_, ErrorResponse) = send_json(
            &app,
            Method::DELETE,
            "/activities/Chess%20Club/participants?email=nobody%40example.com",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "Participant not found for this activity");

        let (status, body): (_, ErrorResponse) = send_json(
            &app,
            Method::DELETE,
            "/activities/Chess%20Club/participants?email=%20%20",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, "Email is required");

        let (status, body): (_, ErrorResponse) =
            send_json(&app, Method::DELETE, "/activities/Chess%20Club/participants").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, "Email is required");

        let (status, body): (_, ErrorResponse) = send_json(
            &app,
            Method::DELETE,
            "/activities/Knitting/participants?email=",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "Activity not found");
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let (status, json): (_, serde_json::Value) = send_json(&app, Method::GET, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["services"]["activity_count"], 9);
        assert_eq!(json["services"]["participant_count"], 14);
    }

    #[tokio::test]
    async fn test_static_index_is_served() {
        let app = app();
        let (status, body) = send(&app, Method::GET, INDEX_PATH).await;

        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8_lossy(&body).contains("Mergington High School"));
    }
}
