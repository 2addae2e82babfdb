#![allow(clippy::expect_used)]

use folio_core::projects::FALLBACK_PROJECTS;
use folio_core::projects::NO_DESCRIPTION_PLACEHOLDER;
use folio_core::projects::ProjectSource;
use folio_core::projects::ProjectSummary;
use folio_core::projects::ProjectsClient;
use folio_core::projects::ProjectsError;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

fn client_for(server: &MockServer) -> ProjectsClient {
    ProjectsClient::new(server.uri())
}

#[tokio::test]
async fn successful_fetch_maps_fields_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .and(query_param("sort", "pushed"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "x",
                "description": null,
                "html_url": "http://e/x"
            },
            {
                "id": 2,
                "name": "y",
                "description": "second project",
                "html_url": "http://e/y"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let resolved = client_for(&server).resolve("octo", &FALLBACK_PROJECTS).await;

    assert_eq!(resolved.source, ProjectSource::Remote);
    assert_eq!(resolved.notice, None);
    assert_eq!(
        resolved.entries,
        vec![
            ProjectSummary {
                id: 1,
                title: "x".to_string(),
                description: NO_DESCRIPTION_PLACEHOLDER.to_string(),
                link: "http://e/x".to_string(),
            },
            ProjectSummary {
                id: 2,
                title: "y".to_string(),
                description: "second project".to_string(),
                link: "http://e/y".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn not_found_status_yields_fallback_with_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let resolved = client_for(&server).resolve("octo", &FALLBACK_PROJECTS).await;

    assert_eq!(resolved.source, ProjectSource::Fallback);
    assert_eq!(resolved.entries, *FALLBACK_PROJECTS);
    assert!(resolved.notice.is_some(), "failure must carry an advisory");
}

#[tokio::test]
async fn malformed_body_yields_fallback_with_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "unexpected": "shape" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resolved = client_for(&server).resolve("octo", &FALLBACK_PROJECTS).await;

    assert_eq!(resolved.source, ProjectSource::Fallback);
    assert_eq!(resolved.entries, *FALLBACK_PROJECTS);
    assert!(resolved.notice.is_some());
}

#[tokio::test]
async fn unreachable_endpoint_yields_fallback() {
    // Nothing listens here; the connect error takes the fallback path.
    let client = ProjectsClient::new("http://127.0.0.1:9");

    let resolved = client.resolve("octo", &FALLBACK_PROJECTS).await;

    assert_eq!(resolved.source, ProjectSource::Fallback);
    assert_eq!(resolved.entries.len(), 7);
    assert!(resolved.notice.is_some());
}

#[tokio::test]
async fn empty_identifier_short_circuits_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let resolved = client_for(&server).resolve("", &FALLBACK_PROJECTS).await;

    assert_eq!(resolved.source, ProjectSource::Remote);
    assert!(resolved.entries.is_empty());
    assert_eq!(resolved.notice, None);
}

#[tokio::test]
async fn fetch_reports_status_errors_distinctly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octo/repos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch("octo")
        .await
        .expect_err("non-2xx must be an error");
    assert!(matches!(err, ProjectsError::Status(status) if status.as_u16() == 500));
}
