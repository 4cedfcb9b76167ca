use std::sync::Arc;

use admin_file_storage::{
    application::{
        dto::user_dto::UserUpdateDTO, error::ApplicationError, services::FileStorageApi,
    },
    domain::config::client::ClientConfig,
    services::RestApiClient,
};
use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const TOKEN: &str = "test-token";

fn config(base_url: String) -> ClientConfig {
    ClientConfig {
        base_url,
        token: TOKEN.to_string(),
        timeout_secs: Some(5),
        admin_user_id: Some(1),
        admin_username: Some("admin".to_string()),
    }
}

fn client(server: &MockServer) -> RestApiClient {
    let config = config(format!("{}/api", server.uri()));
    RestApiClient::new(&config, Arc::new(config.session())).unwrap()
}

#[tokio::test]
async fn list_users_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "username": "a" },
            { "id": 2, "username": "b", "email": "b@example.com" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server).list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "a");
    assert_eq!(users[1].email, "b@example.com");
    assert_eq!(users[0].surname, "");
}

#[tokio::test]
async fn null_user_list_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    assert!(client(&server).list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn user_detail_is_case_insensitive() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/7"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "User": { "Id": 7, "Surname": "Doe", "UserName": "jdoe", "Phone": "123" },
            "Files": [
                {
                    "Name": "notes",
                    "Extension": "txt",
                    "Size": "42",
                    "Path": "/storage/7/notes.txt",
                    "created_at": "2024-03-01 08:15:00"
                },
                { "name": "photo", "extension": "png", "size": 2048, "path": "/p" }
            ]
        })))
        .mount(&server)
        .await;

    let detail = client(&server).get_user_detail(7).await.unwrap();

    assert_eq!(detail.user.id, 7);
    assert_eq!(detail.user.surname, "Doe");
    assert_eq!(detail.user.username, "jdoe");
    assert_eq!(detail.files.len(), 2);
    assert_eq!(detail.files[0].size, 42);
    assert_eq!(
        detail.files[0].created_at,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap())
    );
    assert!(detail.files[1].created_at.is_none());
}

#[tokio::test]
async fn user_detail_without_files_key_has_no_files() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": { "id": 3 } })),
        )
        .mount(&server)
        .await;

    let detail = client(&server).get_user_detail(3).await.unwrap();
    assert!(detail.files.is_empty());
}

#[tokio::test]
async fn malformed_file_fails_the_whole_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "id": 3 },
            "files": [{ "name": "x", "size": "huge" }]
        })))
        .mount(&server)
        .await;

    let err = client(&server).get_user_detail(3).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Decode(_)));
}

#[tokio::test]
async fn detail_without_user_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "files": [] })))
        .mount(&server)
        .await;

    let err = client(&server).get_user_detail(3).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Decode(_)));
}

#[tokio::test]
async fn search_users_posts_trimmed_username() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search/user"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({ "username": "anna" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{ "id": 4, "username": "anna" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server).search_users("  anna ").await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 4);
}

#[tokio::test]
async fn search_without_users_key_is_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert!(client(&server).search_users("ghost").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_null_body_is_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/search/file"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    assert!(api.search_users("x").await.unwrap().is_empty());
    assert!(api.search_files("x").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_files_posts_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search/file"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({ "name": "report" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [{ "name": "report", "extension": "pdf", "size": 1, "path": "/r" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let files = client(&server).search_files("report").await.unwrap();
    assert_eq!(files[0].display_name(), "report.pdf");
}

#[tokio::test]
async fn blank_searches_send_nothing() {
    let server = MockServer::start().await;
    let api = client(&server);

    assert!(matches!(
        api.search_users(" ").await,
        Err(ApplicationError::Validation(_))
    ));
    assert!(matches!(
        api.search_files("").await,
        Err(ApplicationError::Validation(_))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_patches_all_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/5"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({
            "surname": "Smith",
            "name": "Jo",
            "username": "jo",
            "email": "jo@example.com",
            "phone": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let update = UserUpdateDTO {
        surname: "Smith".into(),
        name: "Jo".into(),
        username: "jo".into(),
        email: "jo@example.com".into(),
        phone: String::new(),
    };
    client(&server).update_user(5, &update).await.unwrap();
}

#[tokio::test]
async fn delete_accepts_empty_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/9"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).delete_user(9).await.unwrap();
}

#[tokio::test]
async fn non_success_status_keeps_code_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/9"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let err = client(&server).delete_user(9).await.unwrap_err();
    assert_eq!(
        err,
        ApplicationError::Http {
            status: 403,
            body: "forbidden".to_string()
        }
    );
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let config = config("http://127.0.0.1:9/api".to_string());
    let api = RestApiClient::new(&config, Arc::new(config.session())).unwrap();

    let err = api.list_users().await.unwrap_err();
    assert!(matches!(err, ApplicationError::Network(_)));
}
