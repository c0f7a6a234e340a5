//! Integration tests for the HTTP fetch client.
//!
//! Each test runs against a local wiremock server so status, body and
//! decode handling can be checked without touching the public API.

use usersearch::client::{FetchClient, FetchError};
use usersearch::endpoint::{EndpointDescriptor, Resource, Scheme};
use usersearch::models::{Album, User};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Port 0 is reserved; nothing can listen on it, so connects always fail.
const UNREACHABLE_HOST: &str = "127.0.0.1:0";

const USERS_JSON: &str = r#"[
  {
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz",
    "address": { "street": "Kulas Light", "city": "Gwenborough" },
    "phone": "1-770-736-8031 x56442"
  },
  {
    "id": 7,
    "name": "Kurtis Weissnat",
    "username": "Elwyn.Skiles",
    "email": "Telly.Hoeger@billy.biz",
    "website": "elvis.io"
  },
  {
    "id": 2,
    "name": "Ervin Howell",
    "username": "Antonette",
    "email": "Shanna@melissa.tv"
  }
]"#;

fn local(server: &MockServer, resource: Resource) -> EndpointDescriptor {
    resource
        .descriptor()
        .with_location(Scheme::Http, server.address().to_string())
}

async fn serve(server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn decodes_users_in_input_order() {
    let server = MockServer::start().await;
    serve(&server, "/users", ResponseTemplate::new(200).set_body_string(USERS_JSON)).await;

    let users: Vec<User> = FetchClient::new()
        .fetch(&local(&server, Resource::Users))
        .await
        .unwrap();

    let ids: Vec<i64> = users.iter().map(User::id).collect();
    assert_eq!(ids, vec![1, 7, 2]);
    assert_eq!(users[1].email(), "Telly.Hoeger@billy.biz");
}

#[tokio::test]
async fn decodes_albums_resource() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/albums",
        ResponseTemplate::new(200)
            .set_body_string(r#"[{"userId":1,"id":1,"title":"quidem molestiae enim"}]"#),
    )
    .await;

    let albums: Vec<Album> = FetchClient::new()
        .fetch(&local(&server, Resource::Albums))
        .await
        .unwrap();

    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].title, "quidem molestiae enim");
}

#[tokio::test]
async fn not_found_status_is_invalid_response_regardless_of_body() {
    let server = MockServer::start().await;
    serve(&server, "/users", ResponseTemplate::new(404).set_body_string(USERS_JSON)).await;

    let result = FetchClient::new()
        .fetch::<Vec<User>>(&local(&server, Resource::Users))
        .await;

    assert!(matches!(result, Err(FetchError::InvalidResponse)));
}

#[tokio::test]
async fn other_success_codes_are_rejected() {
    let server = MockServer::start().await;
    serve(&server, "/users", ResponseTemplate::new(203).set_body_string(USERS_JSON)).await;

    let result = FetchClient::new()
        .fetch::<Vec<User>>(&local(&server, Resource::Users))
        .await;

    assert!(matches!(result, Err(FetchError::InvalidResponse)));
}

#[tokio::test]
async fn empty_body_is_invalid_response() {
    let server = MockServer::start().await;
    serve(&server, "/users", ResponseTemplate::new(200)).await;

    let result = FetchClient::new()
        .fetch::<Vec<User>>(&local(&server, Resource::Users))
        .await;

    assert!(matches!(result, Err(FetchError::InvalidResponse)));
}

#[tokio::test]
async fn missing_field_fails_decode_without_partial_result() {
    let server = MockServer::start().await;
    let body = r#"[
        {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"},
        {"id": 2, "name": "Ervin Howell", "username": "Antonette"}
    ]"#;
    serve(&server, "/users", ResponseTemplate::new(200).set_body_string(body)).await;

    let result = FetchClient::new()
        .fetch::<Vec<User>>(&local(&server, Resource::Users))
        .await;

    match result {
        Err(FetchError::Decode(e)) => assert!(e.to_string().contains("email")),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_fails_decode() {
    let server = MockServer::start().await;
    serve(&server, "/users", ResponseTemplate::new(200).set_body_string("[{\"id\": 1,")).await;

    let result = FetchClient::new()
        .fetch::<Vec<User>>(&local(&server, Resource::Users))
        .await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let endpoint = Resource::Users
        .descriptor()
        .with_location(Scheme::Http, UNREACHABLE_HOST);

    let result = FetchClient::new().fetch::<Vec<User>>(&endpoint).await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn invalid_url_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(USERS_JSON))
        .expect(0)
        .mount(&server)
        .await;

    let mut endpoint = local(&server, Resource::Users);
    endpoint.path = "users".to_string();

    let result = FetchClient::new().fetch::<Vec<User>>(&endpoint).await;

    assert!(matches!(result, Err(FetchError::InvalidUrl)));
}
