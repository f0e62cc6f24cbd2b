use super::*;
use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use shared::domain::PostId;
use tokio::net::TcpListener;

async fn spawn_api(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn leanne() -> Value {
    json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {"street": "Kulas Light", "city": "Gwenborough"},
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net"}
    })
}

#[tokio::test]
async fn lists_users_from_the_directory_endpoint() {
    let app = Router::new().route("/users", get(|| async { Json(json!([leanne()])) }));
    let base = spawn_api(app).await;

    let client = DirectoryClient::new(&base).expect("client");
    let users = client.list_users().await.expect("users");

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, UserId(1));
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[0].company.name, "Romaguera-Crona");
}

#[tokio::test]
async fn forwards_the_user_id_as_a_query_parameter() {
    #[derive(Deserialize)]
    struct PostsParams {
        #[serde(rename = "userId")]
        user_id: i64,
    }

    let app = Router::new().route(
        "/posts",
        get(|Query(params): Query<PostsParams>| async move {
            Json(json!([{
                "id": 31,
                "userId": params.user_id,
                "title": "ut quo aut ducimus",
                "body": "aut dicta possimus"
            }]))
        }),
    );
    let base = spawn_api(app).await;

    let client = DirectoryClient::new(&base).expect("client");
    let posts = client.list_posts(UserId(4)).await.expect("posts");

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, PostId(31));
    assert_eq!(posts[0].user_id, UserId(4));
}

#[tokio::test]
async fn an_empty_post_collection_is_a_normal_outcome() {
    let app = Router::new().route("/posts", get(|| async { Json(json!([])) }));
    let base = spawn_api(app).await;

    let client = DirectoryClient::new(&base).expect("client");
    let posts = client.list_posts(UserId(9)).await.expect("posts");

    assert!(posts.is_empty());
}

#[tokio::test]
async fn surfaces_http_error_statuses() {
    let app = Router::new().route("/users", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let base = spawn_api(app).await;

    let client = DirectoryClient::new(&base).expect("client");
    let err = client.list_users().await.expect_err("should fail");

    assert!(matches!(
        err,
        DirectoryError::Status(status) if status.as_u16() == 500
    ));
}

#[tokio::test]
async fn rejects_a_malformed_payload() {
    let app = Router::new().route("/users", get(|| async { Json(json!({"not": "an array"})) }));
    let base = spawn_api(app).await;

    let client = DirectoryClient::new(&base).expect("client");
    let err = client.list_users().await.expect_err("should fail");

    assert!(matches!(err, DirectoryError::Payload(_)));
}

#[tokio::test]
async fn reports_a_transport_failure_when_the_server_is_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let base = format!("http://{}", listener.local_addr().expect("local addr"));
    drop(listener);

    let client = DirectoryClient::new(&base).expect("client");
    let err = client.list_users().await.expect_err("should fail");

    assert!(matches!(err, DirectoryError::Transport(_)));
}

#[test]
fn rejects_an_invalid_base_url() {
    let err = DirectoryClient::new("not a url").expect_err("should fail");
    assert!(matches!(err, DirectoryError::InvalidBaseUrl(_)));
}
