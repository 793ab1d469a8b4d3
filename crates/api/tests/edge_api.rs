//! HTTP-level integration tests for the `/edges` visual connector resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_person, create_tree, delete_auth, get_auth, post_json_auth, put_json_auth,
    register_user,
};
use sqlx::PgPool;

/// Creating an edge stores the rendering tag verbatim in `data`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_edge(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;
    let tree_id = create_tree(app.clone(), &token, "Lovelace family").await;
    let a = create_person(app.clone(), &token, tree_id, "Anne", "Byron").await;
    let b = create_person(app.clone(), &token, tree_id, "Ada", "Lovelace").await;

    let response = post_json_auth(
        app,
        "/api/v1/edges",
        &token,
        serde_json::json!({
            "sourceId": a,
            "targetId": b,
            "treeId": tree_id,
            "data": { "type": "parent_child_connection" }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["edge"]["sourceId"], a);
    assert_eq!(json["edge"]["data"]["type"], "parent_child_connection");
}

/// Creating an edge under a missing tree is 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_missing_tree(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;

    let response = post_json_auth(
        app,
        "/api/v1/edges",
        &token,
        serde_json::json!({ "sourceId": 1, "targetId": 2, "treeId": 99999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// List, update, and delete round out the edge lifecycle.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_edge_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;
    let tree_id = create_tree(app.clone(), &token, "Lovelace family").await;
    let a = create_person(app.clone(), &token, tree_id, "Anne", "Byron").await;
    let b = create_person(app.clone(), &token, tree_id, "Ada", "Lovelace").await;

    let created = post_json_auth(
        app.clone(),
        "/api/v1/edges",
        &token,
        serde_json::json!({
            "sourceId": a,
            "targetId": b,
            "treeId": tree_id,
            "data": { "type": "spouse_connection" }
        }),
    )
    .await;
    let id = body_json(created).await["edge"]["id"].as_i64().unwrap();

    let list = get_auth(app.clone(), &format!("/api/v1/edges/tree/{tree_id}"), &token).await;
    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(body_json(list).await["edges"].as_array().unwrap().len(), 1);

    let update = put_json_auth(
        app.clone(),
        &format!("/api/v1/edges/{id}"),
        &token,
        serde_json::json!({ "data": { "type": "parent_child_connection" } }),
    )
    .await;
    assert_eq!(update.status(), StatusCode::OK);
    assert_eq!(
        body_json(update).await["edge"]["data"]["type"],
        "parent_child_connection"
    );

    let delete = delete_auth(app.clone(), &format!("/api/v1/edges/{id}"), &token).await;
    assert_eq!(delete.status(), StatusCode::OK);

    let list_after = get_auth(app, &format!("/api/v1/edges/tree/{tree_id}"), &token).await;
    assert_eq!(
        body_json(list_after).await["edges"].as_array().unwrap().len(),
        0
    );
}
