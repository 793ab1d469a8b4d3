//! HTTP-level integration tests for the `/node-positions` position ledger.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_person, create_tree, delete_auth, get_auth, post_json_auth, put_json_auth,
    register_user,
};
use sqlx::PgPool;

async fn count_positions(pool: &PgPool, node_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM node_positions WHERE node_id = $1")
        .bind(node_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A first create inserts; a second create for the same node updates in
/// place, leaving a single row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upsert_in_place(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;
    let tree_id = create_tree(app.clone(), &token, "Lovelace family").await;
    let ada = create_person(app.clone(), &token, tree_id, "Ada", "Lovelace").await;

    let first = post_json_auth(
        app.clone(),
        "/api/v1/node-positions",
        &token,
        serde_json::json!({ "nodeId": ada, "treeId": tree_id, "x": 100.0, "y": 200.0 }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first_id = body_json(first).await["nodePosition"]["id"].as_i64().unwrap();

    let second = post_json_auth(
        app,
        "/api/v1/node-positions",
        &token,
        serde_json::json!({ "nodeId": ada, "treeId": tree_id, "x": 350.0, "y": -50.0 }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let json = body_json(second).await;
    assert_eq!(json["nodePosition"]["id"], first_id);
    assert_eq!(json["nodePosition"]["x"], 350.0);
    assert_eq!(json["nodePosition"]["y"], -50.0);

    assert_eq!(count_positions(&pool, ada).await, 1);
}

/// Upserting into a missing tree is 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upsert_missing_tree(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;

    let response = post_json_auth(
        app,
        "/api/v1/node-positions",
        &token,
        serde_json::json!({ "nodeId": 1, "treeId": 99999, "x": 0.0, "y": 0.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Direct update by row id moves the position; unknown ids are 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_by_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;
    let tree_id = create_tree(app.clone(), &token, "Lovelace family").await;
    let ada = create_person(app.clone(), &token, tree_id, "Ada", "Lovelace").await;

    let created = post_json_auth(
        app.clone(),
        "/api/v1/node-positions",
        &token,
        serde_json::json!({ "nodeId": ada, "treeId": tree_id, "x": 0.0, "y": 0.0 }),
    )
    .await;
    let id = body_json(created).await["nodePosition"]["id"].as_i64().unwrap();

    let update = put_json_auth(
        app.clone(),
        &format!("/api/v1/node-positions/{id}"),
        &token,
        serde_json::json!({ "x": 10.0, "y": 20.0 }),
    )
    .await;
    assert_eq!(update.status(), StatusCode::OK);
    let json = body_json(update).await;
    assert_eq!(json["nodePosition"]["x"], 10.0);

    let missing = put_json_auth(
        app,
        "/api/v1/node-positions/99999",
        &token,
        serde_json::json!({ "x": 0.0, "y": 0.0 }),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

/// Listing returns every position of the tree; delete removes a row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_and_delete(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;
    let tree_id = create_tree(app.clone(), &token, "Lovelace family").await;
    let ada = create_person(app.clone(), &token, tree_id, "Ada", "Lovelace").await;
    let anne = create_person(app.clone(), &token, tree_id, "Anne", "Byron").await;

    for (node, x) in [(ada, 0.0), (anne, 200.0)] {
        let response = post_json_auth(
            app.clone(),
            "/api/v1/node-positions",
            &token,
            serde_json::json!({ "nodeId": node, "treeId": tree_id, "x": x, "y": 0.0 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = get_auth(
        app.clone(),
        &format!("/api/v1/node-positions/tree/{tree_id}"),
        &token,
    )
    .await;
    assert_eq!(list.status(), StatusCode::OK);
    let json = body_json(list).await;
    let positions = json["nodePositions"].as_array().unwrap();
    assert_eq!(positions.len(), 2);

    let id = positions[0]["id"].as_i64().unwrap();
    let delete = delete_auth(app.clone(), &format!("/api/v1/node-positions/{id}"), &token).await;
    assert_eq!(delete.status(), StatusCode::OK);

    let list_after = get_auth(
        app,
        &format!("/api/v1/node-positions/tree/{tree_id}"),
        &token,
    )
    .await;
    let json = body_json(list_after).await;
    assert_eq!(json["nodePositions"].as_array().unwrap().len(), 1);
}
