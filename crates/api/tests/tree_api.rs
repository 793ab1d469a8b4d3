//! HTTP-level integration tests for the `/trees` resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_person, create_tree, delete_auth, get_auth, post_json_auth, put_json_auth,
    register_user,
};
use sqlx::PgPool;

/// Listing returns only the caller's trees, newest first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_own_trees(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;
    let (other_token, _) = register_user(app.clone(), "Grace", "grace@example.com").await;

    create_tree(app.clone(), &token, "Lovelace family").await;
    create_tree(app.clone(), &other_token, "Hopper family").await;

    let response = get_auth(app, "/api/v1/trees", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let trees = json["trees"].as_array().unwrap();
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0]["name"], "Lovelace family");
}

/// The detail endpoint returns the tree plus persons, positions, and edges.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_detail(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, user_id) = register_user(app.clone(), "Ada", "ada@example.com").await;
    let tree_id = create_tree(app.clone(), &token, "Lovelace family").await;
    create_person(app.clone(), &token, tree_id, "Ada", "Lovelace").await;

    let response = get_auth(app, &format!("/api/v1/trees/{tree_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["tree"]["id"], tree_id);
    assert_eq!(json["tree"]["ownerId"], user_id);
    assert_eq!(json["tree"]["persons"].as_array().unwrap().len(), 1);
    assert_eq!(json["tree"]["nodePositions"].as_array().unwrap().len(), 0);
    assert_eq!(json["tree"]["edges"].as_array().unwrap().len(), 0);
}

/// A private tree is hidden from other users; a public one is readable.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_visibility(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(app.clone(), "Ada", "ada@example.com").await;
    let (visitor, _) = register_user(app.clone(), "Grace", "grace@example.com").await;

    let private_id = create_tree(app.clone(), &owner, "Private").await;
    let forbidden = get_auth(app.clone(), &format!("/api/v1/trees/{private_id}"), &visitor).await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/trees",
        &owner,
        serde_json::json!({ "name": "Public", "isPublic": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let public_id = body_json(response).await["tree"]["id"].as_i64().unwrap();

    let visible = get_auth(app, &format!("/api/v1/trees/{public_id}"), &visitor).await;
    assert_eq!(visible.status(), StatusCode::OK);
}

/// Only the owner may update or delete a tree.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_owner_only_mutations(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(app.clone(), "Ada", "ada@example.com").await;
    let (visitor, _) = register_user(app.clone(), "Grace", "grace@example.com").await;
    let tree_id = create_tree(app.clone(), &owner, "Lovelace family").await;

    let forbidden_update = put_json_auth(
        app.clone(),
        &format!("/api/v1/trees/{tree_id}"),
        &visitor,
        serde_json::json!({ "name": "Hijacked" }),
    )
    .await;
    assert_eq!(forbidden_update.status(), StatusCode::FORBIDDEN);

    let forbidden_delete =
        delete_auth(app.clone(), &format!("/api/v1/trees/{tree_id}"), &visitor).await;
    assert_eq!(forbidden_delete.status(), StatusCode::FORBIDDEN);

    let update = put_json_auth(
        app.clone(),
        &format!("/api/v1/trees/{tree_id}"),
        &owner,
        serde_json::json!({ "description": "Records of the Lovelace line" }),
    )
    .await;
    assert_eq!(update.status(), StatusCode::OK);

    let delete = delete_auth(app, &format!("/api/v1/trees/{tree_id}"), &owner).await;
    assert_eq!(delete.status(), StatusCode::OK);
}

/// Deleting a tree cascades to its persons and relationships.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_cascades(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;
    let tree_id = create_tree(app.clone(), &token, "Lovelace family").await;
    let a = create_person(app.clone(), &token, tree_id, "Ada", "Lovelace").await;
    let b = create_person(app.clone(), &token, tree_id, "Anne", "Byron").await;

    let rel = post_json_auth(
        app.clone(),
        "/api/v1/relationships",
        &token,
        serde_json::json!({ "type": "parent", "sourceId": b, "targetId": a }),
    )
    .await;
    assert_eq!(rel.status(), StatusCode::CREATED);

    let delete = delete_auth(app, &format!("/api/v1/trees/{tree_id}"), &token).await;
    assert_eq!(delete.status(), StatusCode::OK);

    let persons: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons WHERE tree_id = $1")
        .bind(tree_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(persons, 0);

    let relationships: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM relationships")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(relationships, 0);
}

/// Unknown tree ids are 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(app.clone(), "Ada", "ada@example.com").await;

    let response = get_auth(app, "/api/v1/trees/99999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
