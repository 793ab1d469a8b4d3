pub mod auth;
pub mod edge;
pub mod family_tree;
pub mod health;
pub mod node_position;
pub mod person;
pub mod relationship;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
/// /auth/me                            current user
///
/// /users/profile                      get, update profile
///
/// /trees                              list, create
/// /trees/{id}                         get (with persons/positions/edges), update, delete
///
/// /persons/tree/{tree_id}             create, list persons of a tree
/// /persons/{id}                       get (with relationships), update, delete
///
/// /relationships                      create (writes primary + mirror)
/// /relationships/{id}                 delete (removes mirror set)
/// /relationships/person/{person_id}   list relationships of a person
///
/// /node-positions                     upsert
/// /node-positions/{id}                update, delete
/// /node-positions/tree/{tree_id}      list positions of a tree
///
/// /edges                              create
/// /edges/{id}                         update, delete
/// /edges/tree/{tree_id}               list edges of a tree
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (register, login, current user).
        .nest("/auth", auth::router())
        // Profile read and update.
        .nest("/users", user::router())
        // Family trees and their full canvas payload.
        .nest("/trees", family_tree::router())
        // Persons within a tree.
        .nest("/persons", person::router())
        // Semantic relationships (the consistency engine).
        .nest("/relationships", relationship::router())
        // Persisted canvas coordinates.
        .nest("/node-positions", node_position::router())
        // Visual canvas connectors.
        .nest("/edges", edge::router())
}
