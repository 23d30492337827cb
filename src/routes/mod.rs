pub mod auth;
pub mod employees;
pub mod logs;
pub mod teams;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        // Employees
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/{id}",
            get(employees::get)
                .put(employees::update)
                .delete(employees::delete),
        )
        // Teams
        .route("/teams", get(teams::list).post(teams::create))
        .route(
            "/teams/{id}",
            get(teams::get).put(teams::update).delete(teams::delete),
        )
        .route("/teams/{id}/assign", post(teams::assign))
        .route("/teams/{id}/unassign", delete(teams::unassign))
        // Audit log
        .route("/logs", get(logs::list))
}
