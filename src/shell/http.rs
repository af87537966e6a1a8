use axum::{
    Extension, Router,
    response::Html,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::time_tracking::use_cases::add_employee::inbound::http as add_employee_http;
use crate::modules::time_tracking::use_cases::add_project::inbound::http as add_project_http;
use crate::modules::time_tracking::use_cases::delete_employee::inbound::http as delete_employee_http;
use crate::modules::time_tracking::use_cases::delete_time_entry::inbound::http as delete_time_http;
use crate::modules::time_tracking::use_cases::edit_time_entry::inbound::http as edit_time_http;
use crate::modules::time_tracking::use_cases::list_collections::inbound::http as collections_http;
use crate::modules::time_tracking::use_cases::mark_material_reviewed::inbound::http as mark_reviewed_http;
use crate::modules::time_tracking::use_cases::material_reports::inbound::http as reports_http;
use crate::modules::time_tracking::use_cases::submit_time_entry::inbound::http as submit_time_http;
use crate::shell::config::FrontendConfig;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

const LANDING_PAGE: &str = r#"<!doctype html>
<html>
  <head><meta charset="utf-8"><title>Time tracking</title></head>
  <body>
    <h1>Time tracking</h1>
    <ul>
      <li><a href="/time">Time tracking app</a></li>
      <li><a href="/admin">Admin app</a></li>
    </ul>
  </body>
</html>
"#;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/employees", get(collections_http::employees))
        .route("/projects", get(collections_http::projects))
        .route("/tasks", get(collections_http::tasks))
        .route("/materials", get(collections_http::materials))
        .route("/time-entries", get(collections_http::time_entries))
        .route("/submit-time", post(submit_time_http::handle))
        .route("/edit-time", post(edit_time_http::handle))
        .route("/delete-time", post(delete_time_http::handle))
        .route("/add-employee", post(add_employee_http::handle))
        .route("/delete-employee", post(delete_employee_http::handle))
        .route("/add-project", post(add_project_http::handle))
        .route("/material-logs", get(reports_http::logs))
        .route("/mark-material-reviewed", post(mark_reviewed_http::handle))
        .route("/reported-materials", get(reports_http::reported))
        .route("/materials-reviewed", get(reports_http::reviewed))
        .route("/materials-unreviewed", get(reports_http::unreviewed))
}

pub fn router(state: AppState, frontend: &FrontendConfig) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/", get(landing))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .nest("/api", api_router())
        .nest_service("/time", ServeDir::new(&frontend.time_app_dir))
        .nest_service("/admin", ServeDir::new(&frontend.admin_app_dir))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
