use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/demo",
            get(handlers::demo_status)
                .post(handlers::activate_demo)
                .delete(handlers::deactivate_demo),
        )
        .route("/api/demo/dashboard", get(handlers::dashboard))
        .route("/api/demo/sessions", get(handlers::list_sessions))
        .route("/api/demo/sessions/by-date", get(handlers::sessions_by_date))
        .route("/api/demo/stats/flavors", get(handlers::flavor_stats))
        .route("/api/demo/stats/stores", get(handlers::store_stats))
        .route("/api/demo/stats/creators", get(handlers::creator_stats))
        .route("/api/demo/stats/orders", get(handlers::order_stats))
        .route("/api/demo/calendar", get(handlers::calendar))
        .route("/api/demo/calendar/grid", get(handlers::calendar_grid))
        .route("/api/demo/charts/:dimension", get(handlers::chart))
        .with_state(state)
}
