/// Application routes configuration
use crate::handlers::{
    check_weather, get_spacecraft, health, launch_spacecraft, list_destinations,
    list_spacecraft, plan_mission, refuel_spacecraft, register_spacecraft, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Fleet endpoints
        .route("/spacecraft", get(list_spacecraft).post(register_spacecraft))
        .route("/spacecraft/:id", get(get_spacecraft))
        .route("/spacecraft/:id/launch", post(launch_spacecraft))
        .route("/spacecraft/:id/plan", get(plan_mission))
        .route("/spacecraft/:id/refuel", post(refuel_spacecraft))
        // Reference data
        .route("/weather", get(check_weather))
        .route("/destinations", get(list_destinations))
        .with_state(state)
}
