/// HTTP request handlers
use crate::domain::{
    Health, MissionParameters, Spacecraft, SpacecraftType, WeatherReport, LAUNCH_BURN,
};
use crate::errors::{ApiError, ApiResult};
use crate::services::{MissionControlService, NavigationCalculator, WeatherOracle};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub mission: Arc<MissionControlService>,
    pub navigation: Arc<dyn NavigationCalculator>,
    pub weather: Arc<dyn WeatherOracle>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SpacecraftType,
    pub fuel_level: f64,
}

#[derive(Debug, Deserialize)]
pub struct LaunchRequest {
    pub site: String,
    pub destination: String,
    #[serde(default)]
    pub crew_size: u32,
    pub launch_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct RefuelRequest {
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    pub destination: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub site: String,
}

fn fuel_amount(amount: f64) -> ApiResult<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ApiError::InvalidInput(format!(
            "fuel amount must be a non-negative number, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// List the registered fleet
pub async fn list_spacecraft(State(state): State<AppState>) -> Json<Value> {
    let fleet = state.mission.list().await;
    Json(serde_json::json!(SuccessResponse::new(serde_json::json!({
        "items": fleet
    }))))
}

/// Register a new spacecraft
pub async fn register_spacecraft(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<SuccessResponse<Spacecraft>>> {
    let fuel = fuel_amount(req.fuel_level)?;
    let spacecraft = Spacecraft::new(req.id, req.name, req.kind, fuel);
    state.mission.register(spacecraft.clone()).await?;
    Ok(Json(SuccessResponse::new(spacecraft)))
}

/// Get one spacecraft
pub async fn get_spacecraft(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessResponse<Spacecraft>>> {
    let spacecraft = state.mission.get(&id).await?.lock().await.clone();
    Ok(Json(SuccessResponse::new(spacecraft)))
}

/// Launch a spacecraft; on success the remaining mission fuel is burned too
pub async fn launch_spacecraft(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(req): Json<LaunchRequest>,
) -> ApiResult<Json<Value>> {
    let params = MissionParameters {
        distance: state
            .navigation
            .destinations()
            .into_iter()
            .find(|d| d.name == req.destination)
            .map(|d| d.distance_mkm)
            .unwrap_or_default(),
        destination: req.destination,
        crew_size: req.crew_size,
        launch_date: req.launch_date.unwrap_or_else(Utc::now),
    };

    let result = state.mission.launch(&id, &req.site, &params).await?;

    if result.success {
        let handle = state.mission.get(&id).await?;
        let mut spacecraft = handle.lock().await;
        let cruise = state
            .navigation
            .required_fuel(&params.destination, spacecraft.kind())?
            - LAUNCH_BURN;
        spacecraft.consume_fuel(cruise.max(0.0))?;
        info!(
            "{} en route to {}, {} fuel left",
            id,
            params.destination,
            spacecraft.fuel_level()
        );
    }

    let spacecraft = match state.mission.get(&id).await {
        Ok(handle) => Some(handle.lock().await.clone()),
        Err(_) => None,
    };

    Ok(Json(serde_json::json!(SuccessResponse::new(
        serde_json::json!({
            "success": result.success,
            "message": result.message,
            "spacecraft": spacecraft,
        })
    ))))
}

/// Plan a route for a spacecraft
pub async fn plan_mission(
    Path(id): Path<String>,
    Query(query): Query<PlanQuery>,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let route = state.mission.plan_mission(&id, &query.destination).await?;
    Ok(Json(serde_json::json!(SuccessResponse::new(
        serde_json::json!({
            "destination": query.destination,
            "route": route
        })
    ))))
}

/// Refuel a spacecraft
pub async fn refuel_spacecraft(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(req): Json<RefuelRequest>,
) -> ApiResult<Json<SuccessResponse<Spacecraft>>> {
    let amount = fuel_amount(req.amount)?;
    let spacecraft = state.mission.refuel(&id, amount).await?;
    Ok(Json(SuccessResponse::new(spacecraft)))
}

/// Current weather at a launch site
pub async fn check_weather(
    Query(query): Query<WeatherQuery>,
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessResponse<WeatherReport>>> {
    let condition = state.weather.current_weather(&query.site).await?;
    let safe = state.weather.is_safe(&condition);
    Ok(Json(SuccessResponse::new(WeatherReport {
        site: query.site,
        condition,
        safe,
    })))
}

/// Known destinations
pub async fn list_destinations(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!(SuccessResponse::new(serde_json::json!({
        "items": state.navigation.destinations()
    }))))
}
