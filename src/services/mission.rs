/// Launch orchestration over the spacecraft registry
use super::navigation::NavigationCalculator;
use super::telemetry::{launch_record, TelemetryData, TelemetrySink};
use super::weather::WeatherOracle;
use crate::domain::{LaunchResult, MissionParameters, Spacecraft};
use crate::errors::{MissionError, MissionResult};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

/// Shared handle to a registered spacecraft; the lock also serializes launches
pub type SpacecraftHandle = Arc<Mutex<Spacecraft>>;

pub struct MissionControlService {
    weather: Arc<dyn WeatherOracle>,
    telemetry: Arc<dyn TelemetrySink>,
    navigation: Arc<dyn NavigationCalculator>,
    registry: RwLock<HashMap<String, SpacecraftHandle>>,
}

impl MissionControlService {
    pub fn new(
        weather: Arc<dyn WeatherOracle>,
        telemetry: Arc<dyn TelemetrySink>,
        navigation: Arc<dyn NavigationCalculator>,
    ) -> Self {
        Self {
            weather,
            telemetry,
            navigation,
            registry: RwLock::new(HashMap::new()),
        }
    }

    /// Add a spacecraft to the registry
    pub async fn register(&self, spacecraft: Spacecraft) -> MissionResult<()> {
        let mut registry = self.registry.write().await;
        match registry.entry(spacecraft.id().to_string()) {
            Entry::Occupied(slot) => {
                warn!("Rejected duplicate registration for {}", slot.key());
                Err(MissionError::DuplicateId(slot.key().clone()))
            }
            Entry::Vacant(slot) => {
                info!("Registered spacecraft {} ({})", slot.key(), spacecraft.name());
                slot.insert(Arc::new(Mutex::new(spacecraft)));
                Ok(())
            }
        }
    }

    /// Look up a registered spacecraft
    pub async fn get(&self, id: &str) -> MissionResult<SpacecraftHandle> {
        self.lookup(id)
            .await
            .ok_or_else(|| MissionError::NotFound(id.to_string()))
    }

    /// Snapshot of the fleet ordered by id
    pub async fn list(&self) -> Vec<Spacecraft> {
        let handles: Vec<SpacecraftHandle> =
            self.registry.read().await.values().cloned().collect();

        let mut fleet = Vec::with_capacity(handles.len());
        for handle in handles {
            fleet.push(handle.lock().await.clone());
        }
        fleet.sort_by(|a, b| a.id().cmp(b.id()));
        fleet
    }

    /// Run the launch decision pipeline.
    ///
    /// Business outcomes come back as a [`LaunchResult`]; only collaborator
    /// faults and table misses surface as errors. Nothing is mutated before
    /// the weather and fuel gates pass.
    pub async fn launch(
        &self,
        id: &str,
        site: &str,
        params: &MissionParameters,
    ) -> MissionResult<LaunchResult> {
        let Some(handle) = self.lookup(id).await else {
            info!("Launch request for unknown spacecraft {}", id);
            return Ok(LaunchResult::failure("Spacecraft not found"));
        };

        let mut spacecraft = handle.lock().await;

        if spacecraft.is_launched() {
            info!("Spacecraft {} already launched", id);
            return Ok(LaunchResult::failure("Spacecraft already launched"));
        }

        let condition = self.weather.current_weather(site).await?;
        if !self.weather.is_safe(&condition) {
            info!(?condition, "Launch of {} from {} scrubbed for weather", id, site);
            return Ok(LaunchResult::failure("Unsafe weather conditions for launch"));
        }

        let required = self
            .navigation
            .required_fuel(&params.destination, spacecraft.kind())?;
        let available = spacecraft.fuel_level();
        if available < required {
            info!(
                "Spacecraft {} lacks fuel for {}: required {}, available {}",
                id, params.destination, required, available
            );
            return Ok(LaunchResult::failure(format!(
                "Insufficient fuel. Required: {}, Available: {}",
                required, available
            )));
        }

        // the mission gate above and the vehicle's own burn check are independent
        if !spacecraft.launch() {
            warn!("Spacecraft {} refused launch after passing checks", id);
            return Ok(LaunchResult::failure("Failed to launch spacecraft"));
        }

        let record = launch_record(&params.destination, spacecraft.fuel_level());
        drop(spacecraft);

        info!("Spacecraft {} launched from {} to {}", id, site, params.destination);
        self.dispatch_telemetry(id, record);

        Ok(LaunchResult::success("Launch successful"))
    }

    /// Route for `destination` if the spacecraft's current fuel covers it
    pub async fn plan_mission(&self, id: &str, destination: &str) -> MissionResult<Vec<String>> {
        let handle = self.get(id).await?;
        let (fuel, kind) = {
            let spacecraft = handle.lock().await;
            (spacecraft.fuel_level(), spacecraft.kind())
        };

        if !self.navigation.is_reachable(fuel, destination, kind) {
            return Err(MissionError::Unreachable {
                destination: destination.to_string(),
                required: self.navigation.required_fuel(destination, kind).ok(),
                available: fuel,
            });
        }

        self.navigation.route_plan(destination)
    }

    /// Refuel a registered spacecraft and return its new state
    pub async fn refuel(&self, id: &str, amount: f64) -> MissionResult<Spacecraft> {
        let handle = self.get(id).await?;
        let mut spacecraft = handle.lock().await;
        spacecraft.refuel(amount)?;
        info!("Refueled {} with {} units", id, amount);
        Ok(spacecraft.clone())
    }

    async fn lookup(&self, id: &str) -> Option<SpacecraftHandle> {
        self.registry.read().await.get(id).cloned()
    }

    /// Fire-and-forget; the outcome is only logged
    fn dispatch_telemetry(&self, id: &str, record: TelemetryData) {
        let sink = Arc::clone(&self.telemetry);
        let id = id.to_string();
        tokio::spawn(async move {
            match sink.send(&id, record).await {
                Ok(true) => debug!("Telemetry delivered for {}", id),
                Ok(false) => warn!("Telemetry rejected for {}", id),
                Err(e) => error!("Telemetry dispatch for {} failed: {}", id, e),
            }
        });
    }
}
