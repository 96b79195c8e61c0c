/// Spacecraft entity and its fuel/launch state machine
use super::{LaunchStatus, SpacecraftType};
use crate::errors::{MissionError, MissionResult};
use serde::Serialize;

/// Fuel deducted by the vehicle itself on lift-off, whatever the destination
pub const LAUNCH_BURN: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spacecraft {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: SpacecraftType,
    fuel_level: f64,
    launch_status: LaunchStatus,
}

impl Spacecraft {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: SpacecraftType,
        fuel_level: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            fuel_level: fuel_level.max(0.0),
            launch_status: LaunchStatus::NotLaunched,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SpacecraftType {
        self.kind
    }

    pub fn fuel_level(&self) -> f64 {
        self.fuel_level
    }

    pub fn launch_status(&self) -> LaunchStatus {
        self.launch_status
    }

    pub fn is_launched(&self) -> bool {
        self.launch_status != LaunchStatus::NotLaunched
    }

    /// Lift off, burning [`LAUNCH_BURN`] units.
    ///
    /// Returns `false` without touching state when already launched or when
    /// the tank holds less than the burn.
    pub fn launch(&mut self) -> bool {
        if self.is_launched() || self.fuel_level < LAUNCH_BURN {
            return false;
        }

        self.fuel_level -= LAUNCH_BURN;
        self.launch_status = LaunchStatus::Launched;
        true
    }

    /// Burn `amount` units, clamping the tank at zero.
    pub fn consume_fuel(&mut self, amount: f64) -> MissionResult<()> {
        if !is_valid_amount(amount) {
            return Err(MissionError::InvalidArgument(
                "Fuel consumption must be a finite, non-negative amount".to_string(),
            ));
        }

        self.fuel_level = (self.fuel_level - amount).max(0.0);

        if self.fuel_level == 0.0 && self.is_launched() {
            self.launch_status = LaunchStatus::OutOfFuel;
        }
        Ok(())
    }

    /// Add `amount` units; there is no tank capacity.
    pub fn refuel(&mut self, amount: f64) -> MissionResult<()> {
        if !is_valid_amount(amount) {
            return Err(MissionError::InvalidArgument(
                "Refuel amount must be a finite, non-negative amount".to_string(),
            ));
        }

        self.fuel_level += amount;

        if self.launch_status == LaunchStatus::OutOfFuel {
            self.launch_status = LaunchStatus::Launched;
        }
        Ok(())
    }
}

fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}
