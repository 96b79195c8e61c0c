/// Domain models for the application
mod spacecraft;

pub use spacecraft::{Spacecraft, LAUNCH_BURN};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle class; drives fuel efficiency in navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacecraftType {
    Satellite,
    Rover,
    Shuttle,
    SpaceStation,
}

impl fmt::Display for SpacecraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpacecraftType::Satellite => "Satellite",
            SpacecraftType::Rover => "Rover",
            SpacecraftType::Shuttle => "Shuttle",
            SpacecraftType::SpaceStation => "SpaceStation",
        };
        f.write_str(name)
    }
}

/// Launch lifecycle of a spacecraft.
///
/// `MissionComplete` is part of the model but no operation currently
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LaunchStatus {
    #[default]
    NotLaunched,
    Launched,
    OutOfFuel,
    MissionComplete,
}

/// Mission request parameters; only `destination` affects the launch decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionParameters {
    pub destination: String,
    pub distance: f64,
    pub crew_size: u32,
    pub launch_date: DateTime<Utc>,
}

impl MissionParameters {
    pub fn for_destination(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            distance: 0.0,
            crew_size: 0,
            launch_date: Utc::now(),
        }
    }
}

/// Conditions at a launch site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// mph
    pub wind_speed: f64,
    /// °C
    pub temperature: f64,
    /// miles
    pub visibility: f64,
    pub lightning: bool,
}

impl WeatherCondition {
    /// Launch commit criteria: calm wind, clear sight, no lightning and a
    /// temperature inside [-10, 35].
    pub fn is_safe_for_launch(&self) -> bool {
        self.wind_speed < 30.0
            && self.visibility > 3.0
            && !self.lightning
            && (-10.0..=35.0).contains(&self.temperature)
    }
}

/// Outcome of the launch pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchResult {
    pub success: bool,
    pub message: String,
}

impl LaunchResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Known destination and its distance from Earth
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    pub name: String,
    pub distance_mkm: f64,
}

/// Current weather at a site with the launch verdict
#[derive(Debug, Serialize)]
pub struct WeatherReport {
    pub site: String,
    pub condition: WeatherCondition,
    pub safe: bool,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
