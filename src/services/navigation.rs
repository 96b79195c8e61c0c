/// Fuel and route calculation over static destination tables
use crate::domain::{Destination, SpacecraftType, LAUNCH_BURN};
use crate::errors::{MissionError, MissionResult};
use std::collections::HashMap;

const SAFETY_MARGIN: f64 = 1.2;
const ORIGIN: &str = "Launch Pad";

/// Distances in million km
const DESTINATIONS: [(&str, f64); 11] = [
    ("Earth Orbit", 0.4),
    ("Moon", 0.384),
    ("Mars", 54.6),
    ("Venus", 41.4),
    ("Mercury", 77.3),
    ("Jupiter", 588.0),
    ("Saturn", 1200.0),
    ("Uranus", 2600.0),
    ("Neptune", 4300.0),
    ("Pluto", 5900.0),
    ("Alpha Centauri", 41_300_000.0),
];

/// Million km per fuel unit
const FUEL_EFFICIENCY: [(SpacecraftType, f64); 4] = [
    (SpacecraftType::Satellite, 1.5),
    (SpacecraftType::Rover, 0.8),
    (SpacecraftType::Shuttle, 2.0),
    (SpacecraftType::SpaceStation, 0.5),
];

const OUTER_PLANETS: [&str; 5] = ["Jupiter", "Saturn", "Uranus", "Neptune", "Pluto"];

/// Capability the mission-control service plans against
pub trait NavigationCalculator: Send + Sync {
    /// Mission fuel including the safety margin and launch burn, rounded up
    fn required_fuel(&self, destination: &str, kind: SpacecraftType) -> MissionResult<f64>;

    /// Ordered waypoints from the launch pad to `destination`
    fn route_plan(&self, destination: &str) -> MissionResult<Vec<String>>;

    /// Unknown destinations and vehicle types count as unreachable.
    fn is_reachable(&self, available_fuel: f64, destination: &str, kind: SpacecraftType) -> bool {
        self.required_fuel(destination, kind)
            .map(|required| available_fuel >= required)
            .unwrap_or(false)
    }

    fn destinations(&self) -> Vec<Destination>;
}

/// Waypoint layout keyed by destination name
#[derive(Debug, Clone, PartialEq)]
enum RoutePattern {
    Fixed(&'static [&'static str]),
    OuterPlanet,
    Interstellar,
    Generic,
}

impl RoutePattern {
    fn for_destination(destination: &str) -> Self {
        match destination {
            "Earth Orbit" => RoutePattern::Fixed(&["Earth Orbit"]),
            "Moon" => RoutePattern::Fixed(&["Earth Orbit", "Lunar Transfer", "Lunar Orbit"]),
            "Mars" => RoutePattern::Fixed(&[
                "Earth Orbit",
                "Lunar Transfer",
                "Mars Approach",
                "Mars Orbit",
            ]),
            "Alpha Centauri" => RoutePattern::Interstellar,
            d if OUTER_PLANETS.contains(&d) => RoutePattern::OuterPlanet,
            _ => RoutePattern::Generic,
        }
    }

    fn waypoints(&self, destination: &str) -> Vec<String> {
        let mut route = vec![ORIGIN.to_string()];
        match self {
            RoutePattern::Fixed(hops) => route.extend(hops.iter().map(|h| h.to_string())),
            RoutePattern::OuterPlanet => route.extend([
                "Earth Orbit".to_string(),
                "Mars Flyby".to_string(),
                "Asteroid Belt Crossing".to_string(),
                format!("{destination} Approach"),
                format!("{destination} Orbit"),
            ]),
            RoutePattern::Interstellar => route.extend(
                [
                    "Earth Orbit",
                    "Solar System Exit",
                    "Interstellar Space",
                    "Alpha Centauri Approach",
                    "Alpha Centauri System",
                ]
                .map(String::from),
            ),
            RoutePattern::Generic => route.extend([
                "Earth Orbit".to_string(),
                format!("{destination} Approach"),
                format!("{destination} Arrival"),
            ]),
        }
        route
    }
}

/// Table-driven navigation computer
#[derive(Debug, Clone)]
pub struct NavigationSystem {
    distances: HashMap<String, f64>,
    efficiency: HashMap<SpacecraftType, f64>,
}

impl Default for NavigationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationSystem {
    pub fn new() -> Self {
        Self::with_tables(
            DESTINATIONS.iter().map(|(name, d)| (name.to_string(), *d)),
            FUEL_EFFICIENCY,
        )
    }

    pub fn with_tables(
        distances: impl IntoIterator<Item = (String, f64)>,
        efficiency: impl IntoIterator<Item = (SpacecraftType, f64)>,
    ) -> Self {
        Self {
            distances: distances.into_iter().collect(),
            efficiency: efficiency.into_iter().collect(),
        }
    }

    fn distance(&self, destination: &str) -> MissionResult<f64> {
        self.distances
            .get(destination)
            .copied()
            .ok_or_else(|| MissionError::UnknownDestination(destination.to_string()))
    }
}

impl NavigationCalculator for NavigationSystem {
    fn required_fuel(&self, destination: &str, kind: SpacecraftType) -> MissionResult<f64> {
        let distance = self.distance(destination)?;
        let efficiency = self
            .efficiency
            .get(&kind)
            .copied()
            .ok_or(MissionError::UnknownVehicleType(kind))?;

        let fuel = distance / efficiency * SAFETY_MARGIN + LAUNCH_BURN;
        Ok(fuel.ceil())
    }

    fn route_plan(&self, destination: &str) -> MissionResult<Vec<String>> {
        self.distance(destination)?;
        Ok(RoutePattern::for_destination(destination).waypoints(destination))
    }

    fn destinations(&self) -> Vec<Destination> {
        let mut list: Vec<Destination> = self
            .distances
            .iter()
            .map(|(name, d)| Destination {
                name: name.clone(),
                distance_mkm: *d,
            })
            .collect();
        list.sort_by(|a, b| a.distance_mkm.total_cmp(&b.distance_mkm));
        list
    }
}
