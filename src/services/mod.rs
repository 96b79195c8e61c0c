/// Business logic services layer
mod mission;
mod navigation;
mod telemetry;
mod weather;

pub use mission::MissionControlService;
pub use navigation::{NavigationCalculator, NavigationSystem};
pub use telemetry::{LogTelemetrySink, TelemetryData, TelemetrySink};
pub use weather::{SimulatedWeatherService, WeatherOracle};
