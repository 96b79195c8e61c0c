/// Launch-site weather collaborator
use crate::domain::WeatherCondition;
use crate::errors::{MissionError, MissionResult};
use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::debug;

#[async_trait]
pub trait WeatherOracle: Send + Sync {
    async fn current_weather(&self, site: &str) -> MissionResult<WeatherCondition>;

    fn is_safe(&self, condition: &WeatherCondition) -> bool {
        condition.is_safe_for_launch()
    }
}

/// Climate envelope of a launch site
#[derive(Debug, Clone, Copy, PartialEq)]
struct SitePattern {
    min_temp: f64,
    max_temp: f64,
    max_wind: f64,
}

impl SitePattern {
    const fn new(min_temp: f64, max_temp: f64, max_wind: f64) -> Self {
        Self {
            min_temp,
            max_temp,
            max_wind,
        }
    }
}

const DEFAULT_PATTERN: SitePattern = SitePattern::new(10.0, 30.0, 25.0);

/// (site, min °C, max °C, max wind mph)
const SITE_PATTERNS: [(&str, SitePattern); 5] = [
    ("Cape Canaveral", SitePattern::new(15.0, 32.0, 25.0)),
    ("Baikonur", SitePattern::new(5.0, 30.0, 20.0)),
    ("Kennedy Space Center", SitePattern::new(18.0, 35.0, 22.0)),
    ("Vandenberg", SitePattern::new(12.0, 25.0, 30.0)),
    ("Jiuquan", SitePattern::new(10.0, 28.0, 18.0)),
];

const MAX_VISIBILITY: f64 = 15.0;
const LIGHTNING_CHANCE: f64 = 0.1;

fn pattern_for(site: &str) -> SitePattern {
    SITE_PATTERNS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(site))
        .map(|(_, p)| *p)
        .unwrap_or(DEFAULT_PATTERN)
}

/// Random but plausible weather drawn from per-site patterns
pub struct SimulatedWeatherService {
    rng: Mutex<StdRng>,
}

impl SimulatedWeatherService {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl WeatherOracle for SimulatedWeatherService {
    async fn current_weather(&self, site: &str) -> MissionResult<WeatherCondition> {
        if site.trim().is_empty() {
            return Err(MissionError::WeatherUnavailable(site.to_string()));
        }

        let pattern = pattern_for(site);
        let mut rng = self.rng.lock().await;

        let condition = WeatherCondition {
            wind_speed: rng.random::<f64>() * pattern.max_wind,
            temperature: rng.random::<f64>() * (pattern.max_temp - pattern.min_temp)
                + pattern.min_temp,
            visibility: rng.random::<f64>() * MAX_VISIBILITY,
            lightning: rng.random_bool(LIGHTNING_CHANCE),
        };
        debug!(site, ?condition, "Simulated weather sample");
        Ok(condition)
    }
}
