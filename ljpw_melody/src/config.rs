// Melody analyzer configuration, JSON-loadable like `EngineConfig`.

use ljpw_engine::Scenario;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MelodyConfig {
    /// Longest melody the player can build.
    pub max_notes: usize,
    /// Growth/decay scenario used for memorability.
    pub scenario: Scenario,
}

impl Default for MelodyConfig {
    fn default() -> Self {
        MelodyConfig {
            max_notes: 16,
            scenario: Scenario::default(),
        }
    }
}

impl MelodyConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MelodyConfig::default();
        assert_eq!(config.max_notes, 16);
        assert_eq!(config.scenario.iterations, 10);
        assert_eq!(config.scenario.distance, 3.0);
    }

    #[test]
    fn partial_json() {
        let config = MelodyConfig::from_json(r#"{"max_notes": 8}"#).unwrap();
        assert_eq!(config.max_notes, 8);
        assert_eq!(config.scenario, Scenario::default());
    }
}
