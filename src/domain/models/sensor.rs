use serde::{Deserialize, Serialize};

/// Motion detector reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    On,
    Off,
}

impl Motion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Motion::On => "ON",
            Motion::Off => "OFF",
        }
    }
}

/// One set of sensor card readings. `None` renders as a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub motion: Option<Motion>,
    pub temperature_c: Option<f32>,
    pub humidity_pct: Option<u8>,
    pub current_a: Option<f32>,
}

const PLACEHOLDER: &str = "--";

impl SensorSnapshot {
    /// Readings shown before the first simulated update
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Hard-coded demo readings
    pub fn simulated() -> Self {
        Self {
            motion: Some(Motion::Off),
            temperature_c: Some(24.6),
            humidity_pct: Some(58),
            current_a: Some(0.42),
        }
    }

    pub fn motion_label(&self) -> String {
        let value = self.motion.map(|m| m.as_str()).unwrap_or(PLACEHOLDER);
        format!("Motion: {}", value)
    }

    pub fn climate_label(&self) -> String {
        match (self.temperature_c, self.humidity_pct) {
            (Some(temp), Some(humidity)) => {
                format!("Temp/Humidity: {:.1}°C / {}%", temp, humidity)
            }
            _ => format!("Temp/Humidity: {}", PLACEHOLDER),
        }
    }

    pub fn current_label(&self) -> String {
        match self.current_a {
            Some(amps) => format!("Current: {:.2} A", amps),
            None => format!("Current: {}", PLACEHOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_labels() {
        let snapshot = SensorSnapshot::simulated();
        assert_eq!(snapshot.motion_label(), "Motion: OFF");
        assert_eq!(snapshot.climate_label(), "Temp/Humidity: 24.6°C / 58%");
        assert_eq!(snapshot.current_label(), "Current: 0.42 A");
    }

    #[test]
    fn test_placeholder_labels() {
        let snapshot = SensorSnapshot::placeholder();
        assert_eq!(snapshot.motion_label(), "Motion: --");
        assert_eq!(snapshot.climate_label(), "Temp/Humidity: --");
        assert_eq!(snapshot.current_label(), "Current: --");
    }

    #[test]
    fn test_partial_climate_is_placeholder() {
        let snapshot = SensorSnapshot {
            temperature_c: Some(21.0),
            ..SensorSnapshot::default()
        };
        assert_eq!(snapshot.climate_label(), "Temp/Humidity: --");
    }
}
