//! # Simulated Temperature Check
//!
//! File: cli/src/thermo/mod.rs
//!
//! ## Overview
//!
//! There is no sensor behind this module. A reading is a uniform random draw
//! of ±1.0 °C around 36.8 °C, classified with fixed thresholds:
//!
//! | Reading (°C)       | Status   |
//! |--------------------|----------|
//! | below 36.1         | Low      |
//! | 36.1 up to 37.5    | Normal   |
//! | above 37.5 to 38.5 | Elevated |
//! | above 38.5         | Fever    |
//!
//! The random source is a parameter so tests can use a seeded generator.
//!
use rand::Rng;
use std::fmt;

/// Centre of the simulated distribution.
pub const BASE_CELSIUS: f64 = 36.8;
/// Half-width of the uniform variation around [`BASE_CELSIUS`].
pub const VARIATION_CELSIUS: f64 = 1.0;

const LOW_BELOW: f64 = 36.1;
const NORMAL_MAX: f64 = 37.5;
const ELEVATED_MAX: f64 = 38.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureStatus {
    Low,
    Normal,
    Elevated,
    Fever,
}

impl TemperatureStatus {
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius < LOW_BELOW {
            TemperatureStatus::Low
        } else if celsius <= NORMAL_MAX {
            TemperatureStatus::Normal
        } else if celsius <= ELEVATED_MAX {
            TemperatureStatus::Elevated
        } else {
            TemperatureStatus::Fever
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            TemperatureStatus::Low => {
                "Your temperature is below normal. Stay warm and monitor your health."
            }
            TemperatureStatus::Normal => {
                "Your temperature is normal. Continue monitoring your health."
            }
            TemperatureStatus::Elevated => {
                "Your temperature is slightly elevated. Rest, stay hydrated, and monitor symptoms."
            }
            TemperatureStatus::Fever => {
                "You have a fever. Consult a healthcare professional if symptoms persist."
            }
        }
    }
}

impl fmt::Display for TemperatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TemperatureStatus::Low => "LOW",
            TemperatureStatus::Normal => "NORMAL",
            TemperatureStatus::Elevated => "ELEVATED",
            TemperatureStatus::Fever => "FEVER",
        };
        f.write_str(label)
    }
}

/// One simulated measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading {
    pub celsius: f64,
    pub status: TemperatureStatus,
}

impl TemperatureReading {
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            status: TemperatureStatus::from_celsius(celsius),
        }
    }

    /// The text posted into a chat transcript after a check.
    pub fn to_message(&self) -> String {
        format!(
            "Temperature Check Result:\nTemperature: {:.1}°C\nStatus: {}\nGuidance: {}",
            self.celsius,
            self.status,
            self.status.guidance()
        )
    }
}

/// Draws a reading from `rng`.
pub fn simulate<R: Rng + ?Sized>(rng: &mut R) -> TemperatureReading {
    let variation = rng.gen_range(-VARIATION_CELSIUS..VARIATION_CELSIUS);
    TemperatureReading::from_celsius(BASE_CELSIUS + variation)
}

/// Draws a reading from the thread-local generator.
pub fn measure() -> TemperatureReading {
    simulate(&mut rand::thread_rng())
}
