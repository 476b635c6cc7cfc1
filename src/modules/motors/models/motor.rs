use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Motor construction category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorType {
    SinglePhase,
    ThreePhase,
    SubmersibleSingle,
    SubmersibleThree,
}

impl std::fmt::Display for MotorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotorType::SinglePhase => write!(f, "single_phase"),
            MotorType::ThreePhase => write!(f, "three_phase"),
            MotorType::SubmersibleSingle => write!(f, "submersible_single"),
            MotorType::SubmersibleThree => write!(f, "submersible_three"),
        }
    }
}

impl std::str::FromStr for MotorType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "single_phase" => Ok(MotorType::SinglePhase),
            "three_phase" => Ok(MotorType::ThreePhase),
            "submersible_single" => Ok(MotorType::SubmersibleSingle),
            "submersible_three" => Ok(MotorType::SubmersibleThree),
            _ => Err(format!("Invalid motor type: {}", s)),
        }
    }
}

/// One coil entry inside a winding section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindingCoil {
    /// Slot pitch, free-form (e.g. "1-8")
    pub pitch: String,
    pub turns: u32,
}

/// A named winding group with its wire gauge and coil list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindingSection {
    pub name: String,
    pub gauge: String,
    #[serde(default)]
    pub coils: Vec<WindingCoil>,
}

impl WindingSection {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Winding section name cannot be empty"));
        }

        if self.gauge.trim().is_empty() {
            return Err(AppError::validation(format!(
                "Winding section '{}' is missing a wire gauge",
                self.name
            )));
        }

        for coil in &self.coils {
            if coil.pitch.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "Coil in section '{}' is missing a pitch",
                    self.name
                )));
            }
        }

        Ok(())
    }
}

/// A saved motor winding specification
#[derive(Debug, Clone, Serialize)]
pub struct Motor {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub motor_type: MotorType,
    pub power_rating: Option<String>,
    pub voltage: Option<String>,
    pub winding_type: Option<String>,
    pub coil_count: Option<i32>,
    pub wire_gauge: Option<String>,
    pub pitch_details: Option<String>,
    pub turns_per_coil: Option<i32>,
    pub winding_data: Vec<WindingSection>,
    pub rewinding_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or updating a motor
#[derive(Debug, Clone, Deserialize)]
pub struct MotorRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub motor_type: MotorType,
    #[serde(default)]
    pub power_rating: Option<String>,
    #[serde(default)]
    pub voltage: Option<String>,
    #[serde(default)]
    pub winding_type: Option<String>,
    #[serde(default)]
    pub coil_count: Option<i32>,
    #[serde(default)]
    pub wire_gauge: Option<String>,
    #[serde(default)]
    pub pitch_details: Option<String>,
    #[serde(default)]
    pub turns_per_coil: Option<i32>,
    #[serde(default)]
    pub winding_data: Vec<WindingSection>,
    #[serde(default)]
    pub rewinding_notes: Option<String>,
}

impl MotorRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Motor name cannot be empty"));
        }

        if self.name.len() > 100 {
            return Err(AppError::validation(
                "Motor name cannot exceed 100 characters",
            ));
        }

        if let Some(count) = self.coil_count {
            if count < 0 {
                return Err(AppError::validation("Coil count cannot be negative"));
            }
        }

        if let Some(turns) = self.turns_per_coil {
            if turns < 0 {
                return Err(AppError::validation("Turns per coil cannot be negative"));
            }
        }

        for section in &self.winding_data {
            section.validate()?;
        }

        Ok(())
    }
}

/// Parse a stored winding blob leniently; malformed rows saved before the
/// schema settled come back as an empty list rather than an error
pub fn parse_winding_data(raw: Option<&str>) -> Vec<WindingSection> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}
