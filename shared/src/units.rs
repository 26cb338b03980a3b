//! Unit conversion for vital readings
//!
//! Reference ranges are expressed in the units the threshold tables use
//! (°F for body temperature, US fluid ounces for water intake). Readings
//! recorded in other units are converted before they are classified.
//!
//! Stored readings are converted the same way when they are resolved into a
//! snapshot, so analyzers only ever see canonical values. Caller overrides
//! are already canonical and pass through untouched.

use crate::errors::ReferenceDataError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Millilitres per US fluid ounce
const ML_PER_FL_OZ: f64 = 29.5735;

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature unit of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Convert from this unit to Fahrenheit
    pub fn to_fahrenheit(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Fahrenheit => value,
            TemperatureUnit::Celsius => value * 9.0 / 5.0 + 32.0,
        }
    }

    /// Convert from Fahrenheit to this unit
    pub fn from_fahrenheit(&self, fahrenheit: f64) -> f64 {
        match self {
            TemperatureUnit::Fahrenheit => fahrenheit,
            TemperatureUnit::Celsius => (fahrenheit - 32.0) * 5.0 / 9.0,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for TemperatureUnit {
    type Err = ReferenceDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "°f" | "f" | "fahrenheit" | "degf" => Ok(TemperatureUnit::Fahrenheit),
            "°c" | "c" | "celsius" | "degc" => Ok(TemperatureUnit::Celsius),
            _ => Err(ReferenceDataError::UnknownUnit(s.to_string())),
        }
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Fluid volume unit of a water intake reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    #[default]
    FluidOunce,
    Milliliter,
    Liter,
    /// US cup, 8 fl oz
    Cup,
}

impl VolumeUnit {
    /// Convert from this unit to US fluid ounces
    pub fn to_fl_oz(&self, value: f64) -> f64 {
        match self {
            VolumeUnit::FluidOunce => value,
            VolumeUnit::Milliliter => value / ML_PER_FL_OZ,
            VolumeUnit::Liter => value * 1000.0 / ML_PER_FL_OZ,
            VolumeUnit::Cup => value * 8.0,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            VolumeUnit::FluidOunce => "oz",
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::Liter => "L",
            VolumeUnit::Cup => "cups",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for VolumeUnit {
    type Err = ReferenceDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oz" | "fl oz" | "floz" | "ounce" | "ounces" => Ok(VolumeUnit::FluidOunce),
            "ml" | "milliliter" | "milliliters" | "millilitre" => Ok(VolumeUnit::Milliliter),
            "l" | "liter" | "liters" | "litre" | "litres" => Ok(VolumeUnit::Liter),
            "cup" | "cups" => Ok(VolumeUnit::Cup),
            _ => Err(ReferenceDataError::UnknownUnit(s.to_string())),
        }
    }
}
