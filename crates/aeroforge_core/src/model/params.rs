//! Physical parameters of the range model
//!
//! `ParameterSet` is the nominal baseline for an analysis run. The five
//! `StochasticField`s are the entries the sampler perturbs; everything else
//! is held at its nominal value for every trial.

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, Result};

/// Scalar inputs to the electric Breguet range relation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Baseline drivetrain efficiency (0..1)
    pub eta_system: f64,
    /// Battery pack specific energy (Wh/kg)
    pub epack_wh_per_kg: f64,
    /// Battery pack mass (kg)
    pub m_batt_kg: f64,
    /// Total aircraft mass (kg)
    pub m_total_kg: f64,
    /// Gravitational acceleration (m/s^2)
    pub g: f64,
    /// Lift-to-drag ratio
    pub l_over_d: f64,
    /// Equivalent specific fuel consumption
    pub sfc_eq: f64,
    /// Power harvested in flight, constant over the cruise (kW)
    pub harvest_kw: f64,
    /// Multiplicative efficiency gain from SiC power electronics
    pub sic_efficiency_gain: f64,
    /// Cruise duration (h)
    pub cruise_hours: f64,
}

impl ParameterSet {
    pub const NOMINAL: ParameterSet = ParameterSet {
        eta_system: 0.92,
        epack_wh_per_kg: 450.0,
        m_batt_kg: 25_000.0,
        m_total_kg: 80_000.0,
        g: 9.80665,
        l_over_d: 22.0,
        sfc_eq: 0.00015,
        harvest_kw: 15.0,
        sic_efficiency_gain: 1.08,
        cruise_hours: 6.0,
    };

    /// All fields as `(name, value)` pairs in declaration order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 10] {
        [
            ("eta_system", self.eta_system),
            ("epack_wh_per_kg", self.epack_wh_per_kg),
            ("m_batt_kg", self.m_batt_kg),
            ("m_total_kg", self.m_total_kg),
            ("g", self.g),
            ("l_over_d", self.l_over_d),
            ("sfc_eq", self.sfc_eq),
            ("harvest_kw", self.harvest_kw),
            ("sic_efficiency_gain", self.sic_efficiency_gain),
            ("cruise_hours", self.cruise_hours),
        ]
    }

    /// Value of a stochastic field
    #[must_use]
    pub fn get(&self, field: StochasticField) -> f64 {
        match field {
            StochasticField::PackSpecificEnergy => self.epack_wh_per_kg,
            StochasticField::LiftToDrag => self.l_over_d,
            StochasticField::HarvestPower => self.harvest_kw,
            StochasticField::SicEfficiencyGain => self.sic_efficiency_gain,
            StochasticField::SystemEfficiency => self.eta_system,
        }
    }

    /// Reject values the range model cannot evaluate.
    ///
    /// Every field must be finite and the Breguet denominator must be
    /// non-zero. Sampled fields are not checked beyond finiteness since the
    /// sampler bounds them.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.entries() {
            if !value.is_finite() {
                return Err(InvalidInput::NonFiniteParameter { name, value });
            }
        }
        if crate::range_model::breguet_denominator(self) == 0.0 {
            return Err(InvalidInput::ZeroDenominator);
        }
        Ok(())
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::NOMINAL
    }
}

/// The parameters perturbed by the Monte-Carlo sampler.
///
/// Serialized with the same short key as `key()` and the `SampleBatch`
/// field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StochasticField {
    #[serde(rename = "epack")]
    PackSpecificEnergy,
    #[serde(rename = "l_over_d")]
    LiftToDrag,
    #[serde(rename = "harvest")]
    HarvestPower,
    #[serde(rename = "sic_gain")]
    SicEfficiencyGain,
    #[serde(rename = "eta")]
    SystemEfficiency,
}

impl StochasticField {
    /// Sampling order. Changing it changes every seeded run.
    pub const ALL: [StochasticField; 5] = [
        StochasticField::PackSpecificEnergy,
        StochasticField::LiftToDrag,
        StochasticField::HarvestPower,
        StochasticField::SicEfficiencyGain,
        StochasticField::SystemEfficiency,
    ];

    /// Short stable key used in reports and exported tables
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::PackSpecificEnergy => "epack",
            Self::LiftToDrag => "l_over_d",
            Self::HarvestPower => "harvest",
            Self::SicEfficiencyGain => "sic_gain",
            Self::SystemEfficiency => "eta",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PackSpecificEnergy => "Battery Energy Density (Wh/kg)",
            Self::LiftToDrag => "Lift-to-Drag Ratio",
            Self::HarvestPower => "Harvesting Power (kW)",
            Self::SicEfficiencyGain => "SiC Efficiency Gain",
            Self::SystemEfficiency => "System Efficiency",
        }
    }
}
