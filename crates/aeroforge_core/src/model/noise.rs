//! Per-field noise rules for the parameter sampler

use serde::{Deserialize, Serialize};

use super::params::StochasticField;
use crate::error::{InvalidInput, Result};

/// Multiplicative Gaussian perturbation followed by a physical bound.
///
/// A draw is `nominal * (1 + relative_std * z)` for standard-normal `z`,
/// then raised to `floor` and, if set, lowered to `ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldNoise {
    pub relative_std: f64,
    pub floor: f64,
    #[serde(default)]
    pub ceiling: Option<f64>,
}

impl FieldNoise {
    #[must_use]
    pub const fn floored(relative_std: f64, floor: f64) -> Self {
        Self {
            relative_std,
            floor,
            ceiling: None,
        }
    }

    #[must_use]
    pub const fn clipped(relative_std: f64, floor: f64, ceiling: f64) -> Self {
        Self {
            relative_std,
            floor,
            ceiling: Some(ceiling),
        }
    }

    /// Perturb `nominal` by the standard-normal draw `z` and bound the result
    #[inline]
    #[must_use]
    pub fn apply(&self, nominal: f64, z: f64) -> f64 {
        self.bound(nominal * (1.0 + self.relative_std * z))
    }

    /// Apply the floor, then the ceiling
    #[inline]
    #[must_use]
    pub fn bound(&self, value: f64) -> f64 {
        let floored = value.max(self.floor);
        match self.ceiling {
            Some(ceiling) => floored.min(ceiling),
            None => floored,
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.floor && self.ceiling.is_none_or(|c| value <= c)
    }

    fn validate(&self, field: StochasticField) -> Result<()> {
        if !self.relative_std.is_finite() || self.relative_std < 0.0 {
            return Err(InvalidInput::InvalidNoise {
                field,
                reason: "relative_std must be finite and non-negative",
            });
        }
        if !self.floor.is_finite() {
            return Err(InvalidInput::InvalidNoise {
                field,
                reason: "floor must be finite",
            });
        }
        if let Some(ceiling) = self.ceiling
            && !(ceiling.is_finite() && ceiling >= self.floor)
        {
            return Err(InvalidInput::InvalidNoise {
                field,
                reason: "ceiling must be finite and not below the floor",
            });
        }
        Ok(())
    }
}

/// Noise rules for every stochastic field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseModel {
    pub pack_specific_energy: FieldNoise,
    pub lift_to_drag: FieldNoise,
    pub harvest_power: FieldNoise,
    pub sic_efficiency_gain: FieldNoise,
    pub system_efficiency: FieldNoise,
}

impl NoiseModel {
    // Engineering uncertainty assumptions for the Al-ion + SiC concept:
    // battery density +-25%, aerodynamics +-15%, weather-dependent
    // harvesting +-40%, SiC integration +-20%, drivetrain +-10%.
    pub const ENGINEERING: NoiseModel = NoiseModel {
        pack_specific_energy: FieldNoise::floored(0.25, 200.0),
        lift_to_drag: FieldNoise::floored(0.15, 15.0),
        harvest_power: FieldNoise::floored(0.40, 0.0),
        sic_efficiency_gain: FieldNoise::floored(0.20, 1.0),
        system_efficiency: FieldNoise::clipped(0.10, 0.70, 0.98),
    };

    /// Same bounds as the default model with every relative std-dev at zero.
    /// Every trial then evaluates the (bounded) nominal values.
    #[must_use]
    pub fn deterministic() -> Self {
        let mut model = Self::ENGINEERING;
        for field in StochasticField::ALL {
            model.get_mut(field).relative_std = 0.0;
        }
        model
    }

    #[must_use]
    pub fn get(&self, field: StochasticField) -> &FieldNoise {
        match field {
            StochasticField::PackSpecificEnergy => &self.pack_specific_energy,
            StochasticField::LiftToDrag => &self.lift_to_drag,
            StochasticField::HarvestPower => &self.harvest_power,
            StochasticField::SicEfficiencyGain => &self.sic_efficiency_gain,
            StochasticField::SystemEfficiency => &self.system_efficiency,
        }
    }

    pub fn get_mut(&mut self, field: StochasticField) -> &mut FieldNoise {
        match field {
            StochasticField::PackSpecificEnergy => &mut self.pack_specific_energy,
            StochasticField::LiftToDrag => &mut self.lift_to_drag,
            StochasticField::HarvestPower => &mut self.harvest_power,
            StochasticField::SicEfficiencyGain => &mut self.sic_efficiency_gain,
            StochasticField::SystemEfficiency => &mut self.system_efficiency,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for field in StochasticField::ALL {
            self.get(field).validate(field)?;
        }
        Ok(())
    }
}

impl Default for NoiseModel {
    fn default() -> Self {
        Self::ENGINEERING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_applied_after_perturbation() {
        let noise = FieldNoise::floored(0.40, 0.0);
        // 15 * (1 + 0.4 * -5) = -15 -> floored
        assert_eq!(noise.apply(15.0, -5.0), 0.0);
        assert!((noise.apply(15.0, 1.0) - 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_clip_both_sides() {
        let noise = FieldNoise::clipped(0.10, 0.70, 0.98);
        assert_eq!(noise.apply(0.92, 3.0), 0.98);
        assert_eq!(noise.apply(0.92, -3.0), 0.70);
        assert!((noise.apply(0.92, 0.0) - 0.92).abs() < 1e-15);
    }

    #[test]
    fn test_deterministic_keeps_bounds() {
        let model = NoiseModel::deterministic();
        for field in StochasticField::ALL {
            assert_eq!(model.get(field).relative_std, 0.0);
            assert_eq!(model.get(field).floor, NoiseModel::ENGINEERING.get(field).floor);
        }
        assert_eq!(model.system_efficiency.ceiling, Some(0.98));
    }

    #[test]
    fn test_validate() {
        assert!(NoiseModel::default().validate().is_ok());

        let mut model = NoiseModel::default();
        model.lift_to_drag.relative_std = -0.1;
        assert!(matches!(
            model.validate(),
            Err(InvalidInput::InvalidNoise {
                field: StochasticField::LiftToDrag,
                ..
            })
        ));

        let mut model = NoiseModel::default();
        model.system_efficiency.ceiling = Some(0.5);
        assert!(model.validate().is_err());
    }
}
