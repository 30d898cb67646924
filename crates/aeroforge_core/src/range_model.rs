//! Closed-form range of a battery-electric aircraft
//!
//! An electric-equivalent Breguet relation: usable energy over the weight,
//! aerodynamic and consumption terms. Battery energy and in-flight harvested
//! energy are pooled, then scaled by the drivetrain efficiency boosted by
//! the SiC gain. The result saturates to `[0, MAX_RANGE_KM]`.

use serde::{Deserialize, Serialize};

use crate::model::ParameterSet;

/// Saturation ceiling for a single trial (km)
pub const MAX_RANGE_KM: f64 = 50_000.0;

/// Intermediate quantities of one range evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBreakdown {
    /// Battery pack energy (Wh)
    pub pack_energy_wh: f64,
    /// Energy harvested over the cruise (Wh)
    pub harvest_energy_wh: f64,
    /// `eta_system * sic_efficiency_gain`, not bounded by 1
    pub effective_efficiency: f64,
    pub usable_energy_wh: f64,
    /// Unbounded range (m)
    pub range_m: f64,
    /// Range in km, clamped to `[0, MAX_RANGE_KM]`
    pub range_km: f64,
}

impl RangeBreakdown {
    /// True when the SiC gain pushed the combined efficiency above 100%.
    ///
    /// The model keeps such trials as they are; this is a known artifact of
    /// treating the gain as a plain multiplier.
    #[must_use]
    pub fn efficiency_exceeds_unity(&self) -> bool {
        self.effective_efficiency > 1.0
    }

    /// Whether the clamp changed the raw range
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        let raw_km = self.range_m / 1000.0;
        raw_km < 0.0 || raw_km > MAX_RANGE_KM
    }
}

/// `g * l_over_d * sfc_eq * m_total_kg`
#[inline]
#[must_use]
pub fn breguet_denominator(p: &ParameterSet) -> f64 {
    p.g * p.l_over_d * p.sfc_eq * p.m_total_kg
}

/// Evaluate the model and keep every intermediate term.
///
/// A zero denominator is not guarded here; `ParameterSet::validate` is the
/// place that rejects it.
#[must_use]
pub fn range_breakdown(p: &ParameterSet) -> RangeBreakdown {
    let pack_energy_wh = p.epack_wh_per_kg * p.m_batt_kg;
    let harvest_energy_wh = p.harvest_kw * 1000.0 * p.cruise_hours;
    let effective_efficiency = p.eta_system * p.sic_efficiency_gain;
    let usable_energy_wh = effective_efficiency * (pack_energy_wh + harvest_energy_wh);
    let range_m = usable_energy_wh / breguet_denominator(p);
    let range_km = (range_m / 1000.0).clamp(0.0, MAX_RANGE_KM);

    RangeBreakdown {
        pack_energy_wh,
        harvest_energy_wh,
        effective_efficiency,
        usable_energy_wh,
        range_m,
        range_km,
    }
}

/// Range in km for one parameter set
#[inline]
#[must_use]
pub fn range_km(p: &ParameterSet) -> f64 {
    range_breakdown(p).range_km
}
