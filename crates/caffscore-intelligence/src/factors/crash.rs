// ABOUTME: Crash-risk factor calculators: delta, sleep debt, sensitivity, metabolic, circadian
// ABOUTME: Declining levels and fatigue raise risk instead of lowering focus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Sleep debt at which the sleep-debt risk factor saturates (hours)
const SLEEP_DEBT_SATURATION_HOURS: f64 = 4.0;

/// Floor of the sleep-debt risk factor for a fully rested user
const SLEEP_DEBT_RISK_FLOOR: f64 = 0.3;

/// Fractional drop from the historical peak to the current level, in [0, 1]
///
/// Zero when there has been no peak.
#[must_use]
pub fn delta_factor(current_level_mg: f64, peak_level_mg: f64) -> f64 {
    if peak_level_mg <= 0.0 {
        return 0.0;
    }
    ((peak_level_mg - current_level_mg) / peak_level_mg).clamp(0.0, 1.0)
}

/// Sleep-debt risk in [0.3, 1.0], saturating at four hours of debt
#[must_use]
pub fn sleep_debt_risk_factor(sleep_debt_hours: f64) -> f64 {
    let slope = (1.0 - SLEEP_DEBT_RISK_FLOOR) / SLEEP_DEBT_SATURATION_HOURS;
    sleep_debt_hours
        .max(0.0)
        .mul_add(slope, SLEEP_DEBT_RISK_FLOOR)
        .clamp(SLEEP_DEBT_RISK_FLOOR, 1.0)
}

/// Sensitivity to a decline in [0.5, 1.0]; habituated users feel it less
#[must_use]
pub fn tolerance_sensitivity_factor(tolerance_factor: f64) -> f64 {
    tolerance_factor.mul_add(-0.5, 1.0).clamp(0.5, 1.0)
}

/// Metabolic modifier in [0.8, 1.2] from the health adjustment product
#[must_use]
pub fn metabolic_factor(health_adjustment: f64) -> f64 {
    health_adjustment.clamp(0.8, 1.2)
}

/// Circadian crash risk in [0.4, 1.0]; low-alertness hours raise risk
#[must_use]
pub fn circadian_risk_factor(circadian: f64) -> f64 {
    (1.4 - circadian).clamp(0.4, 1.0)
}
