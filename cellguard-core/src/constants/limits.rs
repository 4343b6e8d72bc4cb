//! Default Battery Operating Limits
//!
//! Hard bounds for a typical Li-ion cell under charge. Every bound is
//! inclusive: a reading equal to a bound is acceptable.

// ===== TEMPERATURE =====

/// Minimum charging temperature (°C).
///
/// Charging below freezing plates lithium on the anode.
pub const TEMP_MIN_C: f32 = 0.0;

/// Maximum charging temperature (°C).
///
/// Above this the electrolyte degrades and thermal runaway risk climbs.
pub const TEMP_MAX_C: f32 = 45.0;

const _: () = assert!(TEMP_MIN_C < TEMP_MAX_C);

// ===== STATE OF CHARGE =====

/// Minimum state of charge (%).
pub const SOC_MIN_PCT: f32 = 20.0;

/// Maximum state of charge (%).
///
/// Holding a cell above 80% accelerates calendar ageing.
pub const SOC_MAX_PCT: f32 = 80.0;

const _: () = assert!(SOC_MIN_PCT < SOC_MAX_PCT);
const _: () = assert!(SOC_MAX_PCT <= 100.0);

// ===== CHARGE RATE =====

/// Charge rate floor (dimensionless, fraction of rated current).
///
/// Not a physical limit so much as the domain boundary: a negative charge
/// rate means the reading is garbage or the cell is discharging.
pub const CHARGE_RATE_MIN: f32 = 0.0;

/// Maximum charge rate (dimensionless, fraction of rated current).
pub const CHARGE_RATE_MAX: f32 = 0.8;

const _: () = assert!(CHARGE_RATE_MIN < CHARGE_RATE_MAX);

// ===== WARNING TOLERANCE =====

/// Default warning margin as a fraction of a parameter's maximum.
///
/// 0.05 gives 2.25 °C for temperature, 4 % for SoC and 0.04 for charge rate.
/// The margin is applied inward from both bounds.
pub const WARNING_MARGIN_FRACTION: f32 = 0.05;

const _: () = assert!(WARNING_MARGIN_FRACTION >= 0.0);
