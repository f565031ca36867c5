//! Energy unit conversions.
//!
//! Scenario datasets report primary energy in exajoules (EJ). Costs are
//! priced per megawatt-hour and coal output is quoted in tonnes of coal.

/// Joules per megawatt-hour.
pub const JOULES_PER_MWH: f64 = 3600.0 * 1e6;

/// Gigajoules per tonne of coal equivalent.
pub const GJ_PER_TONNE_COAL: f64 = 29.3076;

/// Convert exajoules to megawatt-hours.
///
/// ```
/// use carbon_core::units::ej_to_mwh;
///
/// assert!((ej_to_mwh(1.0) - 2.777_777_777_777_778e8).abs() < 1.0);
/// ```
#[inline]
pub fn ej_to_mwh(ej: f64) -> f64 {
    ej * 1e18 / 3600.0 / 1e6
}

/// Convert exajoules to million tonnes of coal equivalent.
///
/// ```
/// use carbon_core::units::ej_to_mt_coal;
///
/// assert!((ej_to_mt_coal(29.3076) - 1000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn ej_to_mt_coal(ej: f64) -> f64 {
    ej * 1e9 / GJ_PER_TONNE_COAL / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ej_to_mwh_matches_joule_definition() {
        assert_relative_eq!(ej_to_mwh(1.0), 1e18 / JOULES_PER_MWH, max_relative = 1e-15);
    }

    #[test]
    fn test_ej_to_mwh_is_linear() {
        assert_relative_eq!(ej_to_mwh(2.5), 2.5 * ej_to_mwh(1.0), max_relative = 1e-15);
        assert_eq!(ej_to_mwh(0.0), 0.0);
        assert!(ej_to_mwh(-1.0) < 0.0);
    }

    #[test]
    fn test_ej_to_mt_coal() {
        // 1 EJ = 1e9 GJ, / 29.3076 GJ per tonne = 34.12 Mt
        assert_relative_eq!(ej_to_mt_coal(1.0), 34.120_842_375_356_56, max_relative = 1e-12);
    }
}
