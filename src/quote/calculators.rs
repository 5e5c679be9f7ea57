//! Core quote calculation functions.
//!
//! Pure functions for quote math - no database access.
//! Everything the storefront price calculator shows is derived here.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

/// Thickness options with their material cost multipliers.
pub const THICKNESS_TABLE: [(&str, Decimal); 4] = [
    ("15mm", dec!(0.8)),
    ("20mm", dec!(1.0)),
    ("30mm", dec!(1.4)),
    ("40mm", dec!(1.8)),
];

/// Finish options with their per-area surcharges.
pub const FINISH_TABLE: [(&str, Decimal); 4] = [
    ("polished", dec!(0)),
    ("honed", dec!(10)),
    ("brushed", dec!(15)),
    ("flamed", dec!(20)),
];

/// Edge treatment options with their per-perimeter-length surcharges.
pub const EDGE_TABLE: [(&str, Decimal); 4] = [
    ("straight", dec!(0)),
    ("beveled", dec!(8)),
    ("bullnose", dec!(12)),
    ("ogee", dec!(18)),
];

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use stonehaven_web::quote::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Look up the material cost multiplier for a thickness key.
///
/// Unknown keys fall back to a multiplier of 1.0 so a stale or
/// mistyped selection never breaks the calculator.
pub fn thickness_multiplier(key: &str) -> Decimal {
    THICKNESS_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, m)| *m)
        .unwrap_or(Decimal::ONE)
}

/// Look up the per-area surcharge for a finish key. Unknown keys cost 0.
pub fn finish_surcharge(key: &str) -> Decimal {
    FINISH_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, s)| *s)
        .unwrap_or(Decimal::ZERO)
}

/// Look up the per-perimeter-length surcharge for an edge key. Unknown keys cost 0.
pub fn edge_surcharge(key: &str) -> Decimal {
    EDGE_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, s)| *s)
        .unwrap_or(Decimal::ZERO)
}

/// Rate constants for quote computation.
///
/// These are business constants, carried as a value so callers can
/// supply overrides; `Default` reproduces the storefront's live rates.
#[derive(Debug, Clone)]
pub struct RateTable {
    /// Fabrication labor per unit area
    pub labor_per_area: Decimal,
    /// Installation per unit area (applied only when installation is selected)
    pub install_per_area: Decimal,
    /// Flat delivery fee (applied only when delivery is selected)
    pub delivery_flat: Decimal,
    /// Tax as a fraction of the subtotal
    pub tax_rate: Decimal,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            labor_per_area: dec!(25),
            install_per_area: dec!(35),
            delivery_flat: dec!(150),
            tax_rate: dec!(0.10),
        }
    }
}

/// Option selections for a quote.
///
/// Keys are the storefront selection values; unknown keys degrade to
/// neutral defaults rather than failing.
#[derive(Debug, Clone)]
pub struct QuoteOptions {
    pub thickness: String,
    pub finish: String,
    pub edge: String,
    pub installation: bool,
    pub delivery: bool,
}

impl Default for QuoteOptions {
    /// The storefront calculator's initial selections.
    fn default() -> Self {
        Self {
            thickness: "20mm".to_string(),
            finish: "polished".to_string(),
            edge: "straight".to_string(),
            installation: false,
            delivery: true,
        }
    }
}

/// Itemized quote breakdown.
///
/// Carries the six raw cost components; grouping for display (edge into
/// material, delivery into installation) is a presentation concern and
/// lives in the response layer.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBreakdown {
    pub area: Decimal,
    pub perimeter: Decimal,
    pub material_cost: Decimal,
    pub finish_cost: Decimal,
    pub labor_cost: Decimal,
    pub edge_cost: Decimal,
    pub installation_cost: Decimal,
    pub delivery_cost: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Compute an itemized quote for a slab project.
///
/// Returns `None` when either dimension is non-positive; missing input
/// suppresses the computation rather than raising an error, matching the
/// calculator's behavior of showing no breakdown until both dimensions
/// are entered.
///
/// # Arguments
/// * `base_price_per_area` - catalog unit price for the selected stone
/// * `length`, `width` - project dimensions in meters
/// * `options` - thickness/finish/edge selections and service toggles
/// * `rates` - rate constants (use `RateTable::default()` for live rates)
pub fn compute_quote(
    base_price_per_area: Decimal,
    length: Decimal,
    width: Decimal,
    options: &QuoteOptions,
    rates: &RateTable,
) -> Option<QuoteBreakdown> {
    if length <= Decimal::ZERO || width <= Decimal::ZERO {
        return None;
    }

    let area = length * width;
    let perimeter = dec!(2) * (length + width);

    let material_cost = area * base_price_per_area * thickness_multiplier(&options.thickness);
    let finish_cost = area * finish_surcharge(&options.finish);
    let labor_cost = area * rates.labor_per_area;
    let edge_cost = perimeter * edge_surcharge(&options.edge);

    let installation_cost = if options.installation {
        area * rates.install_per_area
    } else {
        Decimal::ZERO
    };
    let delivery_cost = if options.delivery {
        rates.delivery_flat
    } else {
        Decimal::ZERO
    };

    let subtotal = material_cost
        + finish_cost
        + labor_cost
        + edge_cost
        + installation_cost
        + delivery_cost;
    let tax = subtotal * rates.tax_rate;
    let total = subtotal + tax;

    Some(QuoteBreakdown {
        area,
        perimeter,
        material_cost,
        finish_cost,
        labor_cost,
        edge_cost,
        installation_cost,
        delivery_cost,
        subtotal,
        tax,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn options(thickness: &str, finish: &str, edge: &str, installation: bool, delivery: bool) -> QuoteOptions {
        QuoteOptions {
            thickness: thickness.to_string(),
            finish: finish.to_string(),
            edge: edge.to_string(),
            installation,
            delivery,
        }
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        // Banker's rounding: 0.5 rounds to nearest even
        assert_eq!(round_money(dec!(2.5), 0), dec!(2)); // rounds down to even
        assert_eq!(round_money(dec!(3.5), 0), dec!(4)); // rounds up to even
        assert_eq!(round_money(dec!(4.5), 0), dec!(4)); // rounds down to even
        assert_eq!(round_money(dec!(5.5), 0), dec!(6)); // rounds up to even
    }

    #[test]
    fn test_round_money_normal_rounding() {
        // Non-halfway values round normally
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    #[test]
    fn test_round_money_negative() {
        assert_eq!(round_money(dec!(-2.5), 0), dec!(-2)); // rounds to even
        assert_eq!(round_money(dec!(-1.234), 2), dec!(-1.23));
    }

    // ==================== option table tests ====================

    #[test]
    fn test_thickness_multipliers() {
        assert_eq!(thickness_multiplier("15mm"), dec!(0.8));
        assert_eq!(thickness_multiplier("20mm"), dec!(1.0));
        assert_eq!(thickness_multiplier("30mm"), dec!(1.4));
        assert_eq!(thickness_multiplier("40mm"), dec!(1.8));
    }

    #[test]
    fn test_unknown_thickness_falls_back_to_one() {
        assert_eq!(thickness_multiplier("25mm"), dec!(1));
        assert_eq!(thickness_multiplier(""), dec!(1));
    }

    #[test]
    fn test_finish_surcharges() {
        assert_eq!(finish_surcharge("polished"), dec!(0));
        assert_eq!(finish_surcharge("honed"), dec!(10));
        assert_eq!(finish_surcharge("brushed"), dec!(15));
        assert_eq!(finish_surcharge("flamed"), dec!(20));
        assert_eq!(finish_surcharge("leathered"), dec!(0)); // unknown
    }

    #[test]
    fn test_edge_surcharges() {
        assert_eq!(edge_surcharge("straight"), dec!(0));
        assert_eq!(edge_surcharge("beveled"), dec!(8));
        assert_eq!(edge_surcharge("bullnose"), dec!(12));
        assert_eq!(edge_surcharge("ogee"), dec!(18));
        assert_eq!(edge_surcharge("waterfall"), dec!(0)); // unknown
    }

    // ==================== compute_quote tests ====================

    #[test]
    fn test_quote_baseline_with_installation_and_delivery() {
        // 3m x 2m of an 85/area stone, 20mm, no surcharges, both services
        let breakdown = compute_quote(
            dec!(85),
            dec!(3),
            dec!(2),
            &options("20mm", "polished", "straight", true, true),
            &RateTable::default(),
        )
        .unwrap();

        assert_eq!(breakdown.area, dec!(6));
        assert_eq!(breakdown.perimeter, dec!(10));
        assert_eq!(breakdown.material_cost, dec!(510)); // 6 * 85 * 1.0
        assert_eq!(breakdown.finish_cost, dec!(0));
        assert_eq!(breakdown.labor_cost, dec!(150)); // 6 * 25
        assert_eq!(breakdown.edge_cost, dec!(0));
        assert_eq!(breakdown.installation_cost, dec!(210)); // 6 * 35
        assert_eq!(breakdown.delivery_cost, dec!(150));
        assert_eq!(breakdown.subtotal, dec!(1020));
        assert_eq!(breakdown.tax, dec!(102));
        assert_eq!(breakdown.total, dec!(1122));
    }

    #[test]
    fn test_quote_with_finish_and_edge_surcharges() {
        let breakdown = compute_quote(
            dec!(85),
            dec!(3),
            dec!(2),
            &options("20mm", "flamed", "ogee", true, true),
            &RateTable::default(),
        )
        .unwrap();

        assert_eq!(breakdown.finish_cost, dec!(120)); // 6 * 20
        assert_eq!(breakdown.edge_cost, dec!(180)); // 10 * 18
        assert_eq!(breakdown.subtotal, dec!(1320));
        assert_eq!(breakdown.tax, dec!(132));
        assert_eq!(breakdown.total, dec!(1452));
    }

    #[test]
    fn test_quote_without_services() {
        let breakdown = compute_quote(
            dec!(85),
            dec!(3),
            dec!(2),
            &options("20mm", "polished", "straight", false, false),
            &RateTable::default(),
        )
        .unwrap();

        assert_eq!(breakdown.installation_cost, dec!(0));
        assert_eq!(breakdown.delivery_cost, dec!(0));
        assert_eq!(breakdown.subtotal, dec!(660)); // 510 + 150
        assert_eq!(breakdown.tax, dec!(66));
        assert_eq!(breakdown.total, dec!(726));
    }

    #[test]
    fn test_quote_rejects_non_positive_dimensions() {
        let opts = QuoteOptions::default();
        let rates = RateTable::default();

        assert!(compute_quote(dec!(85), dec!(0), dec!(2), &opts, &rates).is_none());
        assert!(compute_quote(dec!(85), dec!(3), dec!(0), &opts, &rates).is_none());
        assert!(compute_quote(dec!(85), dec!(-1), dec!(2), &opts, &rates).is_none());
        assert!(compute_quote(dec!(85), dec!(3), dec!(-0.5), &opts, &rates).is_none());
    }

    #[test]
    fn test_quote_area_is_exact_product() {
        let breakdown = compute_quote(
            dec!(100),
            dec!(1.25),
            dec!(0.8),
            &QuoteOptions::default(),
            &RateTable::default(),
        )
        .unwrap();
        assert_eq!(breakdown.area, dec!(1));
    }

    #[test]
    fn test_quote_is_idempotent() {
        let opts = options("30mm", "honed", "beveled", true, false);
        let rates = RateTable::default();
        let a = compute_quote(dec!(92.5), dec!(2.4), dec!(1.1), &opts, &rates).unwrap();
        let b = compute_quote(dec!(92.5), dec!(2.4), dec!(1.1), &opts, &rates).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_material_cost_scales_with_thickness_multiplier() {
        let rates = RateTable::default();
        let base = compute_quote(
            dec!(85),
            dec!(3),
            dec!(2),
            &options("20mm", "polished", "straight", false, false),
            &rates,
        )
        .unwrap();

        for (key, multiplier) in THICKNESS_TABLE {
            let quoted = compute_quote(
                dec!(85),
                dec!(3),
                dec!(2),
                &options(key, "polished", "straight", false, false),
                &rates,
            )
            .unwrap();
            assert_eq!(quoted.material_cost, base.material_cost * multiplier);
        }
    }

    #[test]
    fn test_unknown_option_keys_use_neutral_defaults() {
        // Same numbers as the baseline: multiplier 1.0, surcharges 0
        let breakdown = compute_quote(
            dec!(85),
            dec!(3),
            dec!(2),
            &options("unknown", "unknown", "unknown", true, true),
            &RateTable::default(),
        )
        .unwrap();

        assert_eq!(breakdown.material_cost, dec!(510));
        assert_eq!(breakdown.finish_cost, dec!(0));
        assert_eq!(breakdown.edge_cost, dec!(0));
        assert_eq!(breakdown.total, dec!(1122));
    }

    #[test]
    fn test_tax_and_total_invariants() {
        let rates = RateTable::default();
        let breakdown = compute_quote(
            dec!(119.99),
            dec!(2.35),
            dec!(1.42),
            &options("40mm", "brushed", "bullnose", true, true),
            &rates,
        )
        .unwrap();

        assert_eq!(breakdown.tax, breakdown.subtotal * rates.tax_rate);
        assert_eq!(breakdown.total, breakdown.subtotal + breakdown.tax);
        assert_eq!(
            breakdown.subtotal,
            breakdown.material_cost
                + breakdown.finish_cost
                + breakdown.labor_cost
                + breakdown.edge_cost
                + breakdown.installation_cost
                + breakdown.delivery_cost
        );
    }

    #[test]
    fn test_custom_rate_table() {
        let rates = RateTable {
            labor_per_area: dec!(30),
            install_per_area: dec!(40),
            delivery_flat: dec!(200),
            tax_rate: dec!(0.08),
        };
        let breakdown = compute_quote(
            dec!(85),
            dec!(3),
            dec!(2),
            &options("20mm", "polished", "straight", true, true),
            &rates,
        )
        .unwrap();

        assert_eq!(breakdown.labor_cost, dec!(180)); // 6 * 30
        assert_eq!(breakdown.installation_cost, dec!(240)); // 6 * 40
        assert_eq!(breakdown.delivery_cost, dec!(200));
        assert_eq!(breakdown.subtotal, dec!(1130));
        assert_eq!(breakdown.tax, dec!(90.40));
    }
}
