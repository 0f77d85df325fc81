//! Parallel batch pricing.
//!
//! Bonds are immutable and the solver keeps no state, so independent
//! instruments are priced on the rayon pool without coordination. Results
//! come back in input order, one `Result` per instrument.

use log::debug;
use rayon::prelude::*;

use fixedrate_core::types::Date;

use crate::error::BondResult;
use crate::instruments::CouponBond;

/// Prices every bond at `valuation` (each bond's issue date when `None`).
pub fn price_all(bonds: &[CouponBond], valuation: Option<Date>) -> Vec<BondResult<f64>> {
    let results: Vec<_> = bonds.par_iter().map(|bond| bond.price(valuation)).collect();
    debug!("batch priced {} bonds ({} failed)", results.len(), count_failures(&results));
    results
}

/// Solves the yield to maturity of each `(bond, observed_price)` pair.
pub fn yields_to_maturity(
    quotes: &[(CouponBond, f64)],
    valuation: Option<Date>,
) -> Vec<BondResult<f64>> {
    let results: Vec<_> = quotes
        .par_iter()
        .map(|(bond, price)| bond.yield_to_maturity(Some(*price), valuation))
        .collect();
    debug!(
        "batch solved {} yields ({} failed)",
        results.len(),
        count_failures(&results)
    );
    results
}

fn count_failures<T>(results: &[BondResult<T>]) -> usize {
    results.iter().filter(|result| result.is_err()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BondError;
    use approx::assert_relative_eq;

    fn bond(years: i32, rate: f64) -> CouponBond {
        let issue = Date::from_ymd(2024, 1, 1).unwrap();
        CouponBond::builder()
            .principal(100.0)
            .issue_date(issue)
            .maturity_date(issue.add_years(years).unwrap())
            .rate(rate)
            .build()
            .unwrap()
    }

    #[test]
    fn test_price_all_matches_sequential() {
        let bonds: Vec<_> = (1..=20).map(|i| bond(i % 7 + 1, 0.01 * f64::from(i))).collect();
        let parallel = price_all(&bonds, None);

        assert_eq!(parallel.len(), bonds.len());
        for (bond, result) in bonds.iter().zip(&parallel) {
            assert_eq!(result.as_ref().unwrap(), &bond.price(None).unwrap());
        }
    }

    #[test]
    fn test_yields_round_trip_in_order() {
        let quotes: Vec<_> = (1..=12)
            .map(|i| {
                let b = bond(5, 0.005 * f64::from(i));
                let price = b.price(None).unwrap();
                (b, price)
            })
            .collect();

        let yields = yields_to_maturity(&quotes, None);
        for ((bond, _), ytm) in quotes.iter().zip(yields) {
            assert_relative_eq!(ytm.unwrap(), bond.nominal_rate() / 2.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_failures_stay_per_instrument() {
        let bonds = vec![bond(2, 0.04), bond(3, 0.05)];
        let after_first = Date::from_ymd(2026, 6, 1).unwrap();

        let results = price_all(&bonds, Some(after_first));
        assert!(matches!(results[0], Err(BondError::NoFutureCashflows { .. })));
        assert!(results[1].is_ok());
    }
}
