//! Cart/order aggregate-total computation.
//!
//! Carts and orders store derived aggregates (item count, gross price,
//! discounted price, discount) alongside their line items. The computation
//! is a pure fold over the line items and lives here so the cart service can
//! re-run it after every mutation, and the order service can run it exactly
//! once at checkout.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quantity of one product at a price snapshot.
///
/// Implemented by both cart items and order items. Prices are per unit and
/// were copied from the product at add-time; they are never re-read from the
/// live product.
pub trait PricedLine {
    /// Number of units.
    fn quantity(&self) -> i32;
    /// Unit price before discount.
    fn unit_price(&self) -> Decimal;
    /// Unit price after discount.
    fn unit_discounted_price(&self) -> Decimal;
}

/// Derived aggregate totals for a collection of line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of line quantities.
    pub total_items: i32,
    /// Sum of unit price x quantity.
    pub total_price: Decimal,
    /// Sum of unit discounted price x quantity.
    pub total_discounted_price: Decimal,
    /// `total_price - total_discounted_price`.
    pub discount: Decimal,
}

impl Totals {
    /// Compute aggregates from a collection of line items.
    ///
    /// Deterministic, pure function of its input. An empty collection yields
    /// all-zero totals.
    pub fn compute<'a, L, I>(lines: I) -> Self
    where
        L: PricedLine + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        let mut totals = Self::default();
        for line in lines {
            let quantity = Decimal::from(line.quantity());
            totals.total_items += line.quantity();
            totals.total_price += line.unit_price() * quantity;
            totals.total_discounted_price += line.unit_discounted_price() * quantity;
        }
        totals.discount = totals.total_price - totals.total_discounted_price;
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        quantity: i32,
        price: Decimal,
        discounted_price: Decimal,
    }

    impl PricedLine for Line {
        fn quantity(&self) -> i32 {
            self.quantity
        }

        fn unit_price(&self) -> Decimal {
            self.price
        }

        fn unit_discounted_price(&self) -> Decimal {
            self.discounted_price
        }
    }

    fn line(quantity: i32, price: i64, discounted_price: i64) -> Line {
        Line {
            quantity,
            price: Decimal::from(price),
            discounted_price: Decimal::from(discounted_price),
        }
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        let totals = Totals::compute::<Line, _>(&[]);
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_single_line() {
        let lines = [line(2, 10, 8)];
        let totals = Totals::compute(&lines);
        assert_eq!(totals.total_items, 2);
        assert_eq!(totals.total_price, Decimal::from(20));
        assert_eq!(totals.total_discounted_price, Decimal::from(16));
        assert_eq!(totals.discount, Decimal::from(4));
    }

    #[test]
    fn test_multiple_lines() {
        let lines = [line(1, 100, 80), line(3, 5, 5), line(2, 40, 25)];
        let totals = Totals::compute(&lines);
        assert_eq!(totals.total_items, 6);
        assert_eq!(totals.total_price, Decimal::from(195));
        assert_eq!(totals.total_discounted_price, Decimal::from(145));
        assert_eq!(totals.discount, Decimal::from(50));
    }

    #[test]
    fn test_discount_identity_holds() {
        // discount == total_price - total_discounted_price for any input
        let lines = [line(4, 7, 3), line(9, 12, 11), line(1, 1, 0)];
        let totals = Totals::compute(&lines);
        assert_eq!(
            totals.discount,
            totals.total_price - totals.total_discounted_price
        );
        assert!(totals.total_price >= totals.total_discounted_price);
    }
}
