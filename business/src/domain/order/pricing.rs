use rust_decimal::{Decimal, RoundingStrategy};

/// Campus sales tax applied to every order.
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Subtotal, tax and charged total for a priced set of lines.
///
/// `total` is rounded to cents; `subtotal` and `tax` keep full precision so
/// display layers can choose their own formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

pub fn line_total(price: Decimal, quantity: u32) -> Decimal {
    price * Decimal::from(quantity)
}

/// Applies the tax rate and rounds the charged total to cents, half-cent
/// amounts rounding away from zero.
pub fn breakdown(subtotal: Decimal) -> PriceBreakdown {
    let tax = subtotal * TAX_RATE;
    let total =
        (subtotal + tax).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    PriceBreakdown {
        subtotal,
        tax,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compute_line_total_from_price_and_quantity() {
        assert_eq!(line_total(Decimal::new(475, 2), 2), Decimal::new(950, 2));
    }

    #[test]
    fn should_apply_eight_percent_tax() {
        let pricing = breakdown(Decimal::new(1000, 2));
        assert_eq!(pricing.subtotal, Decimal::new(1000, 2));
        assert_eq!(pricing.tax, Decimal::new(800, 4));
        assert_eq!(pricing.total, Decimal::new(1080, 2));
    }

    #[test]
    fn should_round_half_cent_totals_away_from_zero() {
        // 4.375 * 1.08 = 4.725, which lands exactly on a half cent.
        let pricing = breakdown(Decimal::new(4375, 3));
        assert_eq!(pricing.total, Decimal::new(473, 2));
    }

    #[test]
    fn should_round_ordinary_totals_to_cents() {
        // 3.95 * 1.08 = 4.266
        let pricing = breakdown(Decimal::new(395, 2));
        assert_eq!(pricing.total, Decimal::new(427, 2));
    }

    #[test]
    fn should_keep_zero_subtotal_at_zero() {
        let pricing = breakdown(Decimal::ZERO);
        assert_eq!(pricing.total, Decimal::ZERO);
    }
}
