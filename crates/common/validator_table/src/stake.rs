use alloy_primitives::U256;
use rust_decimal::Decimal;

/// Number of decimal places kept in a stake share.
pub const PERCENT_SCALE: u32 = 6;

/// Share of `total` held by `stake`, in percent.
///
/// The ratio is taken on 256-bit integers scaled by `10^PERCENT_SCALE` before
/// dividing, so amounts beyond the range a float represents exactly keep their
/// precision. The result is truncated to [PERCENT_SCALE] places and is not
/// clamped to `[0, 100]`. A share too large for that many places keeps fewer;
/// one too large for a [Decimal] at all saturates at [Decimal::MAX].
///
/// A zero `total` yields `0`.
pub fn stake_percent(stake: U256, total: U256) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }

    (0..=PERCENT_SCALE)
        .rev()
        .find_map(|scale| percent_with_scale(stake, total, scale))
        .unwrap_or(Decimal::MAX)
}

fn percent_with_scale(stake: U256, total: U256, scale: u32) -> Option<Decimal> {
    let multiplier = U256::from(100 * 10u64.pow(scale));
    let scaled = stake.checked_mul(multiplier)? / total;
    let mantissa = i128::try_from(u128::try_from(scaled).ok()?).ok()?;

    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}

/// Two-decimal display form, e.g. `70.00%`.
pub fn format_percent(percent: Decimal) -> String {
    let mut rounded = percent.round_dp(2);
    rounded.rescale(2);
    format!("{rounded}%")
}
