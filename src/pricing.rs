//! Constant-product pricing with the provider fee taken from the input amount.

use crate::{BalanceOf, Config, ConfigHelper, Error, Pallet};
use frame_support::{ensure, traits::Get};
use sp_runtime::traits::{AtLeast32BitUnsigned, One, Zero};

/// `floor(a * b / c)`, `None` on overflow or when `c` is zero.
pub fn multiply_divide_floor<B: AtLeast32BitUnsigned + Copy>(a: B, b: B, c: B) -> Option<B> {
    a.checked_mul(&b)?.checked_div(&c)
}

/// `ceil(a * b / c)`, `None` on overflow or when `c` is zero.
pub fn multiply_divide_ceil<B: AtLeast32BitUnsigned + Copy>(a: B, b: B, c: B) -> Option<B> {
    let product = a.checked_mul(&b)?;
    let quotient = product.checked_div(&c)?;
    if (product % c).is_zero() {
        Some(quotient)
    } else {
        quotient.checked_add(&B::one())
    }
}

impl<T: Config> Pallet<T> {
    /// Amount received when selling exactly `input_amount` into a pool holding
    /// `input_reserve` and `output_reserve`, rounded down.
    pub fn quote(
        input_amount: BalanceOf<T>,
        input_reserve: BalanceOf<T>,
        output_reserve: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, Error<T>> {
        ensure!(!input_amount.is_zero(), Error::<T>::InvalidAmount);
        ensure!(
            !input_reserve.is_zero() && !output_reserve.is_zero(),
            Error::<T>::InsufficientLiquidity
        );
        let input_amount_with_fee = input_amount
            .checked_mul(&T::net_amount_numerator())
            .ok_or(Error::<T>::ArithmeticOverflow)?;
        let numerator = input_amount_with_fee
            .checked_mul(&output_reserve)
            .ok_or(Error::<T>::ArithmeticOverflow)?;
        let denominator = input_reserve
            .checked_mul(&T::ProviderFeeDenominator::get())
            .ok_or(Error::<T>::ArithmeticOverflow)?
            .checked_add(&input_amount_with_fee)
            .ok_or(Error::<T>::ArithmeticOverflow)?;
        numerator
            .checked_div(&denominator)
            .ok_or(Error::<T>::ArithmeticOverflow)
    }

    /// Amount that has to be sold to receive exactly `output_amount`, rounded up
    /// (one unit above the floored result).
    pub fn quote_output(
        output_amount: BalanceOf<T>,
        input_reserve: BalanceOf<T>,
        output_reserve: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, Error<T>> {
        ensure!(!output_amount.is_zero(), Error::<T>::InvalidAmount);
        ensure!(
            !input_reserve.is_zero() && output_amount < output_reserve,
            Error::<T>::InsufficientLiquidity
        );
        let numerator = input_reserve
            .checked_mul(&output_amount)
            .ok_or(Error::<T>::ArithmeticOverflow)?
            .checked_mul(&T::ProviderFeeDenominator::get())
            .ok_or(Error::<T>::ArithmeticOverflow)?;
        let denominator = (output_reserve - output_amount)
            .checked_mul(&T::net_amount_numerator())
            .ok_or(Error::<T>::ArithmeticOverflow)?;
        numerator
            .checked_div(&denominator)
            .ok_or(Error::<T>::ArithmeticOverflow)?
            .checked_add(&One::one())
            .ok_or(Error::<T>::ArithmeticOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::*;
    use proptest::prelude::*;

    #[test]
    fn quote_applies_provider_fee() {
        assert_eq!(Dex::quote(1, 10, 100).ok(), Some(9));
        // Without the fee this would be exactly 1_000.
        assert_eq!(Dex::quote(1_000, 1_000_000, 1_000_000).ok(), Some(996));
        assert_eq!(Dex::quote(1_000_000, INIT_LIQUIDITY, INIT_LIQUIDITY).ok(), Some(996_999));
    }

    #[test]
    fn quote_rejects_zero_input_and_empty_reserves() {
        assert!(matches!(Dex::quote(0, 10, 100), Err(Error::<Test>::InvalidAmount)));
        assert!(matches!(Dex::quote(1, 0, 100), Err(Error::<Test>::InsufficientLiquidity)));
        assert!(matches!(Dex::quote(1, 10, 0), Err(Error::<Test>::InsufficientLiquidity)));
    }

    #[test]
    fn quote_reports_overflow() {
        assert!(matches!(Dex::quote(u128::MAX, 1, 1), Err(Error::<Test>::ArithmeticOverflow)));
        assert!(matches!(Dex::quote(1, u128::MAX, 1), Err(Error::<Test>::ArithmeticOverflow)));
        assert!(matches!(Dex::quote_output(1, u128::MAX, 2), Err(Error::<Test>::ArithmeticOverflow)));
    }

    #[test]
    fn quote_output_rounds_up() {
        assert_eq!(Dex::quote_output(1_000_000, INIT_LIQUIDITY, INIT_LIQUIDITY).ok(), Some(1_003_011));
        // 10 * 9 * 1000 / (91 * 997) = 0.99.., plus one
        assert_eq!(Dex::quote_output(9, 10, 100).ok(), Some(1));
        assert!(matches!(Dex::quote_output(100, 10, 100), Err(Error::<Test>::InsufficientLiquidity)));
        assert!(matches!(Dex::quote_output(0, 10, 100), Err(Error::<Test>::InvalidAmount)));
    }

    #[test]
    fn multiply_divide_rounding() {
        assert_eq!(multiply_divide_floor(3u128, 91, 11), Some(24));
        assert_eq!(multiply_divide_ceil(3u128, 91, 11), Some(25));
        assert_eq!(multiply_divide_ceil(5u128, 100, 10), Some(50));
        assert_eq!(multiply_divide_floor(1u128, 1, 0), None);
        assert_eq!(multiply_divide_ceil(u128::MAX, 2, 1), None);
    }

    proptest! {
        #[test]
        fn quote_never_decreases_product(
            input_reserve in 1u128..1_000_000_000_000,
            output_reserve in 1u128..1_000_000_000_000,
            input_amount in 1u128..1_000_000_000_000,
        ) {
            let output_amount = Dex::quote(input_amount, input_reserve, output_reserve).unwrap();
            prop_assert!(output_amount < output_reserve);
            prop_assert!(
                (input_reserve + input_amount) * (output_reserve - output_amount)
                    >= input_reserve * output_reserve
            );
        }

        #[test]
        fn quote_output_buys_at_least_requested(
            input_reserve in 1u128..1_000_000_000_000,
            output_reserve in 2u128..1_000_000_000_000,
            output_fraction in 1u128..1_000,
        ) {
            let output_amount = (output_reserve * output_fraction / 1_000).max(1);
            prop_assume!(output_amount < output_reserve);
            let input_amount = Dex::quote_output(output_amount, input_reserve, output_reserve).unwrap();
            prop_assert!(Dex::quote(input_amount, input_reserve, output_reserve).unwrap() >= output_amount);
        }
    }
}
