use crate::{
    pricing::{multiply_divide_ceil, multiply_divide_floor},
    AccountIdOf, AssetBalanceOf, BalanceOf, Config, ConfigHelper, Error, Event, Pallet, LOG_TARGET,
};
use frame_support::{ensure, pallet_prelude::DispatchError, storage::with_storage_layer};
use sp_runtime::traits::Zero;

impl<T: Config> Pallet<T> {
    /// Deposit `currency_amount` together with the matching amount of tokens (at most
    /// `max_tokens`) and mint liquidity tokens to `provider`.
    ///
    /// An empty exchange takes exactly `max_tokens` and mints `currency_amount` liquidity tokens.
    /// Otherwise the token amount follows the reserve ratio rounded up, and the minted amount
    /// is proportional to the currency contribution rounded down.
    ///
    /// Returns the amount of liquidity tokens minted. Nothing is changed on failure.
    pub fn do_add_liquidity(
        provider: &AccountIdOf<T>,
        currency_amount: BalanceOf<T>,
        max_tokens: AssetBalanceOf<T>,
    ) -> Result<AssetBalanceOf<T>, DispatchError> {
        with_storage_layer(|| -> Result<AssetBalanceOf<T>, DispatchError> {
            // -------------------------- Validation part --------------------------
            ensure!(!currency_amount.is_zero(), Error::<T>::InvalidAmount);
            ensure!(!max_tokens.is_zero(), Error::<T>::InvalidAmount);
            let exchange = Self::get_exchange()?;

            // ----------------------- Token & liquidity amounts -------------------
            let total_liquidity = Self::lp_total_supply_of(&exchange);
            let (token_amount, liquidity_minted) = if total_liquidity.is_zero() {
                (max_tokens, T::currency_to_asset(currency_amount))
            } else {
                let (currency_reserve, token_reserve) = Self::reserves(&exchange);
                let currency_reserve = T::currency_to_asset(currency_reserve);
                ensure!(!currency_reserve.is_zero(), Error::<T>::InsufficientLiquidity);
                let currency_amount = T::currency_to_asset(currency_amount);
                let token_amount =
                    multiply_divide_ceil(currency_amount, token_reserve, currency_reserve)
                        .ok_or(Error::<T>::ArithmeticOverflow)?;
                let liquidity_minted =
                    multiply_divide_floor(total_liquidity, currency_amount, currency_reserve)
                        .ok_or(Error::<T>::ArithmeticOverflow)?;
                ensure!(token_amount <= max_tokens, Error::<T>::RatioMismatch);
                (token_amount, liquidity_minted)
            };
            ensure!(!liquidity_minted.is_zero(), Error::<T>::InvalidAmount);

            // ------------------------- Balance changes ---------------------------
            Self::receive_native(provider, currency_amount)?;
            Self::pull_tokens(&exchange, provider, token_amount)?;
            Self::mint_shares(&exchange, provider, liquidity_minted)?;

            log::debug!(
                target: LOG_TARGET,
                "liquidity added by {:?}: currency {:?}, tokens {:?}, minted {:?}",
                provider,
                currency_amount,
                token_amount,
                liquidity_minted,
            );
            Self::deposit_event(Event::LiquidityAdded(
                provider.clone(),
                currency_amount,
                token_amount,
                liquidity_minted,
            ));
            Ok(liquidity_minted)
        })
    }

    /// Burn `liquidity_amount` liquidity tokens of `provider` and pay out the proportional
    /// share of both reserves, rounded down.
    ///
    /// Returns the withdrawn `(currency_amount, token_amount)`. Nothing is changed on failure.
    pub fn do_remove_liquidity(
        provider: &AccountIdOf<T>,
        liquidity_amount: AssetBalanceOf<T>,
    ) -> Result<(BalanceOf<T>, AssetBalanceOf<T>), DispatchError> {
        with_storage_layer(|| -> Result<(BalanceOf<T>, AssetBalanceOf<T>), DispatchError> {
            ensure!(!liquidity_amount.is_zero(), Error::<T>::InvalidAmount);
            let exchange = Self::get_exchange()?;

            let total_liquidity = Self::lp_total_supply_of(&exchange);
            Self::burn_shares(&exchange, provider, liquidity_amount)?;

            let (currency_reserve, token_reserve) = Self::reserves(&exchange);
            let currency_amount = multiply_divide_floor(
                T::currency_to_asset(currency_reserve),
                liquidity_amount,
                total_liquidity,
            )
            .ok_or(Error::<T>::ArithmeticOverflow)?;
            let currency_amount = T::asset_to_currency(currency_amount);
            let token_amount =
                multiply_divide_floor(token_reserve, liquidity_amount, total_liquidity)
                    .ok_or(Error::<T>::ArithmeticOverflow)?;

            Self::send_tokens(&exchange, provider, token_amount)?;
            Self::send_native(provider, currency_amount)?;

            log::debug!(
                target: LOG_TARGET,
                "liquidity removed by {:?}: currency {:?}, tokens {:?}, burned {:?}",
                provider,
                currency_amount,
                token_amount,
                liquidity_amount,
            );
            Self::deposit_event(Event::LiquidityRemoved(
                provider.clone(),
                currency_amount,
                token_amount,
                liquidity_amount,
            ));
            Ok((currency_amount, token_amount))
        })
    }
}
