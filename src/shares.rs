//! Liquidity token ledger of the exchange.
//!
//! Liquidity tokens are a regular fungible asset owned by the pallet account. Only the
//! exchange mints and burns them, but holders may transfer them freely.

use crate::{AccountIdOf, AssetBalanceOf, Config, Error, ExchangeOf, Pallet};
use frame_support::{
    ensure,
    pallet_prelude::DispatchResult,
    traits::{
        fungibles::{Inspect, Mutate},
        tokens::{Fortitude, Precision},
    },
};
use sp_runtime::traits::Zero;

impl<T: Config> Pallet<T> {
    /// Liquidity tokens held by `account`.
    pub fn lp_balance_of(account: &AccountIdOf<T>) -> AssetBalanceOf<T> {
        Self::exchange()
            .map(|exchange| Self::lp_balance_in(&exchange, account))
            .unwrap_or_else(Zero::zero)
    }

    /// Total supply of liquidity tokens.
    pub fn lp_total_supply() -> AssetBalanceOf<T> {
        Self::exchange()
            .map(|exchange| Self::lp_total_supply_of(&exchange))
            .unwrap_or_else(Zero::zero)
    }

    pub(crate) fn lp_balance_in(
        exchange: &ExchangeOf<T>,
        account: &AccountIdOf<T>,
    ) -> AssetBalanceOf<T> {
        T::LiquidityTokens::balance(exchange.liquidity_token_id, account)
    }

    pub(crate) fn lp_total_supply_of(exchange: &ExchangeOf<T>) -> AssetBalanceOf<T> {
        T::LiquidityTokens::total_issuance(exchange.liquidity_token_id)
    }

    pub(crate) fn mint_shares(
        exchange: &ExchangeOf<T>,
        account: &AccountIdOf<T>,
        amount: AssetBalanceOf<T>,
    ) -> DispatchResult {
        ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);
        T::LiquidityTokens::mint_into(exchange.liquidity_token_id, account, amount)?;
        Ok(())
    }

    pub(crate) fn burn_shares(
        exchange: &ExchangeOf<T>,
        account: &AccountIdOf<T>,
        amount: AssetBalanceOf<T>,
    ) -> DispatchResult {
        ensure!(
            Self::lp_balance_in(exchange, account) >= amount,
            Error::<T>::InsufficientShares
        );
        T::LiquidityTokens::burn_from(
            exchange.liquidity_token_id,
            account,
            amount,
            Precision::Exact,
            Fortitude::Polite,
        )?;
        Ok(())
    }
}
