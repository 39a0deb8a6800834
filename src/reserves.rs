use crate::{AccountIdOf, AssetBalanceOf, BalanceOf, Config, ConfigHelper, ExchangeOf, Pallet};
use frame_support::traits::{fungibles::Inspect, Currency};
use sp_runtime::traits::Zero;

// Reserves are the live balances of the pallet account, never a stored copy.
impl<T: Config> Pallet<T> {
    /// Currency held by the exchange.
    pub fn native_reserve() -> BalanceOf<T> {
        <T as Config>::Currency::free_balance(&T::pallet_account())
    }

    /// Tokens held by the exchange, zero when no exchange has been created.
    pub fn token_reserve() -> AssetBalanceOf<T> {
        Self::exchange()
            .map(|exchange| Self::token_reserve_of(&exchange))
            .unwrap_or_else(Zero::zero)
    }

    pub(crate) fn token_reserve_of(exchange: &ExchangeOf<T>) -> AssetBalanceOf<T> {
        let pallet_account: AccountIdOf<T> = T::pallet_account();
        T::Assets::balance(exchange.asset_id, &pallet_account)
    }

    pub(crate) fn reserves(exchange: &ExchangeOf<T>) -> (BalanceOf<T>, AssetBalanceOf<T>) {
        (Self::native_reserve(), Self::token_reserve_of(exchange))
    }
}
