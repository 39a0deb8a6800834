use crate::{
    AccountIdOf, BalanceOf, Config, ConfigHelper, Error, Event, Pallet, LOG_TARGET,
};
use frame_support::{
    ensure, pallet_prelude::DispatchError, storage::with_storage_layer, RuntimeDebug,
};

#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub enum SwapDirection {
    /// Sell currency, buy tokens
    NativeToToken,
    /// Sell tokens, buy currency
    TokenToNative,
}

impl<T: Config> Pallet<T> {
    /// Sell exactly `input_amount` in the given direction, receiving at least `min_output`.
    /// Token amounts (`input_amount` of `TokenToNative`, `min_output` and the result of
    /// `NativeToToken`) are expressed in the currency balance type. They go through
    /// `Config::AssetToCurrencyBalance` and `Config::CurrencyToAssetBalance`, so both
    /// conversions have to be lossless for every amount the exchange can hold.
    ///
    /// Returns the amount bought. Nothing is changed on failure.
    pub fn do_swap(
        trader: &AccountIdOf<T>,
        direction: SwapDirection,
        input_amount: BalanceOf<T>,
        min_output: BalanceOf<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        with_storage_layer(|| -> Result<BalanceOf<T>, DispatchError> {
            let exchange = Self::get_exchange()?;
            let (currency_reserve, token_reserve) = Self::reserves(&exchange);
            let token_reserve = T::asset_to_currency(token_reserve);
            let (input_reserve, output_reserve) = match direction {
                SwapDirection::NativeToToken => (currency_reserve, token_reserve),
                SwapDirection::TokenToNative => (token_reserve, currency_reserve),
            };

            let output_amount = Self::quote(input_amount, input_reserve, output_reserve)?;
            ensure!(output_amount >= min_output, Error::<T>::SlippageExceeded);

            match direction {
                SwapDirection::NativeToToken => {
                    let token_amount = T::currency_to_asset(output_amount);
                    Self::receive_native(trader, input_amount)?;
                    Self::send_tokens(&exchange, trader, token_amount)?;
                    Self::deposit_event(Event::NativeTradedForToken(
                        trader.clone(),
                        input_amount,
                        token_amount,
                    ));
                },
                SwapDirection::TokenToNative => {
                    let token_amount = T::currency_to_asset(input_amount);
                    Self::pull_tokens(&exchange, trader, token_amount)?;
                    Self::send_native(trader, output_amount)?;
                    Self::deposit_event(Event::TokenTradedForNative(
                        trader.clone(),
                        output_amount,
                        token_amount,
                    ));
                },
            }

            log::debug!(
                target: LOG_TARGET,
                "{:?} swap by {:?}: sold {:?}, bought {:?}",
                direction,
                trader,
                input_amount,
                output_amount,
            );
            Ok(output_amount)
        })
    }
}
