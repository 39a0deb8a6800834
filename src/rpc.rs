use crate::{AssetBalanceOf, BalanceOf, Config, ConfigHelper, Error, Pallet};
use codec::{Decode, Encode};
use scale_info::{prelude::format, TypeInfo};
use sp_std::vec::Vec;

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub enum RpcError {
    ExchangeNotFound,
    InsufficientLiquidity,
    InvalidAmount,
    ArithmeticOverflow,
    Unexpected(Vec<u8>),
}

pub type RpcResult<T> = Result<T, RpcError>;

impl<T: Config> From<Error<T>> for RpcError {
    fn from(err: Error<T>) -> Self {
        match err {
            Error::ExchangeNotFound => Self::ExchangeNotFound,
            Error::InsufficientLiquidity => Self::InsufficientLiquidity,
            Error::InvalidAmount => Self::InvalidAmount,
            Error::ArithmeticOverflow => Self::ArithmeticOverflow,
            err => Self::Unexpected(format!("{err:?}").into_bytes()),
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Get the output amount for a fixed-input currency-to-token trade,
    /// i.e. 'How many tokens would I get if I paid this much currency'?
    pub fn get_native_to_token_output_amount(
        currency_amount: BalanceOf<T>,
    ) -> RpcResult<AssetBalanceOf<T>> {
        let exchange = Self::get_exchange()?;
        let (currency_reserve, token_reserve) = Self::reserves(&exchange);
        let output_amount = Self::quote(
            currency_amount,
            currency_reserve,
            T::asset_to_currency(token_reserve),
        )?;
        Ok(T::currency_to_asset(output_amount))
    }

    /// Get the input amount for a fixed-output currency-to-token trade,
    /// i.e. 'How much currency do I have to pay to get this many tokens'?
    pub fn get_native_to_token_input_amount(
        token_amount: AssetBalanceOf<T>,
    ) -> RpcResult<BalanceOf<T>> {
        let exchange = Self::get_exchange()?;
        let (currency_reserve, token_reserve) = Self::reserves(&exchange);
        let input_amount = Self::quote_output(
            T::asset_to_currency(token_amount),
            currency_reserve,
            T::asset_to_currency(token_reserve),
        )?;
        Ok(input_amount)
    }

    /// Get the output amount for a fixed-input token-to-currency trade,
    /// i.e. 'How much currency would I get if I paid this many tokens'?
    pub fn get_token_to_native_output_amount(
        token_amount: AssetBalanceOf<T>,
    ) -> RpcResult<BalanceOf<T>> {
        let exchange = Self::get_exchange()?;
        let (currency_reserve, token_reserve) = Self::reserves(&exchange);
        let output_amount = Self::quote(
            T::asset_to_currency(token_amount),
            T::asset_to_currency(token_reserve),
            currency_reserve,
        )?;
        Ok(output_amount)
    }

    /// Get the input amount for a fixed-output token-to-currency trade,
    /// i.e. 'How many tokens do I have to pay to get this much currency'?
    pub fn get_token_to_native_input_amount(
        currency_amount: BalanceOf<T>,
    ) -> RpcResult<AssetBalanceOf<T>> {
        let exchange = Self::get_exchange()?;
        let (currency_reserve, token_reserve) = Self::reserves(&exchange);
        let input_amount = Self::quote_output(
            currency_amount,
            T::asset_to_currency(token_reserve),
            currency_reserve,
        )?;
        Ok(T::currency_to_asset(input_amount))
    }
}
