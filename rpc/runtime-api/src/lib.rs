//! Runtime API of the exchange pallet: reserves, liquidity balances and trade estimates.

#![cfg_attr(not(feature = "std"), no_std)]

use codec::Codec;
pub use pallet_exchange::rpc::{RpcError, RpcResult};
use sp_runtime::traits::MaybeDisplay;

sp_api::decl_runtime_apis! {
    pub trait ExchangeApi<AccountId, Balance, AssetBalance> where
        AccountId: Codec,
        Balance: Codec + MaybeDisplay,
        AssetBalance: Codec + MaybeDisplay,
    {
        fn quote(input_amount: Balance, input_reserve: Balance, output_reserve: Balance) -> RpcResult<Balance>;
        fn get_native_reserve() -> Balance;
        fn get_token_reserve() -> AssetBalance;
        fn lp_balance_of(account: AccountId) -> AssetBalance;
        fn lp_total_supply() -> AssetBalance;
        fn get_native_to_token_output_amount(currency_amount: Balance) -> RpcResult<AssetBalance>;
        fn get_native_to_token_input_amount(token_amount: AssetBalance) -> RpcResult<Balance>;
        fn get_token_to_native_output_amount(token_amount: AssetBalance) -> RpcResult<Balance>;
        fn get_token_to_native_input_amount(currency_amount: Balance) -> RpcResult<AssetBalance>;
    }
}
