//! # Exchange pallet
//!
//! ## Overview
//!
//! This pallet implements a single Uniswap V1 style constant-product exchange between the
//! native currency and one fungible asset (i.e. token).
//! Please refer to the [protocol description](https://docs.uniswap.org/protocol/V1/introduction)
//! and [smart contracts](https://github.com/Uniswap/v1-contracts) for more details.
//! Liquidity providers deposit currency & tokens at the current ratio and receive liquidity
//! tokens, which can be burned later for a proportional share of both reserves.
//! Traders swap currency for tokens (and back) at a price given by the reserves, paying a fixed
//! provider fee which stays in the pool.
//!
//! The reserves are never stored. They are always read from the balances of the pallet account,
//! so funds sent to that account outside of the pallet calls are accounted for immediately.
//! Tokens are pulled from callers with `transfer_from`, so callers need to approve the pallet
//! account as a delegate on the asset beforehand.
//!
//! Exchange state (reserves, liquidity) can be queried through the runtime API in the `rpc`
//! module.
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
mod liquidity;
#[cfg(test)]
mod mock;
pub mod pricing;
mod reserves;
pub mod rpc;
mod shares;
mod swap;
pub mod weights;

use frame_support::traits::Currency;

pub use pallet::*;
pub use swap::SwapDirection;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::exchange";

pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
pub type BalanceOf<T> = <<T as Config>::Currency as Currency<AccountIdOf<T>>>::Balance;
pub type AssetIdOf<T> = <T as Config>::AssetId;
pub type AssetBalanceOf<T> = <T as Config>::AssetBalance;

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use frame_support::{
        pallet_prelude::*,
        sp_runtime::traits::{AccountIdConversion, CheckedSub, Convert, One, Saturating, Zero},
        traits::{
            fungibles::{
                self,
                approvals::{Inspect as _, Mutate as _},
                Create, Inspect, Mutate,
            },
            tokens::{Balance, Fortitude, Preservation},
            ExistenceRequirement, WithdrawReasons,
        },
        PalletId,
    };
    use frame_system::pallet_prelude::*;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Pallet ID, used to derive the account holding the reserves.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// The overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The native currency.
        type Currency: Currency<Self::AccountId>;

        /// The balance type for assets (i.e. tokens) and liquidity tokens.
        type AssetBalance: Balance + MaybeSerializeDeserialize;

        // Two-way conversion between asset and currency balances.
        // Both directions must be lossless for the amounts held by the exchange.
        type AssetToCurrencyBalance: Convert<Self::AssetBalance, BalanceOf<Self>>;
        type CurrencyToAssetBalance: Convert<BalanceOf<Self>, Self::AssetBalance>;

        /// The asset ID type.
        type AssetId: Member + Parameter + Copy + MaxEncodedLen + MaybeSerializeDeserialize;

        /// The ledger of the traded asset. Tokens are pulled from callers through approvals.
        type Assets: fungibles::Inspect<Self::AccountId, AssetId = Self::AssetId, Balance = Self::AssetBalance>
            + fungibles::Mutate<Self::AccountId>
            + fungibles::approvals::Inspect<Self::AccountId>
            + fungibles::approvals::Mutate<Self::AccountId>;

        /// The ledger of liquidity tokens.
        type LiquidityTokens: fungibles::Inspect<Self::AccountId, AssetId = Self::AssetId, Balance = Self::AssetBalance>
            + fungibles::Mutate<Self::AccountId>
            + fungibles::Create<Self::AccountId>;

        /// Information on runtime weights.
        type WeightInfo: WeightInfo;

        /// Provider fee numerator.
        #[pallet::constant]
        type ProviderFeeNumerator: Get<BalanceOf<Self>>;

        /// Provider fee denominator.
        #[pallet::constant]
        type ProviderFeeDenominator: Get<BalanceOf<Self>>;
    }

    pub trait ConfigHelper: Config {
        fn pallet_account() -> AccountIdOf<Self>;
        fn currency_to_asset(curr_balance: BalanceOf<Self>) -> AssetBalanceOf<Self>;
        fn asset_to_currency(asset_balance: AssetBalanceOf<Self>) -> BalanceOf<Self>;
        fn net_amount_numerator() -> BalanceOf<Self>;
    }

    impl<T: Config> ConfigHelper for T {
        #[inline(always)]
        fn pallet_account() -> AccountIdOf<Self> {
            Self::PalletId::get().into_account_truncating()
        }

        #[inline(always)]
        fn currency_to_asset(curr_balance: BalanceOf<Self>) -> AssetBalanceOf<Self> {
            Self::CurrencyToAssetBalance::convert(curr_balance)
        }

        #[inline(always)]
        fn asset_to_currency(asset_balance: AssetBalanceOf<Self>) -> BalanceOf<Self> {
            Self::AssetToCurrencyBalance::convert(asset_balance)
        }

        // `integrity_test` guarantees the numerator is lower than the denominator.
        #[inline(always)]
        fn net_amount_numerator() -> BalanceOf<Self> {
            Self::ProviderFeeDenominator::get().saturating_sub(Self::ProviderFeeNumerator::get())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// `(asset_id, liquidity_token_id)` of an empty exchange to create at genesis.
        pub exchange: Option<(AssetIdOf<T>, AssetIdOf<T>)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some((asset_id, liquidity_token_id)) = self.exchange {
                assert!(T::Assets::asset_exists(asset_id), "Asset for the exchange does not exist");
                if let Err(err) = Pallet::<T>::do_create_exchange(asset_id, liquidity_token_id) {
                    panic!("Failed to create the exchange: {:?}", err);
                }
            }
        }
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(
                !T::ProviderFeeDenominator::get().is_zero(),
                "Provider fee denominator must not be zero"
            );
            assert!(
                T::ProviderFeeNumerator::get() < T::ProviderFeeDenominator::get(),
                "Provider fee shouldn't be greater than 100%"
            );
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// The exchange was created [asset_id, liquidity_token_id]
        ExchangeCreated(AssetIdOf<T>, AssetIdOf<T>),
        /// Liquidity was added to the exchange [provider_id, currency_amount, token_amount, liquidity_minted]
        LiquidityAdded(T::AccountId, BalanceOf<T>, AssetBalanceOf<T>, AssetBalanceOf<T>),
        /// Liquidity was removed from the exchange [provider_id, currency_amount, token_amount, liquidity_amount]
        LiquidityRemoved(T::AccountId, BalanceOf<T>, AssetBalanceOf<T>, AssetBalanceOf<T>),
        /// Currency was traded for tokens [trader_id, currency_amount, token_amount]
        NativeTradedForToken(T::AccountId, BalanceOf<T>, AssetBalanceOf<T>),
        /// Tokens were traded for currency [trader_id, currency_amount, token_amount]
        TokenTradedForNative(T::AccountId, BalanceOf<T>, AssetBalanceOf<T>),
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Asset with the specified ID does not exist
        AssetNotFound,
        /// The exchange has already been created
        ExchangeAlreadyExists,
        /// The exchange has not been created yet
        ExchangeNotFound,
        /// Provided liquidity token ID is already taken
        TokenIdTaken,
        /// Zero value provided for an amount, or the operation would move nothing
        InvalidAmount,
        /// The exchange has no reserves to trade against
        InsufficientLiquidity,
        /// Specified account doesn't own enough liquidity tokens
        InsufficientShares,
        /// Not enough currency or tokens to add liquidity or perform trade
        InsufficientBalance,
        /// The pallet account is not approved to pull enough tokens from the caller
        AllowanceExceeded,
        /// The token amount required by the current reserve ratio exceeds the specified maximum
        RatioMismatch,
        /// Trade output is lower than the specified minimum
        SlippageExceeded,
        /// Overflow occurred during price or liquidity computation
        ArithmeticOverflow,
    }

    #[derive(Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, MaxEncodedLen, TypeInfo)]
    pub struct Exchange<AssetId> {
        pub asset_id: AssetId,
        pub liquidity_token_id: AssetId,
    }

    // Type alias for convenience
    pub type ExchangeOf<T> = Exchange<AssetIdOf<T>>;

    #[pallet::storage]
    #[pallet::getter(fn exchange)]
    pub(super) type ExchangeInfo<T: Config> = StorageValue<_, ExchangeOf<T>, OptionQuery>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create the exchange for `asset_id`. The exchange starts empty: the first
        /// `add_liquidity` call sets the initial price.
        /// Create a new liquidity token owned by the pallet account.
        /// Emit `ExchangeCreated` event on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `asset_id` – ID of the asset traded on the exchange. Asset with this ID must exist.
        ///   * `liquidity_token_id` – ID of the liquidity token to be created. Asset with this ID must *not* exist.
        ///
        /// **Errors:**
        ///   * `AssetNotFound` – Asset with the given `asset_id` does not exist.
        ///   * `ExchangeAlreadyExists` – The exchange has already been created.
        ///   * `TokenIdTaken` – Specified `liquidity_token_id` is already taken by another asset.
        #[pallet::call_index(0)]
        #[pallet::weight(<T as Config>::WeightInfo::create_exchange())]
        pub fn create_exchange(
            origin: OriginFor<T>,
            asset_id: AssetIdOf<T>,
            liquidity_token_id: AssetIdOf<T>,
        ) -> DispatchResult {
            // -------------------------- Validation part --------------------------
            ensure_signed(origin)?;
            ensure!(T::Assets::asset_exists(asset_id), Error::<T>::AssetNotFound);
            ensure!(!<ExchangeInfo<T>>::exists(), Error::<T>::ExchangeAlreadyExists);

            // ----------------------- Create liquidity token ----------------------
            Self::do_create_exchange(asset_id, liquidity_token_id)
        }

        /// Add liquidity to the exchange. The caller specifies an exact amount of currency
        /// to be deposited and a maximum amount of tokens to be deposited.
        /// If the exchange is empty, exactly `max_tokens` are deposited and the caller receives
        /// liquidity tokens equal to `currency_amount`. Otherwise tokens are deposited
        /// at the current reserve ratio (rounded up) and liquidity is minted proportionally
        /// (rounded down). Emit `LiquidityAdded` event on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `currency_amount` – The amount of the currency to deposit in the pool. Must be greater than 0.
        ///   * `max_tokens` – The maximum amount of tokens to be deposited. Must be greater than 0.
        ///     The pallet account must be approved to transfer this many tokens from the caller.
        ///
        /// **Errors:**
        ///   * `InvalidAmount` – `currency_amount` or `max_tokens` equals 0, or no liquidity would be minted.
        ///   * `ExchangeNotFound` – The exchange has not been created.
        ///   * `InsufficientBalance` – The caller doesn't have enough currency or tokens.
        ///   * `AllowanceExceeded` – The approved amount of tokens is lower than the deposit.
        ///   * `RatioMismatch` – `max_tokens` is too low to match `currency_amount`.
        ///   * `ArithmeticOverflow` – An overflow occurred during liquidity computation.
        #[pallet::call_index(1)]
        #[pallet::weight(<T as Config>::WeightInfo::add_liquidity())]
        pub fn add_liquidity(
            origin: OriginFor<T>,
            currency_amount: BalanceOf<T>,
            max_tokens: AssetBalanceOf<T>,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::do_add_liquidity(&caller, currency_amount, max_tokens)?;
            Ok(())
        }

        /// Remove liquidity from the exchange. The caller specifies the amount of liquidity tokens
        /// to burn and receives the proportional share (rounded down) of both reserves.
        /// Emit `LiquidityRemoved` event on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `liquidity_amount` – The amount of liquidity tokens to be burned. Must be greater than 0.
        ///
        /// **Errors:**
        ///   * `InvalidAmount` – Specified `liquidity_amount` equals 0.
        ///   * `ExchangeNotFound` – The exchange has not been created.
        ///   * `InsufficientShares` – Specified `liquidity_amount` is greater than the liquidity
        ///     token balance of the caller account.
        ///   * `ArithmeticOverflow` – An overflow occurred during computation of withdrawn amounts.
        #[pallet::call_index(2)]
        #[pallet::weight(<T as Config>::WeightInfo::remove_liquidity())]
        pub fn remove_liquidity(
            origin: OriginFor<T>,
            liquidity_amount: AssetBalanceOf<T>,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::do_remove_liquidity(&caller, liquidity_amount)?;
            Ok(())
        }

        /// Sell an exact amount of currency for tokens. Emit `NativeTradedForToken` event on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `currency_amount` – Amount of the currency to sell. Must be greater than 0.
        ///   * `min_tokens` – Minimum amount of tokens to buy.
        ///
        /// **Errors:**
        ///   * `ExchangeNotFound` – The exchange has not been created.
        ///   * `InvalidAmount` – Specified `currency_amount` equals 0.
        ///   * `InsufficientLiquidity` – The exchange has no liquidity.
        ///   * `SlippageExceeded` – The amount of tokens which could be received is lower than `min_tokens`.
        ///   * `InsufficientBalance` – The available currency balance of the caller is not enough.
        ///   * `ArithmeticOverflow` – An overflow occurred during price computation.
        #[pallet::call_index(3)]
        #[pallet::weight(<T as Config>::WeightInfo::swap_native_for_token())]
        pub fn swap_native_for_token(
            origin: OriginFor<T>,
            currency_amount: BalanceOf<T>,
            min_tokens: AssetBalanceOf<T>,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::do_swap(
                &caller,
                SwapDirection::NativeToToken,
                currency_amount,
                T::asset_to_currency(min_tokens),
            )?;
            Ok(())
        }

        /// Sell an exact amount of tokens for currency. The pallet account must be approved
        /// to transfer `token_amount` from the caller. Emit `TokenTradedForNative` event on success.
        ///
        /// **Parameters:**
        ///   * `origin` – Origin for the call. Must be signed.
        ///   * `token_amount` – Amount of tokens to sell. Must be greater than 0.
        ///   * `min_currency` – Minimum amount of currency to buy.
        ///
        /// **Errors:**
        ///   * `ExchangeNotFound` – The exchange has not been created.
        ///   * `InvalidAmount` – Specified `token_amount` equals 0.
        ///   * `InsufficientLiquidity` – The exchange has no liquidity.
        ///   * `SlippageExceeded` – The amount of currency which could be received is lower than `min_currency`.
        ///   * `AllowanceExceeded` – The approved amount of tokens is lower than `token_amount`.
        ///   * `InsufficientBalance` – The available token balance of the caller is not enough.
        ///   * `ArithmeticOverflow` – An overflow occurred during price computation.
        #[pallet::call_index(4)]
        #[pallet::weight(<T as Config>::WeightInfo::swap_token_for_native())]
        pub fn swap_token_for_native(
            origin: OriginFor<T>,
            token_amount: AssetBalanceOf<T>,
            min_currency: BalanceOf<T>,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::do_swap(
                &caller,
                SwapDirection::TokenToNative,
                T::asset_to_currency(token_amount),
                min_currency,
            )?;
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        pub(crate) fn get_exchange() -> Result<ExchangeOf<T>, Error<T>> {
            <ExchangeInfo<T>>::get().ok_or(Error::<T>::ExchangeNotFound)
        }

        /// Create the liquidity token and store the (empty) exchange, emit event
        pub(crate) fn do_create_exchange(
            asset_id: AssetIdOf<T>,
            liquidity_token_id: AssetIdOf<T>,
        ) -> DispatchResult {
            ensure!(
                !T::LiquidityTokens::asset_exists(liquidity_token_id),
                Error::<T>::TokenIdTaken
            );
            T::LiquidityTokens::create(
                liquidity_token_id,
                T::pallet_account(),
                false,
                <AssetBalanceOf<T>>::one(),
            )?;

            <ExchangeInfo<T>>::put(Exchange {
                asset_id,
                liquidity_token_id,
            });

            log::info!(
                target: LOG_TARGET,
                "exchange created for asset {:?} with liquidity token {:?}",
                asset_id,
                liquidity_token_id,
            );
            Self::deposit_event(Event::ExchangeCreated(asset_id, liquidity_token_id));
            Ok(())
        }

        // The account has to stay alive and keep its frozen funds after paying `amount`.
        fn check_enough_currency(
            account_id: &AccountIdOf<T>,
            amount: &BalanceOf<T>,
        ) -> Result<(), Error<T>> {
            let new_balance = <T as Config>::Currency::free_balance(account_id)
                .checked_sub(amount)
                .filter(|balance| balance >= &<T as Config>::Currency::minimum_balance())
                .ok_or(Error::<T>::InsufficientBalance)?;
            <T as Config>::Currency::ensure_can_withdraw(
                account_id,
                *amount,
                WithdrawReasons::TRANSFER,
                new_balance,
            )
            .map_err(|_| Error::<T>::InsufficientBalance)
        }

        fn check_enough_tokens(
            exchange: &ExchangeOf<T>,
            account_id: &AccountIdOf<T>,
            amount: &AssetBalanceOf<T>,
        ) -> Result<(), Error<T>> {
            let allowance = T::Assets::allowance(exchange.asset_id, account_id, &T::pallet_account());
            ensure!(&allowance >= amount, Error::<T>::AllowanceExceeded);
            let reducible = T::Assets::reducible_balance(
                exchange.asset_id,
                account_id,
                Preservation::Expendable,
                Fortitude::Polite,
            );
            ensure!(&reducible >= amount, Error::<T>::InsufficientBalance);
            Ok(())
        }

        /// Move currency from `from` into the exchange
        pub(crate) fn receive_native(from: &AccountIdOf<T>, amount: BalanceOf<T>) -> DispatchResult {
            Self::check_enough_currency(from, &amount)?;
            <T as Config>::Currency::transfer(
                from,
                &T::pallet_account(),
                amount,
                ExistenceRequirement::KeepAlive,
            )
        }

        /// Move currency from the exchange to `to`
        pub(crate) fn send_native(to: &AccountIdOf<T>, amount: BalanceOf<T>) -> DispatchResult {
            <T as Config>::Currency::transfer(
                &T::pallet_account(),
                to,
                amount,
                ExistenceRequirement::AllowDeath,
            )
        }

        /// Pull tokens approved by `from` into the exchange
        pub(crate) fn pull_tokens(
            exchange: &ExchangeOf<T>,
            from: &AccountIdOf<T>,
            amount: AssetBalanceOf<T>,
        ) -> DispatchResult {
            if amount.is_zero() {
                return Ok(());
            }
            Self::check_enough_tokens(exchange, from, &amount)?;
            let pallet_account = T::pallet_account();
            T::Assets::transfer_from(exchange.asset_id, from, &pallet_account, &pallet_account, amount)
        }

        /// Move tokens from the exchange to `to`
        pub(crate) fn send_tokens(
            exchange: &ExchangeOf<T>,
            to: &AccountIdOf<T>,
            amount: AssetBalanceOf<T>,
        ) -> DispatchResult {
            if amount.is_zero() {
                return Ok(());
            }
            T::Assets::transfer(
                exchange.asset_id,
                &T::pallet_account(),
                to,
                amount,
                Preservation::Expendable,
            )?;
            Ok(())
        }
    }
}
