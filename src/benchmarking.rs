use crate::{AccountIdOf, Call, Config, ConfigHelper, Pallet};
use frame_benchmarking::{benchmarks, whitelisted_caller};
use frame_support::pallet_prelude::DispatchResult;
use frame_support::traits::{
    fungibles::{approvals::Mutate as ApprovalsMutate, Create, Mutate},
    Currency,
};
use frame_system::RawOrigin;

const INIT_BALANCE: u128 = 1_000_000_000_000_000;
const INIT_LIQUIDITY: u128 = 1_000_000_000_000;
const ASSET_ID: u32 = 1;
const LIQ_TOKEN_ID: u32 = 11;

fn prepare_asset<T>(caller: &AccountIdOf<T>) -> DispatchResult
where
    T: Config<AssetId = u32, AssetBalance = u128>,
    T::Currency: Currency<AccountIdOf<T>, Balance = u128>,
    T::Assets: Create<AccountIdOf<T>>,
{
    T::Assets::create(ASSET_ID, caller.clone(), true, 1)?;
    T::Assets::mint_into(ASSET_ID, caller, INIT_BALANCE)?;
    T::Assets::approve(ASSET_ID, caller, &T::pallet_account(), INIT_BALANCE)?;
    T::Currency::make_free_balance_be(caller, INIT_BALANCE);
    Ok(())
}

fn prepare_exchange<T>() -> DispatchResult
where
    T: Config<AssetId = u32, AssetBalance = u128>,
    T::Currency: Currency<AccountIdOf<T>, Balance = u128>,
    T::Assets: Create<AccountIdOf<T>>,
{
    let caller: T::AccountId = whitelisted_caller();
    prepare_asset::<T>(&caller)?;
    Pallet::<T>::create_exchange(RawOrigin::Signed(caller.clone()).into(), ASSET_ID, LIQ_TOKEN_ID)?;
    Pallet::<T>::add_liquidity(RawOrigin::Signed(caller).into(), INIT_LIQUIDITY, INIT_LIQUIDITY)?;
    Ok(())
}

benchmarks! {
    where_clause {
        where
            T: Config<AssetId = u32, AssetBalance = u128>,
            T::Currency: Currency<AccountIdOf<T>, Balance = u128>,
            T::Assets: Create<AccountIdOf<T>>,
    }

    create_exchange {
        let caller: T::AccountId = whitelisted_caller();
        prepare_asset::<T>(&caller)?;
    }: _(RawOrigin::Signed(caller), ASSET_ID, LIQ_TOKEN_ID)
    verify {
        assert!(Pallet::<T>::exchange().is_some());
    }

    add_liquidity {
        prepare_exchange::<T>()?;
        let caller: T::AccountId = whitelisted_caller();
    }: _(RawOrigin::Signed(caller), 1_000, 1_000)
    verify {
        assert_eq!(Pallet::<T>::native_reserve(), INIT_LIQUIDITY + 1_000);
        assert_eq!(Pallet::<T>::token_reserve(), INIT_LIQUIDITY + 1_000);
    }

    remove_liquidity {
        prepare_exchange::<T>()?;
        let caller: T::AccountId = whitelisted_caller();
    }: _(RawOrigin::Signed(caller), 1_000)
    verify {
        assert_eq!(Pallet::<T>::native_reserve(), INIT_LIQUIDITY - 1_000);
        assert_eq!(Pallet::<T>::token_reserve(), INIT_LIQUIDITY - 1_000);
    }

    swap_native_for_token {
        prepare_exchange::<T>()?;
        let caller: T::AccountId = whitelisted_caller();
        let input_amount = 1_000_000;
        let min_output = 996_999; // sold amount - provider fee (0.3%)
    }: _(RawOrigin::Signed(caller), input_amount, min_output)
    verify {
        assert_eq!(Pallet::<T>::native_reserve(), INIT_LIQUIDITY + input_amount);
        assert_eq!(Pallet::<T>::token_reserve(), INIT_LIQUIDITY - min_output);
    }

    swap_token_for_native {
        prepare_exchange::<T>()?;
        let caller: T::AccountId = whitelisted_caller();
        let input_amount = 1_000_000;
        let min_output = 996_999; // sold amount - provider fee (0.3%)
    }: _(RawOrigin::Signed(caller), input_amount, min_output)
    verify {
        assert_eq!(Pallet::<T>::native_reserve(), INIT_LIQUIDITY - min_output);
        assert_eq!(Pallet::<T>::token_reserve(), INIT_LIQUIDITY + input_amount);
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_empty_test_ext(), crate::mock::Test);
}
