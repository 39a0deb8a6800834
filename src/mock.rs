use crate as pallet_exchange;
use crate::ConfigHelper;
use frame_support::{
    assert_ok, parameter_types,
    traits::{AsEnsureOriginWithArg, ConstU128, ConstU16, ConstU32, ConstU64, Everything},
    PalletId,
};
use frame_system::{EnsureRoot, EnsureSigned};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, ConvertInto, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        Assets: pallet_assets,
        Dex: pallet_exchange,
    }
);

impl frame_system::Config for Test {
    type BaseCallFilter = Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<u128>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ConstU16<42>;
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_balances::Config for Test {
    type Balance = u128;
    type DustRemoval = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ConstU128<1>;
    type AccountStore = System;
    type WeightInfo = ();
    type MaxLocks = ConstU32<10>;
    type MaxReserves = ();
    type ReserveIdentifier = [u8; 8];
    type FreezeIdentifier = ();
    type MaxFreezes = ();
    type RuntimeHoldReason = ();
    type MaxHolds = ();
}

impl pallet_assets::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Balance = u128;
    type RemoveItemsLimit = ConstU32<1000>;
    type AssetId = u32;
    type AssetIdParameter = u32;
    type Currency = Balances;
    type CreateOrigin = AsEnsureOriginWithArg<EnsureSigned<u64>>;
    type ForceOrigin = EnsureRoot<u64>;
    type AssetDeposit = ConstU128<1>;
    type AssetAccountDeposit = ConstU128<10>;
    type MetadataDepositBase = ConstU128<1>;
    type MetadataDepositPerByte = ConstU128<1>;
    type ApprovalDeposit = ConstU128<0>;
    type StringLimit = ConstU32<50>;
    type Freezer = ();
    type Extra = ();
    type CallbackHandle = ();
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = ();
}

parameter_types! {
    pub const ExchangePalletId: PalletId = PalletId(*b"py/exchg");
}

impl pallet_exchange::Config for Test {
    type PalletId = ExchangePalletId;
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type AssetBalance = u128;
    type AssetToCurrencyBalance = ConvertInto;
    type CurrencyToAssetBalance = ConvertInto;
    type AssetId = u32;
    type Assets = Assets;
    type LiquidityTokens = Assets;
    type WeightInfo = ();
    type ProviderFeeNumerator = ConstU128<3>;
    type ProviderFeeDenominator = ConstU128<1000>;
}

pub(crate) const ACCOUNT_A: u64 = 0;
pub(crate) const ACCOUNT_B: u64 = 1;
/// Holds currency but no tokens.
pub(crate) const ACCOUNT_C: u64 = 2;
/// Holds nothing at all.
pub(crate) const ACCOUNT_D: u64 = 3;
pub(crate) const INIT_BALANCE: u128 = 1_000_000_000_000_000;
pub(crate) const INIT_LIQUIDITY: u128 = 1_000_000_000_000;
pub(crate) const ASSET_ID: u32 = 100;
pub(crate) const LIQ_TOKEN_ID: u32 = 101;
pub(crate) const UNKNOWN_ASSET_ID: u32 = 200;

pub(crate) fn test_ext(exchange: Option<(u32, u32)>) -> sp_io::TestExternalities {
    let mut storage = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();
    pallet_balances::GenesisConfig::<Test> {
        balances: vec![
            (ACCOUNT_A, INIT_BALANCE),
            (ACCOUNT_B, INIT_BALANCE),
            (ACCOUNT_C, INIT_BALANCE),
        ],
    }
    .assimilate_storage(&mut storage)
    .unwrap();
    pallet_assets::GenesisConfig::<Test> {
        assets: vec![(ASSET_ID, ACCOUNT_A, true, 1)],
        metadata: vec![],
        accounts: vec![
            (ASSET_ID, ACCOUNT_A, INIT_BALANCE),
            (ASSET_ID, ACCOUNT_B, INIT_BALANCE),
        ],
    }
    .assimilate_storage(&mut storage)
    .unwrap();
    pallet_exchange::GenesisConfig::<Test> { exchange }
        .assimilate_storage(&mut storage)
        .unwrap();
    let mut test_ext: sp_io::TestExternalities = storage.into();
    test_ext.execute_with(|| System::set_block_number(1));
    test_ext
}

/// Externalities with an empty exchange for `ASSET_ID` created at genesis.
pub(crate) fn new_test_ext() -> sp_io::TestExternalities {
    test_ext(Some((ASSET_ID, LIQ_TOKEN_ID)))
}

/// Externalities without any exchange.
pub(crate) fn new_empty_test_ext() -> sp_io::TestExternalities {
    test_ext(None)
}

pub(crate) fn pallet_account() -> u64 {
    <Test as ConfigHelper>::pallet_account()
}

/// Approve the exchange to pull `amount` more tokens from `owner`.
pub(crate) fn approve(owner: u64, amount: u128) {
    assert_ok!(Assets::approve_transfer(
        RuntimeOrigin::signed(owner),
        ASSET_ID,
        pallet_account(),
        amount
    ));
}

/// Approve and deposit the first liquidity of the exchange.
pub(crate) fn seed_exchange(provider: u64, currency_amount: u128, token_amount: u128) {
    approve(provider, token_amount);
    assert_ok!(Dex::add_liquidity(
        RuntimeOrigin::signed(provider),
        currency_amount,
        token_amount
    ));
}

pub(crate) fn reserves() -> (u128, u128) {
    (Dex::native_reserve(), Dex::token_reserve())
}

pub(crate) fn token_balance(who: u64) -> u128 {
    Assets::balance(ASSET_ID, who)
}

pub(crate) fn last_event() -> pallet_exchange::Event<Test> {
    System::events()
        .into_iter()
        .map(|r| r.event)
        .filter_map(|e| {
            if let RuntimeEvent::Dex(inner) = e {
                Some(inner)
            } else {
                None
            }
        })
        .last()
        .unwrap()
}
