//! Weights for `pallet_exchange`.
//!
//! Storage access counts follow the calls; execution times should be refreshed
//! from the benchmarks in `benchmarking.rs` on reference hardware.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use sp_std::marker::PhantomData;

/// Weight functions needed for `pallet_exchange`.
pub trait WeightInfo {
	fn create_exchange() -> Weight;
	fn add_liquidity() -> Weight;
	fn remove_liquidity() -> Weight;
	fn swap_native_for_token() -> Weight;
	fn swap_token_for_native() -> Weight;
}

/// Weights for `pallet_exchange` using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	// Storage: Exchange ExchangeInfo (r:1 w:1)
	// Storage: Assets Asset (r:2 w:1)
	fn create_exchange() -> Weight {
		Weight::from_parts(38_000_000, 3675)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	// Storage: Exchange ExchangeInfo (r:1 w:0)
	// Storage: System Account (r:2 w:2)
	// Storage: Assets Asset (r:2 w:2)
	// Storage: Assets Account (r:3 w:3)
	// Storage: Assets Approvals (r:1 w:1)
	fn add_liquidity() -> Weight {
		Weight::from_parts(112_000_000, 8400)
			.saturating_add(T::DbWeight::get().reads(9_u64))
			.saturating_add(T::DbWeight::get().writes(8_u64))
	}
	// Storage: Exchange ExchangeInfo (r:1 w:0)
	// Storage: System Account (r:2 w:2)
	// Storage: Assets Asset (r:2 w:2)
	// Storage: Assets Account (r:3 w:3)
	fn remove_liquidity() -> Weight {
		Weight::from_parts(98_000_000, 8400)
			.saturating_add(T::DbWeight::get().reads(8_u64))
			.saturating_add(T::DbWeight::get().writes(7_u64))
	}
	// Storage: Exchange ExchangeInfo (r:1 w:0)
	// Storage: System Account (r:2 w:2)
	// Storage: Assets Asset (r:1 w:1)
	// Storage: Assets Account (r:2 w:2)
	fn swap_native_for_token() -> Weight {
		Weight::from_parts(79_000_000, 6208)
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().writes(5_u64))
	}
	// Storage: Exchange ExchangeInfo (r:1 w:0)
	// Storage: System Account (r:2 w:2)
	// Storage: Assets Asset (r:1 w:1)
	// Storage: Assets Account (r:2 w:2)
	// Storage: Assets Approvals (r:1 w:1)
	fn swap_token_for_native() -> Weight {
		Weight::from_parts(86_000_000, 6208)
			.saturating_add(T::DbWeight::get().reads(7_u64))
			.saturating_add(T::DbWeight::get().writes(6_u64))
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn create_exchange() -> Weight {
		Weight::from_parts(38_000_000, 3675)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	fn add_liquidity() -> Weight {
		Weight::from_parts(112_000_000, 8400)
			.saturating_add(RocksDbWeight::get().reads(9_u64))
			.saturating_add(RocksDbWeight::get().writes(8_u64))
	}
	fn remove_liquidity() -> Weight {
		Weight::from_parts(98_000_000, 8400)
			.saturating_add(RocksDbWeight::get().reads(8_u64))
			.saturating_add(RocksDbWeight::get().writes(7_u64))
	}
	fn swap_native_for_token() -> Weight {
		Weight::from_parts(79_000_000, 6208)
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().writes(5_u64))
	}
	fn swap_token_for_native() -> Weight {
		Weight::from_parts(86_000_000, 6208)
			.saturating_add(RocksDbWeight::get().reads(7_u64))
			.saturating_add(RocksDbWeight::get().writes(6_u64))
	}
}
