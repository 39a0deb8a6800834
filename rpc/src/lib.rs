use codec::Codec;
use jsonrpsee::{
    core::{DeserializeOwned, Error as RpcError, RpcResult, Serialize},
    proc_macros::rpc,
    types::error::{CallError, ErrorObject},
};
use sp_api::ProvideRuntimeApi;
use sp_blockchain::HeaderBackend;
use sp_runtime::traits::MaybeDisplay;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;

pub use pallet_exchange_rpc_runtime_api::{
    ExchangeApi as ExchangeRuntimeApi, RpcError as ExchangeRpcError,
};


const RUNTIME_ERROR: i32 = 1;
const EXCHANGE_NOT_FOUND: i32 = 2;
const INSUFFICIENT_LIQUIDITY: i32 = 3;
const ARITHMETIC_OVERFLOW: i32 = 4;
const INVALID_AMOUNT: i32 = 5;

#[rpc(client, server)]
pub trait ExchangeApi<BlockHash, AccountId, Balance, AssetBalance> {
    #[method(name = "exchange_quote")]
    fn quote(
        &self,
        input_amount: Balance,
        input_reserve: Balance,
        output_reserve: Balance,
        at: Option<BlockHash>,
    ) -> RpcResult<Balance>;

    #[method(name = "exchange_get_native_reserve")]
    fn get_native_reserve(&self, at: Option<BlockHash>) -> RpcResult<Balance>;

    #[method(name = "exchange_get_token_reserve")]
    fn get_token_reserve(&self, at: Option<BlockHash>) -> RpcResult<AssetBalance>;

    #[method(name = "exchange_lp_balance_of")]
    fn lp_balance_of(&self, account: AccountId, at: Option<BlockHash>) -> RpcResult<AssetBalance>;

    #[method(name = "exchange_lp_total_supply")]
    fn lp_total_supply(&self, at: Option<BlockHash>) -> RpcResult<AssetBalance>;

    #[method(name = "exchange_get_native_to_token_output_amount")]
    fn get_native_to_token_output_amount(
        &self,
        currency_amount: Balance,
        at: Option<BlockHash>,
    ) -> RpcResult<AssetBalance>;

    #[method(name = "exchange_get_native_to_token_input_amount")]
    fn get_native_to_token_input_amount(
        &self,
        token_amount: AssetBalance,
        at: Option<BlockHash>,
    ) -> RpcResult<Balance>;

    #[method(name = "exchange_get_token_to_native_output_amount")]
    fn get_token_to_native_output_amount(
        &self,
        token_amount: AssetBalance,
        at: Option<BlockHash>,
    ) -> RpcResult<Balance>;

    #[method(name = "exchange_get_token_to_native_input_amount")]
    fn get_token_to_native_input_amount(
        &self,
        currency_amount: Balance,
        at: Option<BlockHash>,
    ) -> RpcResult<AssetBalance>;
}

pub struct Exchange<Client, Block> {
    client: Arc<Client>,
    _marker: PhantomData<Block>,
}

type HashOf<Block> = <Block as sp_runtime::traits::Block>::Hash;

impl<Client, Block> Exchange<Client, Block>
where
    Block: sp_runtime::traits::Block,
    Client: HeaderBackend<Block>,
{
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            _marker: Default::default(),
        }
    }

    #[inline(always)]
    fn block_hash(&self, block_hash: Option<HashOf<Block>>) -> HashOf<Block> {
        // If the block hash is not supplied assume the best block.
        block_hash.unwrap_or_else(|| self.client.info().best_hash)
    }
}

impl<Client, Block, AccountId, Balance, AssetBalance>
    ExchangeApiServer<HashOf<Block>, AccountId, Balance, AssetBalance> for Exchange<Client, Block>
where
    Block: sp_runtime::traits::Block,
    Client: ProvideRuntimeApi<Block> + HeaderBackend<Block> + Send + Sync + 'static,
    Client::Api: ExchangeRuntimeApi<Block, AccountId, Balance, AssetBalance>,
    AccountId: Codec + DeserializeOwned + Send + Sync + 'static,
    Balance: Codec + MaybeDisplay + Copy + Serialize + DeserializeOwned + Send + Sync + 'static,
    AssetBalance:
        Codec + MaybeDisplay + Copy + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn quote(
        &self,
        input_amount: Balance,
        input_reserve: Balance,
        output_reserve: Balance,
        at: Option<Block::Hash>,
    ) -> RpcResult<Balance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .quote(at, input_amount, input_reserve, output_reserve)
            .map_err(runtime_error)?
            .map_err(exchange_rpc_error)
    }

    fn get_native_reserve(&self, at: Option<Block::Hash>) -> RpcResult<Balance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_native_reserve(at)
            .map_err(runtime_error)
    }

    fn get_token_reserve(&self, at: Option<Block::Hash>) -> RpcResult<AssetBalance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_token_reserve(at)
            .map_err(runtime_error)
    }

    fn lp_balance_of(&self, account: AccountId, at: Option<Block::Hash>) -> RpcResult<AssetBalance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .lp_balance_of(at, account)
            .map_err(runtime_error)
    }

    fn lp_total_supply(&self, at: Option<Block::Hash>) -> RpcResult<AssetBalance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .lp_total_supply(at)
            .map_err(runtime_error)
    }

    fn get_native_to_token_output_amount(
        &self,
        currency_amount: Balance,
        at: Option<Block::Hash>,
    ) -> RpcResult<AssetBalance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_native_to_token_output_amount(at, currency_amount)
            .map_err(runtime_error)?
            .map_err(exchange_rpc_error)
    }

    fn get_native_to_token_input_amount(
        &self,
        token_amount: AssetBalance,
        at: Option<Block::Hash>,
    ) -> RpcResult<Balance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_native_to_token_input_amount(at, token_amount)
            .map_err(runtime_error)?
            .map_err(exchange_rpc_error)
    }

    fn get_token_to_native_output_amount(
        &self,
        token_amount: AssetBalance,
        at: Option<Block::Hash>,
    ) -> RpcResult<Balance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_token_to_native_output_amount(at, token_amount)
            .map_err(runtime_error)?
            .map_err(exchange_rpc_error)
    }

    fn get_token_to_native_input_amount(
        &self,
        currency_amount: Balance,
        at: Option<Block::Hash>,
    ) -> RpcResult<AssetBalance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_token_to_native_input_amount(at, currency_amount)
            .map_err(runtime_error)?
            .map_err(exchange_rpc_error)
    }
}

fn runtime_error(err: impl Debug) -> RpcError {
    CallError::Custom(ErrorObject::owned(
        RUNTIME_ERROR,
        "Runtime error",
        Some(format!("{:?}", err)),
    ))
    .into()
}

fn exchange_rpc_error(err: ExchangeRpcError) -> RpcError {
    let (code, message, data) = match err {
        ExchangeRpcError::ExchangeNotFound => (EXCHANGE_NOT_FOUND, "Exchange not found", None),
        ExchangeRpcError::InsufficientLiquidity => {
            (INSUFFICIENT_LIQUIDITY, "Insufficient liquidity", None)
        },
        ExchangeRpcError::ArithmeticOverflow => (ARITHMETIC_OVERFLOW, "Arithmetic overflow", None),
        ExchangeRpcError::InvalidAmount => (INVALID_AMOUNT, "Invalid amount", None),
        ExchangeRpcError::Unexpected(msg) => (RUNTIME_ERROR, "Runtime error", Some(msg)),
    };
    CallError::Custom(ErrorObject::owned(code, message, data)).into()
}
