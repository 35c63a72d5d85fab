use crate::{contract::Erc20Token, eip1193::Eip1193, error::WalletError};
use async_trait::async_trait;
use ethers::{
    contract::ContractError,
    providers::{Middleware, PendingTransaction, Provider, ProviderError, RpcError},
    types::{Address, TxHash, U256},
};
use log::{debug, error};
use serde_json::Value;
use std::sync::Arc;

type InjectedMiddleware = Provider<Eip1193>;

/// The calls the approval page makes against a wallet
#[async_trait(?Send)]
pub trait Wallet {
    /// Whether a provider is present at all. Checked before every operation.
    fn is_available(&self) -> bool;

    /// `eth_requestAccounts`, prompting the user when the page is not authorized yet
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    async fn chain_id(&self) -> Result<U256, WalletError>;

    /// Signs and broadcasts `approve(spender, amount)` on `token`, returning once the
    /// wallet hands back the transaction hash
    async fn send_approval(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash, WalletError>;

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<(), WalletError>;
}

/// Wallet injected by a browser extension at `window.ethereum`
#[derive(Clone, Debug)]
pub struct InjectedWallet {
    provider: InjectedMiddleware,
}

impl Default for InjectedWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl InjectedWallet {
    pub fn new() -> Self {
        Self { provider: Provider::new(Eip1193::new()) }
    }

    /// Account the wallet signs with, the same one a `getSigner()` would pick
    async fn signer(&self) -> Result<Address, WalletError> {
        let accounts = self.provider.get_accounts().await?;
        accounts
            .first()
            .copied()
            .ok_or_else(|| WalletError::Failed("No authorized account in wallet".to_owned()))
    }
}

#[async_trait(?Send)]
impl Wallet for InjectedWallet {
    fn is_available(&self) -> bool {
        Eip1193::is_available()
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        if let Some(metamask) = Eip1193::is_metamask() {
            debug!("Injected provider, MetaMask: {metamask}");
        }
        Ok(self.provider.request("eth_requestAccounts", ()).await?)
    }

    async fn chain_id(&self) -> Result<U256, WalletError> {
        Ok(self.provider.get_chainid().await?)
    }

    async fn send_approval(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash, WalletError> {
        let from = self.signer().await?;
        let contract = Erc20Token::new(token, Arc::new(self.provider.clone()));
        let call = contract.approve(spender, amount).from(from);
        let pending = call.send().await?;
        Ok(*pending)
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<(), WalletError> {
        match PendingTransaction::new(tx_hash, &self.provider).await? {
            Some(receipt) => {
                debug!("Approval mined in block {:?}", receipt.block_number);
                Ok(())
            }
            None => {
                error!("Transaction {tx_hash:?} dropped before confirmation");
                Err(WalletError::Failed("Transaction was dropped from the mempool".to_owned()))
            }
        }
    }
}

impl From<ProviderError> for WalletError {
    fn from(src: ProviderError) -> Self {
        match src {
            ProviderError::JsonRpcClientError(err) => match err.as_error_response() {
                Some(response) => WalletError::Rpc {
                    code: response.code,
                    message: response.message.clone(),
                    cause: response.data.as_ref().and_then(nested_message),
                },
                None => WalletError::Failed(err.to_string()),
            },
            other => WalletError::Failed(other.to_string()),
        }
    }
}

/// Node message a wallet tucked into `data`, e.g. MetaMask's
/// `{"message": "..."}` or `{"originalError": {"message": "..."}}`
fn nested_message(data: &Value) -> Option<String> {
    match data {
        Value::String(message) => Some(message.clone()),
        Value::Object(fields) => match fields.get("message") {
            Some(Value::String(message)) => Some(message.clone()),
            _ => fields.get("originalError").and_then(nested_message),
        },
        _ => None,
    }
}

impl From<ContractError<InjectedMiddleware>> for WalletError {
    fn from(src: ContractError<InjectedMiddleware>) -> Self {
        match src {
            ContractError::MiddlewareError { e } | ContractError::ProviderError { e } => e.into(),
            other => WalletError::Failed(other.to_string()),
        }
    }
}
