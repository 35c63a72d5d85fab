use ethers::{
    types::{Address, U256},
    utils::{parse_units, ConversionError},
};
use std::str::FromStr;
use thiserror::Error;

/// USDT on Ethereum mainnet
pub const TOKEN_ADDRESS: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

pub const SPENDER_ADDRESS: &str = "0x69403ED292D063d632138CaDD1E42b5f40478B2a";

/// One million tokens, in whole units
pub const APPROVAL_AMOUNT: &str = "1000000";

pub const TOKEN_DECIMALS: u32 = 6;

pub const MAINNET_CHAIN_ID: u64 = 1;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {name} address {value}")]
    InvalidAddress { name: &'static str, value: &'static str },

    #[error(transparent)]
    ConversionError(#[from] ConversionError),
}

/// Everything the approval flow needs to know about the token it targets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApproverConfig {
    pub token: Address,
    pub spender: Address,
    /// Allowance in token base units
    pub amount: U256,
    pub chain_id: u64,
}

impl ApproverConfig {
    pub fn mainnet() -> Result<Self, ConfigError> {
        Ok(Self {
            token: parse_address("token", TOKEN_ADDRESS)?,
            spender: parse_address("spender", SPENDER_ADDRESS)?,
            amount: parse_units(APPROVAL_AMOUNT, TOKEN_DECIMALS)?.into(),
            chain_id: MAINNET_CHAIN_ID,
        })
    }
}

fn parse_address(name: &'static str, value: &'static str) -> Result<Address, ConfigError> {
    Address::from_str(value).map_err(|_| ConfigError::InvalidAddress { name, value })
}
