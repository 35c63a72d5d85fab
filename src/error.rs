use thiserror::Error;

/// EIP-1193 `code` for a request the user declined in the wallet
pub const USER_REJECTED_CODE: i64 = 4001;

const INSUFFICIENT_FUNDS: &str = "insufficient funds";

/// Failure of a call made through the injected wallet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Wallet unavailable")]
    Unavailable,

    /// JSON-RPC error answered by the wallet or the node behind it. Wallets wrap node
    /// failures in a generic error, `cause` keeps the node's own message from `data`.
    #[error("{message}")]
    Rpc { code: i64, message: String, cause: Option<String> },

    #[error("{0}")]
    Failed(String),

    #[error("Unknown wallet error")]
    Unknown,
}

impl WalletError {
    pub fn code(&self) -> Option<i64> {
        match self {
            WalletError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            WalletError::Rpc { message, .. } | WalletError::Failed(message) => Some(message),
            WalletError::Unavailable | WalletError::Unknown => None,
        }
    }
}

/// What went wrong with an approval, phrased for the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApprovalFailure {
    #[error("Transaction rejected by user.")]
    UserRejected,

    #[error("Insufficient ETH for gas.")]
    InsufficientFunds,

    #[error("{0}")]
    Other(String),

    #[error("Error during approval. Check console for details.")]
    Undescribed,

    #[error("An unknown error occurred. Check console for details.")]
    Unknown,
}

impl From<&WalletError> for ApprovalFailure {
    fn from(err: &WalletError) -> Self {
        if err.code() == Some(USER_REJECTED_CODE) {
            return ApprovalFailure::UserRejected;
        }
        let (message, cause) = match err {
            WalletError::Unknown => return ApprovalFailure::Unknown,
            WalletError::Unavailable => return ApprovalFailure::Other(err.to_string()),
            WalletError::Rpc { message, cause, .. } => (message, cause.as_deref()),
            WalletError::Failed(message) => (message, None),
        };

        if message.contains(INSUFFICIENT_FUNDS)
            || cause.is_some_and(|cause| cause.contains(INSUFFICIENT_FUNDS))
        {
            ApprovalFailure::InsufficientFunds
        } else if message.is_empty() {
            ApprovalFailure::Undescribed
        } else {
            ApprovalFailure::Other(message.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rpc(code: i64, message: &str) -> WalletError {
        WalletError::Rpc { code, message: message.to_owned(), cause: None }
    }

    #[test]
    fn rejection_code_wins_over_message() {
        let failure = ApprovalFailure::from(&rpc(4001, "insufficient funds"));

        assert_eq!(failure, ApprovalFailure::UserRejected);
        assert_eq!(failure.to_string(), "Transaction rejected by user.");
    }

    #[test]
    fn insufficient_funds_is_matched_inside_longer_text() {
        let err = WalletError::Failed(
            "err: insufficient funds for gas * price + value: address 0x01".to_owned(),
        );

        let failure = ApprovalFailure::from(&err);

        assert_eq!(failure.to_string(), "Insufficient ETH for gas.");
    }

    #[test]
    fn insufficient_funds_is_matched_in_wrapped_cause() {
        let err = WalletError::Rpc {
            code: -32603,
            message: "Internal JSON-RPC error.".to_owned(),
            cause: Some("insufficient funds for gas * price + value".to_owned()),
        };

        assert_eq!(ApprovalFailure::from(&err), ApprovalFailure::InsufficientFunds);
    }

    #[test]
    fn unrelated_cause_keeps_top_level_message() {
        let err = WalletError::Rpc {
            code: -32603,
            message: "Internal JSON-RPC error.".to_owned(),
            cause: Some("nonce too low".to_owned()),
        };

        assert_eq!(
            ApprovalFailure::from(&err),
            ApprovalFailure::Other("Internal JSON-RPC error.".to_owned())
        );
    }

    #[test]
    fn other_messages_are_passed_through() {
        let failure = ApprovalFailure::from(&rpc(-32603, "execution reverted"));

        assert_eq!(failure, ApprovalFailure::Other("execution reverted".to_owned()));
    }

    #[test]
    fn empty_message_falls_back_to_console_hint() {
        let failure = ApprovalFailure::from(&WalletError::Failed(String::new()));

        assert_eq!(failure.to_string(), "Error during approval. Check console for details.");
    }

    #[test]
    fn unknown_error_has_generic_text() {
        let failure = ApprovalFailure::from(&WalletError::Unknown);

        assert_eq!(failure.to_string(), "An unknown error occurred. Check console for details.");
    }
}
