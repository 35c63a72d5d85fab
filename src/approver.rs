use crate::{
    config::ApproverConfig,
    error::{ApprovalFailure, WalletError},
    state::ApproverAction,
    wallet::Wallet,
};
use ethers::types::U256;
use log::{debug, error, info, warn};

pub const NO_WALLET_MESSAGE: &str =
    "No Ethereum wallet detected. Please install MetaMask or a compatible wallet.";
pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect wallet. Please try again.";
pub const WRONG_NETWORK_MESSAGE: &str = "Please switch to Ethereum Mainnet";
pub const NOT_CONNECTED_MESSAGE: &str = "Please connect to an Ethereum wallet!";
pub const CONFIRMED_MESSAGE: &str = "Approval transaction confirmed!";

/// Where the approval flow reports to: state changes and blocking user notices
pub trait Dispatch {
    fn dispatch(&self, action: ApproverAction);

    fn notify(&self, message: &str);
}

/// Connects to the wallet and submits the fixed allowance
pub struct Approver<W, D> {
    wallet: W,
    ui: D,
    config: ApproverConfig,
}

impl<W: Wallet, D: Dispatch> Approver<W, D> {
    pub fn new(wallet: W, ui: D, config: ApproverConfig) -> Self {
        Self { wallet, ui, config }
    }

    pub async fn connect(&self) {
        if !self.wallet.is_available() {
            self.raise(NO_WALLET_MESSAGE);
            return;
        }

        let first = match self.wallet.request_accounts().await {
            Ok(accounts) => accounts.first().copied(),
            Err(err) => {
                error!("Error connecting to wallet: {err}");
                self.raise(CONNECT_FAILED_MESSAGE);
                return;
            }
        };

        match first {
            Some(account) => {
                info!("Connected account {account:?}");
                self.ui.dispatch(ApproverAction::Connected(account));
                self.check_network().await;
            }
            None => {
                error!("Error connecting to wallet: no account returned");
                self.raise(CONNECT_FAILED_MESSAGE);
            }
        }
    }

    pub async fn check_network(&self) {
        if !self.wallet.is_available() {
            return;
        }

        match self.wallet.chain_id().await {
            Ok(chain_id) if chain_id == U256::from(self.config.chain_id) => {
                debug!("Wallet is on chain {chain_id}");
                self.ui.dispatch(ApproverAction::ErrorCleared);
            }
            Ok(chain_id) => {
                warn!("Wallet is on chain {chain_id}, expected {}", self.config.chain_id);
                self.raise(WRONG_NETWORK_MESSAGE);
            }
            Err(err) => error!("Error reading chain id: {err}"),
        }
    }

    pub async fn approve(&self) {
        if !self.wallet.is_available() {
            self.raise(NOT_CONNECTED_MESSAGE);
            return;
        }

        self.ui.dispatch(ApproverAction::ApprovalStarted);
        self.ui.dispatch(ApproverAction::ErrorCleared);

        if let Err(err) = self.submit_approval().await {
            error!("Error during approval: {err:?}");
            self.raise(&ApprovalFailure::from(&err).to_string());
        }

        self.ui.dispatch(ApproverAction::ApprovalFinished);
    }

    async fn submit_approval(&self) -> Result<(), WalletError> {
        let tx_hash = self
            .wallet
            .send_approval(self.config.token, self.config.spender, self.config.amount)
            .await?;
        info!("Transaction Hash: {tx_hash:?}");
        self.ui.notify(&format!("Approval transaction sent! Hash: {tx_hash:?}"));

        self.wallet.wait_for_confirmation(tx_hash).await?;
        info!("Approval {tx_hash:?} confirmed");
        self.ui.notify(CONFIRMED_MESSAGE);
        Ok(())
    }

    fn raise(&self, message: &str) {
        self.ui.dispatch(ApproverAction::ErrorRaised(message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ApproverState;
    use async_trait::async_trait;
    use ethers::types::{Address, TxHash};
    use futures::executor::block_on;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Default)]
    struct Recorder {
        state: RefCell<ApproverState>,
        actions: RefCell<Vec<ApproverAction>>,
        notices: RefCell<Vec<String>>,
    }

    impl Recorder {
        fn state(&self) -> ApproverState {
            self.state.borrow().clone()
        }
    }

    impl Dispatch for Rc<Recorder> {
        fn dispatch(&self, action: ApproverAction) {
            self.actions.borrow_mut().push(action.clone());
            self.state.borrow_mut().apply(action);
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_owned());
        }
    }

    struct MockWallet {
        available: bool,
        accounts: Result<Vec<Address>, WalletError>,
        chain_id: U256,
        approval: Result<TxHash, WalletError>,
        confirmation: Result<(), WalletError>,
        ui: Rc<Recorder>,
        calls: RefCell<Vec<&'static str>>,
        approving_seen: RefCell<Vec<bool>>,
    }

    impl MockWallet {
        fn new(ui: &Rc<Recorder>) -> Self {
            Self {
                available: true,
                accounts: Ok(vec![account(1), account(2)]),
                chain_id: U256::one(),
                approval: Ok(TxHash::repeat_byte(0xab)),
                confirmation: Ok(()),
                ui: ui.clone(),
                calls: RefCell::default(),
                approving_seen: RefCell::default(),
            }
        }

        fn record(&self, call: &'static str) {
            self.calls.borrow_mut().push(call);
            self.approving_seen.borrow_mut().push(self.ui.state().is_approving);
        }
    }

    #[async_trait(?Send)]
    impl Wallet for Rc<MockWallet> {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
            self.record("request_accounts");
            self.accounts.clone()
        }

        async fn chain_id(&self) -> Result<U256, WalletError> {
            self.record("chain_id");
            Ok(self.chain_id)
        }

        async fn send_approval(
            &self,
            _token: Address,
            _spender: Address,
            _amount: U256,
        ) -> Result<TxHash, WalletError> {
            self.record("send_approval");
            self.approval.clone()
        }

        async fn wait_for_confirmation(&self, _tx_hash: TxHash) -> Result<(), WalletError> {
            self.record("wait_for_confirmation");
            self.confirmation.clone()
        }
    }

    fn account(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    type TestApprover = Approver<Rc<MockWallet>, Rc<Recorder>>;

    fn approver(wallet: MockWallet, ui: &Rc<Recorder>) -> (TestApprover, Rc<MockWallet>) {
        let wallet = Rc::new(wallet);
        let config = ApproverConfig::mainnet().unwrap();
        (Approver::new(wallet.clone(), ui.clone(), config), wallet)
    }

    #[test]
    fn connect_without_provider_reports_missing_wallet() {
        let ui = Rc::new(Recorder::default());
        let mut wallet = MockWallet::new(&ui);
        wallet.available = false;
        let (approver, wallet) = approver(wallet, &ui);

        block_on(approver.connect());

        let state = ui.state();
        assert_eq!(state.error.as_deref(), Some(NO_WALLET_MESSAGE));
        assert_eq!(state.account, None);
        assert!(wallet.calls.borrow().is_empty());
    }

    #[test]
    fn connect_stores_first_account_then_checks_network() {
        let ui = Rc::new(Recorder::default());
        let (approver, wallet) = approver(MockWallet::new(&ui), &ui);

        block_on(approver.connect());

        assert_eq!(ui.state().account, Some(account(1)));
        assert_eq!(*wallet.calls.borrow(), vec!["request_accounts", "chain_id"]);
        assert_eq!(
            *ui.actions.borrow(),
            vec![ApproverAction::Connected(account(1)), ApproverAction::ErrorCleared]
        );
    }

    #[test]
    fn connect_on_wrong_chain_asks_to_switch() {
        let ui = Rc::new(Recorder::default());
        let mut wallet = MockWallet::new(&ui);
        wallet.chain_id = U256::from(5);
        let (approver, _) = approver(wallet, &ui);

        block_on(approver.connect());

        let state = ui.state();
        assert_eq!(state.account, Some(account(1)));
        assert_eq!(state.error.as_deref(), Some(WRONG_NETWORK_MESSAGE));
    }

    #[test]
    fn mainnet_check_clears_stale_error() {
        let ui = Rc::new(Recorder::default());
        ui.dispatch(ApproverAction::ErrorRaised(WRONG_NETWORK_MESSAGE.to_owned()));
        let (approver, _) = approver(MockWallet::new(&ui), &ui);

        block_on(approver.check_network());

        assert_eq!(ui.state().error, None);
    }

    #[test]
    fn rejected_account_request_reports_generic_failure() {
        let ui = Rc::new(Recorder::default());
        let mut wallet = MockWallet::new(&ui);
        wallet.accounts = Err(WalletError::Rpc {
            code: 4001,
            message: "User rejected the request.".to_owned(),
            cause: None,
        });
        let (approver, wallet) = approver(wallet, &ui);

        block_on(approver.connect());

        let state = ui.state();
        assert_eq!(state.error.as_deref(), Some(CONNECT_FAILED_MESSAGE));
        assert_eq!(state.account, None);
        assert_eq!(*wallet.calls.borrow(), vec!["request_accounts"]);
    }

    #[test]
    fn empty_account_list_is_a_failed_connection() {
        let ui = Rc::new(Recorder::default());
        let mut wallet = MockWallet::new(&ui);
        wallet.accounts = Ok(Vec::new());
        let (approver, _) = approver(wallet, &ui);

        block_on(approver.connect());

        assert_eq!(ui.state().error.as_deref(), Some(CONNECT_FAILED_MESSAGE));
        assert_eq!(ui.state().account, None);
    }

    #[test]
    fn approve_without_provider_aborts() {
        let ui = Rc::new(Recorder::default());
        let mut wallet = MockWallet::new(&ui);
        wallet.available = false;
        let (approver, wallet) = approver(wallet, &ui);

        block_on(approver.approve());

        assert_eq!(ui.state().error.as_deref(), Some(NOT_CONNECTED_MESSAGE));
        assert!(!ui.actions.borrow().contains(&ApproverAction::ApprovalStarted));
        assert!(wallet.calls.borrow().is_empty());
    }

    #[test]
    fn successful_approval_notifies_hash_then_confirmation() {
        let ui = Rc::new(Recorder::default());
        ui.dispatch(ApproverAction::ErrorRaised("stale".to_owned()));
        let (approver, wallet) = approver(MockWallet::new(&ui), &ui);

        block_on(approver.approve());

        let state = ui.state();
        assert_eq!(state.error, None);
        assert!(!state.is_approving);
        assert_eq!(
            *ui.notices.borrow(),
            vec![
                format!("Approval transaction sent! Hash: {:?}", TxHash::repeat_byte(0xab)),
                CONFIRMED_MESSAGE.to_owned(),
            ]
        );
        assert_eq!(*wallet.calls.borrow(), vec!["send_approval", "wait_for_confirmation"]);
    }

    #[test]
    fn approving_flag_is_set_only_while_approval_runs() {
        for confirmation in [Ok(()), Err(WalletError::Failed("reverted".to_owned()))] {
            let ui = Rc::new(Recorder::default());
            let mut wallet = MockWallet::new(&ui);
            wallet.confirmation = confirmation;
            let (approver, wallet) = approver(wallet, &ui);

            assert!(!ui.state().is_approving);
            block_on(approver.approve());

            assert_eq!(*wallet.approving_seen.borrow(), vec![true, true]);
            assert!(!ui.state().is_approving);
            assert_eq!(ui.actions.borrow().first(), Some(&ApproverAction::ApprovalStarted));
            assert_eq!(ui.actions.borrow().last(), Some(&ApproverAction::ApprovalFinished));
        }
    }

    #[test]
    fn user_rejection_is_reported() {
        let ui = Rc::new(Recorder::default());
        let mut wallet = MockWallet::new(&ui);
        wallet.approval = Err(WalletError::Rpc {
            code: 4001,
            message: "MetaMask Tx Signature: User denied transaction signature.".to_owned(),
            cause: None,
        });
        let (approver, _) = approver(wallet, &ui);

        block_on(approver.approve());

        let state = ui.state();
        assert_eq!(state.error.as_deref(), Some("Transaction rejected by user."));
        assert!(!state.is_approving);
        assert!(ui.notices.borrow().is_empty());
    }

    #[test]
    fn insufficient_gas_funds_are_reported() {
        let ui = Rc::new(Recorder::default());
        let mut wallet = MockWallet::new(&ui);
        wallet.approval = Err(WalletError::Rpc {
            code: -32000,
            message: "insufficient funds for gas * price + value".to_owned(),
            cause: None,
        });
        let (approver, _) = approver(wallet, &ui);

        block_on(approver.approve());

        assert_eq!(ui.state().error.as_deref(), Some("Insufficient ETH for gas."));
    }

    #[test]
    fn failed_confirmation_keeps_sent_notice_and_reports_error() {
        let ui = Rc::new(Recorder::default());
        let mut wallet = MockWallet::new(&ui);
        wallet.confirmation = Err(WalletError::Failed("Transaction was dropped".to_owned()));
        let (approver, _) = approver(wallet, &ui);

        block_on(approver.approve());

        assert_eq!(ui.state().error.as_deref(), Some("Transaction was dropped"));
        assert_eq!(ui.notices.borrow().len(), 1);
    }
}
