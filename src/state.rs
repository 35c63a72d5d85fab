use ethers::types::Address;
use std::rc::Rc;
use yew::Reducible;

/// State of the approval page. Lives as long as the page, nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApproverState {
    pub account: Option<Address>,
    pub is_approving: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApproverAction {
    Connected(Address),
    ErrorRaised(String),
    ErrorCleared,
    ApprovalStarted,
    ApprovalFinished,
}

impl ApproverState {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn apply(&mut self, action: ApproverAction) {
        match action {
            ApproverAction::Connected(account) => self.account = Some(account),
            ApproverAction::ErrorRaised(message) => self.error = Some(message),
            ApproverAction::ErrorCleared => self.error = None,
            ApproverAction::ApprovalStarted => self.is_approving = true,
            ApproverAction::ApprovalFinished => self.is_approving = false,
        }
    }
}

impl Reducible for ApproverState {
    type Action = ApproverAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
