use crate::{
    approver::{Approver, Dispatch},
    config::ApproverConfig,
    state::{ApproverAction, ApproverState},
    wallet::InjectedWallet,
};
use log::debug;
use std::rc::Rc;
use yew::{
    function_component, html, platform::spawn_local, prelude::*, Children, ContextProvider, Html,
    Properties,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: ApproverConfig,
    #[prop_or_default]
    pub children: Children,
}

/// Wrap the page in it to get `use_context::<UseApprover>()` in every child
#[function_component(ApproverContextProvider)]
pub fn approver_context_provider(props: &Props) -> Html {
    let approver = use_approver(props.config.clone());

    html! {
        <ContextProvider<UseApprover> context={approver}>
            {for props.children.iter()}
        </ContextProvider<UseApprover>>
    }
}

/// Reports approval progress into the page reducer, notices go to `window.alert`
#[derive(Clone)]
struct ReducerUi {
    dispatcher: UseReducerDispatcher<ApproverState>,
}

impl Dispatch for ReducerUi {
    fn dispatch(&self, action: ApproverAction) {
        self.dispatcher.dispatch(action);
    }

    fn notify(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

#[derive(Clone)]
pub struct UseApprover {
    state: UseReducerHandle<ApproverState>,
    config: Rc<ApproverConfig>,
}

impl PartialEq for UseApprover {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state && self.config == other.config
    }
}

impl UseApprover {
    /// Requests accounts from the injected wallet, then checks its network
    pub fn connect(&self) {
        let approver = self.approver();
        spawn_local(async move { approver.connect().await });
    }

    /// Sends the allowance transaction and follows it until it is mined
    pub fn approve(&self) {
        let approver = self.approver();
        spawn_local(async move { approver.approve().await });
    }

    pub fn state(&self) -> &ApproverState {
        &self.state
    }

    fn approver(&self) -> Approver<InjectedWallet, ReducerUi> {
        let ui = ReducerUi { dispatcher: self.state.dispatcher() };
        Approver::new(InjectedWallet::new(), ui, (*self.config).clone())
    }
}

#[hook]
pub fn use_approver(config: ApproverConfig) -> UseApprover {
    let state = use_reducer(ApproverState::default);
    let config = use_memo((), move |_| config);

    let approver = UseApprover { state, config };

    {
        let approver = approver.clone();
        yew_hooks::use_effect_once(move || {
            debug!("Connecting on first render");
            approver.connect();
            || {}
        });
    }

    approver
}
