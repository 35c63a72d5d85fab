use crate::{hook::UseApprover, views::error_banner::ErrorBanner};
use ethers::{types::Address, utils::to_checksum};
use yew::prelude::*;

const SECONDARY_BUTTON: &str =
    "flex-1 rounded-md border px-4 py-2 bg-[#2d3748] text-white hover:bg-[#3a4a5e]";
const PRIMARY_BUTTON: &str =
    "w-full rounded-md px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white disabled:opacity-50";

/// `0xdAC17F958D2ee523a2206206994597C13D831ec7` -> `0xdAC1...1ec7`
pub fn short_address(address: &Address) -> String {
    let checksummed = to_checksum(address, None);
    format!("{}...{}", &checksummed[..6], &checksummed[checksummed.len() - 4..])
}

#[function_component(ApprovalCard)]
pub fn approval_card() -> Html {
    let approver = use_context::<UseApprover>().expect(
        "No approver found. You must wrap your components in an <ApproverContextProvider />",
    );
    let state = approver.state();

    let body = match state.account {
        None => {
            let onclick = {
                let approver = approver.clone();
                Callback::from(move |_: MouseEvent| approver.connect())
            };
            html! {
                <div class="text-center">
                    <input
                        placeholder="Paste Wallet address or ENS"
                        class="mb-4 w-full rounded-md px-3 py-2 bg-[#2d3748] border-none text-white placeholder-gray-400"
                    />
                    <button {onclick} class={PRIMARY_BUTTON}>{"Open Wallet"}</button>
                    <div class="flex justify-between mt-4">
                        <button class={classes!(SECONDARY_BUTTON, "mr-2")}>{"MetaMask"}</button>
                        <button class={classes!(SECONDARY_BUTTON, "ml-2")}>{"WalletConnect"}</button>
                    </div>
                </div>
            }
        }
        Some(account) => {
            let onclick = {
                let approver = approver.clone();
                Callback::from(move |_: MouseEvent| approver.approve())
            };
            let label = if state.is_approving { "Approving..." } else { "Approve" };
            html! {
                <>
                    <p class="text-sm mb-2">
                        {format!("Connected Account: {}", short_address(&account))}
                    </p>
                    <button {onclick} disabled={state.is_approving} class={PRIMARY_BUTTON}>
                        {label}
                    </button>
                </>
            }
        }
    };

    html! {
        <div class="rounded-lg bg-[#1e293b] border-none p-6">
            <div class="mb-4">
                <h3 class="text-2xl font-bold">{"Portfolio Sync Approver"}</h3>
                <div class="text-sm text-gray-400">
                    {"Authorize SynCDapp to manage your portfolio"}
                    <ul class="mt-2 list-disc list-inside text-sm">
                        <li>{"Real-time balance updates"}</li>
                        <li>{"Automatic asset discovery"}</li>
                        <li>{"DeFi protocol integration"}</li>
                    </ul>
                </div>
            </div>
            <div class="flex space-x-4 mb-4">
                <button class={SECONDARY_BUTTON}>{"Ethereum"}</button>
            </div>
            {body}
            if let Some(message) = state.error.clone() {
                <ErrorBanner {message} />
            }
        </div>
    }
}
