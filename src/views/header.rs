use crate::hook::UseApprover;
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let approver = use_context::<UseApprover>().expect(
        "No approver found. You must wrap your components in an <ApproverContextProvider />",
    );

    let label = if approver.state().is_connected() { "Connected" } else { "Connect" };
    let onclick = {
        let approver = approver.clone();
        Callback::from(move |_: MouseEvent| approver.connect())
    };

    html! {
        <header class="flex justify-between items-center p-4">
            <div class="flex items-center space-x-2">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="w-6 h-6"
                >
                    <circle cx="12" cy="12" r="10" />
                    <path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3" />
                    <path d="M12 17h.01" />
                </svg>
                <span class="font-bold text-xl">{"SynCDapp"}</span>
            </div>
            <button class="rounded-md border px-4 py-2 bg-[#1e293b] text-white hover:bg-[#2d3748]" {onclick}>
                {label}
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    class="ml-2 h-4 w-4 inline"
                >
                    <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
                    <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
                </svg>
            </button>
        </header>
    }
}
