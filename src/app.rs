use crate::{
    config::ApproverConfig,
    hook::ApproverContextProvider,
    views::{approval_card::ApprovalCard, header::Header},
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ApproverConfig,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    html! {
        <ApproverContextProvider config={props.config.clone()}>
            <div class="min-h-screen bg-[#020817] text-white">
                <Header />
                <main class="container mx-auto px-4 py-8">
                    <h1 class="text-5xl font-bold text-center mb-4">{"Portfolio Tracker"}</h1>
                    <p class="text-center text-xl mb-8">
                        {"Seamlessly sync your portfolio directly with your personal wallet."}
                    </p>
                    <ApprovalCard />
                </main>
            </div>
        </ApproverContextProvider>
    }
}
