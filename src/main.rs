use log::{error, Level};
use syncdapp::{
    app::{App, AppProps},
    ApproverConfig,
};

fn main() {
    _ = console_log::init_with_level(Level::Debug);
    console_error_panic_hook::set_once();

    match ApproverConfig::mainnet() {
        Ok(config) => {
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
        Err(err) => error!("Invalid approver configuration: {err}"),
    }
}
