use crate::eip1193::{error::Eip1193Error, request::RequestArguments};
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    /// An EIP-1193 provider object. Available by convention at `window.ethereum`
    pub(crate) type InjectedProvider;

    #[wasm_bindgen(catch, method)]
    pub(crate) async fn request(
        _: &InjectedProvider,
        args: RequestArguments,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter, js_name = "isMetaMask")]
    pub(crate) fn is_metamask(_: &InjectedProvider) -> Option<bool>;
}

impl InjectedProvider {
    /// Looks the provider up on `window`. Never cached, the extension may inject late.
    /// Fails with `JsNoEthereum` when no extension injected one, or when `window`
    /// itself is missing (web worker, non-browser host).
    pub(crate) fn lookup() -> Result<Self, Eip1193Error> {
        match get_provider_js() {
            Ok(Some(provider)) => Ok(provider),
            _ => Err(Eip1193Error::JsNoEthereum),
        }
    }
}

#[wasm_bindgen(inline_js = "export function get_provider_js() {return window.ethereum}")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn get_provider_js() -> Result<Option<InjectedProvider>, JsValue>;
}
