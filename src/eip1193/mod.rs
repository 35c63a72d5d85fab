pub mod error;
pub mod ethereum;
pub mod request;

use crate::eip1193::{error::Eip1193Error, ethereum::InjectedProvider, request::RequestArguments};
use async_trait::async_trait;
use ethers::providers::JsonRpcClient;
use futures::channel::oneshot;
use gloo_utils::format::JsValueSerdeExt;
use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Default)]
// The JS provider handle is neither Send nor Sync, while `JsonRpcClient` demands both.
// Nothing is stored here; `window.ethereum` is looked up again for every request.
pub struct Eip1193 {}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl JsonRpcClient for Eip1193 {
    type Error = Eip1193Error;

    /// Sends the request via `window.ethereum` in Js
    async fn request<T: Serialize + Send + Sync, R: DeserializeOwned + Send>(
        &self,
        method: &str,
        params: T,
    ) -> Result<R, Self::Error> {
        let (sender, receiver) = oneshot::channel();

        debug!("eip1193 -> {method}");
        let arguments = RequestArguments::new(method, to_js_params(params)?);
        spawn_local(async move {
            let res = match InjectedProvider::lookup() {
                Ok(provider) => match provider.request(arguments).await {
                    Ok(response) => stringify(&response),
                    Err(err) => Err(err.into()),
                },
                Err(err) => Err(err),
            };
            _ = sender.send(res);
        });

        let res = receiver.await.map_err(|_| Eip1193Error::CommunicationError)?;
        Ok(serde_json::from_str(&res?)?)
    }
}

impl Eip1193 {
    pub fn new() -> Self {
        Eip1193 {}
    }

    pub fn is_available() -> bool {
        InjectedProvider::lookup().is_ok()
    }

    /// `Some(true)` when the injected wallet announces itself as MetaMask
    pub fn is_metamask() -> Option<bool> {
        InjectedProvider::lookup().ok().and_then(|provider| provider.is_metamask())
    }
}

fn stringify(response: &JsValue) -> Result<String, Eip1193Error> {
    if response.is_undefined() {
        return Ok("null".to_owned());
    }
    js_sys::JSON::stringify(response)?.as_string().ok_or(Eip1193Error::JsParseError)
}

/// Turns ethers' positional params into the JS array the wallet expects.
/// Anything that is not a list (ethers sends `()` as `null`) becomes `[]`.
fn to_js_params<T: Serialize>(params: T) -> Result<JsValue, Eip1193Error> {
    let value = JsValue::from_serde(&params)?;
    if !js_sys::Array::is_array(&value) {
        return Ok(js_sys::Array::new().into());
    }

    let params = js_sys::Array::from(&value);
    for param in params.iter() {
        if param.is_object() {
            normalize_transaction_type(&param)?;
        }
    }
    Ok(params.into())
}

/// ethers serializes typed transactions as `0x02`, MetaMask only accepts `0x2`
fn normalize_transaction_type(transaction: &JsValue) -> Result<(), Eip1193Error> {
    let key = JsValue::from_str("type");
    let Some(kind) = js_sys::Reflect::get(transaction, &key)?.as_string() else {
        return Ok(());
    };
    match kind.strip_prefix("0x0") {
        Some(digit) if !digit.is_empty() => {
            js_sys::Reflect::set(transaction, &key, &JsValue::from_str(&format!("0x{digit}")))?;
            Ok(())
        }
        _ => Ok(()),
    }
}
