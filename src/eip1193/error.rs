use ethers::providers::{JsonRpcError, ProviderError, RpcError};
use gloo_utils::format::JsValueSerdeExt;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Error thrown while talking to the injected provider
#[derive(Error, Debug)]
pub enum Eip1193Error {
    /// A rejected promise that carries no JSON-RPC error shape
    #[error("{0}")]
    JsValueError(String),

    /// Thrown if no window.ethereum is found in DOM
    #[error("No ethereum found")]
    JsNoEthereum,

    #[error("Cannot parse ethereum response")]
    JsParseError,

    /// The wallet answered with a JSON-RPC error (user rejection, gas, revert...)
    #[error(transparent)]
    JsonRpcError(#[from] JsonRpcError),

    /// Serde JSON Error
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error("Communication error")]
    CommunicationError,
}

impl RpcError for Eip1193Error {
    fn as_error_response(&self) -> Option<&JsonRpcError> {
        match self {
            Eip1193Error::JsonRpcError(e) => Some(e),
            _ => None,
        }
    }

    fn is_error_response(&self) -> bool {
        self.as_error_response().is_some()
    }

    fn as_serde_error(&self) -> Option<&serde_json::Error> {
        match self {
            Eip1193Error::SerdeJson(e) => Some(e),
            _ => None,
        }
    }

    fn is_serde_error(&self) -> bool {
        self.as_serde_error().is_some()
    }
}

impl From<JsValue> for Eip1193Error {
    fn from(src: JsValue) -> Self {
        if let Ok(message) = src.into_serde::<JsonRpcError>() {
            return Eip1193Error::JsonRpcError(message);
        }

        // `Error` instances keep `message` non-enumerable, JSON.stringify drops it
        let code = js_field(&src, "code").and_then(|code| code.as_f64());
        let message = js_field(&src, "message").and_then(|message| message.as_string());

        match (code, message) {
            (Some(code), Some(message)) => {
                // MetaMask wraps node failures, the node's own error sits in `data`
                let data = js_field(&src, "data").and_then(|data| data.into_serde().ok());
                Eip1193Error::JsonRpcError(JsonRpcError { code: code as i64, message, data })
            }
            (None, Some(message)) => Eip1193Error::JsValueError(message),
            _ => {
                let text = src.as_string().unwrap_or_else(|| format!("{:?}", src));
                Eip1193Error::JsValueError(text)
            }
        }
    }
}

fn js_field(src: &JsValue, name: &str) -> Option<JsValue> {
    if !src.is_object() {
        return None;
    }
    js_sys::Reflect::get(src, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

impl From<Eip1193Error> for ProviderError {
    fn from(src: Eip1193Error) -> Self {
        ProviderError::JsonRpcClientError(Box::new(src))
    }
}
