use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

/// `RequestArguments` object handed to `window.ethereum.request`
#[wasm_bindgen]
#[derive(Debug)]
pub struct RequestArguments {
    method: String,
    params: JsValue,
}

#[wasm_bindgen]
impl RequestArguments {
    pub(crate) fn new(method: &str, params: JsValue) -> RequestArguments {
        RequestArguments { method: method.to_owned(), params }
    }

    #[wasm_bindgen(getter)]
    pub fn method(&self) -> String {
        self.method.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn params(&self) -> JsValue {
        self.params.clone()
    }
}
