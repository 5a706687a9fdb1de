//! Field Extension SDK Bindings
//!
//! wasm-bindgen view of the host SDK injected into the widget's iframe, and the
//! `HostBoundary` the store talks to.

use leptos::task::spawn_local;
use serde_json::Value;
use step_store::{HostBoundary, InstanceParameters, Record, Subscription, ValueHandler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const SDK_GLOBAL: &str = "contentfulExtension";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = contentfulExtension, js_name = init)]
    fn init_extension(callback: &JsValue);

    /// SDK handle passed to the init callback
    #[derive(Clone)]
    pub type FieldExtensionSdk;

    #[wasm_bindgen(method, getter)]
    fn field(this: &FieldExtensionSdk) -> FieldApi;

    #[wasm_bindgen(method, getter)]
    fn window(this: &FieldExtensionSdk) -> WindowApi;

    #[wasm_bindgen(method, getter)]
    fn parameters(this: &FieldExtensionSdk) -> ParametersApi;

    #[derive(Clone)]
    type FieldApi;

    /// Returns the function that detaches `callback`
    #[wasm_bindgen(method, js_name = onValueChanged)]
    fn on_value_changed(this: &FieldApi, callback: &Closure<dyn FnMut(JsValue)>) -> js_sys::Function;

    #[wasm_bindgen(method, js_name = setValue)]
    fn set_value(this: &FieldApi, value: JsValue) -> js_sys::Promise;

    type WindowApi;

    #[wasm_bindgen(method, js_name = startAutoResizer)]
    fn start_auto_resizer(this: &WindowApi);

    type ParametersApi;

    #[wasm_bindgen(method, getter)]
    fn instance(this: &ParametersApi) -> JsValue;
}

/// Wait for the host to hand over the SDK, then run `on_ready` once
pub fn init(on_ready: impl FnOnce(FieldExtensionSdk) + 'static) -> Result<(), String> {
    let present = js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(SDK_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if !present {
        return Err(format!("window.{} is not loaded", SDK_GLOBAL));
    }

    let callback = Closure::once_into_js(move |sdk: JsValue| {
        log::info!("[SDK] Extension initialized");
        on_ready(sdk.unchecked_into());
    });
    init_extension(&callback);
    Ok(())
}

impl FieldExtensionSdk {
    /// Instance parameters, read once; absent parameters fall back to defaults
    pub fn instance_parameters(&self) -> Result<InstanceParameters, String> {
        let raw = self.parameters().instance();
        if raw.is_undefined() || raw.is_null() {
            return Ok(InstanceParameters::default());
        }
        serde_wasm_bindgen::from_value(raw).map_err(|e| e.to_string())
    }

    /// Let the iframe grow with its content
    pub fn start_auto_resizer(&self) {
        self.window().start_auto_resizer();
    }

    pub fn boundary(&self) -> SdkBoundary {
        SdkBoundary {
            field: self.field(),
        }
    }
}

/// Host field exposed through the SDK
#[derive(Clone)]
pub struct SdkBoundary {
    field: FieldApi,
}

fn to_json(raw: JsValue) -> Result<Value, String> {
    if raw.is_undefined() || raw.is_null() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(raw).map_err(|e| e.to_string())
}

impl HostBoundary for SdkBoundary {
    fn subscribe(&self, mut handler: ValueHandler) -> Subscription {
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| match to_json(raw) {
            Ok(value) => handler(value),
            Err(e) => log::warn!("[SDK] Unreadable field value: {}", e),
        });
        let detach = self.field.on_value_changed(&closure);

        Subscription::new(move || {
            if let Err(e) = detach.call0(&JsValue::NULL) {
                log::warn!("[SDK] Detach failed: {:?}", e);
            }
            drop(closure);
        })
    }

    fn submit(&self, list: &[Record]) {
        let value = match serde_wasm_bindgen::to_value(list) {
            Ok(value) => value,
            Err(e) => {
                log::error!("[SDK] Serialization error: {}", e);
                return;
            }
        };

        let promise = self.field.set_value(value);
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                // the host surfaces the failure; its next push carries the real value
                log::error!("[SDK] setValue rejected: {:?}", e);
            }
        });
    }
}
