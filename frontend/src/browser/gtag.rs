use js_sys::{Array, Date, Function, Reflect, JSON};
use log::warn;
use shared::analytics::{AnalyticsSink, EventParams, GtagArg, GtagCommand};
use wasm_bindgen::{JsCast, JsValue};

const DATA_LAYER: &str = "dataLayer";
const GTAG: &str = "gtag";

/// Tracking handle backed by `window.dataLayer` and `window.gtag`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GtagSink;

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn gtag_function(window: &web_sys::Window) -> Option<Function> {
    Reflect::get(window, &JsValue::from_str(GTAG))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn inject_loader(loader_url: &str) -> Result<(), JsValue> {
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

    let script: web_sys::HtmlScriptElement = document
        .create_element("script")?
        .dyn_into()
        .map_err(JsValue::from)?;
    script.set_async(true);
    script.set_src(loader_url);
    head.append_child(&script)?;

    let data_layer = Reflect::get(&window, &JsValue::from_str(DATA_LAYER))?;
    if !Array::is_array(&data_layer) {
        Reflect::set(&window, &JsValue::from_str(DATA_LAYER), &Array::new())?;
    }
    if gtag_function(&window).is_none() {
        // gtag.js only understands the `arguments` object, not an array
        let gtag = Function::new_no_args("window.dataLayer.push(arguments);");
        Reflect::set(&window, &JsValue::from_str(GTAG), &gtag)?;
    }
    Ok(())
}

fn to_js(params: &EventParams) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(params).map_err(|e| JsValue::from_str(&e.to_string()))?;
    JSON::parse(&json)
}

fn to_js_arg(arg: &GtagArg<'_>) -> Result<JsValue, JsValue> {
    match arg {
        GtagArg::Text(text) => Ok(JsValue::from_str(text)),
        GtagArg::Timestamp(timestamp) => Ok(Date::new(&JsValue::from_f64(
            timestamp.timestamp_millis() as f64,
        ))
        .into()),
        GtagArg::Params(params) => to_js(params),
    }
}

fn call_gtag(command: &GtagCommand) -> Result<(), JsValue> {
    let window = window()?;
    let gtag = gtag_function(&window).ok_or_else(|| JsValue::from_str("gtag is not installed"))?;

    let args = Array::new();
    for arg in command.arguments() {
        args.push(&to_js_arg(&arg)?);
    }

    gtag.apply(&JsValue::NULL, &args)?;
    Ok(())
}

impl AnalyticsSink for GtagSink {
    fn is_installed(&self) -> bool {
        web_sys::window()
            .and_then(|window| gtag_function(&window))
            .is_some()
    }

    fn install(&self, loader_url: &str) {
        if let Err(e) = inject_loader(loader_url) {
            warn!("Failed to install gtag: {:?}", e);
        }
    }

    fn push(&self, command: GtagCommand) {
        if let Err(e) = call_gtag(&command) {
            warn!("gtag {} call failed: {:?}", command.command(), e);
        }
    }
}
