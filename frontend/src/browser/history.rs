use std::cell::Cell;

use js_sys::{Object, Reflect};
use log::warn;
use shared::routing::EntryKey;
use wasm_bindgen::{JsCast, JsValue};

const ENTRY_KEY: &str = "__ga_router_entry";

thread_local! {
    static NEXT_ENTRY: Cell<u32> = const { Cell::new(0) };
}

fn fresh_key() -> String {
    let sequence = NEXT_ENTRY.with(|next| {
        let value = next.get();
        next.set(value + 1);
        value
    });
    format!("{}-{}", js_sys::Date::now() as u64, sequence)
}

fn read_or_assign() -> Result<EntryKey, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let history = window.history()?;
    let state = history.state()?;

    if state.is_object() {
        if let Some(key) = Reflect::get(&state, &JsValue::from_str(ENTRY_KEY))?.as_string() {
            return Ok(EntryKey(key));
        }
    } else if !state.is_null() && !state.is_undefined() {
        // a primitive state we cannot extend without losing it
        return Ok(EntryKey(fresh_key()));
    }

    let key = fresh_key();
    let next = Object::new();
    if state.is_object() {
        Object::assign(&next, state.unchecked_ref::<Object>());
    }
    Reflect::set(&next, &JsValue::from_str(ENTRY_KEY), &JsValue::from_str(&key))?;
    history.replace_state(&next, "")?;
    Ok(EntryKey(key))
}

/// Key of the current history entry.
///
/// The key is written into `history.state` next to whatever the router keeps
/// there, so back/forward lands on the same key again. A freshly pushed
/// entry has no key yet and gets a new one.
pub fn current_entry_key() -> EntryKey {
    read_or_assign().unwrap_or_else(|e| {
        warn!("Cannot read history state: {:?}", e);
        EntryKey(fresh_key())
    })
}
