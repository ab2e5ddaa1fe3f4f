use wasm_bindgen::prelude::*;

use crate::codes;
use crate::translate::{self, decode};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}

fn envelope_result(result: Result<String, crate::Error>) -> JsValue {
    match result {
        Ok(json) => to_js(&serde_json::json!({"json": json})),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Render a precompiled result code; JS numbers are truncated to integers.
#[wasm_bindgen]
pub fn translate_code(code: f64) -> JsValue {
    envelope_result(translate::translate(code as i64))
}

/// Decode `0x`-prefixed chain output and render it.
#[wasm_bindgen]
pub fn decode_output(output: &str) -> JsValue {
    envelope_result(decode::decode_and_translate(output))
}

/// Message for a transaction execution-result code.
#[wasm_bindgen]
pub fn status_message(code: f64) -> String {
    translate::resolve_known_message(code as i64)
}

/// Every known code with its table, revision and message.
#[wasm_bindgen]
pub fn status_catalog() -> JsValue {
    match serde_json::to_value(codes::status_catalog()) {
        Ok(value) => to_js(&value),
        Err(e) => error_result(&e.to_string()),
    }
}
