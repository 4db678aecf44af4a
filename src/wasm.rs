use crate::dictionary::Dictionary;
use crate::log::init_logger;
use crate::search::CryptogramSolver;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging and the panic hook.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info log level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    answer: String,
    ambiguity: usize,
    recognized_words: usize,
}

/// JS entry: (cryptogram: string, dictionary_text: string)
/// returns `{ answer, ambiguity, recognized_words }`
#[wasm_bindgen]
pub fn solve_cryptogram_wasm(cryptogram: &str, dictionary_text: &str) -> Result<JsValue, JsValue> {
    let dictionary = Dictionary::parse_from_str(dictionary_text);
    if dictionary.is_empty() {
        return Err(WasmError {
            code: "WASM001".to_string(),
            message: "the dictionary has no usable words".to_string(),
            help: Some("Pass a word list with one alphabetic word per line".to_string()),
        }
        .into());
    }

    // the solver is rebuilt per call; the page owns the word list
    let best = CryptogramSolver::new(dictionary).find_best(cryptogram);

    let result = WasmSolveResult {
        answer: best.answer,
        ambiguity: best.score.ambiguity,
        recognized_words: best.score.recognized_words,
    };

    to_value(&result).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            help: None,
        }
        .into()
    })
}

/// Parse a whitespace-separated word list the same way the solver does.
///
/// Returns the normalized words as a `JsValue` array of strings.
///
/// # Errors
/// Returns a `JsValue` error if the list can't be converted for JavaScript.
#[wasm_bindgen]
pub fn parse_dictionary(text: &str) -> Result<JsValue, JsValue> {
    let dictionary = Dictionary::parse_from_str(text);
    let words: Vec<&str> = dictionary.iter().collect();
    to_value(&words).map_err(|e| {
        WasmError {
            code: "WASM003".to_string(),
            message: format!("serialization failed: {e}"),
            help: None,
        }
        .into()
    })
}
