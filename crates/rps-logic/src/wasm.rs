//! WASM bindings for the browser front end
//!
//! The page hands in two plain JS objects:
//! - a store with `getItem` / `setItem` / `clear` (`window.localStorage` works as-is)
//! - a display with `showScreen`, `showScores`, `showOutcome`, `setRulesOverlay`

#![cfg(feature = "wasm")]

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::{
    resolve, Choice, DisplaySurface, Outcome, PersistentStore, ResultView, ScoreBoard, Screen,
    SeededRng, SessionConfig, SessionController,
};

/// Call `target[method](...args)`, logging instead of throwing.
fn invoke(target: &JsValue, method: &str, args: &[JsValue]) -> Option<JsValue> {
    let func = match Reflect::get(target, &JsValue::from_str(method))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    {
        Some(func) => func,
        None => {
            log::warn!("js object has no `{}` method", method);
            return None;
        }
    };

    let array = Array::new();
    for arg in args {
        array.push(arg);
    }

    match func.apply(target, &array) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("js `{}` threw: {:?}", method, e);
            None
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Store backed by a JS object with the Web Storage method names
pub struct JsStore {
    target: JsValue,
}

impl PersistentStore for JsStore {
    fn get(&self, key: &str) -> Option<String> {
        invoke(&self.target, "getItem", &[JsValue::from_str(key)]).and_then(|v| v.as_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        invoke(&self.target, "setItem", &[JsValue::from_str(key), JsValue::from_str(value)]);
    }

    fn clear(&mut self) {
        invoke(&self.target, "clear", &[]);
    }
}

/// Display backed by a JS object with one callback per render command
pub struct JsDisplay {
    target: JsValue,
}

impl DisplaySurface for JsDisplay {
    fn show_screen(&mut self, screen: Screen) {
        invoke(&self.target, "showScreen", &[to_js(&screen)]);
    }

    fn show_scores(&mut self, player: u32, computer: u32) {
        invoke(&self.target, "showScores", &[JsValue::from(player), JsValue::from(computer)]);
    }

    fn show_outcome(&mut self, outcome: Outcome, player: Choice, computer: Choice) {
        let view = ResultView::from_outcome(outcome, player, computer);
        invoke(
            &self.target,
            "showOutcome",
            &[to_js(&outcome), to_js(&player), to_js(&computer), to_js(&view)],
        );
    }

    fn set_rules_overlay(&mut self, open: bool) {
        invoke(&self.target, "setRulesOverlay", &[JsValue::from_bool(open)]);
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayReport {
    outcome: Outcome,
    player: Choice,
    computer: Choice,
    scores: ScoreBoard,
    view: ResultView,
}

fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    let lo = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    (hi << 32) | lo
}

/// A game session bound to browser storage and a JS display
#[wasm_bindgen]
pub struct WasmSession {
    inner: SessionController<JsStore, JsDisplay, SeededRng>,
}

#[wasm_bindgen]
impl WasmSession {
    /// # Arguments
    /// * `store` - object with `getItem`/`setItem`/`clear`
    /// * `display` - object with the render callbacks
    /// * `config_json` - JSON `SessionConfig`, or an empty string for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(store: JsValue, display: JsValue, config_json: &str) -> Result<WasmSession, JsError> {
        let config = SessionConfig::from_json(config_json)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
        let rng = SeededRng::new(config.seed.unwrap_or_else(entropy_seed));

        Ok(WasmSession {
            inner: SessionController::with_keys(
                JsStore { target: store },
                JsDisplay { target: display },
                rng,
                config.keys,
            ),
        })
    }

    /// Restore from storage; returns the screen entered
    pub fn initialize(&mut self) -> JsValue {
        to_js(&self.inner.initialize())
    }

    /// Play a round with the named choice ("rock"/"stone", "paper", "scissors"/"scissor")
    pub fn play(&mut self, choice: &str) -> Result<JsValue, JsError> {
        let player: Choice = choice.parse().map_err(|e: crate::GameError| JsError::new(&e.to_string()))?;
        let outcome = self
            .inner
            .play_round(player)
            .map_err(|e| JsError::new(&e.to_string()))?;

        // play_round always leaves a round record behind
        let computer = self.inner.round().map(|r| r.computer).unwrap_or(player);
        let report = PlayReport {
            outcome,
            player,
            computer,
            scores: self.inner.scores(),
            view: ResultView::from_outcome(outcome, player, computer),
        };

        serde_wasm_bindgen::to_value(&report)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    pub fn replay(&mut self) -> Result<(), JsError> {
        self.inner.replay().map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = fullReset)]
    pub fn full_reset(&mut self) {
        self.inner.full_reset();
    }

    /// The "next" control after a win
    pub fn next(&mut self) -> Result<(), JsError> {
        self.inner
            .advance_to_celebration()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = toggleRules)]
    pub fn toggle_rules(&mut self) -> bool {
        self.inner.toggle_rules()
    }

    pub fn screen(&self) -> JsValue {
        to_js(&self.inner.screen())
    }

    pub fn scores(&self) -> JsValue {
        to_js(&self.inner.scores())
    }
}

/// Decide a round between two named choices
#[wasm_bindgen]
pub fn resolve_choices(player: &str, computer: &str) -> Result<JsValue, JsError> {
    let player: Choice = player.parse().map_err(|e: crate::GameError| JsError::new(&e.to_string()))?;
    let computer: Choice = computer.parse().map_err(|e: crate::GameError| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&resolve(player, computer))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
