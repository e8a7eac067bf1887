#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod decomposition;
pub mod format;
pub mod scene;

use decomposition::{Layout, Parameters};
use format::RenderedEquation;
use scene::diff::{DiffTracker, SceneDiff};
use scene::markings::{self, LineSegment};
use scene::view;
use serde::Serialize;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    log::set_logger(&DEFAULT_LOGGER).expect("error initializing logger");
    log::set_max_level(LevelFilter::Debug);
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Bereik en stapgrootte van beide parametersliders.
const SLIDER_MIN: f64 = 1.0;
const SLIDER_MAX: f64 = 10.0;
const SLIDER_STEP: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
struct SliderBinding {
    id: &'static str,
    name: &'static str,
}

/// De twee sliders, in vaste volgorde: eerst a, dan b.
const SLIDERS: [SliderBinding; 2] = [
    SliderBinding { id: "a", name: "A" },
    SliderBinding { id: "b", name: "B" },
];

#[derive(Debug, Serialize)]
struct SliderExport {
    id: &'static str,
    name: &'static str,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
}

#[derive(Debug, Serialize)]
struct MarkingsExport {
    color: [f64; 3],
    ticks: Vec<LineSegment>,
    axes: [LineSegment; 3],
}

/// Public entry point for consumers.
#[wasm_bindgen]
pub struct Engine {
    initialized: bool,
    params: Parameters,
    layout: Option<Layout>,
    tracker: DiffTracker,
    result_dirty: bool,
    disposed: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine {
            initialized: true,
            params: Parameters::default(),
            layout: None,
            tracker: DiffTracker::new(),
            result_dirty: true,
            disposed: false,
        }
    }

    /// Geeft terug of de engine de minimale initialisatie heeft doorlopen.
    #[wasm_bindgen]
    pub fn is_initialized(&self) -> bool {
        self.initialized && !self.disposed
    }

    /// Haal de twee slider-specificaties op voor UI-generatie.
    #[wasm_bindgen]
    pub fn get_sliders(&self) -> Result<JsValue, JsValue> {
        self.ensure_active()?;

        let values = [f64::from(self.params.a()), f64::from(self.params.b())];
        let sliders: Vec<SliderExport> = SLIDERS
            .iter()
            .zip(values)
            .map(|(binding, value)| SliderExport {
                id: binding.id,
                name: binding.name,
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                value,
            })
            .collect();

        serde_wasm_bindgen::to_value(&sliders).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Stel een sliderwaarde in op basis van id of naam. De waarde wordt
    /// op het sliderbereik geklemd en op hele getallen afgerond voordat
    /// het model haar ziet.
    #[wasm_bindgen]
    pub fn set_slider_value(&mut self, id_or_name: &str, value: f64) -> Result<(), JsValue> {
        self.ensure_active()?;

        if !value.is_finite() {
            return Err(js_error("sliderwaarde moet een eindig getal zijn"));
        }

        let Some(index) = find_slider_index(id_or_name) else {
            return Err(js_error("onbekende sliderreferentie"));
        };

        let mut clamped = clamp(value, SLIDER_MIN, SLIDER_MAX);
        clamped = SLIDER_MIN + ((clamped - SLIDER_MIN) / SLIDER_STEP).round() * SLIDER_STEP;
        clamped = clamp(clamped, SLIDER_MIN, SLIDER_MAX);

        #[allow(clippy::cast_possible_truncation)]
        let quantized = clamped as i64;
        let (a, b) = match index {
            0 => (quantized, i64::from(self.params.b())),
            _ => (i64::from(self.params.a()), quantized),
        };

        let params = Parameters::new(a, b).map_err(to_js_error)?;
        if params != self.params {
            self.params = params;
            self.result_dirty = true;
        }

        Ok(())
    }

    /// Herbereken de layout wanneer een parameter is veranderd. Het
    /// resultaat vervangt de vorige layout volledig.
    #[wasm_bindgen]
    pub fn evaluate(&mut self) -> Result<(), JsValue> {
        self.ensure_active()?;

        if !self.result_dirty && self.layout.is_some() {
            return Ok(());
        }

        self.layout = Some(Layout::compute(self.params));
        self.result_dirty = false;
        debug_log!(
            "layout herberekend voor a={} b={}",
            self.params.a(),
            self.params.b()
        );
        Ok(())
    }

    /// Haal de wijzigingen op sinds de vorige export, zodat de host zijn
    /// acht permanente objecten ter plekke kan bijwerken.
    #[wasm_bindgen]
    pub fn get_geometry(&mut self) -> Result<JsValue, JsValue> {
        let diff = self.geometry_diff()?;
        serde_wasm_bindgen::to_value(&diff).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Haal de geformatteerde vergelijking op: platte tekst plus
    /// LaTeX-bron voor een eventuele typesetter aan hostzijde.
    #[wasm_bindgen]
    pub fn get_equation(&self) -> Result<JsValue, JsValue> {
        let rendered = self.rendered_equation()?;
        serde_wasm_bindgen::to_value(&rendered).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Cameraconfiguratie van de twee views; vast over de levensduur.
    #[wasm_bindgen]
    pub fn get_views(&self) -> Result<JsValue, JsValue> {
        self.ensure_active()?;
        serde_wasm_bindgen::to_value(&view::views())
            .map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// As-markeringen en assen; vast over de levensduur.
    #[wasm_bindgen]
    pub fn get_markings(&self) -> Result<JsValue, JsValue> {
        self.ensure_active()?;

        let export = MarkingsExport {
            color: markings::MARKING_COLOR,
            ticks: markings::unit_markings(),
            axes: markings::axes(),
        };
        serde_wasm_bindgen::to_value(&export).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Geef alle afgeleide toestand expliciet vrij. De host laat zijn
    /// objecten los; elke latere aanroep op deze engine faalt.
    #[wasm_bindgen]
    pub fn dispose(&mut self) -> Result<(), JsValue> {
        self.ensure_active()?;

        self.disposed = true;
        self.layout = None;
        self.result_dirty = true;
        let removed = self.tracker.clear();
        debug_log!("engine vrijgegeven; {} objecten losgelaten", removed.len());
        Ok(())
    }
}

impl Engine {
    /// Huidige parameters (native toegang voor tests en de CLI).
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        self.params
    }

    /// Laatst berekende layout, indien geëvalueerd.
    #[must_use]
    pub fn latest_layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Native variant van [`Engine::get_geometry`]: dezelfde diff, zonder
    /// serialisatie over de wasm-grens.
    pub fn geometry_diff(&mut self) -> Result<SceneDiff, JsValue> {
        self.ensure_active()?;

        if self.result_dirty {
            return Err(js_error("layout is nog niet geëvalueerd"));
        }
        let Some(layout) = self.layout.as_ref() else {
            return Err(js_error("layout is nog niet geëvalueerd"));
        };

        Ok(self.tracker.diff(layout))
    }

    /// Native variant van [`Engine::get_equation`].
    pub fn rendered_equation(&self) -> Result<RenderedEquation, JsValue> {
        self.ensure_active()?;

        if self.result_dirty {
            return Err(js_error("layout is nog niet geëvalueerd"));
        }
        let Some(layout) = self.layout.as_ref() else {
            return Err(js_error("layout is nog niet geëvalueerd"));
        };

        // De wasm-host typeset zelf (MathJax); hier is geen collaborator.
        Ok(format::render_breakdown(&layout.equation, None))
    }

    fn ensure_active(&self) -> Result<(), JsValue> {
        if self.disposed {
            return Err(js_error("engine is al vrijgegeven"));
        }
        Ok(())
    }
}

fn find_slider_index(id_or_name: &str) -> Option<usize> {
    let trimmed = id_or_name.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.to_lowercase();
    SLIDERS
        .iter()
        .position(|binding| binding.id == normalized || binding.name.to_lowercase() == normalized)
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::{Engine, find_slider_index};

    #[test]
    fn engine_initializes_with_default_parameters() {
        let engine = Engine::new();
        assert!(engine.is_initialized());
        assert_eq!(engine.parameters().a(), 5);
        assert_eq!(engine.parameters().b(), 1);
        assert!(engine.latest_layout().is_none());
    }

    #[test]
    fn sliders_resolve_by_id_and_name() {
        assert_eq!(find_slider_index("a"), Some(0));
        assert_eq!(find_slider_index("A"), Some(0));
        assert_eq!(find_slider_index(" b "), Some(1));
        assert_eq!(find_slider_index("B"), Some(1));
        assert_eq!(find_slider_index("c"), None);
        assert_eq!(find_slider_index(""), None);
    }

    #[test]
    fn slider_updates_clamp_and_quantize() {
        let mut engine = Engine::new();
        engine.set_slider_value("a", 7.4).expect("geldige slider");
        engine.evaluate().expect("evaluatie slaagt");
        assert_eq!(engine.parameters().a(), 7);

        engine.set_slider_value("b", 25.0).expect("geldige slider");
        engine.evaluate().expect("evaluatie slaagt");
        assert_eq!(engine.parameters().b(), 10);

        engine.set_slider_value("b", -3.0).expect("geldige slider");
        engine.evaluate().expect("evaluatie slaagt");
        assert_eq!(engine.parameters().b(), 1);
    }

    #[test]
    fn slider_updates_reject_bad_input() {
        let mut engine = Engine::new();
        assert!(engine.set_slider_value("a", f64::NAN).is_err());
        assert!(engine.set_slider_value("onbekend", 3.0).is_err());
    }

    #[test]
    fn evaluation_replaces_layout_wholesale() {
        let mut engine = Engine::new();
        engine.evaluate().expect("evaluatie slaagt");
        let before = engine.latest_layout().expect("layout aanwezig").clone();

        engine.set_slider_value("b", 2.0).expect("geldige slider");
        engine.evaluate().expect("evaluatie slaagt");
        let after = engine.latest_layout().expect("layout aanwezig");

        assert_ne!(&before, after);
        assert_eq!(after.equation.total, 343);
    }

    #[test]
    fn geometry_requires_evaluation_first() {
        let mut engine = Engine::new();
        assert!(engine.geometry_diff().is_err());

        engine.evaluate().expect("evaluatie slaagt");
        let diff = engine.geometry_diff().expect("diff beschikbaar");
        assert_eq!(diff.added.len(), 8);
        assert!(engine.geometry_diff().expect("tweede diff").is_empty());
    }

    #[test]
    fn stale_layout_is_not_exported() {
        let mut engine = Engine::new();
        engine.evaluate().expect("evaluatie slaagt");
        engine.set_slider_value("a", 9.0).expect("geldige slider");

        // Parameter gewijzigd maar nog niet geëvalueerd: exports weigeren.
        assert!(engine.geometry_diff().is_err());
        assert!(engine.rendered_equation().is_err());
    }

    #[test]
    fn equation_follows_the_parameters() {
        let mut engine = Engine::new();
        engine.evaluate().expect("evaluatie slaagt");

        let rendered = engine.rendered_equation().expect("vergelijking aanwezig");
        assert_eq!(rendered.lines[2], "(5+1)³ = 216");
        assert!(rendered.markup.is_none());
    }

    #[test]
    fn dispose_ends_the_contract() {
        let mut engine = Engine::new();
        engine.evaluate().expect("evaluatie slaagt");
        engine.geometry_diff().expect("diff beschikbaar");

        engine.dispose().expect("eerste dispose slaagt");
        assert!(!engine.is_initialized());
        assert!(engine.evaluate().is_err());
        assert!(engine.geometry_diff().is_err());
        assert!(engine.set_slider_value("a", 2.0).is_err());
        assert!(engine.dispose().is_err());
    }
}
