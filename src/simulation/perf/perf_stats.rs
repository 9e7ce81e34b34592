use wasm_bindgen::prelude::*;

/// Snapshot of the last update. All zeros while metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) motion_ms: f64,
    pub(super) contacts_ms: f64,
    pub(super) triggers_ms: f64,
    pub(super) body_count: u32,
    pub(super) grid_count: u32,
    pub(super) bodies_simulated: u32,
    pub(super) pairs_reported: u32,
    pub(super) push_outs: u32,
    pub(super) trigger_events: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    /// Integration, tile resolution and world bounds.
    #[wasm_bindgen(getter)]
    pub fn motion_ms(&self) -> f64 { self.motion_ms }
    /// Body-vs-body scan.
    #[wasm_bindgen(getter)]
    pub fn contacts_ms(&self) -> f64 { self.contacts_ms }
    #[wasm_bindgen(getter)]
    pub fn triggers_ms(&self) -> f64 { self.triggers_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn grid_count(&self) -> u32 { self.grid_count }
    #[wasm_bindgen(getter)]
    pub fn bodies_simulated(&self) -> u32 { self.bodies_simulated }
    #[wasm_bindgen(getter)]
    pub fn pairs_reported(&self) -> u32 { self.pairs_reported }
    #[wasm_bindgen(getter)]
    pub fn push_outs(&self) -> u32 { self.push_outs }
    #[wasm_bindgen(getter)]
    pub fn trigger_events(&self) -> u32 { self.trigger_events }
}
