use serde::Serialize;

use crate::domain::tiles::TileType;

use super::BodyHandle;

/// Two overlapping bodies left for gameplay logic to interpret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CollisionPair {
    pub a: BodyHandle,
    pub b: BodyHandle,
}

/// A body touched a trigger tile this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TileTriggerEvent {
    pub body: BodyHandle,
    pub tile_type: TileType,
}

/// Per-frame output buffer, rebuilt from scratch by every update.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FrameEvents {
    pairs: Vec<CollisionPair>,
    tile_triggers: Vec<TileTriggerEvent>,
}

impl FrameEvents {
    pub fn pairs(&self) -> &[CollisionPair] {
        &self.pairs
    }

    pub fn tile_triggers(&self) -> &[TileTriggerEvent] {
        &self.tile_triggers
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty() && self.tile_triggers.is_empty()
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("failed to encode frame events: {}", e))
    }

    pub(crate) fn clear(&mut self) {
        self.pairs.clear();
        self.tile_triggers.clear();
    }

    pub(crate) fn push_pair(&mut self, a: BodyHandle, b: BodyHandle) {
        self.pairs.push(CollisionPair { a, b });
    }

    pub(crate) fn push_trigger(&mut self, body: BodyHandle, tile_type: TileType) {
        self.tile_triggers.push(TileTriggerEvent { body, tile_type });
    }
}
