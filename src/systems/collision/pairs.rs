use serde::{Deserialize, Serialize};

/// How an object takes part in body-vs-body resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyClass {
    #[default]
    Dynamic,
    /// Static scenery: dynamic bodies overlapping it are pushed out instead
    /// of being reported.
    Solid,
}

/// Outcome for one overlapping pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairResolution {
    /// Push the first body out of the second.
    PushOutFirst,
    /// Push the second body out of the first.
    PushOutSecond,
    /// Leave both in place and hand the pair to the caller.
    Report,
}

/// Exactly one side solid and neither side a trigger means push-out;
/// everything else (dynamic/dynamic, solid/solid, any trigger) is reported.
pub fn resolution_for(
    a: BodyClass,
    a_trigger: bool,
    b: BodyClass,
    b_trigger: bool,
) -> PairResolution {
    if a_trigger || b_trigger {
        return PairResolution::Report;
    }
    match (a, b) {
        (BodyClass::Dynamic, BodyClass::Solid) => PairResolution::PushOutFirst,
        (BodyClass::Solid, BodyClass::Dynamic) => PairResolution::PushOutSecond,
        _ => PairResolution::Report,
    }
}
