use serde::{Serialize, Serializer};

use crate::spatial::arena::Handle;

/// Stable reference to a registered body. Stale after unregistration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) Handle);

/// Stable reference to a registered tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridHandle(pub(crate) Handle);

impl BodyHandle {
    pub fn to_bits(self) -> u64 {
        self.0.to_bits()
    }

    pub fn from_bits(bits: u64) -> Self {
        Self(Handle::from_bits(bits))
    }
}

impl GridHandle {
    pub fn to_bits(self) -> u64 {
        self.0.to_bits()
    }

    pub fn from_bits(bits: u64) -> Self {
        Self(Handle::from_bits(bits))
    }
}

impl Serialize for BodyHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.to_bits())
    }
}
