//! Core - math primitives and low-level helpers shared by every system

#[macro_use]
pub mod utils {
    #[macro_use]
    pub mod safety;
}

pub mod math;
