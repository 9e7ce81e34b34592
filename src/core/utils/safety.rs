//! Zero-Cost Safety Macros
//!
//! Debug checks in dev, raw speed in prod. Used by the tile grid on its hot
//! lookup path, after the caller has already done the cell bounds test.
//!
//! Usage:
//! ```rust
//! use tilebound_engine::fast;
//!
//! let cells = vec![0u8, 2, 2, 0];
//! let idx = 1;
//! assert_eq!(*fast!(cells, [idx]), 2);
//!
//! let mut flags = vec![false; 4];
//! fast!(flags, [idx] = true);
//! assert!(flags[idx]);
//! ```

/// Bounds-checked in debug, unchecked in release.
///
/// Only valid when the index has already been validated against the slice
/// length (e.g. by `TileGrid::in_bounds`).
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
