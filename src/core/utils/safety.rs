//! Zero-Cost Safety Macros
//!
//! The relaxation and advection sweeps touch every interior cell several
//! times per step, so their buffer reads go through `fast!`:
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Callers are responsible for keeping indices inside the buffer. The solver
//! only indexes cells `0..N` on each axis of an `N x N` grid with `N >= 3`,
//! which `FluidGrid::new` enforces.
//!
//! Usage:
//! ```rust
//! use stable_fluids_engine::fast;
//!
//! let idx = 2;
//!
//! let density = vec![0.0f32, 1.0, 2.0, 3.0];
//! // Read: fast!(slice, [index])
//! let val = *fast!(density, [idx]);
//! assert_eq!(val, 2.0);
//!
//! let mut vx = vec![0.0f32; 4];
//! // Write: fast!(slice, [index] = value)
//! fast!(vx, [idx] = -1.5);
//! assert_eq!(vx[idx], -1.5);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
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

#[cfg(test)]
mod tests {
    #[test]
    fn test_fast_read() {
        let field = [0.5f32, 1.5, 2.5];
        let val = *fast!(field, [1]);
        assert_eq!(val, 1.5);
    }

    #[test]
    fn test_fast_write_through_slice() {
        let mut buffer = vec![0.0f32; 9];
        let field: &mut [f32] = &mut buffer;
        fast!(field, [4] = 7.0);
        assert_eq!(buffer[4], 7.0);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_fast_bounds_check_debug() {
        let field = vec![0.0f32; 3];
        let _ = *fast!(field, [10]);
    }
}
