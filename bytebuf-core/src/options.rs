//! Fill policies controlling how sizing operations treat storage.

/// Bit-field describing how newly exposed bytes and storage are handled.
///
/// The empty set ([`Fill::UNINITIALIZE`]) is the default: new bytes keep
/// whatever the storage held and capacity is only ever grown. Flags compose,
/// so `Fill::SHRINK | Fill::INITIALIZE` reallocates to the exact size and
/// zero-fills the bytes exposed by growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fill(u8);

bitflags::bitflags! {
    impl Fill: u8 {
        /// Zero-fill bytes exposed by growing the live range.
        const INITIALIZE = 0x01;

        /// Reallocate storage to exactly the requested size, releasing it
        /// entirely when that size is zero.
        const SHRINK = 0x02;
    }
}

impl Fill {
    /// Leave newly exposed bytes unspecified.
    pub const UNINITIALIZE: Fill = Fill::empty();

    /// Check whether newly exposed bytes are zero-filled.
    pub fn is_initialize(&self) -> bool {
        self.contains(Fill::INITIALIZE)
    }

    /// Check whether exact-size reallocation is requested.
    pub fn is_shrink(&self) -> bool {
        self.contains(Fill::SHRINK)
    }
}

impl Default for Fill {
    fn default() -> Self {
        Fill::UNINITIALIZE
    }
}
