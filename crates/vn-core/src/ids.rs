//! Strongly typed identifier wrappers.
//!
//! Locations and agents are identified by unique names in configuration; the
//! graph and the roster intern those names into these `Copy` ids so hot paths
//! (BFS, per-tick selection) never compare strings.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Roster identity of an agent.  Assigned sequentially and never reused,
    /// so a removed agent's id can never alias a newcomer.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a location in the location graph (assigned at build time).
    pub struct LocationId(u32);
}
