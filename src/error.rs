//! Compositor error type.

use core::fmt;

/// Errors surfaced by [`Compositor`](crate::compositor::Compositor) and
/// [`FontRegistry`](crate::registry::FontRegistry).
///
/// `E` is the error type of the underlying display controller.
#[derive(Debug, PartialEq, Eq)]
pub enum DisplayError<E> {
    /// The display controller refused an operation.
    Panel(E),
    /// No room left in the font registry.
    RegistryFull,
}

impl<E: fmt::Debug> fmt::Display for DisplayError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Panel(e) => write!(f, "display controller error: {:?}", e),
            DisplayError::RegistryFull => f.write_str("font registry is full"),
        }
    }
}

/// Registry errors carry no controller error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegistryFull;

impl fmt::Display for RegistryFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("font registry is full")
    }
}

impl<E> From<RegistryFull> for DisplayError<E> {
    fn from(_: RegistryFull) -> Self {
        Self::RegistryFull
    }
}
