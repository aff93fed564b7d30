// Standalone components (no primitives)
pub mod button;
pub mod form;
pub mod input;

// Primitive wrappers
pub mod dialog;
pub mod toast;

// Re-exports for convenience
pub use button::*;
pub use dialog::*;
pub use form::*;
pub use input::*;
pub use toast::*;
