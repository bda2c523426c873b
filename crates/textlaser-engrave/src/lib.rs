//! # textlaser engrave
//!
//! Turns text lines into laser/plotter G-code using a loaded stroke font.
//!
//! - **Transform**: scale, rotation, mirror and flip of glyph coordinates
//! - **Program**: G-code line model, modal laser power and rendering
//! - **Engraver**: per-line emission, spacing and the session driver

pub mod engraver;
pub mod error;
pub mod program;
pub mod transform;

pub use engraver::{sanitize, EngravedLine, Engraver, LayoutMetrics};
pub use error::{EngraveError, EngraveResult};
pub use program::{write_program, LaserPower, ProgramLine};
pub use transform::{scale_rotate, Transform};
