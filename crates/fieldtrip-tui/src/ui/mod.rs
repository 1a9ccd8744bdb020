//! Terminal UI module using ratatui.
//!
//! - `render`: Main frame rendering and overlays
//! - `results`: The progress panel for the selected student
//! - `input`: Keyboard and mouse event handling
//! - `layout`: Screen regions shared by rendering and mouse hit-testing
//! - `styles`: Color schemes and text styling

pub mod input;
pub mod layout;
pub mod render;
pub mod results;
pub mod styles;
