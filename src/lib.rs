// Photostamp image compositing and fitted-text library

pub mod codec;
pub mod compositor;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;

pub use codec::{EncodedImage, ImageSource};
pub use compositor::composite;
pub use error::{Advisory, StampError};
pub use layout::{layout_and_render, LayoutConfig, LayoutReport, TextRender};
