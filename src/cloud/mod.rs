//! Tag cloud construction
//!
//! This module selects the most frequent words and renders them:
//! - [`selector`]: two-phase top-N sort (rank by count, display by word)
//! - [`scale`]: linear count → font-size interpolation
//! - [`html`]: fixed-structure HTML document output

pub mod html;
pub mod scale;
pub mod selector;

pub use html::HtmlRenderer;
pub use scale::FontScale;
pub use selector::select_top;
