//! Sample work-breakdown-structure hierarchy and its renderers.
//!
//! The tree is fixed demonstration data shown when no real hierarchy is
//! available; rendering never fails and only appends markup or text.

mod html;
mod node;
mod sample;
mod text;

pub use html::{render_html, to_html};
pub use node::WbsNode;
pub use sample::sample_hierarchy;
pub use text::render_text;
