//! # glyph-link
//!
//! Builds the Google Fonts stylesheet link for a set of icons and prepends
//! it into an HTML document's `<head>`.

pub mod inject;
pub mod url;

pub use inject::inject_link;
pub use url::{FONTS_CSS_ENDPOINT, link_element, stylesheet_url};
