//! Named utility-class tokens for the cactus blog theme.
//!
//! Every styled slot of the theme's markup (post title, tag list, table of
//! contents, preview cards, footer) has a fixed string of utility classes.
//! This crate holds that table and makes it available to Rust code and to
//! MiniJinja templates.
//!
//! # Rust callers
//!
//! The typed path cannot fail: [`StyleToken`] is a closed enum, and each
//! value is also a plain constant.
//!
//! ```rust
//! use cactus_styles::{StyleToken, POST_TITLE};
//!
//! assert_eq!(StyleToken::PostTitle.classes(), POST_TITLE);
//! assert_eq!(POST_TITLE, "title mb-2");
//! ```
//!
//! String-keyed callers go through [`lookup`] or [`StyleTable`]:
//!
//! ```rust
//! assert_eq!(cactus_styles::lookup("tocHeader"), Some("font-semibold"));
//! assert_eq!(cactus_styles::lookup("coverPreviewImage"), Some(""));
//! assert_eq!(cactus_styles::lookup("unknown"), None);
//! ```
//!
//! # Templates
//!
//! ```rust
//! use cactus_styles::render;
//!
//! let html = render(
//!     r#"<time class="{{ class("postDate") }}">{{ date }}</time>"#,
//!     &serde_json::json!({ "date": "2024-01-01" }),
//! ).unwrap();
//! assert_eq!(html, r#"<time class="pr-2">2024-01-01</time>"#);
//! ```
//!
//! Inside a template:
//!
//! | Syntax | Result |
//! |--------|--------|
//! | `{{ class("postTitle") }}` | `title mb-2` |
//! | `{{ "postTitle" \| class }}` | `title mb-2` |
//! | `{{ cx("coverImage", "postDate") }}` | `mt-4 pr-2` |
//! | `{{ styles.postTitle }}` | `title mb-2` |
//!
//! Unknown token names fail the render. [`RenderMode::Debug`] swaps class
//! strings for `[tokenName]` markers.

pub mod render;
pub mod style;
mod util;

pub use render::{register_style_functions, render, render_with_mode, RenderMode, Renderer};
pub use style::*;
pub use util::{class_tokens, combine_classes};

/// Returns the class string for a token name, or `None` if no token has that name.
pub fn lookup(name: &str) -> Option<&'static str> {
    StyleTable::global().get(name)
}
