//! Template integration for style tokens.
//!
//! Templates reference tokens by name; see [`register_style_functions`] for
//! the functions available inside a template.

mod filters;
mod renderer;

use minijinja::{Environment, Error};
use serde::Serialize;

pub use filters::register_style_functions;
pub use renderer::Renderer;

/// What the style functions emit inside templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// The token's class string.
    #[default]
    Classes,
    /// A `[tokenName]` marker in place of the class string, for asserting
    /// template structure independently of class values.
    Debug,
}

/// Renders a template string with the style token functions available.
///
/// # Example
///
/// ```rust
/// use cactus_styles::render;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Tag { name: String }
///
/// let html = render(
///     r#"<a class="{{ "tagLink" | class }}">{{ name }}</a>"#,
///     &Tag { name: "rust".into() },
/// ).unwrap();
/// assert_eq!(html, r#"<a class="inline-block cactus-link">rust</a>"#);
/// ```
pub fn render<T: Serialize>(template: &str, data: &T) -> Result<String, Error> {
    render_with_mode(template, data, RenderMode::Classes)
}

/// Renders a template string with an explicit [`RenderMode`].
pub fn render_with_mode<T: Serialize>(
    template: &str,
    data: &T,
    mode: RenderMode,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_style_functions(&mut env, mode);
    env.render_str(template, data)
}
