//! Pre-compiled template renderer.

use minijinja::{Environment, Error};
use serde::Serialize;

use super::filters::register_style_functions;
use super::RenderMode;

/// A renderer with pre-registered templates and the style token functions.
///
/// Use this when the same templates are rendered repeatedly. Templates are
/// compiled once and reused.
///
/// # Example
///
/// ```rust
/// use cactus_styles::Renderer;
/// use serde::Serialize;
///
/// let mut renderer = Renderer::new();
/// renderer
///     .add_template("title", r#"<h1 class="{{ class("postTitle") }}">{{ title }}</h1>"#)
///     .unwrap();
///
/// #[derive(Serialize)]
/// struct Post { title: String }
///
/// let html = renderer.render("title", &Post { title: "Hello".into() }).unwrap();
/// assert_eq!(html, r#"<h1 class="title mb-2">Hello</h1>"#);
/// ```
pub struct Renderer {
    env: Environment<'static>,
    mode: RenderMode,
}

impl Renderer {
    /// Creates a renderer that emits class strings.
    pub fn new() -> Self {
        Self::with_mode(RenderMode::default())
    }

    /// Creates a renderer with an explicit render mode.
    pub fn with_mode(mode: RenderMode) -> Self {
        let mut env = Environment::new();
        register_style_functions(&mut env, mode);
        tracing::debug!(?mode, "style renderer created");
        Self { env, mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    /// Names ending in `.html` get HTML auto-escaping for data values.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        tracing::debug!(template = name, "template registered");
        Ok(())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found, a template references
    /// an unknown style token, or rendering otherwise fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct SimpleData {
        message: String,
    }

    #[test]
    fn test_renderer_add_and_render() {
        let mut renderer = Renderer::new();
        renderer
            .add_template("test", r#"<span class="{{ class("postDate") }}">{{ message }}</span>"#)
            .unwrap();

        let output = renderer
            .render(
                "test",
                &SimpleData {
                    message: "hi".into(),
                },
            )
            .unwrap();
        assert_eq!(output, r#"<span class="pr-2">hi</span>"#);
    }

    #[test]
    fn test_renderer_unknown_template_error() {
        let renderer = Renderer::new();

        let result = renderer.render(
            "nonexistent",
            &SimpleData {
                message: "x".into(),
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_renderer_syntax_error() {
        let mut renderer = Renderer::new();
        assert!(renderer.add_template("broken", "{{ class(").is_err());
    }

    #[test]
    fn test_renderer_unknown_token_fails_at_render() {
        let mut renderer = Renderer::new();
        renderer
            .add_template("bad", r#"{{ class("heroBanner") }}"#)
            .unwrap();
        let err = renderer
            .render("bad", &SimpleData { message: "x".into() })
            .unwrap_err();
        assert!(err.to_string().contains("unknown style token 'heroBanner'"));
    }

    #[test]
    fn test_html_templates_escape_data_but_not_classes() {
        let mut renderer = Renderer::new();
        renderer
            .add_template(
                "date.html",
                r#"<div class="{{ class("baseLayoutContainer") }}">{{ message }}</div>"#,
            )
            .unwrap();

        let output = renderer
            .render(
                "date.html",
                &SimpleData {
                    message: "<b>".into(),
                },
            )
            .unwrap();
        assert_eq!(
            output,
            r#"<div class="sm:grid sm:grid-cols-[3fr_1fr] sm:gap-x-10 sm:items-start">&lt;b&gt;</div>"#
        );
    }

    #[test]
    fn test_renderer_debug_mode() {
        let mut renderer = Renderer::with_mode(RenderMode::Debug);
        assert_eq!(renderer.mode(), RenderMode::Debug);
        renderer
            .add_template("tags", r#"{{ "tagLink" | class }}"#)
            .unwrap();
        let output = renderer
            .render("tags", &SimpleData { message: "x".into() })
            .unwrap();
        assert_eq!(output, "[tagLink]");
    }

    #[test]
    fn test_renderer_default_mode() {
        assert_eq!(Renderer::default().mode(), RenderMode::Classes);
    }
}
