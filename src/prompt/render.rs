//! Prompt rendering with Handlebars.
//!
//! Role instruction templates carry {{variable}} placeholders for the user's
//! request fields and earlier stage outputs.

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, RoadmaprError};

/// Renders instruction templates with request context
pub struct PromptRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptRenderer {
    /// Create a renderer: non-strict, no HTML escaping
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    /// Render a template string with a JSON context
    pub fn render_json(&self, template: &str, context: &Value) -> Result<String> {
        self.handlebars
            .render_template(template, context)
            .map_err(|e| RoadmaprError::Template(format!("failed to render template: {}", e)))
    }

    /// Render a template string with any serializable context
    pub fn render_with<T: Serialize>(&self, template: &str, context: &T) -> Result<String> {
        self.handlebars
            .render_template(template, context)
            .map_err(|e| RoadmaprError::Template(format!("failed to render template: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json_simple() {
        let renderer = PromptRenderer::new();
        let result = renderer
            .render_json("Target role: {{domain}}", &json!({ "domain": "Data Analyst" }))
            .unwrap();
        assert_eq!(result, "Target role: Data Analyst");
    }

    #[test]
    fn test_render_missing_variable_is_empty() {
        let renderer = PromptRenderer::new();
        let result = renderer.render_json("Hello, {{name}}!", &json!({})).unwrap();
        assert_eq!(result, "Hello, !");
    }

    #[test]
    fn test_render_does_not_escape() {
        let renderer = PromptRenderer::new();
        let result = renderer
            .render_json("Link: {{url}}", &json!({ "url": "https://a.b/c?d=1&e=2" }))
            .unwrap();
        assert_eq!(result, "Link: https://a.b/c?d=1&e=2");
    }

    #[test]
    fn test_render_with_struct() {
        #[derive(Serialize)]
        struct Ctx {
            domain: String,
            weeks: u32,
        }

        let renderer = PromptRenderer::new();
        let ctx = Ctx {
            domain: "Cloud Engineer".to_string(),
            weeks: 4,
        };
        let result = renderer.render_with("{{weeks}}-week plan for {{domain}}", &ctx).unwrap();
        assert_eq!(result, "4-week plan for Cloud Engineer");
    }

    #[test]
    fn test_render_multiline_template() {
        let renderer = PromptRenderer::new();
        let template = "## Role\n{{domain}}\n\n## Level\n{{experience_level}}\n";
        let context = json!({ "domain": "Frontend Developer", "experience_level": "beginner" });

        let result = renderer.render_json(template, &context).unwrap();
        assert!(result.contains("## Role\nFrontend Developer"));
        assert!(result.contains("## Level\nbeginner"));
    }

    #[test]
    fn test_render_invalid_template_errors() {
        let renderer = PromptRenderer::new();
        let result = renderer.render_json("{{#if}}broken", &json!({}));
        assert!(matches!(result, Err(RoadmaprError::Template(_))));
    }

    #[test]
    fn test_default_renderer() {
        let renderer = PromptRenderer::default();
        let result = renderer.render_json("ok", &json!({})).unwrap();
        assert_eq!(result, "ok");
    }
}
