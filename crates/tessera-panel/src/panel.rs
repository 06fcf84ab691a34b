//! The password strength panel and its renderers.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::error::{PanelError, Result};
use crate::messages::{MessageKey, Messages};
use crate::strength::{Criterion, PasswordStrengthResult};

/// Glyph shown before a satisfied criterion.
pub const SATISFIED_MARKER: &str = "\u{2713}";

const PANEL_TEMPLATE: &str = r#"<div class="password-strength">
  <p class="password-strength-heading">{{heading}}</p>
{{#each lines}}
  <p class="password-strength-text{{#if satisfied}} strong{{/if}}" data-criterion="{{criterion}}">{{#if satisfied}}<span class="checkmark">{{../marker}}</span>{{/if}} {{message}}</p>
{{/each}}
</div>"#;

/// Renders password strength feedback for one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrengthPanel {
    result: PasswordStrengthResult,
}

impl PasswordStrengthPanel {
    pub fn new(result: PasswordStrengthResult) -> Self {
        Self { result }
    }

    pub fn result(&self) -> PasswordStrengthResult {
        self.result
    }

    /// Build the panel content with strings from `messages`.
    pub fn render(&self, messages: &impl Messages) -> PanelView {
        let lines = Criterion::ALL
            .iter()
            .map(|&criterion| CriterionLine {
                criterion,
                message: messages.message(MessageKey::Criterion(criterion)).into_owned(),
                satisfied: self.result.is_satisfied(criterion),
            })
            .collect();
        PanelView {
            heading: messages.message(MessageKey::Heading).into_owned(),
            lines,
        }
    }
}

/// One requirement line of the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionLine {
    pub criterion: Criterion,
    pub message: String,
    pub satisfied: bool,
}

impl CriterionLine {
    /// The leading marker, present only when the criterion is met.
    pub fn marker(&self) -> Option<&'static str> {
        self.satisfied.then_some(SATISFIED_MARKER)
    }
}

/// Rendered panel content: a heading then the criterion lines in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub heading: String,
    pub lines: Vec<CriterionLine>,
}

impl PanelView {
    /// Number of lines carrying the satisfied marker.
    pub fn satisfied_count(&self) -> usize {
        self.lines.iter().filter(|l| l.satisfied).count()
    }

    /// Plain text, one line per row.
    pub fn render_text(&self) -> String {
        let mut out = self.heading.clone();
        for line in &self.lines {
            out.push('\n');
            out.push_str(line.marker().unwrap_or(""));
            out.push(' ');
            out.push_str(&line.message);
        }
        out
    }

    /// HTML markup with escaped messages.
    pub fn render_html(&self) -> Result<String> {
        PanelRenderer::new()?.render(self)
    }
}

#[derive(Serialize)]
struct TemplateData<'a> {
    heading: &'a str,
    lines: &'a [CriterionLine],
    marker: &'static str,
}

/// HTML renderer for panel views.
pub struct PanelRenderer<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> PanelRenderer<'a> {
    /// Create a renderer with the panel template registered.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string("panel", PANEL_TEMPLATE)
            .map_err(PanelError::InvalidTemplate)?;
        Ok(Self { handlebars })
    }

    /// Render a panel view to HTML.
    pub fn render(&self, view: &PanelView) -> Result<String> {
        debug!(satisfied = view.satisfied_count(), "rendering password strength panel");
        let data = TemplateData {
            heading: &view.heading,
            lines: &view.lines,
            marker: SATISFIED_MARKER,
        };
        self.handlebars
            .render("panel", &data)
            .map_err(PanelError::TemplateError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::DefaultMessages;

    #[test]
    fn test_two_of_three_markers() {
        let view = PasswordStrengthPanel::new(PasswordStrengthResult::new(true, false, true)).render(&DefaultMessages);

        assert_eq!(view.satisfied_count(), 2);
        let order: Vec<_> = view.lines.iter().map(|l| l.criterion).collect();
        assert_eq!(order, Criterion::ALL.to_vec());
        let markers: Vec<_> = view.lines.iter().map(|l| l.marker().is_some()).collect();
        assert_eq!(markers, vec![true, false, true]);
    }

    #[test]
    fn test_render_text() {
        let view = PasswordStrengthPanel::new(PasswordStrengthResult::new(true, false, true)).render(&DefaultMessages);
        insta::assert_snapshot!(view.render_text(), @r"
        At least:
        ✓ 8 characters
         1 number
        ✓ 1 special character
        ");
    }

    #[test]
    fn test_render_uses_messages() {
        let messages = |key: MessageKey| format!("<{}>", key.id());
        let view = PasswordStrengthPanel::new(PasswordStrengthResult::default()).render(&messages);
        assert_eq!(view.heading, "<passwordStrengthTooltipHeading>");
        assert_eq!(view.lines[2].message, "<passwordStrengthTooltipContainsSpecialChar>");
        assert_eq!(view.satisfied_count(), 0);
    }

    #[test]
    fn test_render_html() {
        let view = PasswordStrengthPanel::new(PasswordStrengthResult::new(true, false, true)).render(&DefaultMessages);
        let html = view.render_html().unwrap();

        assert_eq!(html.matches("class=\"checkmark\"").count(), 2);
        assert_eq!(html.matches("password-strength-text").count(), 3);
        let length = html.find("data-criterion=\"length\"").unwrap();
        let number = html.find("data-criterion=\"number\"").unwrap();
        let special = html.find("data-criterion=\"special_char\"").unwrap();
        assert!(length < number && number < special);
        assert!(html.contains(SATISFIED_MARKER));
    }

    #[test]
    fn test_render_html_escapes_messages() {
        let messages = |key: MessageKey| match key {
            MessageKey::Heading => "Use <b>&</b>".to_string(),
            _ => "x".to_string(),
        };
        let view = PasswordStrengthPanel::new(PasswordStrengthResult::default()).render(&messages);
        let html = PanelRenderer::new().unwrap().render(&view).unwrap();
        assert!(html.contains("Use &lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!html.contains("checkmark"));
    }
}
