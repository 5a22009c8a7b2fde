//! Server-rendered form preview

use formcraft_core::{FieldOption, PersistedForm};
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

const PREVIEW_TEMPLATE: &str = "form_preview";
const ERROR_TEMPLATE: &str = "error_page";

const PREVIEW_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{title}} - Preview</title>
</head>
<body>
  <main class="form-preview">
    <h1>{{title}}</h1>
    <form onsubmit="return false;">
{{#each fields}}
      <div class="form-field level-{{level}}">
        <label for="{{dom_id}}">{{label}}{{#if required}} <span class="required">*</span>{{/if}}</label>
        <select id="{{dom_id}}" name="{{dom_id}}"{{#if required}} required{{/if}}>
          <option value="">-- Select --</option>
{{#each options}}
          <option value="{{value}}"{{#if selected}} selected{{/if}}>{{text}}</option>
{{/each}}
        </select>
      </div>
{{/each}}
    </form>
  </main>
</body>
</html>
"#;

const ERROR_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{status}}</title>
</head>
<body>
  <main class="error">
    <h1>{{status}}</h1>
    <p>{{message}}</p>
  </main>
</body>
</html>
"#;

#[derive(Serialize)]
struct PreviewPage<'a> {
    title: &'a str,
    fields: Vec<PreviewField<'a>>,
}

#[derive(Serialize)]
struct PreviewField<'a> {
    dom_id: String,
    label: &'a str,
    level: i32,
    required: bool,
    options: Vec<PreviewOption<'a>>,
}

#[derive(Serialize)]
struct PreviewOption<'a> {
    text: &'a str,
    value: &'a str,
    selected: bool,
}

#[derive(Serialize)]
struct ErrorPage<'a> {
    status: u16,
    message: &'a str,
}

/// Handlebars renderer for preview and error pages
pub struct PreviewRenderer {
    registry: Handlebars<'static>,
}

impl PreviewRenderer {
    /// Register the built-in templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(PREVIEW_TEMPLATE, PREVIEW_HTML)?;
        registry.register_template_string(ERROR_TEMPLATE, ERROR_HTML)?;
        Ok(Self { registry })
    }

    /// Render a stored form as read-only dropdowns, pre-selecting each field's saved option
    pub fn render_form(
        &self,
        form: &PersistedForm,
        options: &[FieldOption],
    ) -> Result<String, RenderError> {
        let fields = form
            .fields
            .iter()
            .map(|field| PreviewField {
                dom_id: format!("field_{}", field.field_id),
                label: &field.label,
                level: field.level,
                required: field.required,
                options: options
                    .iter()
                    .map(|opt| PreviewOption {
                        text: &opt.text,
                        value: &opt.value,
                        selected: field.selected_option.as_deref() == Some(opt.value.as_str()),
                    })
                    .collect(),
            })
            .collect();

        let page = PreviewPage {
            title: &form.title,
            fields,
        };
        self.registry.render(PREVIEW_TEMPLATE, &page)
    }

    /// Render a minimal HTML error page
    pub fn render_error(&self, status: u16, message: &str) -> Result<String, RenderError> {
        self.registry
            .render(ERROR_TEMPLATE, &ErrorPage { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use formcraft_core::{default_field_options, FormId, PersistedFormField};

    fn field(id: i32, label: &str, required: bool, selected: Option<&str>) -> PersistedFormField {
        PersistedFormField {
            field_id: id,
            form_id: 1,
            label: label.into(),
            level: 0,
            required,
            selected_option: selected.map(Into::into),
            display_order: id,
        }
    }

    fn form(fields: Vec<PersistedFormField>) -> PersistedForm {
        PersistedForm {
            id: FormId::new(1).unwrap(),
            title: "Intake".into(),
            created_at: Utc::now(),
            modified_at: Utc::now(),
            fields,
        }
    }

    #[test]
    fn test_renders_selected_option_and_required_marker() {
        let renderer = PreviewRenderer::new().unwrap();
        let html = renderer
            .render_form(
                &form(vec![field(1, "Country", true, Some("Option3"))]),
                &default_field_options(),
            )
            .unwrap();

        assert!(html.contains("<h1>Intake</h1>"));
        assert!(html.contains(r#"<option value="Option3" selected>Option 3</option>"#));
        assert!(html.contains(r#"<option value="Option1">Option 1</option>"#));
        assert!(html.contains(r#"<span class="required">*</span>"#));
        assert!(!html.contains("href="));
    }

    #[test]
    fn test_escapes_user_text() {
        let renderer = PreviewRenderer::new().unwrap();
        let html = renderer
            .render_form(
                &form(vec![field(1, "<script>alert(1)</script>", false, None)]),
                &default_field_options(),
            )
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("class=\"required\""));
        assert!(!html.contains(" selected>"));
    }

    #[test]
    fn test_error_page() {
        let renderer = PreviewRenderer::new().unwrap();
        let html = renderer.render_error(404, "form 9 not found").unwrap();
        assert!(html.contains("<h1>404</h1>"));
        assert!(html.contains("form 9 not found"));
        assert!(!html.contains("href="));
    }
}
