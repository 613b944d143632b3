use tera::{Context, Tera};
use tracing::debug;

use crate::error::ExportError;
use crate::report::ReportData;
use crate::templates;

/// Render a Tera template with a report.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The `report` fields become the template context variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &ReportData,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    debug!(template = template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Render a report with the built-in template for its instrument.
pub fn render_report(report: &ReportData) -> Result<String, ExportError> {
    let template = templates::builtin(&report.instrument_id)?;
    render_template(&format!("{}.md", report.instrument_id), template, report)
}
