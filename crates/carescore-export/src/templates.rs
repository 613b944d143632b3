//! Built-in report templates (Tera, Markdown output).
//!
//! All three instruments share one layout; the report data carries the
//! instrument-specific sections.

use crate::error::ExportError;

pub const ASSESSMENT_REPORT: &str = r#"# {{ instrument }} Assessment Report

**{{ facility_name }}**

Report generated: {{ generated_at }}

## Patient Information

- **Name:** {{ patient.name }}
- **MRN:** {{ patient.medical_record_number }}
- **Date of birth:** {{ patient.date_of_birth }} ({{ patient.age }} years)
- **Sex:** {{ patient.sex }}
- **Room:** {{ patient.room_number }}
- **Care setting:** {{ patient.care_setting }}
- **Admission:** {{ patient.admission_date }}
- **Diagnosis:** {{ patient.diagnosis }}

## Assessment

- **Assessment date:** {{ assessment_date }}
{% if assessed_by -%}
- **Assessed by:** {{ assessed_by }}
{% endif -%}
- **Total score:** {{ total_score }}
- **Risk level:** {{ tier_label }}

{{ tier_description }}

### Score Breakdown

{% if breakdown -%}
{% for row in breakdown -%}
- {{ row.name }}: {{ row.value }}
{% endfor -%}
{% else -%}
- No factors selected
{% endif %}
{% for item in summary -%}
- **{{ item.label }}:** {{ item.value }}
{% endfor %}
{% if concerns -%}
### {{ concerns_title }}

{% for concern in concerns -%}
- {{ concern }}
{% endfor %}
{% endif -%}
{% for list in lists -%}
### {{ list.title }}

{% for item in list.items -%}
- {{ item }}
{% endfor %}
{% endfor -%}
## Recommendations

{% for rec in recommendations -%}
- [{{ rec.priority }}] **{{ rec.category }}:** {{ rec.recommendation }}
{% endfor %}
{% if escalation_needed -%}
## Escalation

**Specialist referral recommended.** {{ escalation_reason }}

{% endif -%}
{% if trend -%}
## Trend

- **Trend:** {{ trend.trend }} ({{ trend.percentage_change }} over {{ trend.assessment_count }} assessments)
- **Last assessment:** {{ trend.last_assessment_date }}

{{ trend.recommendation }}

{% endif -%}
{% if notes -%}
## Notes

{{ notes }}

{% endif -%}
---

> {{ disclaimer }}
{% if supervisor_name %}
Reviewed by: {{ supervisor_name }}
{% endif %}"#;

/// Built-in template for an instrument id.
pub fn builtin(instrument_id: &str) -> Result<&'static str, ExportError> {
    match instrument_id {
        "braden" | "caprini" | "wells" => Ok(ASSESSMENT_REPORT),
        other => Err(ExportError::TemplateNotFound(other.to_string())),
    }
}
