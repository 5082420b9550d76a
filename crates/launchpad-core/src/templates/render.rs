//! `{{variable}}` substitution

use crate::error::TemplateError;

/// Substitute `{{key}}` placeholders.
///
/// Fails if a placeholder remains after substitution.
pub fn render(template: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut output = template.to_string();
    for (key, value) in vars {
        output = output.replace(&format!("{{{{{key}}}}}"), value);
    }

    if let Some(start) = output.find("{{") {
        let rest = &output[start + 2..];
        let name = rest.split("}}").next().unwrap_or(rest).trim();
        return Err(TemplateError::MissingVariable(name.to_string()));
    }

    Ok(output)
}
