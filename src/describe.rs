// src/describe.rs

//! Rendering of error description templates.
//!
//! Templates use `{name}` placeholders that refer to the error's fields;
//! `{{` and `}}` produce literal braces.
//!
//! Only bare names are understood. Conversions and format specs (`{key!r}`,
//! `{len:>4}`), positional `{}` and unbalanced braces are rejected with
//! [`ExhausterrError::UnsupportedPlaceholder`] rather than copied through.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::Fields;
use crate::errors::{ExhausterrError, Result};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}|\{[^{}]*\}?|\}")
        .expect("placeholder regex is valid")
});

/// Substitute every placeholder in `template` with the matching field.
pub fn render(template: &str, fields: &Fields) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&template[last..whole.start()]);
        last = whole.end();

        match caps.get(1) {
            Some(name) => {
                let value = fields.get(name.as_str()).ok_or_else(|| {
                    ExhausterrError::MissingField {
                        field: name.as_str().to_string(),
                        template: template.to_string(),
                    }
                })?;
                out.push_str(value);
            }
            None => match whole.as_str() {
                "{{" => out.push('{'),
                "}}" => out.push('}'),
                other => {
                    return Err(ExhausterrError::UnsupportedPlaceholder {
                        placeholder: other.to_string(),
                        template: template.to_string(),
                    });
                }
            },
        }
    }

    out.push_str(&template[last..]);
    Ok(out)
}

/// Like [`render`], but a broken template yields itself instead of an error.
///
/// Used on the escalation path, where producing *some* message matters more
/// than a perfect one.
pub fn render_lenient(template: &str, fields: &Fields) -> String {
    match render(template, fields) {
        Ok(rendered) => rendered,
        Err(err) => {
            warn!(error = %err, "falling back to raw description template");
            template.to_string()
        }
    }
}
