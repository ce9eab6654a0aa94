//! Literal placeholder substitution for the page template
//!
//! `{name}` is replaced by the value bound to `name`, `{{` and `}}` produce
//! literal braces. Nothing else is interpreted.

use thiserror::Error;

/// Template contract errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template placeholder '{{{0}}}' has no value")]
    UnknownPlaceholder(String),

    #[error("unmatched '{brace}' at byte {position} of the template")]
    UnmatchedBrace { brace: char, position: usize },
}

/// Fill `template` with the given `(name, value)` pairs
pub fn fill(template: &str, values: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                output.push('{');
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                output.push('}');
            }
            '{' => {
                let start = position + 1;
                let end = loop {
                    match chars.next() {
                        Some((i, '}')) => break i,
                        Some((_, '{')) | None => {
                            return Err(TemplateError::UnmatchedBrace {
                                brace: '{',
                                position,
                            })
                        }
                        Some(_) => {}
                    }
                };

                let name = &template[start..end];
                let value = values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
                output.push_str(value);
            }
            '}' => {
                return Err(TemplateError::UnmatchedBrace {
                    brace: '}',
                    position,
                })
            }
            c => output.push(c),
        }
    }

    Ok(output)
}
