//! Page commands.

use cart_widget::ui::{Form, FormOutcome, SubmitEvent};

use super::{CommandError, Session, output};

/// Scroll to the products section.
///
/// # Errors
///
/// Returns `CommandError::Output` if stdout cannot be written.
pub fn scroll(session: &mut Session) -> Result<(), CommandError> {
    session.binder.scroll_to_products();
    let scrolled = session
        .binder
        .page()
        .scrolls()
        .last()
        .map(|(id, behavior)| format!("Scrolled to #{id} ({behavior:?})"));
    output(scrolled.unwrap_or_else(|| "Products section not found".to_string()))
}

/// Submit a form built from `fields`.
///
/// # Errors
///
/// Returns `CommandError::Output` if stdout cannot be written.
pub fn submit(
    session: &mut Session,
    form_id: &str,
    fields: Vec<(String, String)>,
) -> Result<(), CommandError> {
    let mut form = fields
        .into_iter()
        .fold(Form::new(form_id), |form, (name, value)| {
            form.with_field(name, value)
        });

    let mut event = SubmitEvent::new(&mut form);
    let FormOutcome::Discarded { fields_cleared } = session.binder.submit_form_handler(&mut event);
    output(format_args!(
        "Form #{form_id} cleared ({fields_cleared} fields), nothing was sent"
    ))
}

/// Parse a `name=value` form field argument.
///
/// # Errors
///
/// Returns a message if there is no `=` or the name is empty.
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{raw}'")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("email=ada@example.com").unwrap(),
            ("email".to_string(), "ada@example.com".to_string())
        );
        assert_eq!(
            parse_field("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_field("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_field_invalid() {
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=value").is_err());
    }
}
