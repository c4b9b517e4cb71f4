//! Cart commands.

use cart_widget_core::format_price;

use super::{CommandError, Session, output};

/// Add an item and print the refreshed counter.
///
/// # Errors
///
/// Returns `CommandError::Widget` if the cart could not be persisted.
pub fn add(session: &mut Session, name: &str, price: f64) -> Result<(), CommandError> {
    session.binder.add_to_cart_handler(name, price)?;
    output(format_args!("Cart: {}", session.counter_text()))
}

/// Print the counter as shown after page load.
///
/// # Errors
///
/// Returns `CommandError::Output` if stdout cannot be written.
pub fn count(session: &Session) -> Result<(), CommandError> {
    output(session.counter_text())
}

/// Print every entry in add order, then the subtotal.
///
/// # Errors
///
/// Returns `CommandError::Output` if stdout cannot be written.
pub fn list(session: &Session) -> Result<(), CommandError> {
    for line in list_lines(session) {
        output(line)?;
    }
    Ok(())
}

/// Lines printed by `list`.
fn list_lines(session: &Session) -> Vec<String> {
    let cart = session.binder.cart();
    if cart.count() == 0 {
        return vec!["Cart is empty".to_string()];
    }

    let mut lines: Vec<String> = cart
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "{:>3}. {} {}",
                index + 1,
                entry.name(),
                format_price(entry.price())
            )
        })
        .collect();

    lines.push(cart.subtotal().map_or_else(
        || "Subtotal: n/a".to_string(),
        |total| format!("Subtotal: ${:.2}", total.round_dp(2)),
    ));
    lines
}
