//! Notifications
//!
//! One-shot messages shown to the user after a command, such as the toast that confirms an item
//! was added.

use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Neutral information.
    Info,

    /// A command completed as the user intended.
    Success,

    /// A command was rejected; nothing changed.
    Warning,
}

impl NotificationLevel {
    fn label(self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
        }
    }
}

/// A transient message produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    level: NotificationLevel,
    message: String,
}

impl Notification {
    /// Create a notification with an arbitrary message.
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// `'<name>' was added to your cart.`
    pub fn item_added(name: &str) -> Self {
        Self::new(
            NotificationLevel::Success,
            format!("'{name}' was added to your cart."),
        )
    }

    /// Shown once after a payment method is selected.
    pub fn order_placed() -> Self {
        Self::new(
            NotificationLevel::Success,
            "Your order has been placed successfully!",
        )
    }

    /// Checkout was attempted with nothing in the cart.
    pub fn cart_empty() -> Self {
        Self::new(NotificationLevel::Warning, "Your cart is empty!")
    }

    /// The payment step was dismissed without paying.
    pub fn checkout_cancelled() -> Self {
        Self::new(NotificationLevel::Info, "Checkout cancelled.")
    }

    /// Severity of this notification.
    pub fn level(&self) -> NotificationLevel {
        self.level
    }

    /// Message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_added_quotes_name() {
        let notification = Notification::item_added("Shahi Paneer");

        assert_eq!(notification.level(), NotificationLevel::Success);
        assert_eq!(
            notification.message(),
            "'Shahi Paneer' was added to your cart."
        );
    }

    #[test]
    fn cart_empty_is_a_warning() {
        assert_eq!(
            Notification::cart_empty().level(),
            NotificationLevel::Warning
        );
    }

    #[test]
    fn display_prefixes_level() {
        assert_eq!(
            Notification::order_placed().to_string(),
            "[success] Your order has been placed successfully!"
        );
        assert_eq!(
            Notification::new(NotificationLevel::Info, "Menu loaded").to_string(),
            "[info] Menu loaded"
        );
    }
}
