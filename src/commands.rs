//! Commands
//!
//! Every user interaction is one [`Command`], handled by
//! [`Session::dispatch`](crate::session::Session::dispatch).

use crate::prices::Price;

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add one unit of an item. The price is only used if the item is not already in the cart.
    AddItem {
        /// Item name.
        name: String,
        /// Unit price in whole currency units.
        unit_price: Price,
    },

    /// Remove an item's line entirely.
    RemoveItem {
        /// Item name.
        name: String,
    },

    /// Empty the cart.
    Clear,

    /// Open the cart view; renders without changing anything.
    ViewCart,

    /// Proceed to the payment step.
    ConfirmCheckout,

    /// Choose a payment method on the payment step.
    SelectPayment,

    /// Dismiss the payment step without paying.
    CancelCheckout,
}

impl Command {
    /// Shorthand for [`Command::AddItem`].
    pub fn add(name: impl Into<String>, unit_price: Price) -> Self {
        Command::AddItem {
            name: name.into(),
            unit_price,
        }
    }

    /// Shorthand for [`Command::RemoveItem`].
    pub fn remove(name: impl Into<String>) -> Self {
        Command::RemoveItem { name: name.into() }
    }
}
