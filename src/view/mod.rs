//! Cart view
//!
//! A display-ready snapshot of the cart, rebuilt after every command. [`render`] is pure: it only
//! reads the cart and the checkout state.

use crate::{cart::Cart, checkout::CheckoutState, commands::Command, prices::DisplayFormat};

mod table;

pub use table::ViewError;

/// Placeholder shown instead of line items when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    /// Item name.
    pub name: String,

    /// Formatted unit price.
    pub unit_price: String,

    /// Number of units.
    pub quantity: u32,

    /// Formatted `unit price * quantity`.
    pub line_total: String,

    /// Command that removes this line.
    pub remove: Command,
}

/// Main body of the cart view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartBody {
    /// Nothing in the cart.
    Empty {
        /// Placeholder text.
        message: &'static str,
    },

    /// Lines in insertion order.
    Lines(Vec<LineView>),
}

/// Checkout step as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutView {
    /// No checkout in progress.
    Browsing,

    /// Waiting for a payment method.
    ConfirmingPayment {
        /// Formatted total captured when checkout was confirmed.
        total: String,
    },
}

/// Snapshot of everything the cart UI displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Line items or the empty placeholder.
    pub body: CartBody,

    /// Formatted grand total.
    pub total: String,

    /// Item count badge.
    pub badge: u64,

    /// Checkout step.
    pub checkout: CheckoutView,
}

impl CartView {
    /// Rendered lines; empty when the cart is empty.
    pub fn lines(&self) -> &[LineView] {
        match &self.body {
            CartBody::Empty { .. } => &[],
            CartBody::Lines(lines) => lines.as_slice(),
        }
    }

    /// Check if the view shows the empty-cart placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, CartBody::Empty { .. })
    }
}

/// Build a view of `cart` at the given checkout step.
pub fn render(cart: &Cart, checkout: &CheckoutState, format: DisplayFormat) -> CartView {
    let body = if cart.is_empty() {
        CartBody::Empty {
            message: EMPTY_CART_MESSAGE,
        }
    } else {
        CartBody::Lines(
            cart.lines()
                .map(|line| LineView {
                    name: line.name().to_string(),
                    unit_price: format.price(line.unit_price()),
                    quantity: line.quantity(),
                    line_total: format.format(line.line_total()),
                    remove: Command::remove(line.name()),
                })
                .collect(),
        )
    };

    let checkout = match checkout {
        CheckoutState::Browsing => CheckoutView::Browsing,
        CheckoutState::ConfirmingPayment { total } => CheckoutView::ConfirmingPayment {
            total: format.format(*total),
        },
    };

    CartView {
        body,
        total: format.format(cart.grand_total()),
        badge: cart.item_count(),
        checkout,
    }
}
