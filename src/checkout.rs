//! Checkout flow

use thiserror::Error;

use crate::cart::Cart;

/// Reasons a checkout step can be refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout was requested with no items in the cart.
    #[error("cart is empty")]
    EmptyCart,
}

/// Where the user is in the checkout flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutState {
    /// Adding and removing items.
    #[default]
    Browsing,

    /// Reviewing the total before choosing a payment method.
    ConfirmingPayment {
        /// Grand total captured when checkout was confirmed.
        total: u64,
    },
}

impl CheckoutState {
    /// Move to the confirmation step, capturing the cart total.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no lines; the state is left unchanged.
    pub fn confirm(&mut self, cart: &Cart) -> Result<u64, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let total = cart.grand_total();
        *self = CheckoutState::ConfirmingPayment { total };

        Ok(total)
    }

    /// Complete the payment step: clears the cart and returns to browsing.
    ///
    /// Returns the total that was paid, or `None` when there was no confirmation to complete.
    pub fn pay(&mut self, cart: &mut Cart) -> Option<u64> {
        let CheckoutState::ConfirmingPayment { total } = *self else {
            return None;
        };

        cart.clear();
        *self = CheckoutState::Browsing;

        Some(total)
    }

    /// Leave the confirmation step without paying. Returns `true` if the state changed.
    pub fn cancel(&mut self) -> bool {
        let was_confirming = self.is_confirming();
        *self = CheckoutState::Browsing;
        was_confirming
    }

    /// Check if the user is on the confirmation step.
    pub fn is_confirming(&self) -> bool {
        matches!(self, CheckoutState::ConfirmingPayment { .. })
    }
}
