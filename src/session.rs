//! Session
//!
//! A [`Session`] owns the cart and the checkout state for one user. Every interaction goes through
//! [`Session::dispatch`], which applies the command and then renders a fresh [`CartView`].

use tracing::{debug, info, warn};

use crate::{
    cart::Cart,
    checkout::CheckoutState,
    commands::Command,
    notifications::Notification,
    prices::DisplayFormat,
    view::{CartView, render},
};

/// Result of dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// One-shot message for the user, if the command produced one.
    pub notification: Option<Notification>,

    /// The view after the command was applied.
    pub view: CartView,
}

/// Cart and checkout state for a single user session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cart: Cart,
    checkout: CheckoutState,
    format: DisplayFormat,
}

impl Session {
    /// Start a session with an empty cart.
    pub fn new(format: DisplayFormat) -> Self {
        Self {
            cart: Cart::new(),
            checkout: CheckoutState::Browsing,
            format,
        }
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current checkout step.
    pub fn checkout(&self) -> CheckoutState {
        self.checkout
    }

    /// Display format used for rendering.
    pub fn format(&self) -> &DisplayFormat {
        &self.format
    }

    /// Render the current state without changing it.
    pub fn view(&self) -> CartView {
        render(&self.cart, &self.checkout, self.format)
    }

    /// Apply `command`, then render.
    pub fn dispatch(&mut self, command: Command) -> Update {
        let notification = self.apply(command);

        Update {
            notification,
            view: self.view(),
        }
    }

    /// The confirmed total is stale once the cart changes.
    fn leave_payment_step(&mut self) {
        if self.checkout.cancel() {
            debug!("cart edited on the payment step, returning to browsing");
        }
    }

    fn apply(&mut self, command: Command) -> Option<Notification> {
        match command {
            Command::AddItem { name, unit_price } => {
                self.leave_payment_step();

                let line = self.cart.add_item(name, unit_price);

                debug!(
                    item = line.name(),
                    quantity = line.quantity(),
                    "item added"
                );

                Some(Notification::item_added(line.name()))
            }
            Command::RemoveItem { name } => {
                match self.cart.remove_item(&name) {
                    Some(line) => {
                        self.leave_payment_step();
                        debug!(item = %name, quantity = line.quantity(), "item removed");
                    }
                    None => debug!(item = %name, "item not in cart, nothing removed"),
                }

                None
            }
            Command::Clear => {
                self.leave_payment_step();
                self.cart.clear();
                debug!("cart cleared");

                None
            }
            Command::ViewCart => None,
            Command::ConfirmCheckout => match self.checkout.confirm(&self.cart) {
                Ok(total) => {
                    info!(total, items = self.cart.item_count(), "checkout confirmed");

                    None
                }
                Err(err) => {
                    warn!(%err, "checkout rejected");

                    Some(Notification::cart_empty())
                }
            },
            Command::SelectPayment => {
                if let Some(total) = self.checkout.pay(&mut self.cart) {
                    info!(total, "order placed");

                    Some(Notification::order_placed())
                } else {
                    debug!("payment selected outside the payment step, ignored");

                    None
                }
            }
            Command::CancelCheckout => {
                if self.checkout.cancel() {
                    info!("checkout cancelled");

                    Some(Notification::checkout_cancelled())
                } else {
                    None
                }
            }
        }
    }
}
