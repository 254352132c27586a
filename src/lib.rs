//! Thali
//!
//! Thali is a small shopping cart engine: an in-memory cart store, a checkout flow driven by typed
//! commands, and a renderer that turns the cart into a display-ready view.
//!
//! ```
//! use thali::prelude::*;
//!
//! let mut session = Session::default();
//!
//! session.dispatch(Command::add("Shahi Paneer", Price::new(280)));
//! session.dispatch(Command::add("Naan", Price::new(40)));
//!
//! let update = session.dispatch(Command::ConfirmCheckout);
//! assert_eq!(
//!     update.view.checkout,
//!     CheckoutView::ConfirmingPayment { total: "₹320".to_string() }
//! );
//!
//! let update = session.dispatch(Command::SelectPayment);
//! assert_eq!(update.notification, Some(Notification::order_placed()));
//! assert_eq!(update.view.badge, 0);
//! ```

pub mod cart;
pub mod checkout;
pub mod commands;
pub mod config;
pub mod menu;
pub mod notifications;
pub mod observability;
pub mod prelude;
pub mod prices;
pub mod session;
pub mod shell;
pub mod view;
