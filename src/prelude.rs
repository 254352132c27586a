//! Thali prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    checkout::{CheckoutError, CheckoutState},
    commands::Command,
    menu::{Menu, MenuError, MenuItem},
    notifications::{Notification, NotificationLevel},
    prices::{DisplayFormat, Price, PriceError},
    session::{Session, Update},
    view::{CartBody, CartView, CheckoutView, LineView, ViewError, render},
};
