//! End-to-end checkout flow.
//!
//! Walks a session through the dinner order below, checking the view after every command:
//!
//! 1. Add Shahi Paneer (₹280): total ₹280, badge 1
//! 2. Add Shahi Paneer again: one line with quantity 2, total ₹560, badge 2
//! 3. Add Naan (₹40): total ₹600, badge 3
//! 4. Remove Shahi Paneer: total ₹40, badge 1
//! 5. Confirm checkout: payment step shows ₹40
//! 6. Select payment: cart cleared, total ₹0, badge 0, one success notification

use testresult::TestResult;

use thali::{
    prelude::*,
    shell::Shell,
    view::EMPTY_CART_MESSAGE,
};

#[test]
fn dinner_order_scenario() {
    let mut session = Session::default();
    let mut notifications = Vec::new();

    let mut step = |session: &mut Session, command: Command| {
        let update = session.dispatch(command);
        notifications.extend(update.notification.clone());
        update.view
    };

    let view = step(&mut session, Command::add("Shahi Paneer", Price::new(280)));
    assert_eq!((view.total.as_str(), view.badge), ("₹280", 1));

    let view = step(&mut session, Command::add("Shahi Paneer", Price::new(280)));
    assert_eq!((view.total.as_str(), view.badge), ("₹560", 2));
    assert_eq!(view.lines().len(), 1, "repeat add must not create a second line");
    assert_eq!(view.lines().first().map(|line| line.quantity), Some(2));

    let view = step(&mut session, Command::add("Naan", Price::new(40)));
    assert_eq!((view.total.as_str(), view.badge), ("₹600", 3));

    let view = step(&mut session, Command::remove("Shahi Paneer"));
    assert_eq!((view.total.as_str(), view.badge), ("₹40", 1));

    let view = step(&mut session, Command::ConfirmCheckout);
    assert_eq!(
        view.checkout,
        CheckoutView::ConfirmingPayment {
            total: "₹40".to_string()
        }
    );

    let view = step(&mut session, Command::SelectPayment);
    assert_eq!((view.total.as_str(), view.badge), ("₹0", 0));
    assert_eq!(
        view.body,
        CartBody::Empty {
            message: EMPTY_CART_MESSAGE
        }
    );
    assert_eq!(view.checkout, CheckoutView::Browsing);

    let successes: Vec<&Notification> = notifications
        .iter()
        .filter(|n| **n == Notification::order_placed())
        .collect();
    assert_eq!(successes.len(), 1, "expected exactly one order confirmation");
    assert_eq!(
        notifications
            .iter()
            .filter(|n| n.level() == NotificationLevel::Success)
            .count(),
        4,
        "three add toasts and one order confirmation"
    );
    assert!(session.cart().is_empty());
}

#[test]
fn empty_checkout_is_rejected_with_warning() {
    let mut session = Session::default();

    let update = session.dispatch(Command::ConfirmCheckout);

    assert_eq!(update.notification, Some(Notification::cart_empty()));
    assert_eq!(update.view.checkout, CheckoutView::Browsing);

    let update = session.dispatch(Command::SelectPayment);

    assert_eq!(update.notification, None, "no order can be placed from an empty cart");
}

#[test]
fn shell_walks_through_checkout() -> TestResult {
    let mut shell = Shell::new(Menu::builtin()?);
    let mut out = Vec::new();

    let script = "\
add Shahi Paneer
add shahi paneer
add Naan
remove Shahi Paneer
checkout
pay
cart
";

    shell.run(script.as_bytes(), &mut out)?;

    let text = String::from_utf8(out)?;

    assert!(
        text.contains("[success] 'Shahi Paneer' was added to your cart."),
        "{text}"
    );
    assert!(text.contains("Total: ₹600"), "{text}");
    assert!(text.contains("Payment due: ₹40."), "{text}");
    assert_eq!(
        text.matches("[success] Your order has been placed successfully!")
            .count(),
        1,
        "{text}"
    );
    assert!(text.contains("Your cart is empty."), "{text}");
    assert!(shell.session().cart().is_empty());

    Ok(())
}

#[test]
fn shell_warns_on_empty_checkout() -> TestResult {
    let mut shell = Shell::new(Menu::builtin()?);
    let mut out = Vec::new();

    shell.run("checkout\npay\n".as_bytes(), &mut out)?;

    let text = String::from_utf8(out)?;

    assert!(text.contains("[warning] Your cart is empty!"), "{text}");
    assert!(!text.contains("placed successfully"), "{text}");
    assert_eq!(shell.session().checkout(), CheckoutState::Browsing);

    Ok(())
}
