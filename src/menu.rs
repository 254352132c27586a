//! Menu
//!
//! The items a user can add to the cart, loaded from YAML:
//!
//! ```yaml
//! items:
//!   - name: Shahi Paneer
//!     price: 280 INR
//! ```

use std::{fs, io, path::Path};

use rusty_money::iso::{Currency, EUR, GBP, INR, USD};
use serde::Deserialize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    commands::Command,
    prices::{DisplayFormat, Price, PriceError},
    view::ViewError,
};

const BUILTIN_MENU: &str = include_str!("../fixtures/menu.yml");

/// Menu loading errors
#[derive(Debug, Error)]
pub enum MenuError {
    /// IO error reading the menu file
    #[error("Failed to read menu file: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Price is not in `AMOUNT CURRENCY` form
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Amount could not be used as a price
    #[error(transparent)]
    Price(#[from] PriceError),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Items priced in different currencies
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Two items share a name
    #[error("Duplicate menu item: {0}")]
    DuplicateItem(String),

    /// No items defined
    #[error("Menu has no items")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct MenuFixture {
    items: Vec<MenuItemFixture>,
}

#[derive(Debug, Deserialize)]
struct MenuItemFixture {
    name: String,
    price: String,
}

/// A dish that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Item name
    pub name: String,

    /// Unit price
    pub price: Price,
}

impl MenuItem {
    /// The command that adds one of this item to the cart.
    pub fn add_command(&self) -> Command {
        Command::add(self.name.clone(), self.price)
    }
}

/// Menu
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
    currency: &'static Currency,
}

impl Menu {
    /// The menu bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled YAML is invalid.
    pub fn builtin() -> Result<Self, MenuError> {
        Self::from_yaml_str(BUILTIN_MENU)
    }

    /// Load a menu from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid menu.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Parse a menu from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, a price is invalid, the items use more than
    /// one currency, two items share a name, or there are no items.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, MenuError> {
        let fixture: MenuFixture = serde_norway::from_str(yaml)?;

        let mut items: Vec<MenuItem> = Vec::with_capacity(fixture.items.len());
        let mut currency: Option<&'static Currency> = None;

        for item_fixture in fixture.items {
            let (price, item_currency) = parse_price(&item_fixture.price)?;

            if let Some(existing_currency) = currency {
                if existing_currency != item_currency {
                    return Err(MenuError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        item_currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                currency = Some(item_currency);
            }

            let name = item_fixture.name.trim().to_string();

            if items
                .iter()
                .any(|item| item.name.eq_ignore_ascii_case(&name))
            {
                return Err(MenuError::DuplicateItem(name));
            }

            items.push(MenuItem { name, price });
        }

        let currency = currency.ok_or(MenuError::Empty)?;

        Ok(Self { items, currency })
    }

    /// Find an item by name, ignoring ASCII case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        let name = name.trim();

        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Items in menu order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Currency all prices are in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Display format for this menu's currency.
    pub fn display_format(&self) -> DisplayFormat {
        DisplayFormat::new(self.currency)
    }

    /// Writes the menu as a table.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::IO`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ViewError> {
        let format = self.display_format();
        let mut builder = Builder::default();

        builder.push_record(["Item", "Price"]);

        for item in &self.items {
            builder.push_record([item.name.clone(), format.price(item.price)]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..2), Alignment::right());

        writeln!(out, "\n{table}\n").map_err(|_err| ViewError::IO)
    }
}

/// Parse price string (e.g., "280 INR") into a whole-unit price and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the amount is not a
/// non-negative whole number, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(Price, &'static Currency), MenuError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(MenuError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let price = amount.parse::<Price>()?;

    let currency = match *currency_code {
        "INR" => INR,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(MenuError::UnknownCurrency(other.to_string())),
    };

    Ok((price, currency))
}
