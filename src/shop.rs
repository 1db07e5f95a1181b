// ABOUTME: Wellness shop cart arithmetic, shipping addresses, and order records
// ABOUTME: Quantity clamping, tax and shipping totals, and conversion to payment gateway minor units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

//! Shop
//!
//! Payment itself is handled by an external gateway; this module only
//! computes what is sent to it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::constants::shop::{
    FLAT_SHIPPING, MAX_QUANTITY, MINOR_UNITS_PER_MAJOR, MIN_QUANTITY, TAX_RATE,
};
use crate::errors::{AppError, AppResult};

/// One product line in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier
    pub product_id: String,
    /// Product name at the time it was added
    pub name: String,
    /// Price per unit
    pub unit_price: f64,
    /// Units, always within 1..=10
    pub quantity: u32,
}

impl CartItem {
    /// New cart line with a clamped quantity
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative or non-finite price
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> AppResult<Self> {
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Unit price must be a non-negative amount, got {unit_price}"
            )));
        }
        let mut item = Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity: MIN_QUANTITY,
        };
        item.set_quantity(quantity);
        Ok(item)
    }

    /// Set the quantity, clamped to 1..=10
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
    }

    /// `unit_price * quantity`
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Parses `name:price[:quantity]`, as accepted by the CLI
impl FromStr for CartItem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':').map(str::trim);
        let name = parts.next().filter(|n| !n.is_empty()).ok_or_else(|| {
            AppError::invalid_input(format!("Cart item '{s}' is missing a name"))
        })?;
        let price = parts
            .next()
            .ok_or_else(|| AppError::invalid_input(format!("Cart item '{s}' is missing a price")))?
            .parse::<f64>()
            .map_err(|e| {
                AppError::invalid_input(format!("Cart item '{s}' has an invalid price"))
                    .with_source(e)
            })?;
        let quantity = parts
            .next()
            .map(str::parse::<u32>)
            .transpose()
            .map_err(|e| {
                AppError::invalid_input(format!("Cart item '{s}' has an invalid quantity"))
                    .with_source(e)
            })?
            .unwrap_or(MIN_QUANTITY);

        let product_id = name.to_lowercase().replace(' ', "-");
        Self::new(product_id, name, price, quantity)
    }
}

/// Totals shown at checkout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Sum of line totals
    pub subtotal: f64,
    /// 10% of the subtotal
    pub tax: f64,
    /// Flat 5.99, or 0 for an empty cart
    pub shipping: f64,
    /// `subtotal + tax + shipping`
    pub total: f64,
}

impl CartSummary {
    /// Compute totals for a cart
    #[must_use]
    pub fn from_items(items: &[CartItem]) -> Self {
        let subtotal: f64 = items.iter().map(CartItem::line_total).sum();
        let tax = subtotal * TAX_RATE;
        let shipping = if items.is_empty() { 0.0 } else { FLAT_SHIPPING };
        let summary = Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
        };
        debug!(items = items.len(), total = summary.total, "Computed cart summary");
        summary
    }

    /// Total in the gateway's integer minor units (e.g. paise), rounded
    #[must_use]
    pub fn to_minor_units(&self) -> u64 {
        to_minor_units(self.total)
    }
}

/// Convert a major-unit amount to minor units, rounding to the nearest unit
#[must_use]
pub fn to_minor_units(amount: f64) -> u64 {
    (amount.max(0.0) * MINOR_UNITS_PER_MAJOR).round() as u64
}

/// Shipping address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Recipient
    pub full_name: String,
    /// Street address
    pub address_line1: String,
    /// Apartment, suite, etc.
    #[serde(default)]
    pub address_line2: Option<String>,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub postal_code: String,
    /// Country
    pub country: String,
    /// Contact phone
    pub phone: String,
}

impl Address {
    /// Require every mandatory field to be non-blank
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first blank field
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("full_name", &self.full_name),
            ("address_line1", &self.address_line1),
            ("city", &self.city),
            ("state", &self.state),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
            ("phone", &self.phone),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(AppError::missing_field(*field)),
            None => Ok(()),
        }
    }
}

/// Order lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting payment confirmation
    #[default]
    Pending,
    /// Paid and being prepared
    Processing,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
    /// Cancelled before shipping
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: String,
    /// Purchased lines
    pub items: Vec<CartItem>,
    /// Checkout totals
    pub summary: CartSummary,
    /// Lifecycle state
    pub status: OrderStatus,
    /// Where to ship
    pub shipping_address: Address,
    /// Payment method label, e.g. "razorpay"
    pub payment_method: String,
    /// Gateway payment reference once paid
    #[serde(default)]
    pub payment_id: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Place a pending order for a non-empty cart
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty cart and `MissingRequiredField`
    /// for an incomplete address
    pub fn place(
        items: Vec<CartItem>,
        shipping_address: Address,
        payment_method: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        if items.is_empty() {
            return Err(AppError::invalid_input("Cannot place an order for an empty cart"));
        }
        shipping_address.validate()?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            summary: CartSummary::from_items(&items),
            items,
            status: OrderStatus::Pending,
            shipping_address,
            payment_method: payment_method.into(),
            payment_id: None,
            created_at,
        })
    }

    /// Record the gateway payment and move to `Processing`
    ///
    /// # Errors
    ///
    /// Returns `ResourceConflict` unless the order is pending
    pub fn mark_paid(&mut self, payment_id: impl Into<String>) -> AppResult<()> {
        if self.status != OrderStatus::Pending {
            return Err(AppError::conflict(format!(
                "Order {} is {} and cannot be paid",
                self.id, self.status
            )));
        }
        self.payment_id = Some(payment_id.into());
        self.status = OrderStatus::Processing;
        Ok(())
    }
}
