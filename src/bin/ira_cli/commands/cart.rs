// ABOUTME: Cart command for ira-cli
// ABOUTME: Prints subtotal, tax, shipping, and gateway amount for the given lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IRA Health

use ira_health::errors::AppResult;
use ira_health::shop::{CartItem, CartSummary};
use serde_json::json;

use crate::helpers::display::{display_cart, Printer};

/// Summarize a cart
pub fn summarize(printer: &Printer, items: &[CartItem]) -> AppResult<()> {
    let summary = CartSummary::from_items(items);
    let payload = json!({
        "items": items,
        "summary": summary,
        "amount_minor_units": summary.to_minor_units(),
    });
    printer.emit(&payload, || display_cart(items, &summary))
}
