//! Cart walkthrough example.
//!
//! Builds a cart from the house menu, prints a small receipt, and shows the
//! order draft JSON produced by checkout.

use anyhow::Result;
use rusty_money::{Money, iso};

use comanda::{cart::Cart, fixtures};

/// Cart walkthrough example entry point.
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> Result<()> {
    let menu = fixtures::menu();
    let mut cart = Cart::new();

    for item in menu.iter().filter(|item| item.id <= 4) {
        cart.add_item(item);
    }

    // A second lime pie for the table.
    cart.increment(4);
    cart.select_table("3");

    println!("Mesa {}", cart.table().unwrap_or("?"));

    for line in cart.iter() {
        println!(
            "  {:<28} x{:<2} {}",
            line.item.name,
            line.quantity,
            Money::from_decimal(line.line_total(), iso::BRL)
        );
    }

    println!(
        "  {:<32} {}",
        "Total",
        Money::from_decimal(cart.total(), iso::BRL)
    );

    let draft = cart.checkout()?;

    println!("\nSubmission body:");
    println!("{}", serde_json::to_string_pretty(&draft)?);

    Ok(())
}
