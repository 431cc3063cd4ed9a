//! # Text Menu
//!
//! The interactive front end: main, admin and customer menus over any
//! `BufRead`/`Write` pair.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Menu Flow                                      │
//! │                                                                         │
//! │   ===== GROCERY STORE =====                                             │
//! │     1.Admin ──► password ──► ADMIN MENU (1-7, 7 = Logout)               │
//! │     2.Customer ───────────► CUSTOMER MENU (1-8, 8 = Exit)               │
//! │     3.Exit                                                              │
//! │                                                                         │
//! │   Every action: prompt ──► commands::* ──► render::* / message          │
//! │   End of input at any prompt ends the session.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use grocer_core::{Money, ProductId};

use crate::commands::{auth, cart, product, sale};
use crate::error::{ApiError, ErrorCode};
use crate::render;
use crate::state::AppState;

const INVALID_NUMBER: &str = "Invalid input. Enter a number: ";

/// Why a menu loop stopped early.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("end of input")]
    EndOfInput,
}

type MenuResult<T> = Result<T, MenuError>;

pub struct Menu<R, W> {
    input: R,
    output: W,
    state: AppState,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, state: AppState) -> Self {
        Menu {
            input,
            output,
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Gives back the state and the output sink.
    pub fn into_parts(self) -> (AppState, W) {
        (self.state, self.output)
    }

    /// Runs the main menu until the user exits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        match self.main_menu() {
            Ok(()) => Ok(()),
            Err(MenuError::EndOfInput) => {
                debug!("Input closed, ending session");
                self.output.flush()
            }
            Err(MenuError::Io(e)) => Err(e),
        }
    }

    // =========================================================================
    // Menus
    // =========================================================================

    fn main_menu(&mut self) -> MenuResult<()> {
        loop {
            write!(
                self.output,
                "===== {} =====\n1.Admin\n2.Customer\n3.Exit\n",
                self.state.config.store_name
            )?;
            match self.prompt_int("Enter choice: ")? {
                1 => {
                    let password = self.prompt_text("Enter Admin Password: ")?;
                    match auth::admin_login(&self.state.auth, &password) {
                        Ok(()) => self.admin_menu()?,
                        Err(e) => self.report(&e)?,
                    }
                }
                2 => self.customer_menu()?,
                3 => {
                    writeln!(self.output, "Exiting...")?;
                    self.output.flush()?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice!")?,
            }
        }
    }

    fn admin_menu(&mut self) -> MenuResult<()> {
        loop {
            write!(
                self.output,
                "===== ADMIN MENU =====\n1.View Products\n2.Add Product\n3.Update Product\n\
                 4.Delete Product\n5.View Sales\n6.Export Sales (JSON)\n7.Logout\n"
            )?;
            match self.prompt_int("Enter choice: ")? {
                1 => self.view_products()?,
                2 => self.add_product()?,
                3 => self.update_product()?,
                4 => self.delete_product()?,
                5 => {
                    let bills = sale::list_sales(&self.state.store);
                    write!(self.output, "{}", render::sales(&bills))?;
                }
                6 => match sale::export_sales_json(&self.state.store) {
                    Ok(json) => writeln!(self.output, "{json}")?,
                    Err(e) => self.report(&e)?,
                },
                7 => return Ok(()),
                _ => writeln!(self.output, "Invalid choice!")?,
            }
        }
    }

    fn customer_menu(&mut self) -> MenuResult<()> {
        loop {
            write!(
                self.output,
                "===== CUSTOMER MENU =====\n1.View Products\n2.Add to Cart\n3.View Cart\n\
                 4.Remove From Cart\n5.Clear Cart\n6.Search Product\n7.Checkout\n8.Exit\n"
            )?;
            match self.prompt_int("Enter choice: ")? {
                1 => self.view_products()?,
                2 => self.add_to_cart()?,
                3 => {
                    let cart = cart::get_cart(&self.state.store);
                    write!(self.output, "{}", render::cart_table(&cart))?;
                }
                4 => self.remove_from_cart()?,
                5 => {
                    cart::clear_cart(&mut self.state.store);
                    writeln!(self.output, "Cart cleared!")?;
                }
                6 => {
                    let query = self.prompt_text("Enter product name to search: ")?;
                    let results = product::search_products(&self.state.store, &query);
                    write!(self.output, "{}", render::search_results(&results))?;
                }
                7 => match sale::checkout(&mut self.state.store) {
                    Ok(bill) => write!(self.output, "{}", render::bill(&bill))?,
                    Err(e) if e.code == ErrorCode::EmptyCart => {
                        writeln!(self.output, "Cart is empty!")?
                    }
                    Err(e) => self.report(&e)?,
                },
                8 => return Ok(()),
                _ => writeln!(self.output, "Invalid choice!")?,
            }
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn view_products(&mut self) -> MenuResult<()> {
        let products = product::list_products(&self.state.store);
        write!(self.output, "{}", render::product_table(&products))?;
        Ok(())
    }

    fn add_product(&mut self) -> MenuResult<()> {
        let id = self.prompt_int("Enter Product ID: ")?;
        if product::product_exists(&self.state.store, id) {
            writeln!(self.output, "ID already exists!")?;
            return Ok(());
        }

        let input = product::ProductInput {
            id,
            name: self.prompt_text("Enter Product Name: ")?,
            price: self.prompt_money("Enter Product Price: ")?,
            stock_quantity: self.prompt_int("Enter Quantity: ")?,
        };

        let strict = self.state.config.strict_admin;
        match product::add_product(&mut self.state.store, input, strict) {
            Ok(_) => writeln!(self.output, "Product added successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn update_product(&mut self) -> MenuResult<()> {
        let id = self.prompt_int("Enter Product ID to update: ")?;
        if product::get_product(&self.state.store, id).is_err() {
            writeln!(self.output, "Product not found.")?;
            return Ok(());
        }

        let input = product::ProductInput {
            id,
            name: self.prompt_text("Enter new name: ")?,
            price: self.prompt_money("Enter new price: ")?,
            stock_quantity: self.prompt_int("Enter new quantity: ")?,
        };

        let strict = self.state.config.strict_admin;
        match product::update_product(&mut self.state.store, input, strict) {
            Ok(_) => writeln!(self.output, "Product updated successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn delete_product(&mut self) -> MenuResult<()> {
        let id = self.prompt_int("Enter Product ID to delete: ")?;
        match product::delete_product(&mut self.state.store, id) {
            Ok(_) => writeln!(self.output, "Product deleted successfully!")?,
            Err(e) if e.code == ErrorCode::NotFound => writeln!(self.output, "Product not found.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn add_to_cart(&mut self) -> MenuResult<()> {
        let id: ProductId = self.prompt_int("Enter Product ID to add to cart: ")?;
        if product::get_product(&self.state.store, id).is_err() {
            writeln!(self.output, "Product not found.")?;
            return Ok(());
        }

        let quantity = self.prompt_int("Enter quantity: ")?;
        match cart::add_to_cart(&mut self.state.store, id, quantity) {
            Ok(_) => writeln!(self.output, "Added to cart!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn remove_from_cart(&mut self) -> MenuResult<()> {
        if cart::get_cart(&self.state.store).is_empty() {
            writeln!(self.output, "Cart is empty!")?;
            return Ok(());
        }

        let id = self.prompt_int("Enter Product ID to remove: ")?;
        let in_cart = match cart::cart_line_quantity(&self.state.store, id) {
            Ok(quantity) => quantity,
            Err(_) => {
                writeln!(self.output, "Item not found in cart.")?;
                return Ok(());
            }
        };

        let quantity = self.prompt_int(&format!("Enter quantity to remove (max {in_cart}): "))?;
        match cart::remove_from_cart(&mut self.state.store, id, quantity) {
            Ok(_) => writeln!(self.output, "Item updated/removed from cart!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    fn report(&mut self, err: &ApiError) -> MenuResult<()> {
        writeln!(self.output, "{}", err.message)?;
        Ok(())
    }

    fn read_line(&mut self) -> MenuResult<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn prompt_text(&mut self, prompt: &str) -> MenuResult<String> {
        write!(self.output, "{prompt}")?;
        self.read_line()
    }

    /// Re-prompts until the line holds a whole number.
    fn prompt_int(&mut self, prompt: &str) -> MenuResult<i64> {
        write!(self.output, "{prompt}")?;
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => write!(self.output, "{INVALID_NUMBER}")?,
            }
        }
    }

    /// Re-prompts until the line holds an amount with at most two decimals.
    fn prompt_money(&mut self, prompt: &str) -> MenuResult<Money> {
        write!(self.output, "{prompt}")?;
        loop {
            let line = self.read_line()?;
            match line.parse::<Money>() {
                Ok(value) => return Ok(value),
                Err(_) => write!(self.output, "{INVALID_NUMBER}")?,
            }
        }
    }
}
