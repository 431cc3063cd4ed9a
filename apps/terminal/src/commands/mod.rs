//! # Commands Module
//!
//! Operations the menu calls into. Each takes the store (or the admin check),
//! logs what it does, and returns DTOs or an [`ApiError`](crate::error::ApiError).
//!
//! ## Command Categories
//! - [`product`]: Catalog listing, search and admin edits
//! - [`cart`]: Cart manipulation with stock reservation
//! - [`sale`]: Checkout, sales history and export
//! - [`auth`]: Admin login

pub mod auth;
pub mod cart;
pub mod product;
pub mod sale;
