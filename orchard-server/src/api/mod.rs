//! API routes
//!
//! # Structure
//!
//! - [`root`] - service banner
//! - [`health`] - health checks
//! - [`apples`] - variety catalog
//! - [`orders`] - order placement and admin
//! - [`delivery`] - delivery eligibility preview
//! - [`contact`] - contact form
//! - [`content`] - editable site sections
//! - [`upload`] - image uploads
//!
//! Admin routes are open: authentication sits in front of this service.

pub mod apples;
pub mod contact;
pub mod content;
pub mod delivery;
pub mod health;
pub mod orders;
pub mod root;
pub mod upload;
