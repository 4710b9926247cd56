//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the index
//! and article pages. Components handle specific UI elements with
//! consistent styling and behavior, eliminating duplication across
//! generator functions.

pub mod card;
pub mod footer;
pub mod layout;
