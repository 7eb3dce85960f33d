//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the page
//! types (index, project). Components handle specific UI elements with
//! consistent styling and behavior, eliminating duplication across
//! generator functions.

pub mod cards;
pub mod footer;
pub mod layout;
pub mod nav;
