//! Tests for template engine
//!
//! This module contains comprehensive tests for the template engine,
//! organized into focused submodules for better maintainability.

use super::*;

// Test helper functions
mod helpers;


// Rendering tests
mod render_basic;


// Error and edge case tests
mod errors;
