//! Core widget functionality
//!
//! This module contains the interaction state machine and its inputs.

pub mod keycode;
pub mod platform;
pub mod state;
pub mod templates;
pub mod view;
pub mod widget;
