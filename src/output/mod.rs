//! Terminal output formatting
//!
//! Rules, feedback rows and end-of-game banners.

pub mod display;
pub mod formatters;

pub use display::{
    print_loss, print_rejection, print_remaining, print_rules, print_turn, print_win,
};
