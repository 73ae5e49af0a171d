//! # Notifications
//!
//! One-line success/error/info messages, the terminal's counterpart of toasts.

use colored::Colorize;

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn print_info(msg: &str) {
    println!("{} {}", "•".cyan(), msg);
}

/// Label/value line, label padded for alignment.
pub fn print_field(label: &str, value: &str) {
    println!("{:>14} {}", format!("{}:", label).cyan(), value);
}
