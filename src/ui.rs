// Terminal UI utilities

use colored::Colorize;

pub fn print_info(message: &str) {
    println!("{}", format!("ℹ️  {}", message).bright_cyan());
}
