use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a rule-violation reason.
///
/// Goes to stdout without decoration; CI pipelines grep this line.
pub fn display_rejection(reason: &str) {
    println!("{}", reason);
}
