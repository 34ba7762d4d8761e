use std::io::{self, BufRead, Write};

/// Blocking modal prompts used by the approval actions.
///
/// The confirmation gate and the status alerts are deliberately synchronous
/// interactions; routing them through a trait keeps the dashboard logic
/// drivable from tests.
pub trait Prompter {
    /// Ask a yes/no question naming the target; false means do nothing
    fn confirm(&mut self, message: &str) -> bool;
    /// Show a status or error message and wait for no input
    fn alert(&mut self, message: &str);
}

/// Terminal prompter backed by stdin/stdout
pub struct StdPrompter;

impl Prompter for StdPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        let answer = read_line(&format!("{} [y/N] ", message));
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn alert(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Print a prompt and read one line from stdin, without the trailing newline
pub fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim_end_matches(&['\r', '\n'][..]).to_string()
}
