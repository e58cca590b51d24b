//! Console reporter: the human-readable progress lines on stdout

use colored::Colorize;
use std::io::Write;
use std::sync::Mutex;

use mcpcheck_core::port::Reporter;

pub struct ConsoleReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    // Console output is best effort; a closed stdout must not abort the run
    fn emit(&self, lines: &[String]) {
        if let Ok(mut out) = self.out.lock() {
            for line in lines {
                let _ = writeln!(out, "{}", line);
            }
            let _ = out.flush();
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn banner(&self, suite_name: &str) {
        self.emit(&[format!(
            "🚀 {}",
            format!("Starting {} integration test...", suite_name).cyan().bold()
        )]);
    }

    fn command_output(&self, output: &str) {
        self.emit(&["Command output:".bold().to_string(), output.to_string()]);
    }

    fn invocation_failed(&self, reason: &str, output: &str) {
        self.emit(&[
            format!("{} {}", "Error executing command:".red().bold(), reason),
            "Output:".bold().to_string(),
            output.to_string(),
        ]);
    }

    fn check_passed(&self, label: &str) {
        self.emit(&[format!(
            "✅ {} Output contains the connected {} server line.",
            "Assertion passed:".green().bold(),
            label
        )]);
    }

    fn check_failed(&self, label: &str) {
        self.emit(&[format!(
            "❌ {} Output did not contain the connected {} server line.",
            "Assertion failed:".red().bold(),
            label
        )]);
    }
}
