//! Best-effort program output preview
//!
//! Nothing is executed. The preview is just the string literals passed
//! directly to `print(...)`, in source order.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PRINT_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"print\("([^"]*)"\)"#).unwrap());

pub const SIMULATED_TRAILER: &str = "[simulated from print() calls]";
pub const RUN_LOCALLY_COMMAND: &str = "forma run playground.forma";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Simulation {
    /// Arguments of `print("...")` calls
    Printed(Vec<String>),
    /// No literal prints to go on
    Unavailable,
}

pub fn simulate_output(text: &str) -> Simulation {
    let printed: Vec<String> = PRINT_STRING_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect();

    if printed.is_empty() {
        Simulation::Unavailable
    } else {
        Simulation::Printed(printed)
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Simulation::Printed(lines) => {
                for line in lines {
                    writeln!(f, "\"{line}\"")?;
                }
                f.write_str(SIMULATED_TRAILER)
            }
            Simulation::Unavailable => {
                writeln!(f, "Simulation is unavailable for this snippet.")?;
                writeln!(f, "Run locally:")?;
                f.write_str(RUN_LOCALLY_COMMAND)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_prints_in_order() {
        let text = "f main()\n    print(\"one\")\n    print(\"two\")\n";

        assert_eq!(
            simulate_output(text),
            Simulation::Printed(vec!["one".to_string(), "two".to_string()])
        );
    }

    #[test]
    fn test_rendering() {
        let rendered = simulate_output("print(\"Hello, World!\")").to_string();

        assert_eq!(rendered, "\"Hello, World!\"\n[simulated from print() calls]");
    }

    #[test]
    fn test_non_literal_prints_are_skipped() {
        let text = "f main()\n    print(factorial(10))\n";

        assert_eq!(simulate_output(text), Simulation::Unavailable);
        assert_eq!(
            Simulation::Unavailable.to_string(),
            "Simulation is unavailable for this snippet.\nRun locally:\nforma run playground.forma"
        );
    }

    #[test]
    fn test_empty_string_literal() {
        assert_eq!(
            simulate_output("print(\"\")"),
            Simulation::Printed(vec![String::new()])
        );
    }
}
