// Four-operator command-line calculator.
//
// Run with: cargo run --bin calc -- 6 + 4

use std::env;
use std::process;
use std::str::FromStr;

use colored::Colorize;
use thiserror::Error;

// ============================================================================
// Error types
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Invalid operator '{0}'. Supported are +, -, *, /")]
    UnsupportedOperator(String),

    #[error("'{0}' is not a number")]
    MalformedNumber(String),
}

// ============================================================================
// Operators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(raw: &str) -> Result<Self, CalcError> {
        match raw {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(CalcError::UnsupportedOperator(other.to_string())),
        }
    }
}

pub fn calculate(num1: f64, op: Operator, num2: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(num1 + num2),
        Operator::Sub => Ok(num1 - num2),
        Operator::Mul => Ok(num1 * num2),
        Operator::Div => {
            if num2 == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(num1 / num2)
            }
        }
    }
}

// ============================================================================
// CLI surface
// ============================================================================

fn parse_operand(raw: &str) -> Result<f64, CalcError> {
    raw.parse()
        .map_err(|_| CalcError::MalformedNumber(raw.to_string()))
}

fn run(args: &[String]) -> Result<f64, CalcError> {
    let num1 = parse_operand(&args[0])?;
    let op: Operator = args[1].parse()?;
    let num2 = parse_operand(&args[2])?;
    calculate(num1, op, num2)
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 3 {
        eprintln!("{}", "Usage: calc <num1> <operator> <num2>".yellow());
        process::exit(2);
    }

    match run(&args) {
        Ok(result) => println!("Result: {}", result),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(a: &str, op: &str, b: &str) -> Vec<String> {
        vec![a.to_string(), op.to_string(), b.to_string()]
    }

    #[test]
    fn add_sub_mul_match_arithmetic() {
        let pairs = [(6.0, 4.0), (0.0, 0.0), (-3.5, 2.0), (1e9, -1e-3)];
        for (a, b) in pairs {
            assert_eq!(calculate(a, Operator::Add, b), Ok(a + b));
            assert_eq!(calculate(a, Operator::Sub, b), Ok(a - b));
            assert_eq!(calculate(a, Operator::Mul, b), Ok(a * b));
        }
    }

    #[test]
    fn division_matches_for_nonzero_divisors() {
        for (a, b) in [(6.0, 4.0), (-9.0, 3.0), (1.0, 8.0)] {
            assert_eq!(calculate(a, Operator::Div, b), Ok(a / b));
        }
    }

    #[test]
    fn division_by_zero_is_rejected_for_any_dividend() {
        for a in [6.0, 0.0, -2.5] {
            assert_eq!(
                calculate(a, Operator::Div, 0.0),
                Err(CalcError::DivisionByZero)
            );
        }
    }

    #[test]
    fn six_plus_four_is_ten() {
        assert_eq!(run(&args("6", "+", "4")), Ok(10.0));
    }

    #[test]
    fn six_divided_by_zero_names_the_problem() {
        let err = run(&args("6", "/", "0")).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division by zero"));
    }

    #[test]
    fn percent_is_not_an_operator() {
        let err = run(&args("6", "%", "4")).unwrap_err();
        assert_eq!(err, CalcError::UnsupportedOperator("%".to_string()));
        assert!(err.to_string().contains("Invalid operator"));
    }

    #[test]
    fn malformed_operand_is_reported() {
        assert_eq!(
            run(&args("abc", "+", "4")),
            Err(CalcError::MalformedNumber("abc".to_string()))
        );
        assert_eq!(
            run(&args("6", "+", "4x")),
            Err(CalcError::MalformedNumber("4x".to_string()))
        );
    }
}
