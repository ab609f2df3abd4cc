// ABOUTME: Calculator - evaluates arithmetic expressions with evalexpr.
// ABOUTME: Pure and offline; failures name the offending expression.

use std::sync::LazyLock;

use async_trait::async_trait;
use evalexpr::Value;
use regex::{Captures, Regex};
use serde::Deserialize;

use crate::error::ToolError;
use crate::schema::{Field, InputSchema};
use crate::tool::{Describe, Descriptor, Tool};

/// Identifiers are matched first so digits inside names stay untouched.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z_][A-Za-z0-9_]*|[0-9]+(?:\.[0-9]+)?").expect("token pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculatorInput {
    pub expression: String,
}

/// Evaluates relatively simple mathematical expressions.
///
/// All arithmetic is floating point, so `7 / 2` is `3.5`. Expressions that
/// do not produce a finite number (`1 / 0`, comparisons, assignments,
/// string literals) are evaluation errors.
pub struct Calculator {
    descriptor: Descriptor,
    schema: InputSchema,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            descriptor: Descriptor::new(
                "Simple Calculator",
                "use this when you need to evaluate relatively simple mathematical expressions",
            ),
            schema: InputSchema::new()
                .field(Field::string("expression").describe("The calculation you wish to perform")),
        }
    }
}

impl Describe for Calculator {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn schema(&self) -> &InputSchema {
        &self.schema
    }
}

#[async_trait]
impl Tool for Calculator {
    type Input = CalculatorInput;

    async fn invoke(&self, input: CalculatorInput) -> Result<String, ToolError> {
        match evaluate(&input.expression) {
            Ok(number) => Ok(number.to_string()),
            Err(source) => Err(ToolError::Evaluation {
                expression: input.expression,
                source,
            }),
        }
    }
}

fn evaluate(expression: &str) -> Result<f64, anyhow::Error> {
    let number = match evalexpr::eval(&float_literals(expression))? {
        Value::Float(f) => f,
        Value::Int(i) => i as f64,
        other => anyhow::bail!("expression does not produce a number: {}", other),
    };
    if !number.is_finite() {
        anyhow::bail!("result is not a finite number: {}", number);
    }
    Ok(number)
}

/// Rewrite integer literals as floats so division is never truncated.
fn float_literals(expression: &str) -> String {
    TOKEN_RE
        .replace_all(expression, |caps: &Captures| {
            let token = &caps[0];
            if token.starts_with(|c: char| c.is_ascii_digit()) && !token.contains('.') {
                format!("{token}.0")
            } else {
                token.to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::tool::StructuredTool;

    #[tokio::test]
    async fn test_simple_addition_is_stable() {
        let calc = Calculator::new();
        let first = calc.call(json!({"expression": "2 + 2"})).await.unwrap();
        let second = calc.call(json!({"expression": "2 + 2"})).await.unwrap();

        assert_eq!(first, "4");
        assert_eq!(second, "4");
    }

    #[tokio::test]
    async fn test_precedence_and_grouping() {
        let calc = Calculator::new();
        assert_eq!(calc.call(json!("2 + 3 * 4")).await.unwrap(), "14");
        assert_eq!(calc.call(json!("(2 + 3) * 4")).await.unwrap(), "20");
        assert_eq!(calc.call(json!("0.5 * 3")).await.unwrap(), "1.5");
    }

    #[tokio::test]
    async fn test_division_is_not_truncated() {
        let calc = Calculator::new();
        assert_eq!(calc.call(json!("7 / 2")).await.unwrap(), "3.5");
        assert_eq!(calc.call(json!("1 / 3")).await.unwrap(), (1.0f64 / 3.0).to_string());
        assert_eq!(calc.call(json!("-8 / 4")).await.unwrap(), "-2");
    }

    #[tokio::test]
    async fn test_non_numeric_results_are_errors() {
        let calc = Calculator::new();

        for expression in ["a = 1", "1 == 1", "\"hi\"", "(1, 2)"] {
            let err = calc
                .call(json!({"expression": expression}))
                .await
                .unwrap_err();
            match err {
                Error::Tool(ToolError::Evaluation { expression: named, .. }) => {
                    assert_eq!(named, expression);
                }
                other => panic!("expected evaluation error for {expression}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_float_literals_leave_names_and_floats_alone() {
        assert_eq!(float_literals("7 / 2"), "7.0 / 2.0");
        assert_eq!(float_literals("x1 + 0.5"), "x1 + 0.5");
        assert_eq!(float_literals("math::sqrt(16)"), "math::sqrt(16.0)");
    }

    #[tokio::test]
    async fn test_division_by_zero_is_an_error() {
        let calc = Calculator::new();

        for _ in 0..2 {
            let err = calc.call(json!({"expression": "1 / 0"})).await.unwrap_err();
            match err {
                Error::Tool(ToolError::Evaluation { expression, .. }) => {
                    assert_eq!(expression, "1 / 0");
                }
                other => panic!("expected evaluation error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_malformed_expression_names_input() {
        let err = Calculator::new()
            .call(json!({"expression": "2 +"}))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to evaluate expression: 2 +");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn test_non_string_expression_is_rejected() {
        let err = Calculator::new()
            .call(json!({"expression": 4}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
