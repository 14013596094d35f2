//! Expression parser: `<op> <a> <b>`, whitespace separated.

use super::EvalError;
use crate::models::Operation;

/// Parse a single expression such as `add 2 2` or `- 10 3`.
pub fn parse_expression(line: &str) -> Result<(Operation, i64, i64), EvalError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [op, a, b] = tokens.as_slice() else {
        return Err(EvalError::Arity {
            found: tokens.len(),
        });
    };

    let operation = op
        .parse::<Operation>()
        .map_err(|_| EvalError::UnknownOperation((*op).to_string()))?;

    Ok((operation, parse_operand(a)?, parse_operand(b)?))
}

fn parse_operand(token: &str) -> Result<i64, EvalError> {
    token.parse::<i64>().map_err(|e| EvalError::InvalidOperand {
        value: token.to_string(),
        reason: e.to_string(),
    })
}
