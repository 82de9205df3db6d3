use crate::error_handling::*;
use crate::parsing::*;
use crate::variables::*;

pub fn evaluate(expression: &[ExprNode]) -> Result<i64> {
    let mut slots = Vec::<Number>::new();
    for node in expression {
        match node {
            ExprNode::number(value) => slots.push(*value),

            ExprNode::operator(operator) => {
                let right = slots.pop().ok_or(CalcError::invalid_expression)?;
                let left = slots.pop().ok_or(CalcError::invalid_expression)?;
                slots.push(operator.call(left, right)?);
            },
        }
    }

    match slots.as_slice() {
        [result] => result.truncate(),
        _ => Err(CalcError::invalid_expression),
    }
}

pub fn solve(expression: &str, variables: &Variables) -> Result<i64> {
    evaluate(&parse(expression, variables)?)
}
