use crate::error_handling::*;
use crate::parsing::{BinaryOperator, Punctuation};
use crate::scanning::*;
use crate::variables::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    value(i64),
    operator(BinaryOperator),
    punctuation(Punctuation),
}

pub fn resolve(token: &Token, variables: &Variables) -> Result<Item> {
    use TokenKind::*;
    let item = match token.kind {
        number | identifier => Item::value(resolve_word(&token.content, variables)?),
        operator => Item::operator(resolve_operator(&token.content)?),
        punctuation => Item::punctuation(
            token.content.parse().map_err(|_| CalcError::invalid_expression)?,
        ),
    };
    log::trace!("{:?} resolved to {item:?}", token.content);
    Ok(item)
}

// A run of signs is `-` when it holds an odd number of minuses.
fn resolve_operator(content: &str) -> Result<BinaryOperator> {
    if !content.is_empty() && content.chars().all(|c| matches!(c, '+' | '-')) {
        return Ok(if content.matches('-').count() % 2 == 1 {
            BinaryOperator::subtraction
        } else {
            BinaryOperator::addition
        });
    }
    content.parse().map_err(|_| CalcError::invalid_expression)
}

fn resolve_word(content: &str, variables: &Variables) -> Result<i64> {
    if let Ok(value) = content.parse::<i64>() {
        return Ok(value);
    }

    let (negative, name) = match content.strip_prefix('-') {
        Some(name) => (true, name),
        None => (false, content),
    };
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
        return Err(CalcError::out_of_range);
    }
    if !is_identifier(name) {
        return Err(CalcError::invalid_identifier);
    }

    let value = variables.get(name).ok_or(CalcError::unknown_variable)?;
    if negative {
        value.checked_neg().ok_or(CalcError::out_of_range)
    } else {
        Ok(value)
    }
}
