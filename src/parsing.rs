use crate::error_handling::*;
use crate::resolving::*;
use crate::scanning::*;
use crate::variables::*;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    integer(i64),
    real(f64),
}

impl Number {
    fn as_f64(&self) -> f64 {
        match self {
            Number::integer(value) => *value as f64,
            Number::real(value) => *value,
        }
    }

    pub fn truncate(&self) -> Result<i64> {
        let value = match self {
            Number::integer(value) => return Ok(*value),
            Number::real(value) => value.trunc(),
        };
        // i64::MIN is exactly -2^63 as a float, and i64::MAX rounds up to 2^63.
        if value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Ok(value as i64)
        } else {
            Err(CalcError::out_of_range)
        }
    }
}

// Integers stay exact until a real value gets involved.
fn combine(
    left: Number,
    right: Number,
    exact: fn(i64, i64) -> Option<i64>,
    inexact: fn(f64, f64) -> f64,
) -> Result<Number> {
    match (left, right) {
        (Number::integer(left), Number::integer(right)) => {
            exact(left, right).map(Number::integer).ok_or(CalcError::out_of_range)
        },
        _ => Ok(Number::real(inexact(left.as_f64(), right.as_f64()))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
}

impl BinaryOperator {
    pub fn call(&self, left: Number, right: Number) -> Result<Number> {
        use BinaryOperator::*;

        match self {
            addition => combine(left, right, i64::checked_add, |l, r| l + r),
            subtraction => combine(left, right, i64::checked_sub, |l, r| l - r),
            multiplication => combine(left, right, i64::checked_mul, |l, r| l * r),
            division if right.as_f64() == 0.0 => Err(CalcError::division_by_zero),
            division => Ok(Number::real(left.as_f64() / right.as_f64())),
        }
    }

    fn precedence(&self) -> i32 {
        use BinaryOperator::*;
        match self {
            addition | subtraction => 1,
            multiplication | division => 2,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl FromStr for BinaryOperator {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use BinaryOperator::*;
        match s {
            "+" => Ok(addition),
            "-" => Ok(subtraction),
            "*" => Ok(multiplication),
            "/" => Ok(division),
            _ => Err(InvalidOperator),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuation {
    left_paren,
    right_paren,
}

impl FromStr for Punctuation {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use Punctuation::*;
        match s {
            "(" => Ok(left_paren),
            ")" => Ok(right_paren),
            _ => Err(InvalidOperator),
        }
    }
}

enum StackNode {
    operator(BinaryOperator),
    paren,
}

impl StackNode {
    fn precedence(&self) -> i32 {
        match self {
            Self::paren => 0,
            Self::operator(operator) => operator.precedence(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprNode {
    number(Number),
    operator(BinaryOperator),
}

pub struct Yard {
    expression: Vec<ExprNode>,
    stack: Vec<StackNode>,
}

impl Yard {
    pub fn new() -> Self {
        Self{expression: Vec::new(), stack: Vec::new()}
    }

    fn add_number(&mut self, value: i64) {
        self.expression.push(ExprNode::number(Number::integer(value)));
    }

    // Everything at or above `precedence` is left-associative, so it leaves
    // the stack before the new operator goes on.
    fn pop_higher_operator(&mut self, precedence: i32) -> Option<BinaryOperator> {
        if self.stack.last().filter(|node| node.precedence() >= precedence).is_some() {
            match self.stack.pop() {
                Some(StackNode::operator(operator)) => Some(operator),
                _ => None,
            }
        } else {
            None
        }
    }

    fn add_operator(&mut self, operator: BinaryOperator) {
        while let Some(higher) = self.pop_higher_operator(operator.precedence()) {
            self.expression.push(ExprNode::operator(higher));
        }
        self.stack.push(StackNode::operator(operator));
    }

    fn add_left_paren(&mut self) {
        self.stack.push(StackNode::paren);
    }

    fn add_right_paren(&mut self) -> Result<()> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::paren => return Ok(()),
                StackNode::operator(operator) => self.expression.push(ExprNode::operator(operator)),
            }
        }
        Err(CalcError::invalid_expression)
    }

    pub fn add(&mut self, item: Item) -> Result<()> {
        match item {
            Item::value(value) => self.add_number(value),
            Item::operator(operator) => self.add_operator(operator),
            Item::punctuation(Punctuation::left_paren) => self.add_left_paren(),
            Item::punctuation(Punctuation::right_paren) => self.add_right_paren()?,
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Vec<ExprNode>> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::paren => return Err(CalcError::invalid_expression),
                StackNode::operator(operator) => self.expression.push(ExprNode::operator(operator)),
            }
        }
        Ok(self.expression)
    }
}

pub fn parse(expression_string: &str, variables: &Variables) -> Result<Vec<ExprNode>> {
    let tokens: Vec<Token> = StringScanner::new(expression_string).collect();
    log::debug!("scanned {expression_string:?} into {tokens:?}");

    let mut yard = Yard::new();
    for token in &tokens {
        yard.add(resolve(token, variables)?)?;
    }
    let expression = yard.finish()?;
    log::debug!("postfix {expression:?}");
    Ok(expression)
}
