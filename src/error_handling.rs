use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid identifier")]
    invalid_identifier,

    #[error("Invalid assignment")]
    invalid_assignment,

    #[error("Unknown variable")]
    unknown_variable,

    #[error("Invalid expression")]
    invalid_expression,

    #[error("Division by zero")]
    division_by_zero,

    #[error("Result out of range")]
    out_of_range,
}

pub type Result<T> = std::result::Result<T, CalcError>;
