use crate::error_handling::*;
use crate::evaluating::*;
use crate::variables::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    top_level,
    nested,
}

/// Returns `None` when the line was an assignment.
pub fn evaluate_line(line: &str, variables: &mut Variables) -> Result<Option<i64>> {
    let value = resolve_assignment(line, variables, Depth::top_level)?;
    if line.contains('=') {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

pub fn resolve_assignment(expression: &str, variables: &mut Variables, depth: Depth) -> Result<i64> {
    let Some((left, right)) = expression.split_once('=') else {
        return solve(expression, variables);
    };

    let name = left.trim();
    if !is_identifier(name) {
        return Err(match depth {
            Depth::top_level => CalcError::invalid_identifier,
            Depth::nested => CalcError::invalid_assignment,
        });
    }

    let value = resolve_assignment(right, variables, Depth::nested)?;
    variables.assign(name, value);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assignment_stores_without_printing() {
        let mut variables = Variables::new();
        assert_eq!(evaluate_line("a = 5", &mut variables), Ok(None));
        assert_eq!(evaluate_line("a", &mut variables), Ok(Some(5)));
        assert_eq!(evaluate_line("a", &mut variables), Ok(Some(5)));
        assert_eq!(evaluate_line("a * 2 + 1", &mut variables), Ok(Some(11)));
    }

    #[test]
    fn chained_assignment_sets_every_name() {
        let mut variables = Variables::new();
        assert_eq!(evaluate_line("a = b = 5", &mut variables), Ok(None));
        assert_eq!(variables.get("a"), Some(5));
        assert_eq!(variables.get("b"), Some(5));
        assert_eq!(resolve_assignment("c = a + b", &mut variables, Depth::top_level), Ok(10));
    }

    #[test]
    fn large_values_round_trip_exactly() {
        let mut variables = Variables::new();
        assert_eq!(evaluate_line("a = 9223372036854775807", &mut variables), Ok(None));
        assert_eq!(evaluate_line("a", &mut variables), Ok(Some(i64::MAX)));
        assert_eq!(evaluate_line("b = 9007199254740993", &mut variables), Ok(None));
        assert_eq!(evaluate_line("b", &mut variables), Ok(Some(9007199254740993)));
        assert_eq!(evaluate_line("a + 1", &mut variables), Err(CalcError::out_of_range));
    }

    #[test]
    fn reassignment_overwrites() {
        let mut variables = Variables::new();
        evaluate_line("n = 1", &mut variables).unwrap();
        evaluate_line("n = n + 1", &mut variables).unwrap();
        assert_eq!(variables.get("n"), Some(2));
    }

    #[test]
    fn bad_left_side_depends_on_depth() {
        let mut variables = Variables::new();
        assert_eq!(evaluate_line("1a = 5", &mut variables), Err(CalcError::invalid_identifier));
        assert_eq!(evaluate_line("= 5", &mut variables), Err(CalcError::invalid_identifier));
        assert_eq!(evaluate_line("a = 1b = 5", &mut variables), Err(CalcError::invalid_assignment));
        assert_eq!(evaluate_line("a == 5", &mut variables), Err(CalcError::invalid_assignment));
        assert_eq!(variables.get("a"), None);
    }

    #[test]
    fn failed_right_side_leaves_variables_untouched() {
        let mut variables = Variables::new();
        evaluate_line("a = 1", &mut variables).unwrap();
        assert_eq!(evaluate_line("a = b = z", &mut variables), Err(CalcError::unknown_variable));
        assert_eq!(evaluate_line("a = 1b", &mut variables), Err(CalcError::invalid_identifier));
        assert_eq!(evaluate_line("a = (2", &mut variables), Err(CalcError::invalid_expression));
        assert_eq!(variables.get("a"), Some(1));
        assert_eq!(variables.get("b"), None);
    }

    #[test]
    fn unknown_variable_in_fresh_session() {
        let mut variables = Variables::new();
        assert_eq!(evaluate_line("z", &mut variables), Err(CalcError::unknown_variable));
    }
}
