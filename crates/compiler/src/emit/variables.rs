use triad_core::Variable;

use crate::{CompileError, Token};

/// Emits one variable per token, in registration order.
pub(crate) fn emit(tokens: &[Token]) -> Result<Vec<Variable>, CompileError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            // Also rejects NaN.
            if !(token.lower_bound <= token.upper_bound) {
                return Err(CompileError::InvalidBounds {
                    name: token.name.clone(),
                    lower: token.lower_bound,
                    upper: token.upper_bound,
                });
            }

            Ok(Variable {
                index,
                lower_bound: token.lower_bound,
                upper_bound: token.upper_bound,
                kind: token.kind,
                name: token.name.clone(),
                value: token.value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use triad_core::VariableType;

    use super::*;

    #[test]
    fn preserves_order_and_attributes() {
        let tokens = [
            Token::new("b", VariableType::Binary, 30),
            Token::new("n", VariableType::UnsignedInteger, 2)
                .with_bounds(1.0, 5.0)
                .with_value(3.0),
        ];

        let variables = emit(&tokens).unwrap();

        assert_eq!(
            variables,
            vec![
                Variable::new(0, 0.0, 1.0, VariableType::Binary, "b"),
                Variable::new(1, 1.0, 5.0, VariableType::UnsignedInteger, "n").with_value(3.0),
            ]
        );
    }

    #[test]
    fn fixed_and_free_bounds_are_accepted() {
        let tokens = [
            Token::new("fixed", VariableType::Continuous, 0).with_bounds(2.0, 2.0),
            Token::new("free", VariableType::Continuous, 1),
        ];

        let variables = emit(&tokens).unwrap();
        assert!(variables[0].is_fixed());
        assert!(variables[1].is_free());
    }

    #[test]
    fn inverted_or_nan_bounds_are_rejected() {
        let inverted = [Token::new("x", VariableType::Continuous, 0).with_bounds(3.0, 1.0)];
        assert!(matches!(
            emit(&inverted),
            Err(CompileError::InvalidBounds { ref name, .. }) if name == "x"
        ));

        let nan = [Token::new("y", VariableType::Continuous, 0).with_bounds(f64::NAN, 1.0)];
        assert!(matches!(emit(&nan), Err(CompileError::InvalidBounds { .. })));
    }
}
