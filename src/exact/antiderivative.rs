use crate::expression::ast::{
    BinaryOp,
    Expr
};
use crate::expression::function::Function;

/// Best-effort antiderivative of `expr` with respect to `x`.
///
/// Supported family: constants, `x`, `x^k` (with `x^-1` integrating to
/// `ln(x)`), sums and differences, constant multiples and divisors,
/// constant-over-`x` quotients, and `sin`, `cos`, `exp`, `sinh`, `cosh`
/// of a linear argument. Anything outside the family returns `None`;
/// the caller treats that as "no exact reference", not as an error.
pub fn antiderivative(expr: &Expr) -> Option<Expr> {
    if let Some(value) = expr.constant_value() {
        // ∫ c dx = c·x
        return Some(Expr::mul(Expr::constant(value), Expr::variable()));
    }

    match expr {
        Expr::Variable => {
            // ∫ x dx = x²/2
            Some(Expr::div(Expr::pow(Expr::variable(), Expr::constant(2.0)), Expr::constant(2.0)))
        },
        Expr::Neg(operand) => antiderivative(operand).map(Expr::neg),
        Expr::Binary(BinaryOp::Add, lhs, rhs) => {
            let lhs_anti = antiderivative(lhs)?;
            let rhs_anti = antiderivative(rhs)?;
            Some(Expr::add(lhs_anti, rhs_anti))
        },
        Expr::Binary(BinaryOp::Sub, lhs, rhs) => {
            let lhs_anti = antiderivative(lhs)?;
            let rhs_anti = antiderivative(rhs)?;
            Some(Expr::sub(lhs_anti, rhs_anti))
        },
        Expr::Binary(BinaryOp::Mul, lhs, rhs) => {
            if let Some(scale) = lhs.constant_value() {
                antiderivative(rhs).map(|anti| Expr::mul(Expr::constant(scale), anti))
            } else if let Some(scale) = rhs.constant_value() {
                antiderivative(lhs).map(|anti| Expr::mul(Expr::constant(scale), anti))
            } else {
                None
            }
        },
        Expr::Binary(BinaryOp::Div, lhs, rhs) => {
            if let Some(divisor) = rhs.constant_value() {
                antiderivative(lhs).map(|anti| Expr::div(anti, Expr::constant(divisor)))
            } else if let Some(numerator) = lhs.constant_value() {
                // c/x integrates to c·ln(x); c over anything else is out
                // of the family.
                if matches!(**rhs, Expr::Variable) {
                    Some(Expr::mul(Expr::constant(numerator), Expr::call(Function::Ln, Expr::variable())))
                } else {
                    None
                }
            } else {
                None
            }
        },
        Expr::Binary(BinaryOp::Pow, base, exponent) => {
            if !matches!(**base, Expr::Variable) {
                return None;
            }
            let k = exponent.constant_value()?;
            if k == -1.0 {
                Some(Expr::call(Function::Ln, Expr::variable()))
            } else {
                // ∫ x^k dx = x^(k+1)/(k+1)
                Some(Expr::div(
                    Expr::pow(Expr::variable(), Expr::constant(k + 1.0)),
                    Expr::constant(k + 1.0)
                ))
            }
        },
        Expr::Call(function, argument) => {
            let (p, q) = argument.linear_parts()?;
            if p == 0.0 {
                return None;
            }
            let inner = Expr::add(
                Expr::mul(Expr::constant(p), Expr::variable()),
                Expr::constant(q)
            );
            let outer = match function {
                Function::Sin => Expr::neg(Expr::call(Function::Cos, inner)),
                Function::Cos => Expr::call(Function::Sin, inner),
                Function::Exp => Expr::call(Function::Exp, inner),
                Function::Sinh => Expr::call(Function::Cosh, inner),
                Function::Cosh => Expr::call(Function::Sinh, inner),
                _ => return None
            };
            Some(Expr::div(outer, Expr::constant(p)))
        },
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    use super::*;
    use crate::expression::evaluator::Evaluator;
    use crate::expression::parser::parse;

    fn anti_at(text: &str, x: f64) -> f64 {
        let anti = antiderivative(&parse(text).unwrap()).unwrap();
        Evaluator::compile(&anti).evaluate(&dvector![x])[0]
    }

    #[test]
    fn integrates_constant() {
        assert_relative_eq!(anti_at("5", 3.0), 15.0);
    }

    #[test]
    fn integrates_power() {
        // ∫ x³ dx = x⁴/4
        assert_relative_eq!(anti_at("x^3", 2.0), 4.0);
    }

    #[test]
    fn reciprocal_integrates_to_logarithm() {
        assert_relative_eq!(anti_at("1/x", std::f64::consts::E), 1.0, epsilon = 1e-12);
        assert_relative_eq!(anti_at("x^-1", std::f64::consts::E), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn integrates_polynomial_combination() {
        // ∫ (x² - x) dx = x³/3 - x²/2, at x = 3: 9 - 4.5
        assert_relative_eq!(anti_at("x^2 - x", 3.0), 4.5, epsilon = 1e-12);
    }

    #[test]
    fn integrates_scaled_sine_of_linear_argument() {
        // ∫ sin(2x) dx = -cos(2x)/2, at x = π/2: -cos(π)/2 = 0.5
        assert_relative_eq!(anti_at("sin(2*x)", std::f64::consts::FRAC_PI_2), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn integrates_exponential() {
        assert_relative_eq!(anti_at("exp(x)", 1.0), std::f64::consts::E, epsilon = 1e-12);
    }

    #[test]
    fn nonlinear_argument_is_out_of_family() {
        assert!(antiderivative(&parse("sin(x^2)").unwrap()).is_none());
    }

    #[test]
    fn product_of_variables_is_out_of_family() {
        assert!(antiderivative(&parse("x * sin(x)").unwrap()).is_none());
    }

    #[test]
    fn tangent_is_out_of_family() {
        assert!(antiderivative(&parse("tan(x)").unwrap()).is_none());
    }
}
