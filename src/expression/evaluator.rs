use nalgebra::DVector;

use super::ast::{
    BinaryOp,
    Expr
};
use super::function::Function;

#[derive(Debug, Clone, Copy)]
enum Instruction {
    LoadConstant(f64),
    LoadVariable,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
    Call(Function)
}

/// Vectorized numeric evaluator compiled once from an expression tree.
///
/// The tree is flattened to a postorder program evaluated on a value
/// stack, so repeated requests against the same expression pay the
/// traversal cost only once. The evaluator owns no mutable state and is
/// safe to reuse across requests with different bounds.
pub struct Evaluator {
    program: Vec<Instruction>
}

impl Evaluator {
    pub fn compile(expr: &Expr) -> Evaluator {
        let mut program = Vec::new();
        Self::emit(expr, &mut program);
        Evaluator { program }
    }

    fn emit(expr: &Expr, program: &mut Vec<Instruction>) {
        match expr {
            Expr::Constant(value) => program.push(Instruction::LoadConstant(*value)),
            Expr::Variable => program.push(Instruction::LoadVariable),
            Expr::Neg(operand) => {
                Self::emit(operand, program);
                program.push(Instruction::Neg);
            },
            Expr::Binary(op, lhs, rhs) => {
                Self::emit(lhs, program);
                Self::emit(rhs, program);
                program.push(match op {
                    BinaryOp::Add => Instruction::Add,
                    BinaryOp::Sub => Instruction::Sub,
                    BinaryOp::Mul => Instruction::Mul,
                    BinaryOp::Div => Instruction::Div,
                    BinaryOp::Pow => Instruction::Pow
                });
            },
            Expr::Call(function, argument) => {
                Self::emit(argument, program);
                program.push(Instruction::Call(*function));
            }
        }
    }

    /// Applies the expression elementwise to an ordered sample vector.
    /// The output has the same length as the input. Domain errors
    /// surface as non-finite entries, never as a panic.
    pub fn evaluate(&self, xs: &DVector<f64>) -> DVector<f64> {
        DVector::from_iterator(xs.len(), xs.iter().map(|&x| self.evaluate_scalar(x)))
    }

    fn evaluate_scalar(&self, x: f64) -> f64 {
        // compile() always emits a balanced program, so the stack
        // never underflows here.
        let mut stack: Vec<f64> = Vec::with_capacity(self.program.len());
        for instruction in self.program.iter() {
            match instruction {
                Instruction::LoadConstant(value) => stack.push(*value),
                Instruction::LoadVariable => stack.push(x),
                Instruction::Neg => {
                    let operand = stack.pop().unwrap_or(f64::NAN);
                    stack.push(-operand);
                },
                Instruction::Call(function) => {
                    let argument = stack.pop().unwrap_or(f64::NAN);
                    stack.push(function.apply(argument));
                },
                binary => {
                    let rhs = stack.pop().unwrap_or(f64::NAN);
                    let lhs = stack.pop().unwrap_or(f64::NAN);
                    stack.push(match binary {
                        Instruction::Add => lhs + rhs,
                        Instruction::Sub => lhs - rhs,
                        Instruction::Mul => lhs * rhs,
                        Instruction::Div => lhs / rhs,
                        _ => lhs.powf(rhs)
                    });
                }
            }
        }
        stack.pop().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    use super::*;
    use crate::expression::parser::parse;

    fn evaluator_for(text: &str) -> Evaluator {
        Evaluator::compile(&parse(text).unwrap())
    }

    #[test]
    fn output_matches_input_length() {
        let evaluator = evaluator_for("x^2");
        let xs = dvector![0.0, 1.0, 2.0, 3.0];
        let ys = evaluator.evaluate(&xs);
        assert_eq!(ys.len(), xs.len());
        assert_relative_eq!(ys[3], 9.0);
    }

    #[test]
    fn evaluates_trigonometric_expression() {
        let evaluator = evaluator_for("sin(x) * cos(x)");
        let xs = dvector![0.5];
        let ys = evaluator.evaluate(&xs);
        assert_relative_eq!(ys[0], 0.5_f64.sin() * 0.5_f64.cos(), epsilon = 1e-12);
    }

    #[test]
    fn domain_error_produces_nan() {
        let evaluator = evaluator_for("log(x)");
        let ys = evaluator.evaluate(&dvector![-1.0, 1.0]);
        assert!(ys[0].is_nan());
        assert_relative_eq!(ys[1], 0.0);
    }

    #[test]
    fn division_by_zero_produces_infinity() {
        let evaluator = evaluator_for("1/x");
        let ys = evaluator.evaluate(&dvector![0.0]);
        assert!(ys[0].is_infinite());
    }

    #[test]
    fn evaluator_is_reusable() {
        let evaluator = evaluator_for("x + 1");
        let first = evaluator.evaluate(&dvector![1.0]);
        let second = evaluator.evaluate(&dvector![2.0]);
        assert_relative_eq!(first[0], 2.0);
        assert_relative_eq!(second[0], 3.0);
    }
}
