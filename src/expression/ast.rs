use super::function::Function;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow
}

/// Immutable expression tree over the single free variable `x`.
/// Built once by the parser, then shared by the evaluator and the
/// antiderivative search.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(f64),
    Variable,
    Neg(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(Function, Box<Expr>)
}

impl Expr {
    pub fn constant(value: f64) -> Expr {
        Expr::Constant(value)
    }

    pub fn variable() -> Expr {
        Expr::Variable
    }

    pub fn neg(operand: Expr) -> Expr {
        Expr::Neg(Box::new(operand))
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Add, Box::new(lhs), Box::new(rhs))
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Sub, Box::new(lhs), Box::new(rhs))
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Mul, Box::new(lhs), Box::new(rhs))
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Div, Box::new(lhs), Box::new(rhs))
    }

    pub fn pow(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinaryOp::Pow, Box::new(lhs), Box::new(rhs))
    }

    pub fn call(function: Function, argument: Expr) -> Expr {
        Expr::Call(function, Box::new(argument))
    }

    /// Folds a subtree that does not mention `x` down to a single value.
    /// Returns `None` as soon as the variable appears.
    pub fn constant_value(&self) -> Option<f64> {
        match self {
            Expr::Constant(value) => Some(*value),
            Expr::Variable => None,
            Expr::Neg(operand) => operand.constant_value().map(|v| -v),
            Expr::Binary(op, lhs, rhs) => {
                let l = lhs.constant_value()?;
                let r = rhs.constant_value()?;
                Some(match op {
                    BinaryOp::Add => l + r,
                    BinaryOp::Sub => l - r,
                    BinaryOp::Mul => l * r,
                    BinaryOp::Div => l / r,
                    BinaryOp::Pow => l.powf(r)
                })
            },
            Expr::Call(function, argument) => argument.constant_value().map(|v| function.apply(v))
        }
    }

    /// Decomposes the tree as `p*x + q` when it is linear in `x`.
    /// Returns `(p, q)`, with `p == 0` for constant subtrees.
    pub fn linear_parts(&self) -> Option<(f64, f64)> {
        if let Some(value) = self.constant_value() {
            return Some((0.0, value));
        }
        match self {
            Expr::Variable => Some((1.0, 0.0)),
            Expr::Neg(operand) => {
                let (p, q) = operand.linear_parts()?;
                Some((-p, -q))
            },
            Expr::Binary(BinaryOp::Add, lhs, rhs) => {
                let (lp, lq) = lhs.linear_parts()?;
                let (rp, rq) = rhs.linear_parts()?;
                Some((lp + rp, lq + rq))
            },
            Expr::Binary(BinaryOp::Sub, lhs, rhs) => {
                let (lp, lq) = lhs.linear_parts()?;
                let (rp, rq) = rhs.linear_parts()?;
                Some((lp - rp, lq - rq))
            },
            Expr::Binary(BinaryOp::Mul, lhs, rhs) => {
                if let Some(scale) = lhs.constant_value() {
                    let (p, q) = rhs.linear_parts()?;
                    Some((scale * p, scale * q))
                } else if let Some(scale) = rhs.constant_value() {
                    let (p, q) = lhs.linear_parts()?;
                    Some((scale * p, scale * q))
                } else {
                    None
                }
            },
            Expr::Binary(BinaryOp::Div, lhs, rhs) => {
                let divisor = rhs.constant_value()?;
                let (p, q) = lhs.linear_parts()?;
                Some((p / divisor, q / divisor))
            },
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_constant_subtree() {
        // 2 * (3 + 1)
        let expr = Expr::mul(Expr::constant(2.0), Expr::add(Expr::constant(3.0), Expr::constant(1.0)));
        assert_eq!(expr.constant_value(), Some(8.0));
    }

    #[test]
    fn variable_is_not_constant() {
        let expr = Expr::add(Expr::variable(), Expr::constant(1.0));
        assert_eq!(expr.constant_value(), None);
    }

    #[test]
    fn decomposes_linear_argument() {
        // 3*x - 2
        let expr = Expr::sub(Expr::mul(Expr::constant(3.0), Expr::variable()), Expr::constant(2.0));
        assert_eq!(expr.linear_parts(), Some((3.0, -2.0)));
    }

    #[test]
    fn quadratic_is_not_linear() {
        let expr = Expr::mul(Expr::variable(), Expr::variable());
        assert_eq!(expr.linear_parts(), None);
    }
}
