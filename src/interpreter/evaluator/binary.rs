use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
    position::Span,
};

impl Context {
    /// Evaluates a binary operation node.
    ///
    /// Operands evaluate left to right; the right operand is only evaluated
    /// if the left succeeded, and the first child error propagates unchanged.
    /// Dispatch on the operator kind then routes to the arithmetic,
    /// comparison or logical helpers.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    /// - `span`: Span of the whole operation, for error attribution.
    ///
    /// # Returns
    /// The computed `Value`.
    ///
    /// # Errors
    /// A child error, a division by zero (attributed to the right operand's
    /// span), or overflowing integer arithmetic.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 span: Span)
                                 -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };

        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;

        match op {
            Add | Sub | Mul => self.eval_arithmetic(op, lhs, rhs, span),
            Div => self.eval_division(lhs, rhs, right.span(), span),
            Pow => self.eval_power(lhs, rhs, span),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                self.eval_comparison(op, lhs, rhs, span)
            },
            And | Or => Ok(Self::eval_logic(op, lhs, rhs)),
        }
    }

    /// Evaluates addition, subtraction and multiplication.
    ///
    /// Two integers stay in integer arithmetic, checked for overflow; any
    /// real operand promotes the operation to reals.
    fn eval_arithmetic(&self,
                       op: BinaryOperator,
                       lhs: Value,
                       rhs: Value,
                       span: Span)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul, Sub};

        match (lhs, rhs) {
            (Value::Integer(a), Value::Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    _ => unreachable!(),
                };
                result.map(Value::Integer)
                      .ok_or_else(|| self.error(RuntimeErrorKind::Overflow, span))
            },
            _ => {
                let a = self.as_real(lhs, span)?;
                let b = self.as_real(rhs, span)?;
                Ok(Value::Real(match op {
                                   Add => a + b,
                                   Sub => a - b,
                                   Mul => a * b,
                                   _ => unreachable!(),
                               }))
            },
        }
    }

    /// Evaluates a division.
    ///
    /// A zero divisor is a runtime error attributed to the right operand's
    /// span, never a silently produced infinity or NaN. Integer division
    /// truncates; any real operand promotes to real division.
    fn eval_division(&self,
                     lhs: Value,
                     rhs: Value,
                     rhs_span: Span,
                     span: Span)
                     -> EvalResult<Value> {
        match (lhs, rhs) {
            (Value::Integer(a), Value::Integer(b)) => {
                if b == 0 {
                    return Err(self.error(RuntimeErrorKind::DivisionByZero, rhs_span));
                }
                a.checked_div(b)
                 .map(Value::Integer)
                 .ok_or_else(|| self.error(RuntimeErrorKind::Overflow, span))
            },
            _ => {
                let b = self.as_real(rhs, span)?;
                if b == 0.0 {
                    return Err(self.error(RuntimeErrorKind::DivisionByZero, rhs_span));
                }
                Ok(Value::Real(self.as_real(lhs, span)? / b))
            },
        }
    }

    /// Evaluates an exponentiation.
    ///
    /// An integer base with a non-negative integer exponent uses checked
    /// integer power; everything else (real operands, negative exponents)
    /// promotes to `powf`.
    fn eval_power(&self, lhs: Value, rhs: Value, span: Span) -> EvalResult<Value> {
        match (lhs, rhs) {
            (Value::Integer(base), Value::Integer(exponent)) if exponent >= 0 => {
                let exponent = u32::try_from(exponent)
                    .map_err(|_| self.error(RuntimeErrorKind::Overflow, span))?;
                base.checked_pow(exponent)
                    .map(Value::Integer)
                    .ok_or_else(|| self.error(RuntimeErrorKind::Overflow, span))
            },
            _ => {
                let base = self.as_real(lhs, span)?;
                let exponent = self.as_real(rhs, span)?;
                Ok(Value::Real(base.powf(exponent)))
            },
        }
    }

    /// Evaluates a comparison, yielding the integer 1 or 0.
    ///
    /// Mixed integer/real operands are compared as reals.
    fn eval_comparison(&self,
                       op: BinaryOperator,
                       lhs: Value,
                       rhs: Value,
                       span: Span)
                       -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let holds = match (lhs, rhs) {
            (Value::Integer(a), Value::Integer(b)) => match op {
                Equal => a == b,
                NotEqual => a != b,
                Less => a < b,
                Greater => a > b,
                LessEqual => a <= b,
                GreaterEqual => a >= b,
                _ => unreachable!(),
            },
            _ => {
                let a = self.as_real(lhs, span)?;
                let b = self.as_real(rhs, span)?;
                match op {
                    Equal => a == b,
                    NotEqual => a != b,
                    Less => a < b,
                    Greater => a > b,
                    LessEqual => a <= b,
                    GreaterEqual => a >= b,
                    _ => unreachable!(),
                }
            },
        };

        Ok(Value::Integer(i64::from(holds)))
    }

    /// Evaluates a logical connective, yielding the integer 1 or 0.
    ///
    /// Both operands have already been evaluated (no short-circuiting);
    /// truthiness is nonzero-ness and the result is re-encoded as 1/0.
    fn eval_logic(op: BinaryOperator, lhs: Value, rhs: Value) -> Value {
        use BinaryOperator::{And, Or};

        let holds = match op {
            And => lhs.is_truthy() && rhs.is_truthy(),
            Or => lhs.is_truthy() || rhs.is_truthy(),
            _ => unreachable!(),
        };

        Value::Integer(i64::from(holds))
    }

    /// Converts an operand to a real, failing with a located error when the
    /// integer is too large to convert losslessly.
    fn as_real(&self, value: Value, span: Span) -> EvalResult<f64> {
        value.as_real()
             .ok_or_else(|| self.error(RuntimeErrorKind::LiteralTooLarge, span))
    }
}
