use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
    position::Span,
};

impl Context {
    /// Evaluates a unary operation node.
    ///
    /// - `+` yields the operand unchanged.
    /// - `-` negates it, checked for overflow on integers (`-i64::MIN` has no
    ///   representation).
    /// - `not` inverts the operand's truthiness and yields the integer 1 or 0.
    ///
    /// # Parameters
    /// - `op`: The prefix operator.
    /// - `operand`: Operand expression.
    /// - `span`: Span of the whole operation, for error attribution.
    ///
    /// # Returns
    /// The computed `Value`.
    ///
    /// # Errors
    /// A child error, or an overflowing integer negation.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                operand: &Expr,
                                span: Span)
                                -> EvalResult<Value> {
        let value = self.eval(operand)?;

        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => {
                    n.checked_neg()
                     .map(Value::Integer)
                     .ok_or_else(|| self.error(RuntimeErrorKind::Overflow, span))
                },
                Value::Real(r) => Ok(Value::Real(-r)),
            },
            UnaryOperator::Not => Ok(Value::Integer(i64::from(!value.is_truthy()))),
        }
    }
}
