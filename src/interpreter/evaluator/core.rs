use crate::{
    ast::Expr,
    error::{RuntimeError, RuntimeErrorKind, TraceFrame},
    interpreter::{symbol_table::SymbolTable, value::Value},
    position::Span,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the symbol table with all
/// variable bindings, the display name used in tracebacks, and the frames of
/// any enclosing contexts. The root context is built once by the run
/// orchestrator and passed into evaluation explicitly; there is no ambient
/// global state.
///
/// ## Usage
///
/// A `Context` is created once and reused across runs, which is what lets an
/// interactive session keep its variables from one line to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    /// Name of this execution context, shown in tracebacks (e.g.
    /// `<program>`).
    pub display_name: String,
    /// The scope this context evaluates against.
    pub symbols:      SymbolTable,
    /// Frames of enclosing contexts, innermost first. Empty for the root;
    /// the language has no calls yet, but tracebacks are built to support
    /// them.
    pub callers:      Vec<TraceFrame>,
}

impl Context {
    /// Creates the root evaluation context.
    ///
    /// The symbol table is pre-seeded with the constants `null = 0`,
    /// `true = 1` and `false = 0`; they are ordinary bindings and can be
    /// shadowed by assignment like any other name.
    ///
    /// # Parameters
    /// - `display_name`: Name shown for this context in tracebacks.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let context = Context::root("<program>");
    ///
    /// assert_eq!(context.symbols.get("true"), Some(Value::Integer(1)));
    /// assert_eq!(context.symbols.get("null"), Some(Value::Integer(0)));
    /// ```
    #[must_use]
    pub fn root(display_name: &str) -> Self {
        let mut symbols = SymbolTable::new();
        symbols.set("null", Value::Integer(0));
        symbols.set("true", Value::Integer(1));
        symbols.set("false", Value::Integer(0));

        Self { display_name: display_name.to_string(),
               symbols,
               callers: Vec::new() }
    }

    /// Snapshots the context chain for a runtime error raised at `line`.
    ///
    /// The first frame is this context at the failing line; enclosing frames
    /// follow in order.
    #[must_use]
    pub fn traceback(&self, line: usize) -> Vec<TraceFrame> {
        let mut frames = Vec::with_capacity(self.callers.len() + 1);
        frames.push(TraceFrame { display_name: self.display_name.clone(),
                                 line });
        frames.extend(self.callers.iter().cloned());
        frames
    }

    /// Builds a runtime error attributed to `span`, carrying this context's
    /// traceback.
    pub(crate) fn error(&self, kind: RuntimeErrorKind, span: Span) -> RuntimeError {
        RuntimeError::new(kind, span, self.traceback(span.start.line))
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. Dispatch is an exhaustive
    /// structural match over the five AST variants: literals, variable
    /// accesses, assignments, and unary and binary operations. Child errors
    /// propagate unchanged and stop all further evaluation of siblings.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// The first runtime failure below this node: an undefined variable,
    /// division by zero, or overflowing integer arithmetic.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::from(*value)),
            Expr::Variable { name, span } => self.eval_variable(name, *span),
            Expr::Assign { name, value, .. } => self.eval_assign(name, value),
            Expr::UnaryOp { op, expr, span } => self.eval_unary_op(*op, expr, *span),
            Expr::BinaryOp { left, op, right, span } => {
                self.eval_binary_op(left, *op, right, *span)
            },
        }
    }

    /// Evaluates a variable access.
    ///
    /// Looks the name up through the scope chain and returns a copy of the
    /// binding. An unbound name is a runtime error anchored exactly at the
    /// access node's span.
    fn eval_variable(&mut self, name: &str, span: Span) -> EvalResult<Value> {
        match self.symbols.get(name) {
            Some(value) => Ok(value),
            None => {
                Err(self.error(RuntimeErrorKind::UnknownVariable { name: name.to_string() },
                               span))
            },
        }
    }

    /// Evaluates a variable assignment.
    ///
    /// The right-hand side is evaluated first (its error propagates before
    /// anything is bound); the result is then bound in the current scope and
    /// yielded as the value of the whole expression.
    fn eval_assign(&mut self, name: &str, value: &Expr) -> EvalResult<Value> {
        let value = self.eval(value)?;
        self.symbols.set(name, value);
        Ok(value)
    }
}
