use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Value bound to `pi` when a session starts.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141_592_653_5;
/// Value bound to `e` when a session starts.
#[allow(clippy::approx_constant)]
pub const E: f64 = 2.718_281_828_4;

/// Stores every variable declared during a session.
///
/// Names are unique: a name can be declared once and is never removed. The
/// table is owned by a single [`Calculator`](crate::interpreter::calculator::Calculator)
/// and handed by reference to the token stream (which resolves declared names
/// to their values) and to the grammar functions (which declare new ones).
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variables: HashMap<String, f64>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the constants `pi` and `e` already declared.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::symbol_table::{PI, SymbolTable};
    ///
    /// let table = SymbolTable::with_constants();
    /// assert_eq!(table.lookup("pi", 1).unwrap(), PI);
    /// assert!(table.is_declared("e"));
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let mut table = Self::new();
        table.variables.insert("pi".to_string(), PI);
        table.variables.insert("e".to_string(), E);
        table
    }

    /// Binds a new name and returns the bound value.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    /// - `value`: Its initial value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `RuntimeError::DuplicateDeclaration` if `name` is already bound; the
    /// existing value is left untouched.
    pub fn declare(&mut self, name: &str, value: f64, line: usize) -> EvalResult<f64> {
        if self.is_declared(name) {
            return Err(RuntimeError::DuplicateDeclaration { name: name.to_string(),
                                                            line });
        }
        self.variables.insert(name.to_string(), value);
        Ok(value)
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if `name` was never declared.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Overwrites the value of an already declared variable.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if `name` was never declared.
    pub fn set(&mut self, name: &str, value: f64, line: usize) -> EvalResult<()> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of declared names, constants included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
