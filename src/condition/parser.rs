//! Building condition sets from structured text

use crate::condition::ast::{ConditionSet, Expression, Operator};
use crate::data::{self, DataNode};
use crate::error::{ConditionError, Result};

impl ConditionSet {
    /// Build a set from the children of a structured node.
    ///
    /// The node's own first token selects the combinator: exactly `or`
    /// makes this an "or" set, anything else an "and" set.
    pub fn load(node: &DataNode) -> ConditionSet {
        let mut set = ConditionSet {
            is_or: node.token(0) == "or",
            ..ConditionSet::default()
        };
        for child in &node.children {
            set.add(child);
        }
        set
    }

    /// Parse raw source text as a top-level "and" set, one condition per
    /// line. An `and`/`or` line inside the text opens a nested group made
    /// of the lines indented beneath it.
    pub fn parse(text: &str) -> ConditionSet {
        let mut set = ConditionSet::default();
        for node in data::parse(text) {
            set.add(&node);
        }
        set
    }

    /// Add one line to this set.
    ///
    /// Unrecognized lines are reported through the node's trace hook and
    /// skipped; they never abort loading of sibling or parent lines.
    pub fn add(&mut self, node: &DataNode) {
        match node.size() {
            1 if node.token(0) == "never" => {
                self.expressions.push(Expression::new("", Operator::NotEqual, 0));
            }
            1 if node.token(0) == "and" || node.token(0) == "or" => {
                self.children.push(ConditionSet::load(node));
            }
            2 => {
                if self.add_unary(node.token(0), node.token(1)).is_err() {
                    node.print_trace("Unrecognized condition expression:");
                }
            }
            3 => {
                let added = node
                    .value(2)
                    .map(|value| self.add_binary(node.token(0), node.token(1), value).is_ok())
                    .unwrap_or(false);
                if !added {
                    node.print_trace("Unrecognized condition expression:");
                }
            }
            _ => node.print_trace("Unrecognized condition expression:"),
        }
    }

    /// Add a two-token shorthand line as its canonical binary expression.
    ///
    /// Keyword forms (`not`, `has`, `set`, `clear`) are checked before the
    /// suffix forms (`++`, `--`), so a line like `set ++` reads as setting
    /// a condition named `++`.
    pub fn add_unary(&mut self, first: &str, second: &str) -> Result<()> {
        let expression = match (first, second) {
            ("not", name) => Expression::new(name, Operator::Equal, 0),
            ("has", name) => Expression::new(name, Operator::NotEqual, 0),
            ("set", name) => Expression::new(name, Operator::Assign, 1),
            ("clear", name) => Expression::new(name, Operator::Assign, 0),
            (name, "++") => Expression::new(name, Operator::Add, 1),
            (name, "--") => Expression::new(name, Operator::Subtract, 1),
            _ => {
                return Err(ConditionError::UnrecognizedExpression(format!(
                    "{} {}",
                    first, second
                )))
            }
        };
        self.expressions.push(expression);
        Ok(())
    }

    /// Add a canonical three-token expression.
    pub fn add_binary(&mut self, name: &str, op: &str, value: i64) -> Result<()> {
        let operator = Operator::from_token(op).ok_or_else(|| {
            ConditionError::UnrecognizedExpression(format!("{} {} {}", name, op, value))
        })?;
        self.expressions.push(Expression::new(name, operator, value));
        Ok(())
    }
}
