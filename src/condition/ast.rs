//! Expression and condition set types

/// Binary operator applied to a condition's current value and a literal
/// operand.
///
/// Comparison operators return 1 or 0. Mutation operators return the value
/// the condition should have afterwards; when tested instead of applied,
/// any non-zero result counts as true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `=`
    Assign,
    /// `+=`
    Add,
    /// `-=`
    Subtract,
    /// `<?=`, keeps the smaller of value and operand
    Min,
    /// `>?=`, keeps the larger of value and operand
    Max,
}

impl Operator {
    /// Look up an operator by its textual token.
    pub fn from_token(token: &str) -> Option<Operator> {
        match token {
            "==" => Some(Operator::Equal),
            "!=" => Some(Operator::NotEqual),
            "<" => Some(Operator::Less),
            ">" => Some(Operator::Greater),
            "<=" => Some(Operator::LessEqual),
            ">=" => Some(Operator::GreaterEqual),
            "=" => Some(Operator::Assign),
            "+=" => Some(Operator::Add),
            "-=" => Some(Operator::Subtract),
            "<?=" => Some(Operator::Min),
            ">?=" => Some(Operator::Max),
            _ => None,
        }
    }

    /// The textual token this operator is written as.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::Assign => "=",
            Operator::Add => "+=",
            Operator::Subtract => "-=",
            Operator::Min => "<?=",
            Operator::Max => ">?=",
        }
    }

    /// Apply this operator to a condition's current value and an operand.
    #[inline]
    pub fn apply(self, current: i64, operand: i64) -> i64 {
        match self {
            Operator::Equal => (current == operand) as i64,
            Operator::NotEqual => (current != operand) as i64,
            Operator::Less => (current < operand) as i64,
            Operator::Greater => (current > operand) as i64,
            Operator::LessEqual => (current <= operand) as i64,
            Operator::GreaterEqual => (current >= operand) as i64,
            Operator::Assign => operand,
            Operator::Add => current + operand,
            Operator::Subtract => current - operand,
            Operator::Min => current.min(operand),
            Operator::Max => current.max(operand),
        }
    }
}

/// One parsed condition line: a condition name, an operator, and an integer
/// operand. Immutable once constructed.
///
/// The empty name is valid; it is how `never` lines are stored, since no
/// real condition can make `"" != 0` hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub name: String,
    pub op: Operator,
    pub operand: i64,
}

impl Expression {
    pub fn new(name: impl Into<String>, op: Operator, operand: i64) -> Self {
        Self {
            name: name.into(),
            op,
            operand,
        }
    }

    /// Result of this expression against a current value. Non-zero counts
    /// as true when testing.
    #[inline]
    pub fn eval(&self, current: i64) -> i64 {
        self.op.apply(current, self.operand)
    }
}

/// A set of expressions and nested sub-sets combined under a single AND/OR
/// combinator.
///
/// An "and" set holds when every member holds; an "or" set holds when any
/// member does. Members are evaluated in declaration order, expressions
/// before children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionSet {
    /// Combine members with OR instead of AND.
    pub is_or: bool,
    pub expressions: Vec<Expression>,
    pub children: Vec<ConditionSet>,
}

impl ConditionSet {
    /// An empty "and" set, which tests true.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when this set has no expressions and no children.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty() && self.children.is_empty()
    }
}
