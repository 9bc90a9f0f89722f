//! Writing condition sets back out as structured text

use crate::condition::ast::ConditionSet;
use crate::data::DataWriter;

impl ConditionSet {
    /// Write this set in canonical form: one three-token record per
    /// expression in declaration order, then one `and`/`or` record plus a
    /// nested block per child set.
    ///
    /// Shorthand lines such as `has x` or `never` are written back as the
    /// binary expression they were stored as, so reloading the output gives
    /// an equivalent set rather than the original spelling.
    pub fn save(&self, out: &mut DataWriter) {
        for expression in &self.expressions {
            let operand = expression.operand.to_string();
            out.write(&[
                expression.name.as_str(),
                expression.op.token(),
                operand.as_str(),
            ]);
        }
        for child in &self.children {
            out.write(&[if child.is_or { "or" } else { "and" }]);
            out.begin_child();
            child.save(out);
            out.end_child();
        }
    }
}
