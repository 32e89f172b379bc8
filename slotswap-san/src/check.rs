//! Static checks that need to see both operands at once.

use slotswap_err::{self as err, EAccum};

use crate::ast;

/// Verify an AST before it is handed to code generation.
pub trait Check {
    /// Record in `eaccum` everything that is wrong with `self`.
    /// Returns `None` if at least one error was found.
    fn check(&self, eaccum: &mut EAccum) -> Option<()>;
}

impl Check for ast::Swap {
    fn check(&self, eaccum: &mut EAccum) -> Option<()> {
        if self.left.t == self.right.t {
            eaccum.error(err::SelfSwap {
                place: &self.left,
                first: Some(self.left.span),
                second: self.right.span,
            });
            return None;
        }
        Some(())
    }
}
