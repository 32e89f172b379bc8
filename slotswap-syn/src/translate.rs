//! Translation from the parsed input to the AST of `slotswap_san`.
//!
//! This is where we reject everything that is syntactically an expression
//! but does not designate a memory location.

mod options;

use syn::spanned::Spanned;
use syn::{Expr, UnOp};

use slotswap_err::{self as err, EAccum, IntoError};
use slotswap_san::ast::{self, Place};
use slotswap_san::sp::Sp;

use crate::SwapInput;

impl SwapInput {
    /// Interpret the attributes and operands.
    ///
    /// All problems are recorded in `eaccum`, not only the first.
    /// Returns `None` if at least one of them was fatal.
    pub fn translate(self, eaccum: &mut EAccum) -> Option<ast::Swap> {
        let Self {
            attrs, left, right, ..
        } = self;
        let mut decl = options::Decl::default();
        let mut attrs_ok = Some(());
        for attr in &attrs {
            if eaccum.handle(decl.with(attr)).is_none() {
                attrs_ok = None;
            }
        }
        let left = eaccum.handle(place(left));
        let right = eaccum.handle(place(right));
        attrs_ok?;
        Some(ast::Swap {
            options: decl.for_swap(),
            left: left?,
            right: right?,
        })
    }
}

/// Restrict an expression to those that can be assigned to.
fn place(expr: Expr) -> err::Result<Sp<Place>> {
    let span = expr.span();
    let place = match expr {
        Expr::Path(p) if p.qself.is_none() => Place::Var(p.path),
        Expr::Field(f) => Place::Field {
            base: place(*f.base)?.boxed(),
            member: f.member,
        },
        Expr::Index(i) => Place::Index {
            base: place(*i.expr)?.boxed(),
            index: *i.index,
        },
        Expr::Unary(u) if matches!(u.op, UnOp::Deref(_)) => {
            let inner = Sp::new(u.expr, u.op.span());
            Place::Deref(inner)
        }
        // Transparent wrappers: `(a)` and the invisible groups that
        // `macro_rules!` wraps around `$e:expr`.
        Expr::Paren(p) => return place(*p.expr),
        Expr::Group(g) => return place(*g.expr),
        other => {
            return Err(err::NotAPlace {
                what: ast::printed(&other),
                site: span,
            }
            .into_err())
        }
    };
    Ok(Sp::new(place, span))
}
