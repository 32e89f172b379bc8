//! Parsed but not yet interpreted `swap!` input.

use syn::{Attribute, Expr, Token};

/// `#[attr]* left, right`
#[derive(syn_derive::Parse)]
pub struct SwapInput {
    /// Options of this invocation.
    #[parse(Attribute::parse_outer)]
    pub attrs: Vec<Attribute>,
    /// First operand.
    pub left: Expr,
    /// Separator.
    _comma: Token![,],
    /// Second operand.
    pub right: Expr,
    /// Optional trailing comma.
    _trailing: Option<Token![,]>,
}
