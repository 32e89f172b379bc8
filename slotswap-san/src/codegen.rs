//! Generate Rust code for a checked `swap!`.
//!
//! The expansion is a block of type `()` that hands both places to
//! `slotswap_sem` through the requested parameter-passing mechanism,
//! surrounded by the optional trace statements.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned, ToTokens};

use crate::ast::{self, options};
use crate::sp::Sp;

impl ToTokens for ast::Place {
    fn to_tokens(&self, toks: &mut TokenStream) {
        toks.extend(match self {
            Self::Var(path) => quote!(#path),
            Self::Field { base, member } => quote!(#base . #member),
            Self::Index { base, index } => quote!(#base [ #index ]),
            // Parenthesized twice so that the result stays a place when it
            // is itself the base of a field or an index.
            Self::Deref(e) => quote!((*(#e))),
        });
    }
}

impl options::Swap {
    /// Statements to print the slots before and after the exchange.
    fn traces(&self, left: &Sp<ast::Place>, right: &Sp<ast::Place>) -> (TokenStream, TokenStream) {
        let Some(file) = self.trace else {
            return (quote!(), quote!());
        };
        let printer = match file.t {
            options::TraceFile::StdOut => quote_spanned!(file.span=> ::std::println),
            options::TraceFile::StdErr => quote_spanned!(file.span=> ::std::eprintln),
        };
        let header = format!("swap({}, {})", left.t, right.t);
        (
            quote! {
                #printer!("{} <- ({}, {})", #header, #left, #right);
            },
            quote! {
                #printer!("{} -> ({}, {})", #header, #left, #right);
            },
        )
    }

    /// The exchange itself.
    ///
    /// Both forms first take the address of each operand with
    /// `addr_of_mut!`, which only accepts places: a constant or a function
    /// item is rejected instead of being copied into a temporary.
    /// The addresses are computed in the caller's context, so dereferencing
    /// a raw pointer in an operand still requires the caller's `unsafe`.
    fn exchange(&self, left: &Sp<ast::Place>, right: &Sp<ast::Place>) -> TokenStream {
        match self.mode {
            options::Mode::Reference => quote! {
                let _ = ::core::ptr::addr_of_mut!(#left);
                let _ = ::core::ptr::addr_of_mut!(#right);
                ::slotswap_sem::swap_ref(&mut #left, &mut #right);
            },
            options::Mode::Pointer => {
                let l = Ident::new("left", Span::mixed_site());
                let r = Ident::new("right", Span::mixed_site());
                quote! {
                    let #l = ::core::ptr::addr_of_mut!(#left);
                    let #r = ::core::ptr::addr_of_mut!(#right);
                    // SAFETY: both pointers come from `addr_of_mut!` on live
                    // places and are used before the end of the block.
                    // Operands going through an overloaded `IndexMut` (`v[1]`
                    // on a `Vec`) are outside this guarantee, see `swap!`.
                    unsafe {
                        ::slotswap_sem::swap_ptr(#l, #r);
                    }
                }
            }
        }
    }
}

impl ToTokens for ast::Swap {
    fn to_tokens(&self, toks: &mut TokenStream) {
        let Self {
            options,
            left,
            right,
        } = self;
        let options::Swap { trace: _, mode: _ } = options;
        let (trace_before, trace_after) = options.traces(left, right);
        let exchange = options.exchange(left, right);
        toks.extend(quote! {
            {
                #trace_before
                #exchange
                #trace_after
            }
        });
    }
}
