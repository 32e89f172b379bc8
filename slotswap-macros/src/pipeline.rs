//! Apply all passes to a `swap!` invocation.
//!
//! 0. parse with `slotswap_syn`,
//! 1. translate to the AST of `slotswap_san` (restricts operands to places,
//!    interprets the attributes),
//! 2. static checks,
//! 3. codegen.
//!
//! Errors of a pass prevent the next one from running, but all errors
//! found by a single pass are reported together.

use proc_macro2::TokenStream;
use quote::ToTokens;

use slotswap_err::{self as err, EAccum, IntoError};
use slotswap_san::check::Check;
use slotswap_syn::SwapInput;

/// Expand one `swap!`, producing either the code or `compile_error!`s.
pub fn expand(i: TokenStream) -> TokenStream {
    let mut eaccum = EAccum::default();
    let prog = pipeline(&mut eaccum, i);
    let fatal = eaccum.is_fatal();
    let errs = eaccum.fetch();
    match prog {
        Some(prog) => {
            err::consistency!(!fatal, "Program generated despite a fatal error");
            prog
        }
        None => {
            err::consistency!(fatal, "No program generated, but no fatal error emitted");
            errs.into_iter().map(err::emit).collect()
        }
    }
}

/// Run the passes in order.
fn pipeline(eaccum: &mut EAccum, i: TokenStream) -> Option<TokenStream> {
    let input = eaccum.handle(syn::parse2::<SwapInput>(i).map_err(from_syn))?;
    let swap = input.translate(eaccum)?;
    swap.check(eaccum)?;
    Some(swap.into_token_stream())
}

/// Parse errors become one error per message.
fn from_syn(e: syn::Error) -> err::Error {
    e.into_iter()
        .flat_map(|e| {
            err::Basic {
                msg: e.to_string(),
                span: e.span(),
            }
            .into_err()
        })
        .collect()
}
