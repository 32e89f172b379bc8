//! Error message generation.
//!
//! Here we provide the facilities to instanciate prebuilt error messages.
//! The general structure is that each kind of error message will be implemented
//! by a `struct` that implements [`IntoError`], where the blanks are filled
//! in by the `struct` fields' [`Display`] and [`TrySpan`] `impl`s.

use std::fmt::Display;

use crate::Span;

/// Anything that went wrong: a sequence of [`Span`] and associated message.
pub type Error = Vec<(String, Option<Span>)>;

/// Either a value or a diagnostic.
pub type Result<T> = std::result::Result<T, Error>;

/// Generate an [`Error`].
#[expect(
    clippy::module_name_repetitions,
    reason = "Of course the trait contains the word 'Error'"
)]
pub trait IntoError {
    /// Produce the sequence of spans and help messages.
    fn into_err(self) -> Error;
}

/// Objects that can be converted to spans.
pub trait TrySpan {
    /// Try to get a span from the object (by default we don't get any,
    /// but a wrapper might provide one)
    fn try_span(&self) -> Option<Span> {
        None
    }
}

/// Always [Some].
impl TrySpan for Span {
    fn try_span(&self) -> Option<Span> {
        Some(*self)
    }
}

/// Trivial projection.
impl<T: TrySpan> TrySpan for Option<T> {
    fn try_span(&self) -> Option<Span> {
        self.as_ref().and_then(TrySpan::try_span)
    }
}

/// An explicit error message with its span, for errors that come from
/// elsewhere already formatted (typically parse errors).
pub struct Basic {
    /// Error kind.
    pub msg: String,
    /// Error location.
    pub span: Span,
}

impl IntoError for Basic {
    fn into_err(self) -> Error {
        vec![(self.msg, Some(self.span))]
    }
}

/// Describe an error message in a succint format and generate the
/// `impl IntoError` automaticaly.
///
/// The declaration looks like this:
/// ```skip
/// ["Documentation for SomeError"]
/// struct SomeError where {
///     ["Documentation for foo"] foo: {Display},
///     ["Documentation for bar"] bar: {TrySpan},
/// }
/// ```
/// The fields can be of any type that implements the trait bounds.
///
/// The second part is the list of messages:
/// ```skip
/// impl {
///     "Uh oh this is bad: {foo} occured here" @ bar;
///     "Some note without a location";
/// }
/// ```
/// - `"msg"` plain message without span
/// - `"msg" @ foo` use the span of `foo` (requires `foo: {TrySpan}`)
/// - `"msg" @ if foo` only insert if `foo` has a span
macro_rules! error_message {
    (
        $( [ $predoc:expr ] )*
        struct $name:tt where {
            $(
                [ $doc:expr ]
                $field:ident : { $($bounds:tt)+ },
            )*
        } impl {
            $( $message:tt )*
        }
    ) => {
        #[expect(non_camel_case_types, reason = "Using a generic of the same name for each field")]
        $( #[doc = $predoc] )*
        pub struct $name <$($field),*> {
            $(
                #[doc = $doc]
                pub $field : $field ,
            )*
        }

        #[expect(non_camel_case_types, reason = "Using a generic of the same name for each field")]
        impl <$($field),*> IntoError for $name<$($field),*>
        where $( $field: $($bounds)+ , )*
        {
            fn into_err(self) -> Error {
                let Self { $($field),* } = self;
                let mut constructed = Vec::new();
                error_message!([constructed] $($message)*);
                constructed
            }
        }
    };
    ( [$constructed:ident] ) => {};
    ( [$constructed:ident] $fmt:tt @ if $site:ident ; $($rest:tt)* ) => {
        if let Some(site) = $site.try_span() {
            $constructed.push((format!($fmt), Some(site)));
        }
        error_message!([$constructed] $($rest)*);
    };
    ( [$constructed:ident] $fmt:tt @ $site:ident ; $($rest:tt)* ) => {
        $constructed.push((format!($fmt), $site.try_span()));
        error_message!([$constructed] $($rest)*);
    };
    ( [$constructed:ident] $fmt:tt ; $($rest:tt)* ) => {
        $constructed.push((format!($fmt), None));
        error_message!([$constructed] $($rest)*);
    };
}

error_message! {
    ["Generate an error for an operand of `swap!` that does not designate"]
    ["a memory location, e.g. `swap!(a, 1)`."]
    struct NotAPlace where {
        ["Printed form of the operand."] what: {Display},
        ["Location of the operand."] site: {TrySpan},
    } impl {
        "`{what}` is not a place expression and cannot be swapped" @ site;
        "Only variables, fields, indexed elements and dereferences can be swapped";
    }
}

error_message! {
    ["Generate an error for `swap!(a, a)`."]
    struct SelfSwap where {
        ["Printed form of the place."] place: {Display},
        ["First occurence."] first: {TrySpan},
        ["Second occurence."] second: {TrySpan},
    } impl {
        "Cannot swap `{place}` with itself" @ second;
        "It is already the first operand" @ if first;
        "Swapping a slot with itself has no effect";
    }
}

error_message! {
    ["Generate an error for an attribute that is not recognized."]
    struct UnknownAttribute where {
        ["Printed form of the attribute."] attr: {Display},
        ["Location of the attribute."] site: {TrySpan},
    } impl {
        "Unknown or malformed attribute `{attr}`" @ site;
        "Available attributes are `#[trace]`, `#[trace[stdout]]`, `#[trace[stderr]]`, `#[by_pointer]` and `#[by_reference]`";
    }
}

error_message! {
    ["Generate an error for an option that is set twice."]
    struct DuplicateOption where {
        ["Description of the option."] option: {Display},
        ["Location of the second definition."] site: {TrySpan},
        ["Location of the first definition."] prior: {TrySpan},
    } impl {
        "The attribute {option} is set more than once" @ site;
        "It was already set here" @ if prior;
    }
}

error_message! {
    ["Generate an error for two options that are mutually exclusive."]
    struct ConflictingOptions where {
        ["Description of the newest option."] this: {Display},
        ["Description of the option already set."] other: {Display},
        ["Location of the newest option."] site: {TrySpan},
        ["Location of the option already set."] prior: {TrySpan},
    } impl {
        "The attribute {this} cannot be combined with {other}" @ site;
        "{other} was set here" @ if prior;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn basic_has_one_message() {
        let e = Basic {
            msg: "expected `,`".to_owned(),
            span: Span::call_site(),
        }
        .into_err();
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].0, "expected `,`");
        assert!(e[0].1.is_some());
    }

    #[test]
    fn not_a_place_messages() {
        let e = NotAPlace {
            what: "1 + 2",
            site: Span::call_site(),
        }
        .into_err();
        let msgs = e.iter().map(|(m, _)| m.as_str()).collect::<Vec<_>>();
        assert_eq!(
            msgs,
            [
                "`1 + 2` is not a place expression and cannot be swapped",
                "Only variables, fields, indexed elements and dereferences can be swapped",
            ]
        );
        assert!(e[0].1.is_some());
        assert!(e[1].1.is_none());
    }

    #[test]
    fn optional_sites_are_skipped() {
        let e = SelfSwap {
            place: "a",
            first: None::<Span>,
            second: Span::call_site(),
        }
        .into_err();
        assert_eq!(e.len(), 2);
        assert_eq!(e[0].0, "Cannot swap `a` with itself");

        let e = SelfSwap {
            place: "a",
            first: Some(Span::call_site()),
            second: Span::call_site(),
        }
        .into_err();
        assert_eq!(e.len(), 3);
        assert_eq!(e[1].0, "It is already the first operand");
    }

    #[test]
    fn conflicting_options_mention_both() {
        let e = ConflictingOptions {
            this: "#[by_pointer]",
            other: "#[by_reference]",
            site: Span::call_site(),
            prior: Span::call_site(),
        }
        .into_err();
        assert_eq!(
            e[0].0,
            "The attribute #[by_pointer] cannot be combined with #[by_reference]"
        );
        assert_eq!(e[1].0, "#[by_reference] was set here");
    }
}
