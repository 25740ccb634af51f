//! Implementation of the `function!` procedural macro.
//!
//! This module turns Rust closures and functions that operate on `lamb::Value`
//! into `lamb::Function` values whose declared length is known at compile time.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `function!(|a, b| body)`
//! 2. Function name + arity form: `function!(function_name, arity)`
//!
//! # Generated Code Structure
//!
//! For a closure `|a, b| body`, the macro generates:
//!
//! ```text
//! {
//!     let __lamb_function = move |a: ::lamb::Value, b: ::lamb::Value| body;
//!     ::lamb::Function::new(2, move |_: &::lamb::Value, __lamb_arguments: &[::lamb::Value]| {
//!         ::lamb::IntoCallResult::into_call_result(__lamb_function(
//!             __lamb_arguments.get(0).cloned().unwrap_or_default(),
//!             __lamb_arguments.get(1).cloned().unwrap_or_default(),
//!         ))
//!     })
//! }
//! ```
//!
//! Missing call arguments are delivered as `Value::Nil`, extra ones are
//! ignored by the closure.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Expr, ExprClosure, LitInt, Pat, PatType, Path, Token};

/// What a `function!` invocation describes.
enum Definition {
    /// An inline closure; its parameter list is the declared length.
    Closure(ExprClosure),
    /// A named Rust function and the number of `Value`s it takes.
    Named { path: Path, length: usize },
}

impl Parse for Definition {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let head: Expr = input.parse()?;

        if input.is_empty() {
            return match head {
                Expr::Closure(closure) => Ok(Self::Closure(closure)),
                Expr::Path(named) => Err(syn::Error::new(
                    named.span(),
                    "a named function needs its parameter count: function!(name, 2)",
                )),
                other => Err(syn::Error::new(
                    other.span(),
                    "expected a closure or a named function with its parameter count",
                )),
            };
        }

        let named = match head {
            Expr::Path(named) => named,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "only a named function can be followed by a parameter count",
                ));
            }
        };
        input.parse::<Token![,]>()?;
        let length = input.parse::<LitInt>()?.base10_parse::<usize>()?;
        input.parse::<Option<Token![,]>>()?;

        if !input.is_empty() {
            return Err(input.error("unexpected input after the parameter count"));
        }

        Ok(Self::Named {
            path: named.path,
            length,
        })
    }
}

pub fn function_impl(input: TokenStream) -> TokenStream {
    let expanded = match syn::parse::<Definition>(input) {
        Ok(Definition::Closure(closure)) => generate_from_closure(closure),
        Ok(Definition::Named { path, length }) => generate_function(length, &quote! { #path }),
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn generate_from_closure(mut closure: ExprClosure) -> TokenStream2 {
    let argument_count = closure.inputs.len();

    closure.inputs = closure
        .inputs
        .into_iter()
        .map(annotate_parameter)
        .collect();
    // Functions are 'static, so captures are always taken by value.
    if closure.capture.is_none() {
        closure.capture = Some(<Token![move]>::default());
    }

    generate_function(argument_count, &quote! { #closure })
}

/// Gives untyped closure parameters the `Value` type so method calls in the
/// body resolve without further annotations.
fn annotate_parameter(parameter: Pat) -> Pat {
    match parameter {
        Pat::Type(typed) => Pat::Type(typed),
        untyped => Pat::Type(PatType {
            attrs: Vec::new(),
            pat: Box::new(untyped),
            colon_token: <Token![:]>::default(),
            ty: Box::new(syn::parse_quote! { ::lamb::Value }),
        }),
    }
}

fn generate_function(argument_count: usize, function_expression: &TokenStream2) -> TokenStream2 {
    let arguments: Vec<_> = (0..argument_count)
        .map(|index| {
            quote! {
                __lamb_arguments.get(#index).cloned().unwrap_or_default()
            }
        })
        .collect();

    quote! {
        {
            let __lamb_function = #function_expression;
            ::lamb::Function::new(
                #argument_count,
                move |_: &::lamb::Value, __lamb_arguments: &[::lamb::Value]| {
                    ::lamb::IntoCallResult::into_call_result(__lamb_function(#(#arguments),*))
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(tokens: TokenStream2) -> syn::Result<Definition> {
        syn::parse2::<Definition>(tokens)
    }

    #[rstest]
    fn parses_a_closure() {
        let definition = parse(quote! { |a, b| a }).unwrap();
        assert!(matches!(definition, Definition::Closure(closure) if closure.inputs.len() == 2));
    }

    #[rstest]
    #[case(quote! { join, 2 })]
    #[case(quote! { join, 2, })]
    #[case(quote! { strings::join, 2 })]
    fn parses_a_named_function(#[case] tokens: TokenStream2) {
        let Definition::Named { length, .. } = parse(tokens).unwrap() else {
            panic!("expected a named function");
        };
        assert_eq!(length, 2);
    }

    #[rstest]
    #[case(quote! { join })]
    #[case(quote! { 1 + 2 })]
    #[case(quote! { |a| a, 1 })]
    #[case(quote! { join, two })]
    #[case(quote! { join, 2, 3 })]
    #[case(quote! {})]
    fn rejects_malformed_input(#[case] tokens: TokenStream2) {
        assert!(parse(tokens).is_err());
    }

    #[rstest]
    fn untyped_parameters_receive_value_type() {
        let parameter: Pat = syn::parse_quote! { first };
        let annotated = annotate_parameter(parameter);

        let Pat::Type(typed) = annotated else {
            panic!("expected a typed pattern");
        };
        let rendered = quote! { #typed }.to_string();
        assert!(rendered.contains("Value"));
    }

    #[rstest]
    fn typed_parameters_are_kept() {
        let parameter: Pat = syn::parse_quote! { first: i64 };
        let Pat::Type(typed) = &parameter else {
            panic!("expected a typed pattern");
        };
        let original = quote! { #typed }.to_string();

        let Pat::Type(annotated) = annotate_parameter(parameter.clone()) else {
            panic!("expected a typed pattern");
        };
        assert_eq!(quote! { #annotated }.to_string(), original);
    }

    #[rstest]
    fn closures_capture_by_value() {
        let closure: ExprClosure = syn::parse_quote! { |a| a };
        let rendered = generate_from_closure(closure).to_string();
        assert!(rendered.contains("let __lamb_function = move |"));
    }

    #[rstest]
    fn generated_function_declares_argument_count() {
        let rendered = generate_function(3, &quote! { add_three }).to_string();
        assert!(rendered.contains("3usize"));
        assert!(rendered.contains("into_call_result"));
    }
}
