#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// Test attribute macro that sets up tracing before running the test.
///
/// # Usage
///
/// Basic usage (uses `#[test]`):
/// ```ignore
/// #[mapshape_testhelpers::test]
/// fn my_test() {
///     // tracing is set up automatically
/// }
/// ```
///
/// With a custom test attribute:
/// ```ignore
/// #[mapshape_testhelpers::test(some_runtime::test)]
/// fn my_test() {}
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = proc_macro2::TokenStream::from(attr);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(item as ItemFn);

    let test_attr = if attr.is_empty() {
        quote! { #[::core::prelude::rust_2024::test] }
    } else {
        quote! { #[#attr] }
    };

    let stmts = &block.stmts;
    quote! {
        #test_attr
        #(#attrs)*
        #vis #sig {
            ::mapshape_testhelpers::setup();

            #(#stmts)*
        }
    }
    .into()
}
