//! Procedural macros for the aoc-core library

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{DeriveInput, LitInt, LitStr, parse_macro_input};

/// Derive macro implementing `Solver` by dispatching to `PartSolver<N>` impls
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts (1-255); each of `1..=max_parts`
///   must have a `PartSolver<N>` impl.
/// - `title`: Optional. Puzzle title string.
///
/// # Example
///
/// ```ignore
/// use aoc_core::{AocParser, AocSolver, PartSolver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2, title = "Historian Hysteria")]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
///
/// expands to
///
/// ```ignore
/// impl ::aoc_core::Solver for Day1 {
///     const PARTS: u8 = 2;
///     const TITLE: &'static str = "Historian Hysteria";
///
///     fn solve_part(shared: &mut ..., part: u8) -> Result<String, ::aoc_core::SolveError> {
///         match part {
///             1 => <Self as ::aoc_core::PartSolver<1>>::solve(shared),
///             2 => <Self as ::aoc_core::PartSolver<2>>::solve(shared),
///             _ => Err(::aoc_core::SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AocSolver derive macro requires #[aoc_solver(max_parts = N)] attribute",
            )
        })?;

    let mut max_parts: Option<u8> = None;
    let mut title: Option<LitStr> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: LitInt = meta.value()?.parse()?;
            max_parts = Some(lit.base10_parse()?);
            Ok(())
        } else if meta.path.is_ident("title") {
            title = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("expected `max_parts` or `title`"))
        }
    })?;

    let max_parts = match max_parts {
        Some(0) => {
            return Err(syn::Error::new_spanned(attr, "`max_parts` must be at least 1"));
        }
        Some(n) => n,
        None => {
            return Err(syn::Error::new_spanned(attr, "missing required `max_parts`"));
        }
    };
    let title = title.map(|t| t.value()).unwrap_or_default();

    let arms = (1..=max_parts).map(|n| {
        let n = Literal::u8_unsuffixed(n);
        quote! {
            #n => <Self as ::aoc_core::PartSolver<#n>>::solve(shared),
        }
    });
    let parts = Literal::u8_unsuffixed(max_parts);

    Ok(quote! {
        impl #impl_generics ::aoc_core::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts;
            const TITLE: &'static str = #title;

            fn solve_part(
                shared: &mut <Self as ::aoc_core::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_core::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_core::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}
