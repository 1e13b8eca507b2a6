//! Derive macro for conjure's `Infer` trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use conjure::Infer;
//!
//! #[derive(Infer)]
//! struct Person {
//!     name: String,
//!     age: u8,
//!     friends: Vec<Person>,
//! }
//! ```
//!
//! This generates:
//! - `scan`, visiting every field type so unsupported fields are reported
//!   when the generator is built
//! - `synthesize`, splitting the budget evenly across the fields and
//!   building them in declaration order
//!
//! Enums pick a variant uniformly, then build that variant's fields the same
//! way.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, Data, DataEnum, DeriveInput, Fields, Generics, LitStr, Path,
};

/// Derive `Infer` for a struct or enum.
///
/// # Attributes
///
/// - `#[infer(crate = "path")]` - Optional. Path to the crate exporting
///   `Infer`, `Scan`, `Synthesis` and `InferenceError`. Defaults to
///   `::conjure`.
#[proc_macro_derive(Infer, attributes(infer))]
pub fn derive_infer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_infer_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_infer_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let krate = crate_path(&input)?;

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Infer cannot be derived for types with lifetime parameters",
        ));
    }

    let name = &input.ident;
    let generics = add_infer_bounds(input.generics.clone(), &krate);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let (scan_body, synthesize_body) = match &input.data {
        Data::Struct(data) => {
            let scan = scan_fields(&data.fields);
            let build = build_fields(quote!(Self), &data.fields, &krate);
            (scan, build)
        }
        Data::Enum(data) => enum_bodies(name, data, &krate)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Infer cannot be derived for unions",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics #krate::Infer for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn scan(
                scan: &mut #krate::Scan<'_>,
            ) -> ::core::result::Result<(), #krate::InferenceError> {
                #scan_body
                ::core::result::Result::Ok(())
            }

            #[allow(unused_variables)]
            fn synthesize(
                cx: &mut #krate::Synthesis<'_>,
                budget: usize,
            ) -> ::core::result::Result<Self, #krate::InferenceError> {
                #synthesize_body
            }
        }
    })
}

/// Read `#[infer(crate = "...")]`, falling back to `::conjure`.
fn crate_path(input: &DeriveInput) -> syn::Result<Path> {
    let mut krate: Path = parse_quote!(::conjure);

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("infer")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                krate = lit.parse()?;
                Ok(())
            } else {
                Err(meta.error("expected `crate = \"...\"` in infer attribute"))
            }
        })?;
    }

    Ok(krate)
}

fn add_infer_bounds(mut generics: Generics, krate: &Path) -> Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(#krate::Infer));
    }
    generics
}

fn scan_fields(fields: &Fields) -> TokenStream2 {
    let types = fields.iter().map(|field| &field.ty);
    quote! {
        #(scan.field::<#types>()?;)*
    }
}

/// Expression building `constructor` from its fields, each with an even
/// share of `budget`.
fn build_fields(constructor: TokenStream2, fields: &Fields, krate: &Path) -> TokenStream2 {
    let count = fields.len();
    let values = fields.iter().map(|field| {
        let ty = &field.ty;
        quote!(cx.value::<#ty>(share)?)
    });

    let value = match fields {
        Fields::Named(_) => {
            let names = fields.iter().map(|field| &field.ident);
            quote!(#constructor { #(#names: #values,)* })
        }
        Fields::Unnamed(_) => quote!(#constructor(#(#values,)*)),
        Fields::Unit => constructor,
    };

    if count == 0 {
        quote!(::core::result::Result::Ok(#value))
    } else {
        quote! {
            let share = #krate::Synthesis::field_budget(budget, #count);
            ::core::result::Result::Ok(#value)
        }
    }
}

fn enum_bodies(
    name: &syn::Ident,
    data: &DataEnum,
    krate: &Path,
) -> syn::Result<(TokenStream2, TokenStream2)> {
    let variant_count = data.variants.len();
    if variant_count == 0 {
        return Err(syn::Error::new_spanned(
            name,
            "Infer cannot be derived for enums without variants",
        ));
    }

    let scans = data.variants.iter().map(|variant| scan_fields(&variant.fields));
    let scan = quote!(#(#scans)*);

    // The last variant takes the wildcard arm so the match is exhaustive.
    let arms = data.variants.iter().enumerate().map(|(index, variant)| {
        let ident = &variant.ident;
        let build = build_fields(quote!(Self::#ident), &variant.fields, krate);
        if index + 1 == variant_count {
            quote!(_ => { #build })
        } else {
            quote!(#index => { #build })
        }
    });

    let synthesize = quote! {
        match cx.source().below(#variant_count) {
            #(#arms)*
        }
    };

    Ok((scan, synthesize))
}
