// stride/stride-proc-macros
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, FieldsNamed, Ident, LitStr};

/// Implements `From<&crate::app::deps::AppDependencies>` for an app service.
///
/// Fields marked with `#[inject]` are cloned from the field with the same name on
/// `AppDependencies`, `#[inject(from = "other_name")]` clones a differently named field. All
/// other fields are initialized with `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_deps(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);
    let fields = match named_fields(&input) {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut initializers = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        match injected_source(field) {
            Ok(init) => initializers.push(init),
            Err(err) => return err.to_compile_error().into(),
        }
    }

    let name = &input.ident;
    let expanded = quote! {
        impl From<&crate::app::deps::AppDependencies> for #name {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#initializers,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Generates a public `<Name>Dependencies` struct mirroring the fields of a domain service
/// implementation together with a `From` conversion into the service.
#[proc_macro_derive(DependenciesStruct)]
pub fn dependencies_struct(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);
    let fields = match named_fields(&input) {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let dependencies_struct_name = format_ident!("{}Dependencies", name);
    let idents = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .collect::<Vec<_>>();
    let types = fields.named.iter().map(|field| &field.ty);

    let expanded = quote! {
        pub struct #dependencies_struct_name {
            #(pub #idents: #types,)*
        }

        impl From<#dependencies_struct_name> for #name {
            fn from(deps: #dependencies_struct_name) -> Self {
                Self {
                    #(#idents: deps.#idents,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

fn named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "This macro only supports structs.",
        ));
    };

    let Fields::Named(fields) = &struct_data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "This macro only supports structs with named fields.",
        ));
    };

    Ok(fields)
}

fn injected_source(field: &Field) -> syn::Result<TokenStream2> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "Expected a named field."));
    };

    let mut source: Option<Ident> = None;

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("inject")) {
        source = Some(ident.clone());

        // Bare `#[inject]` carries no arguments.
        if matches!(attr.meta, syn::Meta::Path(_)) {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("from") {
                let value: LitStr = meta.value()?.parse()?;
                source = Some(Ident::new(&value.value(), value.span()));
                return Ok(());
            }
            Err(meta.error("Unsupported inject attribute, expected `from = \"…\"`."))
        })?;
    }

    Ok(match source {
        Some(source) => quote! { #ident: deps.#source.clone() },
        None => quote! { #ident: Default::default() },
    })
}
