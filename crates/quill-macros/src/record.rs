//! Implementation of #[derive(Record)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, LitStr, Visibility};

pub fn derive_record_impl(input: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(input as DeriveInput);

    match expand(&mut input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Options from `#[record(...)]` on one field.
#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
    flatten: bool,
}

fn expand(input: &mut DeriveInput) -> syn::Result<TokenStream2> {
    let name = input.ident.clone();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            // Tuple and unit structs have nothing readable by name
            Fields::Unnamed(_) | Fields::Unit => Vec::new(),
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record can only be derived for structs",
            ))
        }
    };

    let generic = input.generics.type_params().next().is_some();
    let mut pushes = Vec::new();
    let mut bounds = Vec::new();
    for field in fields {
        if !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }

        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "Record fields must be named"))?;
        let ty = &field.ty;

        if generic {
            bounds.push(if attrs.flatten {
                quote!(#ty: ::quill_core::Record)
            } else {
                quote!(#ty: ::quill_core::ToValue)
            });
        }

        if attrs.flatten {
            if attrs.rename.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "`flatten` and `rename` cannot be combined",
                ));
            }
            pushes.push(quote! {
                fields.extend(
                    <#ty as ::quill_core::Record>::fields()
                        .into_iter()
                        .map(|field| field.project(|owner: &Self| &owner.#ident)),
                );
            });
        } else {
            let key = attrs.rename.unwrap_or_else(|| ident.unraw().to_string());
            pushes.push(quote! {
                fields.push(::quill_core::FieldDescriptor::of(#key, |owner: &Self| &owner.#ident));
            });
        }
    }

    // Record requires 'static, so every type parameter must be too
    let type_params: Vec<_> = input.generics.type_params().map(|p| p.ident.clone()).collect();
    let where_clause = input.generics.make_where_clause();
    for param in type_params {
        where_clause.predicates.push(parse_quote!(#param: 'static));
    }
    for bound in bounds {
        where_clause.predicates.push(parse_quote!(#bound));
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let type_name = name.to_string();

    Ok(quote! {
        impl #impl_generics ::quill_core::Record for #name #ty_generics #where_clause {
            fn fields() -> ::std::vec::Vec<::quill_core::FieldDescriptor<Self>> {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::new();
                #(#pushes)*
                fields
            }

            fn type_name() -> &'static str {
                #type_name
            }
        }
    })
}

fn parse_field_attrs(attrs: &[syn::Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                let key = value.value();
                if key.is_empty()
                    || !key
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                {
                    return Err(meta.error("rename must use only letters, digits, `_` and `-`"));
                }
                parsed.rename = Some(key);
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
            } else if meta.path.is_ident("flatten") {
                parsed.flatten = true;
            } else {
                return Err(meta.error("unknown record attribute"));
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}
