#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Fields, Ident, LitStr, Type, parse_macro_input, parse_quote};

/// Derive `Shaped` and `Record` for a struct with named fields.
///
/// Each field is looked up in a source map by its lower-cased name. Field
/// attributes:
///
/// - `#[record(rename = "key")]` looks the field up by `key` instead, verbatim.
/// - `#[record(skip)]` leaves the field out of the record's shape; the
///   decoder never touches it and its type does not need to be `Shaped`.
///
/// Every other field's type must implement `mapshape::Shaped`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_record(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

struct RecordField {
    ident: Ident,
    name: String,
    key: String,
    ty: Type,
}

fn expand_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = collect_fields(input)?;

    let type_name = &input.ident;
    let type_identifier = type_name.unraw().to_string();

    // every type parameter may end up as a field type
    let mut generics = input.generics.clone();
    let predicates = &mut generics.make_where_clause().predicates;
    for param in input.generics.type_params() {
        let ident = &param.ident;
        predicates.push(parse_quote!(#ident: ::mapshape::Shaped + 'static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_descs = fields.iter().map(|f| {
        let RecordField { name, key, ty, .. } = f;
        quote! {
            ::mapshape::Field::new(#name, #key, <#ty as ::mapshape::Shaped>::shape)
        }
    });

    let arms = fields.iter().enumerate().map(|(index, f)| {
        let ident = &f.ident;
        quote! {
            #index => ::core::option::Option::Some(::mapshape::Shaped::poke(&mut self.#ident)),
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::mapshape::Shaped for #type_name #ty_generics #where_clause {
            const SHAPE: &'static ::mapshape::Shape = &::mapshape::Shape {
                type_identifier: #type_identifier,
                ty: ::mapshape::Type::Struct(::mapshape::StructType {
                    fields: &[#(#field_descs),*],
                }),
            };

            #[inline]
            fn poke(&mut self) -> ::mapshape::Poke<'_> {
                ::mapshape::Poke::Struct(::mapshape::PokeStruct::new(self))
            }
        }

        #[automatically_derived]
        impl #impl_generics ::mapshape::Record for #type_name #ty_generics #where_clause {
            fn poke_field(&mut self, index: usize) -> ::core::option::Option<::mapshape::Poke<'_>> {
                match index {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

fn collect_fields(input: &DeriveInput) -> syn::Result<Vec<RecordField>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(e) => {
            return Err(Error::new(
                e.enum_token.span,
                "Record can only be derived for structs with named fields",
            ));
        }
        Data::Union(u) => {
            return Err(Error::new(
                u.union_token.span,
                "Record can only be derived for structs with named fields",
            ));
        }
    };

    let named = match &data.fields {
        Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(unnamed) => {
            return Err(Error::new_spanned(
                unnamed,
                "Record can only be derived for structs with named fields",
            ));
        }
    };

    let mut fields: Vec<RecordField> = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let attrs = FieldAttrs::parse(field)?;
        if attrs.skip {
            continue;
        }

        let name = ident.unraw().to_string();
        let key = attrs.rename.unwrap_or_else(|| name.to_lowercase());

        if let Some(other) = fields.iter().find(|f| f.key == key) {
            return Err(Error::new_spanned(
                &ident,
                format!(
                    "field `{name}` resolves to key \"{key}\", already used by field `{}`",
                    other.name
                ),
            ));
        }

        fields.push(RecordField {
            ident,
            name,
            key,
            ty: field.ty.clone(),
        });
    }

    Ok(fields)
}

#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
}

impl FieldAttrs {
    fn parse(field: &syn::Field) -> syn::Result<Self> {
        let mut attrs = FieldAttrs::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    attrs.rename = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unknown record attribute, expected `rename = \"...\"` or `skip`",
                    ))
                }
            })?;
        }
        Ok(attrs)
    }
}
