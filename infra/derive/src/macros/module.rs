use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{Expr, ItemStruct, Lit, LitStr, Meta, MetaNameValue};

struct ModuleArgs {
    name: LitStr,
    base: Option<LitStr>,
    extensions: Vec<LitStr>,
}

/// Expands the `#[capability_module]` attribute macro.
pub fn expand_module(args: TokenStream, input: ItemStruct) -> TokenStream {
    let ModuleArgs { name, base, extensions } = match parse_module_args(args, &input) {
        Ok(args) => args,
        Err(err) => return err,
    };

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "capability modules cannot be generic")
            .to_compile_error();
    }

    let ident = &input.ident;
    let base = base.unwrap_or_else(|| LitStr::new("Object", proc_macro2::Span::call_site()));
    let derive_attr = derive_attr(&input);

    quote! {
        #derive_attr
        #input

        impl #ident {
            /// Canonical class and singleton name.
            pub const NAME: &'static str = #name;
            /// Host base class.
            pub const BASE: &'static str = #base;
            /// `OpenXR` extensions requested by this module.
            pub const EXTENSIONS: &'static [&'static str] = &[#(#extensions),*];

            /// Constructs a fresh instance behind the registry trait object.
            #[must_use]
            pub fn create() -> ::std::sync::Arc<dyn ::xrv_domain::registry::CapabilityModule> {
                ::std::sync::Arc::new(<Self as ::std::default::Default>::default())
            }
        }

        #[automatically_derived]
        impl ::xrv_domain::registry::CapabilityModule for #ident {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn base_class(&self) -> &'static str {
                Self::BASE
            }

            fn extensions(&self) -> &'static [&'static str] {
                Self::EXTENSIONS
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    }
}

fn parse_module_args(args: TokenStream, input: &ItemStruct) -> Result<ModuleArgs, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut name = None;
    let mut base = None;
    let mut extensions = None;

    for meta in metas {
        let name_value = match meta {
            Meta::NameValue(name_value) => name_value,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "Expected name-value arguments like `name = \"...\"`",
                )
                .to_compile_error());
            },
        };

        if name_value.path.is_ident("name") {
            let value = parse_string_literal(&name_value, "name")?;
            if value.value().trim().is_empty() {
                return Err(syn::Error::new_spanned(value, "name cannot be empty").to_compile_error());
            }
            name = Some(set_once(name, &name_value, value)?);
            continue;
        }
        if name_value.path.is_ident("base") {
            let value = parse_string_literal(&name_value, "base")?;
            base = Some(set_once(base, &name_value, value)?);
            continue;
        }
        if name_value.path.is_ident("extensions") {
            let value = parse_string_array(&name_value)?;
            extensions = Some(set_once(extensions, &name_value, value)?);
            continue;
        }
        return Err(syn::Error::new_spanned(
            name_value.path,
            "Unsupported argument; expected name, base or extensions",
        )
        .to_compile_error());
    }

    let Some(name) = name else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "capability_module requires `name = \"...\"`",
        )
        .to_compile_error());
    };

    Ok(ModuleArgs { name, base, extensions: extensions.unwrap_or_default() })
}

fn parse_string_literal(name_value: &MetaNameValue, label: &str) -> Result<LitStr, TokenStream> {
    if let Expr::Lit(expr_lit) = &name_value.value
        && let Lit::Str(lit) = &expr_lit.lit
    {
        return Ok(lit.clone());
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a string literal"))
        .to_compile_error())
}

fn parse_string_array(name_value: &MetaNameValue) -> Result<Vec<LitStr>, TokenStream> {
    let Expr::Array(array) = &name_value.value else {
        return Err(syn::Error::new_spanned(
            &name_value.value,
            "extensions must be an array of string literals",
        )
        .to_compile_error());
    };

    let mut seen = FxHashSet::default();
    let mut out = Vec::with_capacity(array.elems.len());
    for elem in &array.elems {
        let Expr::Lit(expr_lit) = elem else {
            return Err(syn::Error::new_spanned(elem, "extension must be a string literal")
                .to_compile_error());
        };
        let Lit::Str(lit) = &expr_lit.lit else {
            return Err(syn::Error::new_spanned(elem, "extension must be a string literal")
                .to_compile_error());
        };
        if !seen.insert(lit.value()) {
            return Err(syn::Error::new_spanned(lit, "Duplicate extension").to_compile_error());
        }
        out.push(lit.clone());
    }
    Ok(out)
}

fn set_once<T>(current: Option<T>, token: &MetaNameValue, value: T) -> Result<T, TokenStream> {
    if current.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument").to_compile_error());
    }
    Ok(value)
}

fn derive_attr(input: &ItemStruct) -> TokenStream {
    let mut derived = FxHashSet::default();
    for attr in &input.attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(seg) = meta.path.segments.last() {
                derived.insert(seg.ident.to_string());
            }
            Ok(())
        });
    }

    let mut tokens = Vec::new();
    if !derived.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !derived.contains("Default") {
        tokens.push(quote! { Default });
    }

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}
