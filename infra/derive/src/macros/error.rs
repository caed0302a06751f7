use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, Type, Variant};

/// A variant after validation: every variant carries a context slot, some wrap a source.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<&'a Type>,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "xrv_error can only be applied to enums")
            .to_compile_error();
    };

    let variants = match data.variants.iter().map(parse_variant).collect::<syn::Result<Vec<_>>>() {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);
    let idents: Vec<&Ident> = variants.iter().map(|v| v.ident).collect();
    let labels: Vec<String> = idents.iter().map(ToString::to_string).collect();

    let wrapped = variants.iter().filter_map(|v| v.source.map(|ty| (v.ident, ty)));
    let source_impls = wrapped.map(|(ident, ty)| {
        quote! {
            #[automatically_derived]
            impl From<#ty> for #name {
                #[inline]
                fn from(source: #ty) -> Self {
                    Self::#ident { source, context: None }
                }
            }

            impl<T> #ext<T> for std::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<std::borrow::Cow<'static, str>>,
                ) -> std::result::Result<T, #name> {
                    self.map_err(|source| #name::#ident { source, context: Some(context.into()) })
                }
            }
        }
    });

    quote! {
        #[derive(Debug, ::thiserror::Error)]
        #input

        /// Attaches a human-readable context to a failure.
        pub trait #ext<T> {
            fn context(
                self,
                context: impl Into<std::borrow::Cow<'static, str>>,
            ) -> std::result::Result<T, #name>;
        }

        impl<T> #ext<T> for std::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #( #name::#idents { context: slot, .. } )|* => *slot = Some(context.into()),
                    }
                    err
                })
            }
        }

        #[automatically_derived]
        impl #name {
            /// Variant name, for structured log fields.
            #[must_use]
            pub const fn kind(&self) -> &'static str {
                match self {
                    #( Self::#idents { .. } => #labels, )*
                }
            }
        }

        #( #source_impls )*

        #[allow(dead_code)]
        fn format_context(
            context: &Option<std::borrow::Cow<'static, str>>,
        ) -> std::borrow::Cow<'static, str> {
            context
                .as_ref()
                .map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn parse_variant(variant: &Variant) -> syn::Result<ErrorVariant<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "xrv_error variants need named fields, including `context`",
        ));
    };

    let field = |wanted: &str| {
        fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|ident| ident == wanted))
    };

    let Some(context) = field("context") else {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "xrv_error variants need a `context: Option<Cow<'static, str>>` field",
        ));
    };
    if !is_context_type(&context.ty) {
        return Err(syn::Error::new_spanned(
            &context.ty,
            "context field must be Option<Cow<'static, str>>",
        ));
    }

    Ok(ErrorVariant { ident: &variant.ident, source: field("source").map(|f| &f.ty) })
}

/// Matches `Option<Cow<'static, str>>` with or without path prefixes.
fn is_context_type(ty: &Type) -> bool {
    let rendered: String =
        ty.to_token_stream().to_string().chars().filter(|c| !c.is_whitespace()).collect();
    rendered.ends_with("Option<Cow<'static,str>>")
        || rendered.ends_with("Option<std::borrow::Cow<'static,str>>")
}
