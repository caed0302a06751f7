#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the extension workspace.
//! This crate removes the boilerplate shared by every capability module and every
//! crate-level error enum.
//!
//! ## Usage
//! Depend on the crate from any workspace member:
//! ```toml
//! [dependencies]
//! xrv-derive.workspace = true
//! ```
//!
//! Examples below are `ignore`d because the generated code refers to `xrv_domain`,
//! which this proc-macro crate does not link against.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// Adds `#[derive(Debug, thiserror::Error)]` and generates:
/// * a companion `...Ext` trait whose `.context()` attaches a message to a `Result` of this
///   error or of any wrapped source error,
/// * `From<Source>` for every variant with a `source` field, so `?` converts upstream errors,
/// * `kind(&self) -> &'static str` returning the variant name, used as a structured `tracing`
///   field when a failure is degraded instead of propagated,
/// * a private `format_context` helper for the `#[error(..)]` strings.
///
/// Every variant must use named fields and carry `context: Option<Cow<'static, str>>`.
/// Do not derive `Debug` or `Error` yourself.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[xrv_derive::xrv_error]
/// pub enum SettingsError {
///     #[error("Settings I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Invalid setting path{}: {message}", format_context(.context))]
///     InvalidPath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String, SettingsError> {
///     std::fs::read_to_string(path).context("Reading project settings")
/// }
/// ```
#[proc_macro_attribute]
pub fn xrv_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to declare a capability module.
///
/// The annotated struct becomes a registrable class:
/// 1. Derives `Debug` and `Default` (every field must be `Default`).
/// 2. Adds the associated constants `NAME`, `BASE` and `EXTENSIONS`.
/// 3. Adds `create()`, a factory returning a fresh `Arc<dyn CapabilityModule>`.
/// 4. Implements `xrv_domain::registry::CapabilityModule`.
///
/// # Arguments
///
/// * `name = "..."` - Canonical class name, also used as the singleton name. Required.
/// * `base = "..."` - Host base class. Defaults to `"Object"`.
/// * `extensions = ["...", ...]` - `OpenXR` extensions requested by the module.
///
/// # Example
/// ```rust,ignore
/// #[xrv_derive::capability_module(
///     name = "OpenXRFbPassthroughExtensionWrapper",
///     base = "OpenXRExtensionWrapperExtension",
///     extensions = ["XR_FB_passthrough", "XR_FB_triangle_mesh"]
/// )]
/// pub struct FbPassthrough {}
///
/// let module = FbPassthrough::create();
/// assert_eq!(module.name(), "OpenXRFbPassthroughExtensionWrapper");
/// ```
#[proc_macro_attribute]
pub fn capability_module(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::module::expand_module(args.into(), input).into()
}
