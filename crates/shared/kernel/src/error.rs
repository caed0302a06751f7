use std::borrow::Cow;

/// Registration failures reported by host collaborators and catalog validation.
#[xrv_derive::xrv_error]
pub enum KernelError {
    #[error("Singleton already registered{}: {name}", format_context(.context))]
    DuplicateSingleton { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown class{}: {name}", format_context(.context))]
    UnknownClass { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid catalog{}: {message}", format_context(.context))]
    Catalog { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
