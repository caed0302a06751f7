use std::borrow::Cow;
use xrv_derive::xrv_error;

#[xrv_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<std::borrow::Cow<'static, str>>,
    },

    #[error("Refused{}: {message}", format_context(.context))]
    Refused { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = std::io::Error::other("boom").into();
    assert_eq!(err.kind(), "Io");
}
