//! Facade crate for the vendor XR capability registry.
//! Re-exports domain/kernel primitives and owns the fixed module catalog.
//! Keep this crate thin: it composes the vendor crates, it does not implement modules.
//!
//! ## Usage
//! - Call [`library_init`] once when the host loads the extension.
//! - Forward every host lifecycle callback to [`ExtensionContext::on_phase`] and
//!   [`ExtensionContext::on_terminate`].
//!
//! ```rust
//! use xrv::kernel::prelude::*;
//!
//! let mut host = LocalHost::new(ProjectSettings::new());
//! let mut context = xrv::library_init().expect("catalog is consistent");
//! for phase in Phase::ALL {
//!     context.on_phase(phase, &mut host);
//! }
//! context.shutdown(&mut host);
//! ```

pub mod catalog;

use tracing::info;
pub use xrv_domain as domain;
use xrv_domain::phase::Phase;
pub use xrv_kernel as kernel;
use xrv_kernel::context::ExtensionContext;
use xrv_kernel::error::KernelError;
pub use xrv_settings as settings;

/// The earliest phase at which the extension is usable. Publication happens in Scene.
pub const MINIMUM_PHASE: Phase = Phase::Scene;

/// Vendor module sets compiled in (by Cargo feature).
pub mod features {
    #[cfg(feature = "editor")]
    pub use xrv_export as export;
    #[cfg(feature = "htc")]
    pub use xrv_htc as htc;
    #[cfg(feature = "meta")]
    pub use xrv_meta as meta;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "meta")]
        "meta",
        #[cfg(feature = "htc")]
        "htc",
        #[cfg(feature = "editor")]
        "editor",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Entry point called when the host loads the extension.
///
/// # Errors
/// Returns [`KernelError::Catalog`] if the compiled-in catalog is inconsistent.
pub fn library_init() -> Result<ExtensionContext, KernelError> {
    catalog::CATALOG.validate()?;
    info!(
        modules = catalog::CATALOG.modules.len(),
        tooling = catalog::CATALOG.tooling.len(),
        features = ?features::ENABLED,
        minimum_phase = %MINIMUM_PHASE,
        "Extension library initialized"
    );
    Ok(ExtensionContext::new(&catalog::CATALOG))
}
