//! Capability registration and phase-gated activation.
//!
//! The kernel owns the moving parts between the host and the capability modules:
//! a [`settings::Settings`] facade over the project store, the [`gate::ActivationGate`] that turns
//! flags into publish decisions, the data-driven [`catalog::Catalog`] and the
//! [`context::ExtensionContext`] phase dispatcher.
//!
//! ## Driving a context
//! ```rust
//! use xrv_kernel::prelude::*;
//!
//! static CATALOG: Catalog = Catalog::EMPTY;
//!
//! let mut host = LocalHost::new(ProjectSettings::new());
//! let mut context = ExtensionContext::new(&CATALOG);
//! for phase in Phase::ALL {
//!     let report = context.on_phase(phase, &mut host);
//!     assert_eq!(report.status, Status::Applied);
//! }
//! assert_eq!(context.shutdown(&mut host).len(), Phase::ALL.len());
//! ```
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod gate;
pub mod host;
pub mod prelude;
pub mod settings;

pub use xrv_domain as domain;
