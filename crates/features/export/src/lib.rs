//! Editor-only tooling: export plugins that feed each vendor's loader into the build, and the
//! editor plugins that own them.
//!
//! These classes are registered in the Editor phase only, and only when the host runs the
//! authoring environment.

/// Shared export pipeline hooks every vendor export plugin builds on.
#[xrv_derive::capability_module(name = "OpenXREditorExportPlugin", base = "EditorExportPlugin")]
pub struct OpenXrExport;

#[xrv_derive::capability_module(name = "KhronosEditorExportPlugin", base = "OpenXREditorExportPlugin")]
pub struct KhronosExport;

#[xrv_derive::capability_module(name = "KhronosEditorPlugin", base = "EditorPlugin")]
pub struct KhronosEditor;

/// Lynx ships no export plugin of its own.
#[xrv_derive::capability_module(name = "LynxEditorPlugin", base = "EditorPlugin")]
pub struct LynxEditor;

#[xrv_derive::capability_module(name = "MetaEditorExportPlugin", base = "OpenXREditorExportPlugin")]
pub struct MetaExport;

#[xrv_derive::capability_module(name = "MetaEditorPlugin", base = "EditorPlugin")]
pub struct MetaEditor;

#[xrv_derive::capability_module(name = "PicoEditorExportPlugin", base = "OpenXREditorExportPlugin")]
pub struct PicoExport;

#[xrv_derive::capability_module(name = "PicoEditorPlugin", base = "EditorPlugin")]
pub struct PicoEditor;

#[xrv_derive::capability_module(name = "MagicleapEditorExportPlugin", base = "OpenXREditorExportPlugin")]
pub struct MagicleapExport;

#[xrv_derive::capability_module(name = "MagicleapEditorPlugin", base = "EditorPlugin")]
pub struct MagicleapEditor;
