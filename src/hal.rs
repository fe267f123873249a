
use serde::Serialize;

/// Advisory hint kinds the host may raise. The set matches revision 0.2 of
/// the host's power-module API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerHint {
    /// Display vsync window opening or closing.
    Vsync,
    /// User input burst.
    Interaction,
}

/// Callback surface the host power daemon drives.
///
/// The host loads one module instance and invokes these synchronously, never
/// concurrently on the same instance; the `&mut self` receivers encode that
/// contract. Callbacks return nothing: failures stay inside the module and
/// surface only in logs.
pub trait PowerModule {
    /// One-time setup: profile selection and governor baselines.
    fn init(&mut self);

    /// Apply the active profile's on or off half after a screen transition.
    fn set_interactive(&mut self, on: bool);

    /// Accept an advisory hint with its optional payload.
    fn power_hint(&mut self, hint: PowerHint, data: Option<i32>);
}

/// Metadata the host loader reads off the module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModuleDesc {
    pub id: &'static str,
    pub name: &'static str,
    /// (major, minor) revision of the callback surface above.
    pub api_version: (u16, u16),
}

pub const MODULE_DESC: ModuleDesc = ModuleDesc {
    id: "power",
    name: "Tegra 3 power profile shim",
    api_version: (0, 2),
};
