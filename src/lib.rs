//! Screen-state power profile shim for Tegra 3 handhelds.
//!
//! The host framework loads this module once, calls [`PowerModule::init`] to
//! pick a tunable row from the on-disk selection file, then reports every
//! screen transition through [`PowerModule::set_interactive`]. Each
//! transition replays one half of the active row into the cpufreq and core
//! cap control nodes. Writes are fire and forget, a missing node is logged
//! and skipped.

pub mod config;
pub mod hal;
pub mod profile;
pub mod sysfs;
pub mod tegra;

pub use hal::{ModuleDesc, PowerHint, PowerModule, MODULE_DESC};
pub use profile::{OnOff, PowerProfile, DEFAULT_PROFILE, PROFILES};
pub use tegra::{ControlNodes, TegraPower};
