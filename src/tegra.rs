
use std::path::{Path, PathBuf};

use crate::{
    config,
    hal::{PowerHint, PowerModule},
    profile::{self, PowerProfile, DEFAULT_PROFILE, PROFILES},
    sysfs,
};

/// Filesystem location of every control node the shim writes.
pub struct ControlNodes {
    pub scaling_max_freq: PathBuf,
    pub cpu_user_cap: PathBuf,
    pub min_sample_time: PathBuf,
    pub go_maxspeed_load: PathBuf,
    pub boost_factor: PathBuf,
    pub max_boost: PathBuf,
    pub core_cap_level: PathBuf,
    pub core_cap_state: PathBuf,
}

impl Default for ControlNodes {
    fn default() -> Self {
        Self {
            scaling_max_freq: config::SCALING_MAX_FREQ.into(),
            cpu_user_cap: config::CPU_USER_CAP.into(),
            min_sample_time: config::MIN_SAMPLE_TIME.into(),
            go_maxspeed_load: config::GO_MAXSPEED_LOAD.into(),
            boost_factor: config::BOOST_FACTOR.into(),
            max_boost: config::MAX_BOOST.into(),
            core_cap_level: config::CORE_CAP_LEVEL.into(),
            core_cap_state: config::CORE_CAP_STATE.into(),
        }
    }
}

impl ControlNodes {
    /// Every node re-rooted under `dir`, flattened to its file name. A test
    /// harness points this at a scratch directory standing in for sysfs.
    pub fn rooted(dir: &Path) -> Self {
        Self {
            scaling_max_freq: dir.join("scaling_max_freq"),
            cpu_user_cap: dir.join("cpu_user_cap"),
            min_sample_time: dir.join("min_sample_time"),
            go_maxspeed_load: dir.join("go_maxspeed_load"),
            boost_factor: dir.join("boost_factor"),
            max_boost: dir.join("max_boost"),
            core_cap_level: dir.join("core_cap_level"),
            core_cap_state: dir.join("core_cap_state"),
        }
    }
}

/// The device power module: one table row selected at init, its halves
/// written out on every screen transition.
pub struct TegraPower {
    nodes: ControlNodes,
    select_path: PathBuf,
    active: &'static PowerProfile,
}

impl TegraPower {
    /// Module wired to the real control nodes and selection file.
    pub fn new() -> Self {
        Self::with_paths(ControlNodes::default(), config::PROFILE_SELECT.into())
    }

    /// Module wired to explicit paths.
    pub fn with_paths(nodes: ControlNodes, select_path: PathBuf) -> Self {
        Self {
            nodes,
            select_path,
            active: &PROFILES[DEFAULT_PROFILE],
        }
    }

    /// The currently active table row.
    pub fn active_profile(&self) -> &'static PowerProfile {
        self.active
    }
}

impl Default for TegraPower {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerModule for TegraPower {
    fn init(&mut self) {
        self.active = profile::from_selection_file(&self.select_path);

        sysfs::write_value(&self.nodes.min_sample_time, config::INIT_MIN_SAMPLE_TIME);
        sysfs::write_value(&self.nodes.go_maxspeed_load, config::INIT_GO_MAXSPEED_LOAD);
        sysfs::write_value(&self.nodes.boost_factor, config::INIT_BOOST_FACTOR);
    }

    fn set_interactive(&mut self, on: bool) {
        let p = self.active;

        // cpu_user_cap is the same frequency ceiling exposed a second time;
        // both nodes have to receive the same value.
        sysfs::write_value(&self.nodes.scaling_max_freq, p.max_freq.pick(on));
        sysfs::write_value(&self.nodes.cpu_user_cap, p.max_freq.pick(on));

        sysfs::write_value(&self.nodes.boost_factor, p.boost_factor.pick(on));
        sysfs::write_value(&self.nodes.core_cap_level, p.core_cap_level.pick(on));
        sysfs::write_value(&self.nodes.core_cap_state, p.core_cap_state.pick(on));
        sysfs::write_value(&self.nodes.max_boost, p.max_boost.pick(on));
        sysfs::write_value(&self.nodes.go_maxspeed_load, p.go_maxspeed_load.pick(on));
    }

    fn power_hint(&mut self, hint: PowerHint, _data: Option<i32>) {
        match hint {
            PowerHint::Vsync => {}
            PowerHint::Interaction => {}
        }
    }
}
