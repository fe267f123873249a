use std::path::Path;

use log::info;
use serde::Serialize;

use crate::sysfs;

/// One tunable's value for each half of the screen state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OnOff {
    pub on: u64,
    pub off: u64,
}

impl OnOff {
    pub const fn new(on: u64, off: u64) -> Self {
        Self { on, off }
    }

    pub fn pick(self, screen_on: bool) -> u64 {
        if screen_on {
            self.on
        } else {
            self.off
        }
    }
}

/// One row of the compiled-in tuning table.
///
/// A row bundles everything `set_interactive` writes: the frequency ceiling,
/// the core-cap pair, and the interactive-governor boost knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PowerProfile {
    pub name: &'static str,

    /// Scaling max frequency in kHz; mirrored to the cpu_user_cap node.
    pub max_freq: OnOff,
    pub boost_factor: OnOff,
    pub core_cap_level: OnOff,
    /// Core-cap enable. Both halves are 1 in every row.
    pub core_cap_state: OnOff,
    pub max_boost: OnOff,
    pub go_maxspeed_load: OnOff,
}

pub const DEFAULT_PROFILE: usize = 0;

/// The five selectable rows, most to least permissive. Only the frequency
/// ceiling differs between rows.
pub static PROFILES: [PowerProfile; 5] = [
    PowerProfile {
        name: "stock",
        max_freq: OnOff::new(1500000, 475000),
        boost_factor: OnOff::new(0, 2),
        core_cap_level: OnOff::new(1300, 1200),
        core_cap_state: OnOff::new(1, 1),
        max_boost: OnOff::new(0, 250000),
        go_maxspeed_load: OnOff::new(85, 95),
    },
    PowerProfile {
        name: "balanced",
        max_freq: OnOff::new(880000, 204000),
        boost_factor: OnOff::new(0, 2),
        core_cap_level: OnOff::new(1300, 1200),
        core_cap_state: OnOff::new(1, 1),
        max_boost: OnOff::new(0, 250000),
        go_maxspeed_load: OnOff::new(85, 95),
    },
    PowerProfile {
        name: "conservative",
        max_freq: OnOff::new(640000, 204000),
        boost_factor: OnOff::new(0, 2),
        core_cap_level: OnOff::new(1300, 1200),
        core_cap_state: OnOff::new(1, 1),
        max_boost: OnOff::new(0, 250000),
        go_maxspeed_load: OnOff::new(85, 95),
    },
    PowerProfile {
        name: "powersave",
        max_freq: OnOff::new(475000, 204000),
        boost_factor: OnOff::new(0, 2),
        core_cap_level: OnOff::new(1300, 1200),
        core_cap_state: OnOff::new(1, 1),
        max_boost: OnOff::new(0, 250000),
        go_maxspeed_load: OnOff::new(85, 95),
    },
    PowerProfile {
        name: "minimum",
        max_freq: OnOff::new(340000, 204000),
        boost_factor: OnOff::new(0, 2),
        core_cap_level: OnOff::new(1300, 1200),
        core_cap_state: OnOff::new(1, 1),
        max_boost: OnOff::new(0, 250000),
        go_maxspeed_load: OnOff::new(85, 95),
    },
];

/// Read the profile index from the selection file.
///
/// Best effort: a missing or unreadable file, a non-numeric value, or an
/// index outside the table all silently leave the default row selected.
/// Only a valid selection is logged.
pub fn from_selection_file(path: &Path) -> &'static PowerProfile {
    if let Some(idx) = sysfs::read_i64(path) {
        if idx >= 0 && (idx as usize) < PROFILES.len() {
            let p = &PROFILES[idx as usize];
            info!("power profile {} ({}) selected", idx, p.name);
            return p;
        }
    }
    &PROFILES[DEFAULT_PROFILE]
}
