
// Profile selection file, read once at init. External scripts write a bare
// decimal index here; the file is allowed to be absent.
pub const PROFILE_SELECT: &str = "/data/misc/adrian_pp";

// Control nodes. cpu0 and cpu1 share one cpufreq policy, so the policy-wide
// frequency cap lives under cpu0.
pub const SCALING_MAX_FREQ: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_max_freq";
pub const CPU_USER_CAP: &str = "/sys/module/cpu_tegra/parameters/cpu_user_cap";
pub const MIN_SAMPLE_TIME: &str = "/sys/devices/system/cpu/cpufreq/interactive/min_sample_time";
pub const GO_MAXSPEED_LOAD: &str = "/sys/devices/system/cpu/cpufreq/interactive/go_maxspeed_load";
pub const BOOST_FACTOR: &str = "/sys/devices/system/cpu/cpufreq/interactive/boost_factor";
pub const MAX_BOOST: &str = "/sys/devices/system/cpu/cpufreq/interactive/max_boost";
pub const CORE_CAP_LEVEL: &str = "/sys/kernel/tegra_cap/core_cap_level";
pub const CORE_CAP_STATE: &str = "/sys/kernel/tegra_cap/core_cap_state";

// Interactive-governor baselines written once at init, independent of the
// selected profile.
pub const INIT_MIN_SAMPLE_TIME: u64 = 30000;
pub const INIT_GO_MAXSPEED_LOAD: u64 = 80;
pub const INIT_BOOST_FACTOR: u64 = 0;
