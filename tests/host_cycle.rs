//! Drives the module the way the host framework does: one init, then a
//! stream of screen transitions and hints, against a scratch sysfs tree.

use std::fs;
use std::path::Path;

use tegra_power_shim::{ControlNodes, PowerHint, PowerModule, TegraPower, MODULE_DESC};
use tempfile::{tempdir, TempDir};

fn fake_sysfs() -> (TempDir, ControlNodes) {
    let dir = tempdir().unwrap();
    let nodes = ControlNodes::rooted(dir.path());
    for node in [
        &nodes.scaling_max_freq,
        &nodes.cpu_user_cap,
        &nodes.min_sample_time,
        &nodes.go_maxspeed_load,
        &nodes.boost_factor,
        &nodes.max_boost,
        &nodes.core_cap_level,
        &nodes.core_cap_state,
    ] {
        fs::write(node, "").unwrap();
    }
    (dir, nodes)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn full_host_cycle() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(MODULE_DESC.id, "power");
    assert_eq!(MODULE_DESC.api_version, (0, 2));

    let (dir, nodes) = fake_sysfs();
    let select = dir.path().join("power_profile");
    fs::write(&select, "1\n").unwrap();

    let mut module: Box<dyn PowerModule> = Box::new(TegraPower::with_paths(nodes, select));
    let nodes = ControlNodes::rooted(dir.path());

    module.init();
    assert_eq!(read(&nodes.min_sample_time), "30000");
    assert_eq!(read(&nodes.go_maxspeed_load), "80");
    assert_eq!(read(&nodes.boost_factor), "0");

    module.set_interactive(true);
    assert_eq!(read(&nodes.scaling_max_freq), "880000");
    assert_eq!(read(&nodes.cpu_user_cap), "880000");
    assert_eq!(read(&nodes.boost_factor), "0");
    assert_eq!(read(&nodes.core_cap_level), "1300");
    assert_eq!(read(&nodes.core_cap_state), "1");
    assert_eq!(read(&nodes.max_boost), "0");
    assert_eq!(read(&nodes.go_maxspeed_load), "85");

    module.power_hint(PowerHint::Vsync, None);
    module.power_hint(PowerHint::Interaction, Some(1));
    assert_eq!(read(&nodes.scaling_max_freq), "880000");
    assert_eq!(read(&nodes.go_maxspeed_load), "85");

    module.set_interactive(false);
    assert_eq!(read(&nodes.scaling_max_freq), "204000");
    assert_eq!(read(&nodes.cpu_user_cap), "204000");
    assert_eq!(read(&nodes.boost_factor), "2");
    assert_eq!(read(&nodes.core_cap_level), "1200");
    assert_eq!(read(&nodes.core_cap_state), "1");
    assert_eq!(read(&nodes.max_boost), "250000");
    assert_eq!(read(&nodes.go_maxspeed_load), "95");
}

#[test]
fn boots_with_stock_profile_when_selection_is_missing() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (dir, nodes) = fake_sysfs();
    let select = dir.path().join("power_profile");

    let mut module: Box<dyn PowerModule> = Box::new(TegraPower::with_paths(nodes, select));
    let nodes = ControlNodes::rooted(dir.path());

    module.init();
    module.set_interactive(true);
    assert_eq!(read(&nodes.scaling_max_freq), "1500000");
    assert_eq!(read(&nodes.cpu_user_cap), "1500000");
}
