
use std::{
    fs::OpenOptions,
    io::Write,
    path::Path,
};

use log::{error, info};

/// Write a decimal integer to a control node.
///
/// Open and write failures are logged and swallowed; callers always proceed
/// to their next write. The node is opened without `create` so a missing
/// node surfaces as an open error instead of leaving a stray regular file
/// behind.
pub fn write_value(path: &Path, value: u64) {
    let mut f = match OpenOptions::new().write(true).truncate(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            error!("error opening {}: {}", path.display(), e);
            return;
        }
    };

    let buf = value.to_string();
    match f.write_all(buf.as_bytes()) {
        Ok(()) => info!("wrote {} to {}", buf, path.display()),
        Err(e) => error!("error writing to {}: {}", path.display(), e),
    }
}

pub fn read_to_string(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
}

pub fn read_i64(path: &Path) -> Option<i64> {
    let s = read_to_string(path)?;
    s.trim().parse::<i64>().ok()
}
