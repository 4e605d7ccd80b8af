use crate::error::{Error, Result};
use std::env;
use std::fs;

const HOSTNAME_FILES: &[&str] = &["/proc/sys/kernel/hostname", "/etc/hostname"];

/// Name of the local machine, the default candidate for matching.
///
/// Looks at `COMPUTERNAME` first, then the kernel/system hostname files, then
/// asks the OS (`gethostname` on unix), then `HOSTNAME`. The first non-blank
/// value wins.
pub fn machine_name() -> Result<String> {
    if let Some(name) = env::var("COMPUTERNAME").ok().and_then(non_blank) {
        return Ok(name);
    }

    for path in HOSTNAME_FILES {
        if let Some(name) = fs::read_to_string(path).ok().and_then(non_blank) {
            return Ok(name);
        }
    }

    if let Some(name) = system_hostname() {
        return Ok(name);
    }

    env::var("HOSTNAME")
        .ok()
        .and_then(non_blank)
        .ok_or(Error::Hostname)
}

#[cfg(unix)]
fn system_hostname() -> Option<String> {
    let mut buf = [0u8; 256];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc != 0 {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    non_blank(String::from_utf8_lossy(&buf[..end]).into_owned())
}

#[cfg(not(unix))]
fn system_hostname() -> Option<String> {
    None
}

fn non_blank(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_trims() {
        assert_eq!(non_blank("web01\n".to_string()), Some("web01".to_string()));
        assert_eq!(non_blank("  Host005 ".to_string()), Some("Host005".to_string()));
    }

    #[test]
    fn test_non_blank_rejects_whitespace() {
        assert_eq!(non_blank(String::new()), None);
        assert_eq!(non_blank(" \n\t".to_string()), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_hostname_is_non_blank() {
        let name = system_hostname().unwrap();
        assert!(!name.is_empty());
        assert_eq!(name.trim(), name);
        assert!(!name.contains('\0'));
    }

    #[cfg(unix)]
    #[test]
    fn test_machine_name_is_trimmed() {
        let name = machine_name().unwrap();
        assert!(!name.is_empty());
        assert_eq!(name.trim(), name);
    }
}
