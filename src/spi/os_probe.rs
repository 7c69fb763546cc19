/// Host OS identity for prompt construction.

/// What the translator knows about the host operating system.
#[derive(Debug, Clone)]
pub struct OsDetails {
    /// Friendly OS name ("Linux", "macOS", "Windows", ...).
    pub name: String,
    /// Machine architecture ("x86_64", "aarch64", ...).
    pub arch: String,
}

/// Collaborator seam: supplies the OS descriptor, queried once per request.
pub trait OsProbe: Send + Sync {
    fn details(&self) -> OsDetails;
}

/// Probe backed by compile-time host constants.
pub struct HostOsProbe;

impl OsProbe for HostOsProbe {
    fn details(&self) -> OsDetails {
        OsDetails {
            name: friendly_os_name(std::env::consts::OS).to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }
}

fn friendly_os_name(os: &str) -> &str {
    match os {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        other => other,
    }
}
