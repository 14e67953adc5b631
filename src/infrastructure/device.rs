use std::env;

/// Device metadata forwarded to the backend as request headers.
///
/// Gathered once at adapter construction. Missing values fall back to
/// empty strings (the headers are still sent); the identifier is the
/// exception and its header is omitted entirely when unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo {
    pub os: String,
    pub os_version: String,
    pub model: String,
    pub identifier: Option<String>,
}

impl DeviceInfo {
    pub fn detect() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            os_version: os_version(),
            model: env::var("TTP_DEVICE_MODEL").unwrap_or_else(|_| env::consts::ARCH.to_string()),
            identifier: env::var("TTP_DEVICE_IDENTIFIER").ok(),
        }
    }
}

#[cfg(target_os = "linux")]
fn os_version() -> String {
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|release| release.trim().to_string())
        .unwrap_or_default()
}

#[cfg(not(target_os = "linux"))]
fn os_version() -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_reports_platform() {
        let device = DeviceInfo::detect();
        assert_eq!(device.os, std::env::consts::OS);
        assert!(!device.model.is_empty());
    }
}
