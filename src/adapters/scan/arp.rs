//! arp-scan based device scanner
//!
//! Invokes the local `arp-scan` utility and counts the unique hardware
//! addresses in its output. Every invocation runs under an explicit
//! deadline; a hung tool surfaces as `ScanError::Timeout` instead of
//! blocking the caller forever.

use crate::adapters::scan::models::{DiscoveredDevice, ScanReport};
use crate::adapters::scan::traits::DeviceScanner;
use crate::config::ScanConfig;
use crate::domain::errors::ScanError;
use crate::domain::Result;
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Scanner that shells out to arp-scan
pub struct ArpScanScanner {
    command: String,
    use_sudo: bool,
    timeout: Duration,
}

impl ArpScanScanner {
    /// Creates a scanner with an explicit command, sudo policy, and deadline
    pub fn new(command: impl Into<String>, use_sudo: bool, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            use_sudo,
            timeout,
        }
    }

    /// Creates a scanner from the `[scan]` configuration section
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(
            config.command.clone(),
            config.use_sudo,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn build_command(&self, interface: &str) -> Command {
        // arp-scan needs raw socket access; sudo is the usual route there.
        let mut cmd = if self.use_sudo {
            let mut cmd = Command::new("sudo");
            cmd.arg(&self.command);
            cmd
        } else {
            Command::new(&self.command)
        };
        cmd.args(["-l", "-I", interface]);
        cmd.kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl DeviceScanner for ArpScanScanner {
    async fn discover(&self, interface: &str) -> Result<ScanReport> {
        tracing::debug!(
            interface,
            command = %self.command,
            timeout_secs = self.timeout.as_secs(),
            "Running device scan"
        );

        let mut cmd = self.build_command(interface);
        let output = timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| ScanError::Timeout(self.timeout.as_secs()))?
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ScanError::ToolNotFound(self.command.clone()),
                _ => ScanError::LaunchFailed(e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ScanError::ToolFailed {
                status: output.status.to_string(),
                stderr,
            }
            .into());
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| ScanError::OutputDecode(e.to_string()))?;

        let report = parse_scan_output(interface, &stdout);
        tracing::info!(
            interface,
            devices = report.device_count(),
            "Device scan completed"
        );
        Ok(report)
    }
}

/// Parses arp-scan text output into a report
///
/// Every line carrying a MAC address counts as a device; the same MAC seen
/// twice counts once. arp-scan lines look like `IP<TAB>MAC<TAB>Vendor`, so
/// the IP and vendor text come along when present.
pub fn parse_scan_output(interface: &str, output: &str) -> ScanReport {
    let mac_re = Regex::new(r"(?i)\b([0-9a-f]{2}(?::[0-9a-f]{2}){5})\b").unwrap();
    let ip_re = Regex::new(r"^\s*(\d{1,3}(?:\.\d{1,3}){3})\b").unwrap();

    let mut seen = HashSet::new();
    let mut devices = Vec::new();

    for line in output.lines() {
        let Some(mac_match) = mac_re.find(line) else {
            continue;
        };
        let mac = mac_match.as_str().to_lowercase();
        if !seen.insert(mac.clone()) {
            continue;
        }

        let ip = ip_re
            .captures(line)
            .map(|cap| cap[1].to_string());
        let name = line
            .splitn(3, '\t')
            .nth(2)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        devices.push(DiscoveredDevice { mac, ip, name });
    }

    ScanReport::new(interface, devices)
}
