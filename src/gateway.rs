//! Hand-off to the external gateway runtime.
//!
//! BLE scanning, decoding and MQTT publishing happen in a separate program
//! that only receives the path of the resolved configuration file.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Something that runs the gateway from a configuration file.
pub trait Gateway {
    fn run(&self, config_path: &Path) -> Result<()>;
}

/// Runs the gateway as a child process and waits for it to exit.
#[derive(Debug, Clone)]
pub struct CommandGateway {
    program: OsString,
}

impl CommandGateway {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Gateway for CommandGateway {
    fn run(&self, config_path: &Path) -> Result<()> {
        tracing::info!(
            program = %self.program.to_string_lossy(),
            config = %config_path.display(),
            "starting gateway runtime"
        );

        let status = Command::new(&self.program)
            .arg(config_path)
            .status()
            .with_context(|| {
                format!(
                    "failed to start gateway runtime {}",
                    self.program.to_string_lossy()
                )
            })?;

        if !status.success() {
            bail!(
                "gateway runtime {} exited with {status}",
                self.program.to_string_lossy()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_reports_spawn_failure() {
        let gateway = CommandGateway::new("theengsgw-runtime-that-does-not-exist");
        let err = gateway
            .run(Path::new("/tmp/theengsgw.conf"))
            .expect_err("spawn must fail");

        assert!(err.to_string().starts_with("failed to start gateway runtime"));
    }

    #[cfg(unix)]
    #[test]
    fn successful_program_returns_ok() {
        let gateway = CommandGateway::new("true");
        gateway
            .run(Path::new("/tmp/theengsgw.conf"))
            .expect("`true` exits successfully");
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_reports_exit_status() {
        let gateway = CommandGateway::new("false");
        let err = gateway
            .run(Path::new("/tmp/theengsgw.conf"))
            .expect_err("`false` exits with failure");

        assert!(err.to_string().contains("exited with"));
    }

    #[cfg(unix)]
    #[test]
    fn program_receives_config_path_argument() {
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("theengsgw.conf");
        std::fs::write(&config_path, "{}").expect("write config");

        let script = temp.path().join("runtime.sh");
        std::fs::write(&script, "#!/bin/sh\n[ \"$#\" -eq 1 ] && [ -f \"$1\" ]\n")
            .expect("write script");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("make script executable");

        CommandGateway::new(&script)
            .run(&config_path)
            .expect("runtime sees the config path");
        CommandGateway::new(&script)
            .run(&temp.path().join("missing.conf"))
            .expect_err("runtime rejects a missing path");
    }
}
