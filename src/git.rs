use crate::error::{ErrorType, MapStampErr, StampError, WithItem};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{self, Command};

#[derive(Debug)]
pub enum Captured {
    Output(String),
    Failed {
        stdout: Vec<u8>,
        stderr: Vec<u8>,
        code: i32,
    },
}

/// Runs a command to completion with both streams captured. A non-zero exit
/// is not an error here; the caller decides what to do with the streams.
pub fn capture(program: &str, args: &[&str]) -> Result<Captured, StampError> {
    let path = PathBuf::from(program);
    let output = Command::new(program)
        .args(args)
        .output()
        .map_stamp_err(WithItem::Command, ErrorType::Io, &path, None)?;

    if !output.status.success() {
        return Ok(Captured::Failed {
            stdout: output.stdout,
            stderr: output.stderr,
            code: output.status.code().unwrap_or(1),
        });
    }

    let text = String::from_utf8(output.stdout)
        .map_stamp_err(WithItem::Command, ErrorType::Utf8, &path, None)?;
    Ok(Captured::Output(text.trim().to_string()))
}

/// Short hash of HEAD, no patch body. On a non-zero git exit the captured
/// streams are relayed verbatim and the process exits with git's own code.
pub fn short_hash() -> Result<String, StampError> {
    match capture("git", &["show", "--pretty=tformat:%h", "--no-patch", "HEAD"])? {
        Captured::Output(hash) => Ok(hash),
        Captured::Failed {
            stdout,
            stderr,
            code,
        } => {
            io::stdout().write_all(&stdout).ok();
            io::stderr().write_all(&stderr).ok();
            process::exit(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_trims_surrounding_whitespace() {
        let captured = capture("sh", &["-c", "printf '  abc1234\\n'"]).unwrap();
        match captured {
            Captured::Output(hash) => assert_eq!(hash, "abc1234"),
            Captured::Failed { .. } => panic!("command should have succeeded"),
        }
    }

    #[test]
    fn capture_reports_streams_and_exit_code_on_failure() {
        let captured = capture("sh", &["-c", "echo out; echo err >&2; exit 7"]).unwrap();
        match captured {
            Captured::Output(_) => panic!("command should have failed"),
            Captured::Failed {
                stdout,
                stderr,
                code,
            } => {
                assert_eq!(stdout, b"out\n");
                assert_eq!(stderr, b"err\n");
                assert_eq!(code, 7);
            }
        }
    }

    #[test]
    fn capture_surfaces_a_missing_binary_as_io() {
        let err = capture("definitely-not-a-real-binary", &[]).unwrap_err();
        assert!(matches!(err.error_type, ErrorType::Io));
        assert!(matches!(err.item, WithItem::Command));
    }
}
