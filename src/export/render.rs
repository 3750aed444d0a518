//! Rendering a rule set through an external Graphviz process.

use crate::core::{Label, TransitionTable};
use crate::export::dot::to_dot;
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Errors from the external renderer. Unrelated to triggering events.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Renderer I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Renderer '{program}' exited with {status}: {stderr}")]
    RendererFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Renderer invocation settings.
///
/// Defaults produce a PNG with the `dot` layout at scale 72, sized 10x5
/// inches at 200 dpi.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Renderer executable
    pub program: String,
    /// Output format (`-T`)
    pub format: String,
    /// Layout engine (`-K`)
    pub layout: String,
    /// Input scale (`-s`)
    pub scale: String,
    /// Extra renderer arguments, passed as-is
    pub extra_args: Vec<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
            format: "png".to_string(),
            layout: "dot".to_string(),
            scale: "72".to_string(),
            extra_args: vec!["-Gsize=10,5".to_string(), "-Gdpi=200".to_string()],
        }
    }
}

impl ExportOptions {
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Renderer arguments for writing to `outfile`.
    pub fn args(&self, outfile: &Path) -> Vec<String> {
        let mut args = vec![
            format!("-o{}", outfile.display()),
            format!("-T{}", self.format),
            format!("-K{}", self.layout),
            format!("-s{}", self.scale),
        ];
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

/// Write a diagram of the rules to `outfile` with default options.
pub fn export<S: Label, E: Label, A: Label>(
    table: &TransitionTable<S, E, A>,
    outfile: impl AsRef<Path>,
) -> Result<(), ExportError> {
    render(table, outfile, &ExportOptions::default())
}

/// Pipe the DOT text of the rules into the renderer.
pub fn render<S: Label, E: Label, A: Label>(
    table: &TransitionTable<S, E, A>,
    outfile: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let outfile = outfile.as_ref();
    let dot = to_dot(table);

    tracing::debug!(
        program = %options.program,
        outfile = %outfile.display(),
        transitions = table.len(),
        "rendering state diagram"
    );

    let mut child = Command::new(&options.program)
        .args(options.args(outfile))
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        // A renderer that exits early closes the pipe; its status says why.
        match stdin.write_all(dot.as_bytes()) {
            Err(err) if err.kind() != ErrorKind::BrokenPipe => return Err(err.into()),
            _ => {}
        }
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(ExportError::RendererFailed {
            program: options.program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::rule_table;
    use std::path::PathBuf;

    #[test]
    fn default_options_match_renderer_defaults() {
        let options = ExportOptions::default();
        assert_eq!(
            options.args(Path::new("fsm.png")),
            vec![
                "-ofsm.png",
                "-Tpng",
                "-Kdot",
                "-s72",
                "-Gsize=10,5",
                "-Gdpi=200"
            ]
        );
    }

    #[test]
    fn options_can_be_overridden() {
        let options = ExportOptions::default().format("svg").layout("neato");
        let args = options.args(&PathBuf::from("out.svg"));
        assert!(args.contains(&"-Tsvg".to_string()));
        assert!(args.contains(&"-Kneato".to_string()));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ExportOptions = serde_json::from_str(r#"{"format":"svg"}"#).unwrap();
        assert_eq!(options.format, "svg");
        assert_eq!(options.program, "dot");
        assert_eq!(options.extra_args.len(), 2);
    }

    #[test]
    fn missing_renderer_is_an_io_error() {
        let options = ExportOptions {
            program: "stateless-fsm-no-such-renderer".to_string(),
            ..Default::default()
        };
        let table = rule_table([("A", "go", "B", "run")]);
        let out = std::env::temp_dir().join("stateless-fsm-missing.png");

        let result = render(&table, &out, &options);
        match result {
            Err(ExportError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn renderer_exiting_without_reading_reports_its_status() {
        let options = ExportOptions {
            program: "false".to_string(),
            ..Default::default()
        };
        let rules: Vec<_> = (0..2000)
            .map(|i| ("A", "go", if i % 2 == 0 { "B" } else { "C" }, "run"))
            .collect();
        let table = rule_table(rules);
        let out = std::env::temp_dir().join("stateless-fsm-false.png");

        match render(&table, &out, &options) {
            Err(ExportError::RendererFailed { program, status, .. }) => {
                assert_eq!(program, "false");
                assert!(!status.success());
            }
            other => panic!("Expected RendererFailed, got {other:?}"),
        }
    }
}
