//! Invoking the Graphviz `dot` tool.

use std::path::Path;
use std::process::Command;

use crate::core::RenderError;

/// Name of the Graphviz layout program.
pub const DOT_PROGRAM: &str = "dot";

/// Run `dot -T<format> <input> -o <output>`.
///
/// A missing `dot` binary or a non-zero exit status is reported as an
/// error; callers usually downgrade it to a warning.
pub fn render(input: &Path, output: &Path, format: &str) -> Result<(), RenderError> {
    render_with(DOT_PROGRAM, input, output, format)
}

/// Same as [`render`] with an explicit program name or path.
pub fn render_with(
    program: &str,
    input: &Path,
    output: &Path,
    format: &str,
) -> Result<(), RenderError> {
    log::debug!(
        "running {} -T{} {} -o {}",
        program,
        format,
        input.display(),
        output.display()
    );

    let result = Command::new(program)
        .arg(format!("-T{}", format))
        .arg(input)
        .arg("-o")
        .arg(output)
        .output()
        .map_err(|source| RenderError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !result.status.success() {
        return Err(RenderError::Failed {
            program: program.to_string(),
            status: result.status,
            stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
        });
    }

    log::info!("rendered {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_with(
            "definitely-not-graphviz-dot",
            &dir.path().join("in.dot"),
            &dir.path().join("out.pdf"),
            "pdf",
        )
        .unwrap_err();

        assert!(matches!(err, RenderError::Spawn { .. }));
        assert!(err.to_string().contains("definitely-not-graphviz-dot"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_with(
            "false",
            &dir.path().join("in.dot"),
            &dir.path().join("out.pdf"),
            "pdf",
        )
        .unwrap_err();

        assert!(matches!(err, RenderError::Failed { .. }));
    }
}
