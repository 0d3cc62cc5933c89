//! `blockhtml render` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use blockhtml_config::{CliSettings, Config};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// JSON file holding the top-level node array (default: stdin; `-` also reads stdin).
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover blockhtml.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum list nesting depth (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Append a newline after the HTML (overrides config).
    #[arg(long)]
    trailing_newline: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read or
    /// parsed, or the document violates the node model.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        self.execute_with(output, std::io::stdin(), &mut std::io::stdout().lock())
    }

    fn execute_with(
        self,
        output: &Output,
        stdin: impl Read,
        stdout: &mut impl Write,
    ) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            max_depth: self.max_depth,
            trailing_newline: self.trailing_newline.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let input = read_input(self.input.as_deref(), stdin)?;
        let html = render_document(&input, &config)?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, &html)?;
                tracing::info!(path = %path.display(), bytes = html.len(), "Wrote HTML");
                output.success(&success_message(&html, &path));
            }
            None => {
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

fn success_message(html: &str, path: &Path) -> String {
    format!("Wrote {} bytes to {}", html.len(), path.display())
}

/// Read the JSON document from a file, or `stdin` for `None` or `-`.
fn read_input(path: Option<&Path>, stdin: impl Read) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::info!(path = %path.display(), "Reading document");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            tracing::info!("Reading document from stdin");
            Ok(std::io::read_to_string(stdin)?)
        }
    }
}

/// Parse and render a JSON node document according to the config.
fn render_document(json: &str, config: &Config) -> Result<String, CliError> {
    let mut html = config.renderer().render_json(json)?;
    if config.output.trailing_newline {
        html.push('\n');
    }
    tracing::info!(bytes = html.len(), "Rendered document");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockhtml_renderer::{Error, RenderError};
    use pretty_assertions::assert_eq;

    const DOCUMENT: &str = r#"[{"type": "list", "format": "unordered", "children": [
        {"type": "list-item", "children": [{"type": "text", "text": "Parent"}]},
        {"type": "list", "format": "ordered", "children": [
            {"type": "list-item", "children": [{"type": "text", "text": "Child"}]}
        ]}
    ]}]"#;

    const HTML: &str = "<ul><li>Parent<ol><li>Child</li></ol></li></ul>";

    /// Arguments reading `input` with an explicit config file, so discovery is skipped.
    fn render_args(input: Option<PathBuf>, config: &Path) -> RenderArgs {
        RenderArgs {
            input,
            output: None,
            config: Some(config.to_path_buf()),
            max_depth: None,
            trailing_newline: false,
            verbose: false,
        }
    }

    /// Run `args` with `stdin` as standard input, returning what it wrote to stdout.
    fn execute(args: RenderArgs, stdin: &str) -> Result<Vec<u8>, CliError> {
        let output = Output::new();
        let mut stdout = Vec::new();
        args.execute_with(&output, stdin.as_bytes(), &mut stdout)?;
        Ok(stdout)
    }

    #[test]
    fn test_render_document() {
        let html = render_document(DOCUMENT, &Config::default()).unwrap();
        assert_eq!(html, HTML);
    }

    #[test]
    fn test_render_document_trailing_newline() {
        let mut config = Config::default();
        config.output.trailing_newline = true;
        let html = render_document(DOCUMENT, &config).unwrap();
        assert_eq!(html, format!("{HTML}\n"));
    }

    #[test]
    fn test_render_document_respects_max_depth() {
        let mut config = Config::default();
        config.render.max_depth = 1;
        let err = render_document(DOCUMENT, &config).unwrap_err();
        assert!(matches!(
            err,
            CliError::Render(Error::Render(RenderError::DepthExceeded { .. }))
        ));
        assert_eq!(
            err.to_string(),
            "list nesting exceeds maximum depth of 1 at nodes[0].children[1]"
        );
    }

    #[test]
    fn test_render_document_invalid_json() {
        let err = render_document("[{", &Config::default()).unwrap_err();
        assert!(matches!(err, CliError::Render(Error::Json(_))));
        assert!(err.to_string().starts_with("invalid document JSON"));
    }

    #[test]
    fn test_render_document_unknown_node() {
        let json = r#"[{"type": "paragraph"}]"#;
        let err = render_document(json, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "unrecognized node type `paragraph` at nodes[0]");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, DOCUMENT).unwrap();

        assert_eq!(read_input(Some(&path), std::io::empty()).unwrap(), DOCUMENT);
    }

    #[test]
    fn test_read_input_dash_reads_stdin() {
        let dash = Path::new("-");
        let input = read_input(Some(dash), DOCUMENT.as_bytes()).unwrap();
        assert_eq!(input, DOCUMENT);

        let input = read_input(None, DOCUMENT.as_bytes()).unwrap();
        assert_eq!(input, DOCUMENT);
    }

    #[test]
    fn test_read_input_missing_file() {
        let missing = Path::new("/nonexistent/doc.json");
        let err = read_input(Some(missing), std::io::empty()).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.json");
        let output_path = dir.path().join("doc.html");
        let config = dir.path().join("blockhtml.toml");
        std::fs::write(&input, DOCUMENT).unwrap();
        std::fs::write(&config, "[output]\ntrailing_newline = false\n").unwrap();

        let mut args = render_args(Some(input), &config);
        args.output = Some(output_path.clone());
        let stdout = execute(args, "").unwrap();

        assert_eq!(std::fs::read(&output_path).unwrap(), HTML.as_bytes());
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_execute_stdin_to_stdout_with_trailing_newline_flag() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("blockhtml.toml");
        std::fs::write(&config, "[output]\ntrailing_newline = false\n").unwrap();

        let mut args = render_args(Some(PathBuf::from("-")), &config);
        args.trailing_newline = true;
        let stdout = execute(args, DOCUMENT).unwrap();

        assert_eq!(String::from_utf8(stdout).unwrap(), format!("{HTML}\n"));
    }

    #[test]
    fn test_execute_max_depth_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("blockhtml.toml");
        std::fs::write(&config, "[render]\nmax_depth = 1\n").unwrap();

        let err = execute(render_args(None, &config), DOCUMENT).unwrap_err();
        assert!(matches!(err, CliError::Render(_)));

        let mut args = render_args(None, &config);
        args.max_depth = Some(2);
        assert_eq!(execute(args, DOCUMENT).unwrap(), HTML.as_bytes());
    }

    #[test]
    fn test_execute_missing_config() {
        let args = render_args(None, Path::new("/nonexistent/blockhtml.toml"));
        let err = execute(args, DOCUMENT).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_success_message() {
        let message = success_message(HTML, Path::new("out/doc.html"));
        assert_eq!(message, "Wrote 47 bytes to out/doc.html");
    }
}
