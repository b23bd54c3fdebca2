use std::io::{Read, Write};
use std::path::Path;

use error_stack::{Report, ResultExt};
use thiserror::Error;
use tracing::debug;

use crate::args::{Cli, ExtractMode};

/// Result type for the command line front end
pub type Result<T> = std::result::Result<T, Report<CliError>>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read response from {0}")]
    Input(String),

    #[error("Failed to extract {0} from response")]
    Extraction(ExtractMode),

    #[error("Failed to write output")]
    Output,
}

/// Read the response, extract the requested part and write it to `output`
pub fn run(cli: &Cli, output: &mut impl Write) -> Result<()> {
    let response = read_response(cli.input.as_deref())?;
    let rendered = render(cli.mode, &response)?;

    writeln!(output, "{rendered}").change_context(CliError::Output)?;
    output.flush().change_context(CliError::Output)
}

fn read_response(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            debug!(path = %path.display(), "Reading response from file");
            std::fs::read_to_string(path)
                .change_context_lazy(|| CliError::Input(path.display().to_string()))
        }
        None => {
            debug!("Reading response from stdin");
            let mut response = String::new();
            std::io::stdin()
                .read_to_string(&mut response)
                .change_context(CliError::Input("stdin".to_string()))?;
            Ok(response)
        }
    }
}

/// Output text for `mode`: JSON for objects and collections, the token or `null` for skip tokens
pub fn render(mode: ExtractMode, response: &str) -> Result<String> {
    let rendered = match mode {
        ExtractMode::Object => odata_envelope::extract_object(response),
        ExtractMode::Collection => odata_envelope::extract_collection(response),
        ExtractMode::SkipToken => odata_envelope::extract_skip_token(response)
            .map(|token| token.unwrap_or_else(|| "null".to_string())),
    };

    rendered.change_context(CliError::Extraction(mode))
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use odata_envelope::Error;

    use super::*;
    use crate::support::TracingLevel;

    const RESPONSE: &str = r#"{"d":{"results":[{"ID":1,"Owner":{"__deferred":{"uri":"x"}}}],"__next":"https://host/api?$skiptoken=7"}}"#;

    fn cli(mode: ExtractMode, input: &Path) -> Cli {
        Cli {
            mode,
            input: Some(input.to_path_buf()),
            log_level: TracingLevel::Warn,
        }
    }

    #[test]
    fn test_render_each_mode() {
        assert_eq!(
            render(ExtractMode::Collection, RESPONSE).unwrap(),
            r#"[{"ID":1,"Owner":[]}]"#
        );
        assert_eq!(render(ExtractMode::SkipToken, RESPONSE).unwrap(), "7");
        assert_eq!(
            render(ExtractMode::Object, r#"{"d":{"ID":1}}"#).unwrap(),
            r#"{"ID":1}"#
        );
    }

    #[test]
    fn test_render_skip_token_sentinels() {
        assert_eq!(render(ExtractMode::SkipToken, r#"{"d":{}}"#).unwrap(), "");
        assert_eq!(
            render(ExtractMode::SkipToken, r#"{"d":{"__next":"https://host/api"}}"#).unwrap(),
            "null"
        );
    }

    #[test]
    fn test_render_keeps_library_error_kind_in_report() {
        let report = render(ExtractMode::Object, "not json").unwrap_err();
        assert!(matches!(
            report.current_context(),
            CliError::Extraction(ExtractMode::Object)
        ));
        assert!(matches!(report.downcast_ref::<Error>(), Some(Error::Structure(_))));

        let report = render(ExtractMode::Collection, "not json").unwrap_err();
        assert!(matches!(report.downcast_ref::<Error>(), Some(Error::InvalidJson(_))));
    }

    #[test]
    fn test_run_reads_file_and_writes_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RESPONSE.as_bytes()).unwrap();

        let mut output = Vec::new();
        run(&cli(ExtractMode::Collection, file.path()), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "[{\"ID\":1,\"Owner\":[]}]\n");
    }

    #[test]
    fn test_run_reports_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let mut output = Vec::new();
        let report = run(&cli(ExtractMode::Object, &missing), &mut output).unwrap_err();

        assert!(matches!(report.current_context(), CliError::Input(_)));
        assert!(output.is_empty());
    }
}
