use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::core::config_parser::{ConfigParser, ConfigParserFmu};
use crate::types::Mode;

use super::args::CliArgs;
use super::errors::AppError;

const BIN_NAME: &str = "fmuconfig";

/// Fewer tokens than this prints help and quits
const MIN_ARGS: usize = 2;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    // A subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn print_help(out: &mut dyn Write) -> Result<(), AppError> {
    let help = CliArgs::command().render_help();
    writeln!(out, "{}", help)?;
    writeln!(out, "QUIT")?;
    Ok(())
}

/// Run against the process arguments with the stock configuration object.
/// `argv` excludes the program name.
pub fn run(argv: Vec<String>) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(argv, ConfigParserFmu::new, &mut out)
}

/// Parse `argv`, build the configuration object with `make_parser`, parse the
/// config file and dispatch on `--mode`. Status lines go to `out`.
pub fn run_with<P, F>(
    argv: Vec<String>,
    make_parser: F,
    out: &mut dyn Write,
) -> Result<(), AppError>
where
    P: ConfigParser,
    F: FnOnce() -> P,
{
    if argv.len() < MIN_ARGS {
        print_help(out)?;
        return Err(AppError::Usage);
    }

    let args = CliArgs::try_parse_from(std::iter::once(BIN_NAME.to_string()).chain(argv))?;

    if args.log {
        init_logging();
    }
    debug!("Arguments: {:?}", args);

    let mut cfg = make_parser();
    writeln!(out, "OK {}", cfg)?;

    if !args.config.is_file() {
        return Err(AppError::FileNotFound { path: args.config });
    }
    cfg.parse(&args.config)?;

    let params = args.export_params();
    writeln!(out, "Mode is {}", args.mode)?;
    out.flush()?;
    match args.mode {
        Mode::Ipl => cfg.to_ipl(&params)?,
        Mode::Yaml => cfg.to_yaml(&params)?,
    }

    info!("Successfully converted {:?}", args.config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fmt;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use super::*;
    use crate::core::params::ExportParams;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Parse(PathBuf),
        ToIpl(ExportParams),
        ToYaml(ExportParams),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl fmt::Display for Recorder {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Recorder")
        }
    }

    impl ConfigParser for Recorder {
        fn parse(&mut self, path: &Path) -> crate::Result<()> {
            self.calls.borrow_mut().push(Call::Parse(path.to_path_buf()));
            Ok(())
        }

        fn to_ipl(&self, params: &ExportParams) -> crate::Result<()> {
            self.calls.borrow_mut().push(Call::ToIpl(params.clone()));
            Ok(())
        }

        fn to_yaml(&self, params: &ExportParams) -> crate::Result<()> {
            self.calls.borrow_mut().push(Call::ToYaml(params.clone()));
            Ok(())
        }
    }

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn config_file() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "global:\n  A: 1\n").unwrap();
        let path = path.to_string_lossy().into_owned();
        (dir, path)
    }

    #[test]
    fn single_token_prints_help_and_quits() {
        let mut out = Vec::new();
        let mut constructed = false;
        let err = run_with(
            argv(&["config.yaml"]),
            || {
                constructed = true;
                Recorder::default()
            },
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, AppError::Usage));
        assert!(!constructed);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("--rootname"));
        assert!(text.trim_end().ends_with("QUIT"));
    }

    #[test]
    fn missing_file_stops_before_parse() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorder = Recorder {
            calls: calls.clone(),
        };
        let mut out = Vec::new();
        let err = run_with(
            argv(&["/no/such/config.yaml", "--mode", "yaml"]),
            move || recorder,
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, AppError::FileNotFound { .. }));
        assert!(calls.borrow().is_empty());
        assert!(String::from_utf8(out).unwrap().starts_with("OK Recorder\n"));
    }

    #[test]
    fn yaml_mode_forwards_defaults() {
        let (_dir, path) = config_file();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorder = Recorder {
            calls: calls.clone(),
        };
        let mut out = Vec::new();
        run_with(argv(&[path.as_str(), "--mode", "yaml"]), move || recorder, &mut out).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec![
                Call::Parse(PathBuf::from(&path)),
                Call::ToYaml(ExportParams::default()),
            ]
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "OK Recorder\nMode is YAML\n"
        );
    }

    #[test]
    fn ipl_mode_forwards_arguments_unchanged() {
        let (_dir, path) = config_file();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorder = Recorder {
            calls: calls.clone(),
        };
        let mut out = Vec::new();
        run_with(
            argv(&[
                path.as_str(),
                "--rootname",
                "gv",
                "--destination",
                "dest",
                "--template",
                "tmpl",
                "--tool",
                "eclipse",
            ]),
            move || recorder,
            &mut out,
        )
        .unwrap();

        let expected = ExportParams {
            rootname: "gv".to_string(),
            destination: Some(PathBuf::from("dest")),
            template: Some(PathBuf::from("tmpl")),
            tool: "eclipse".to_string(),
        };
        assert_eq!(
            *calls.borrow(),
            vec![Call::Parse(PathBuf::from(&path)), Call::ToIpl(expected)]
        );
        assert!(String::from_utf8(out).unwrap().ends_with("Mode is IPL\n"));
    }

    #[test]
    fn unknown_mode_fails_before_parse() {
        let (_dir, path) = config_file();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorder = Recorder {
            calls: calls.clone(),
        };
        let mut out = Vec::new();
        let err = run_with(argv(&[path.as_str(), "--mode", "xml"]), move || recorder, &mut out)
            .unwrap_err();

        assert!(matches!(err, AppError::Cli(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn delegated_failures_propagate() {
        let mut out = Vec::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "- not\n- a mapping\n").unwrap();

        let err = run_with(
            argv(&[path.to_str().unwrap(), "--mode", "ipl"]),
            ConfigParserFmu::new,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(crate::Error::InvalidDocument(_))
        ));
        assert_eq!(err.exit_code(), 1);
    }
}
