//! `verdict compare` / `verdict run` / `verdict validate`.

use std::path::{Path, PathBuf};

use verdict_io::{FileSource, ReportFormat, SourceProvider, DEFAULT_OUTPUT};
use verdict_recon::{CompareOptions, Palette, ReconConfig, Reconciliation, ScopePolicy};

use crate::exit_codes::{exit_code_for, EXIT_DISCREPANCIES, EXIT_INVALID_CONFIG, EXIT_WRITE_FAILED};
use crate::CliError;

/// Everything needed for one comparison, however it was specified.
#[derive(Debug, Clone)]
pub struct Job {
    pub golden: PathBuf,
    pub report: PathBuf,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub policy: ScopePolicy,
    pub options: CompareOptions,
    pub palette: Palette,
}

/// Output switches shared by `compare` and `run`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFlags {
    pub json: bool,
    pub fail_on_mismatch: bool,
    pub quiet: bool,
}

/// Pick the artifact path and format from whatever the user supplied.
///
/// An explicit format without a path writes `ComparisonResults.<ext>`.
pub fn resolve_output(output: Option<PathBuf>, format: Option<ReportFormat>) -> (PathBuf, ReportFormat) {
    match (output, format) {
        (Some(path), Some(format)) => (path, format),
        (Some(path), None) => {
            let format = ReportFormat::from_path(&path);
            (path, format)
        }
        (None, Some(format)) => (Path::new(DEFAULT_OUTPUT).with_extension(format.extension()), format),
        (None, None) => (PathBuf::from(DEFAULT_OUTPUT), ReportFormat::Xlsx),
    }
}

fn parse_format(value: &str) -> Result<ReportFormat, CliError> {
    ReportFormat::parse(value).ok_or_else(|| {
        CliError::args(format!("unknown report format '{value}' (expected xlsx, csv or json)"))
    })
}

pub fn run_job(job: &Job, flags: OutputFlags) -> Result<(), CliError> {
    let source = FileSource;
    let golden = source.load(&job.golden, job.policy).map_err(CliError::recon)?;
    let report = source.load(&job.report, job.policy).map_err(CliError::recon)?;

    let result = verdict_recon::reconcile_with(&golden, &report, &job.options);

    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    job.format
        .sink(job.palette)
        .write(&result, &job.output)
        .map_err(|e| CliError {
            code: EXIT_WRITE_FAILED,
            message: e,
            hint: Some("check that the output directory exists and the file is not open elsewhere".into()),
        })?;

    if flags.json {
        let json = verdict_io::json::to_json_string(&result).map_err(CliError::eval)?;
        println!("{json}");
    }

    if !flags.quiet {
        print_summary(&result);
        eprintln!("comparison completed, results saved to {}", job.output.display());
    }

    if flags.fail_on_mismatch && !result.summary.is_clean() {
        return Err(CliError {
            code: EXIT_DISCREPANCIES,
            message: "discrepancies found".into(),
            hint: None,
        });
    }

    Ok(())
}

fn print_summary(result: &Reconciliation) {
    let s = &result.summary;
    eprintln!(
        "compared {} golden vs {} report tests: {} matched, {} mismatched, {} missing",
        s.golden_count, s.report_count, s.matched, s.mismatched, s.missing,
    );
    if s.unexpected > 0 {
        eprintln!("note: {} report test id(s) not present in golden", s.unexpected);
    }
}

// ============================================================================
// compare
// ============================================================================

pub fn cmd_compare(
    golden: PathBuf,
    report: PathBuf,
    output: Option<PathBuf>,
    format: Option<String>,
    strict_scope: bool,
    ignore_case: bool,
    flags: OutputFlags,
) -> Result<(), CliError> {
    let format = format.as_deref().map(parse_format).transpose()?;
    let (output, format) = resolve_output(output, format);

    let job = Job {
        golden,
        report,
        output,
        format,
        policy: if strict_scope { ScopePolicy::Strict } else { ScopePolicy::Permissive },
        options: CompareOptions {
            case: if ignore_case {
                verdict_recon::CaseSensitivity::Insensitive
            } else {
                verdict_recon::CaseSensitivity::Exact
            },
        },
        palette: Palette::default(),
    };
    log::debug!("compare job: {job:?}");

    run_job(&job, flags)
}

// ============================================================================
// run / validate (TOML job config)
// ============================================================================

fn load_config(config_path: &Path) -> Result<ReconConfig, CliError> {
    let config_str = std::fs::read_to_string(config_path).map_err(|e| {
        CliError::recon(match e.kind() {
            std::io::ErrorKind::NotFound => verdict_recon::ReconError::InputNotFound {
                path: config_path.display().to_string(),
            },
            _ => verdict_recon::ReconError::Io(format!("cannot read config: {e}")),
        })
    })?;

    ReconConfig::from_toml(&config_str).map_err(|e| CliError {
        code: EXIT_INVALID_CONFIG,
        message: format!("{}: {e}", config_path.display()),
        hint: None,
    })
}

/// Build a job from a config file. Relative paths resolve against the
/// config file's directory; an explicit `--output` wins over the config.
pub fn job_from_config(
    config_path: &Path,
    config: &ReconConfig,
    output_override: Option<PathBuf>,
) -> Result<Job, CliError> {
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let format = config.output.format.as_deref().map(parse_format).transpose()?;
    let output = output_override.or_else(|| config.output.path.as_ref().map(|p| base_dir.join(p)));
    let (output, format) = match output {
        Some(path) => resolve_output(Some(path), format),
        None => {
            let (path, format) = resolve_output(None, format);
            (base_dir.join(path), format)
        }
    };

    let palette = config.palette.resolve().map_err(|e| CliError {
        code: EXIT_INVALID_CONFIG,
        message: e.to_string(),
        hint: None,
    })?;

    Ok(Job {
        golden: base_dir.join(&config.golden),
        report: base_dir.join(&config.report),
        output,
        format,
        policy: config.input.missing_scope,
        options: config.compare_options(),
        palette,
    })
}

pub fn cmd_run(config_path: PathBuf, output: Option<PathBuf>, flags: OutputFlags) -> Result<(), CliError> {
    let config = load_config(&config_path)?;
    let job = job_from_config(&config_path, &config, output)?;
    log::debug!("job '{}': {job:?}", config.name);
    if !flags.quiet {
        eprintln!("running '{}'", config.name);
    }
    run_job(&job, flags)
}

pub fn cmd_validate(config_path: PathBuf, json: bool) -> Result<(), CliError> {
    let config = load_config(&config_path)?;
    let job = job_from_config(&config_path, &config, None)?;

    if json {
        let value = serde_json::json!({
            "valid": true,
            "name": config.name,
            "golden": job.golden.display().to_string(),
            "report": job.report.display().to_string(),
            "output": job.output.display().to_string(),
            "format": job.format.extension(),
        });
        println!("{value}");
    } else {
        eprintln!(
            "valid: '{}' compares {} against {}, writes {}",
            config.name,
            job.report.display(),
            job.golden.display(),
            job.output.display(),
        );
    }
    Ok(())
}

impl CliError {
    pub fn recon(err: verdict_recon::ReconError) -> Self {
        let hint = match &err {
            verdict_recon::ReconError::InputNotFound { .. } => Some("check the path and upload valid files".to_string()),
            verdict_recon::ReconError::MalformedInput { .. } => {
                Some("expected {\"TestingScope\": [{\"TestId\": ..., \"TestResult\": ...}]}".to_string())
            }
            _ => None,
        };
        Self {
            code: exit_code_for(&err),
            message: err.to_string(),
            hint,
        }
    }
}
