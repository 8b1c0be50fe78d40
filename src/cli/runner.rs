use tracing::info;
use tracing_subscriber::EnvFilter;

use thumbframe::{ComposeParams, process_images};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(args: &CliArgs) {
    let filter = if args.log {
        EnvFilter::new("debug")
    } else if args.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    // a global subscriber may already be installed
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Defaults, then the config file, then explicit flags.
pub fn resolve_params(args: &CliArgs) -> Result<ComposeParams, AppError> {
    let mut params = match &args.config {
        Some(path) if !path.is_file() => {
            return Err(AppError::ConfigNotFound { path: path.clone() });
        }
        Some(path) => ComposeParams::from_json_file(path)?,
        None => ComposeParams::default(),
    };

    if let Some(dir) = &args.source_dir {
        params.source_directory = dir.clone();
    }
    if let Some(template) = &args.template {
        params.template_path = template.clone();
    }
    if let Some(dir) = &args.output_dir {
        params.output_directory = dir.clone();
    }
    if let Some(size) = args.max_size {
        params.max_size = size;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if args.continue_on_error {
        params.continue_on_error = true;
    }

    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&args);

    let params = resolve_params(&args)?;
    let report = process_images(&params).map_err(AppError::from)?;

    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    if report.errors > 0 {
        return Err(thumbframe::Error::Processing(format!(
            "{} file(s) failed; see warnings above",
            report.errors
        ))
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use thumbframe::ResampleFilter;

    #[test]
    fn no_flags_resolve_to_defaults() {
        let args = CliArgs::try_parse_from(["thumbframe"]).unwrap();
        assert_eq!(resolve_params(&args).unwrap(), ComposeParams::default());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("batch.json");
        std::fs::write(
            &config,
            r#"{"source_directory": "from_config", "max_size": 640, "filter": "bilinear"}"#,
        )
        .unwrap();

        let args = CliArgs::try_parse_from([
            "thumbframe",
            "--config",
            config.to_str().unwrap(),
            "--max-size",
            "300",
        ])
        .unwrap();
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.source_directory, PathBuf::from("from_config"));
        assert_eq!(params.max_size, 300);
        assert_eq!(params.filter, ResampleFilter::Bilinear);
    }

    #[test]
    fn zero_max_size_flag_is_rejected() {
        let args = CliArgs::try_parse_from(["thumbframe", "--max-size", "0"]).unwrap();
        assert!(matches!(
            resolve_params(&args),
            Err(AppError::Library(thumbframe::Error::ZeroSize { size: 0 }))
        ));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let args =
            CliArgs::try_parse_from(["thumbframe", "--config", "no/such/batch.json"]).unwrap();
        assert!(matches!(
            resolve_params(&args),
            Err(AppError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn empty_source_with_missing_template_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("paper");
        std::fs::create_dir(&source).unwrap();
        let output = dir.path().join("out");
        let template = dir.path().join("nope.png");

        let args = CliArgs::try_parse_from([
            "thumbframe",
            "--source-dir",
            source.to_str().unwrap(),
            "--output-dir",
            output.to_str().unwrap(),
            "--template",
            template.to_str().unwrap(),
        ])
        .unwrap();

        assert!(run(args).is_ok());
        assert!(output.is_dir());
    }

    #[test]
    fn missing_template_fails_on_first_eligible_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("paper");
        std::fs::create_dir(&source).unwrap();
        let scan = source.join("scan_unboxed.png");
        image::RgbImage::new(4, 4).save(&scan).unwrap();

        let args = CliArgs::try_parse_from([
            "thumbframe",
            "--source-dir",
            source.to_str().unwrap(),
            "--output-dir",
            dir.path().join("out").to_str().unwrap(),
            "--template",
            dir.path().join("nope.png").to_str().unwrap(),
        ])
        .unwrap();

        assert!(run(args).is_err());
        assert!(scan.exists());
    }
}
