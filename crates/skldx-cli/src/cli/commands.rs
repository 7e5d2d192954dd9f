use super::CliError;
use super::helpers::write_report;
use anyhow::Context;
use skldx_core::domain::ConvertRequest;
use skldx_core::dx::ConvertModule;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct ConvertArgs {
    /// Covalent-radius scale factor
    #[arg(long, short = 's', default_value_t = 1.0, value_name = "FACTOR")]
    scale: f64,

    /// Element to include; repeat for several (default: all elements)
    #[arg(long = "element", short = 'e', value_name = "NAME")]
    elements: Vec<String>,

    /// Map elements onto a grey gradient instead of full color
    #[arg(long, short = 'g')]
    grey: bool,

    /// Skeleton structure input file
    #[arg(long, short = 'f', default_value = "structure.skl", value_name = "PATH")]
    file: PathBuf,

    /// Directory receiving box.dx and atoms.dx
    #[arg(long, default_value = ".", value_name = "DIR")]
    output_dir: PathBuf,

    /// Write a JSON conversion summary to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

pub(super) fn run_convert_command(args: ConvertArgs) -> Result<i32, CliError> {
    let request = ConvertRequest::new(args.file, args.output_dir)
        .with_radius_scale(args.scale)
        .with_elements(args.elements)
        .with_greyscale(args.grey);

    tracing::info!(
        input = %request.input_path.display(),
        scale = request.radius_scale,
        greyscale = request.greyscale,
        "starting skeleton conversion"
    );

    let (artifacts, summary) = ConvertModule
        .execute(&request)
        .map_err(CliError::Compute)?;

    tracing::info!(
        atoms_total = summary.atoms_total,
        atoms_included = summary.atoms_included,
        "selection and write complete"
    );

    for artifact in &artifacts {
        println!(
            "wrote {}",
            request.output_dir.join(&artifact.relative_path).display()
        );
    }
    println!(
        "{} of {} atoms written.",
        summary.atoms_included, summary.atoms_total
    );

    if let Some(report_path) = args.report {
        if let Some(parent) = report_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create report directory '{}'", parent.display())
            })?;
        }
        write_report(&report_path, &summary).map_err(CliError::Compute)?;
        println!("JSON report: {}", report_path.display());
    }

    Ok(0)
}
