mod commands;
mod helpers;

use clap::Parser;
use skldx_core::domain::SklError;

pub fn run_from_env() -> i32 {
    helpers::init_tracing();

    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "skl2dx-rs".to_string());
    let remaining: Vec<String> = args.collect();

    // The history log is a side collaborator; a failed append must not
    // block the conversion itself.
    if let Err(error) = helpers::append_history_line(&program_name, &remaining) {
        eprintln!("WARNING: [IO.HISTORY_APPEND] {:#}", error);
    }

    match run(remaining) {
        Ok(code) => code,
        Err(error) => {
            let skl_error = error.as_skl_error();
            eprintln!("{}", skl_error.diagnostic_line());
            if let Some(summary_line) = skl_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            skl_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("skl2dx-rs".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();

    match Cli::try_parse_from(&full_args) {
        Ok(cli) => commands::run_convert_command(cli.convert),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "skl2dx-rs",
    about = "Converts a skeleton crystal structure into OpenDX geometry documents"
)]
struct Cli {
    #[command(flatten)]
    convert: commands::ConvertArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(SklError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_skl_error(&self) -> SklError {
        match self {
            Self::Usage(message) => SklError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => SklError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
