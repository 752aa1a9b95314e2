use clap::Parser;
use obs_switch::ObsConnector;
use obs_switch_cli::{
	cli::Cli,
	commands,
	config::Config,
	error::CliError,
	logging,
	output,
};

#[tokio::main]
async fn main() {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) => match CliError::from_parse_error(&err) {
			Some(format_err) => fail(format_err),
			None => err.exit(),
		},
	};
	logging::init_logging(cli.verbose);

	let config = Config::from(&cli);
	let mut stdout = std::io::stdout();

	if let Err(err) = commands::dispatch(&cli.command, &config, &ObsConnector, &mut stdout).await {
		fail(err);
	}
}

fn fail(err: CliError) -> ! {
	tracing::debug!(error = ?err, "command failed");
	output::print_error_stderr(&err.to_command_error());
	std::process::exit(1);
}
