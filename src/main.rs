use human_panic::setup_panic;
use kasiski::cli::{parse_cli_args, Input};
use kasiski::cli_pretty_printing::{
    input_is_empty, message_processed, message_skipped, program_exiting_successful_decoding,
    program_failed, report_written,
};
use kasiski::config::{get_config, set_global_config};
use kasiski::error::KasiskiError;
use kasiski::records::{crack_batch, cracked_reports, read_batch, write_report, MessageOutcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    setup_panic!();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            program_failed(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), KasiskiError> {
    // Turn CLI arguments into a library object
    let (input, config) = parse_cli_args()?;
    set_global_config(config);
    let config = get_config();

    match input {
        Input::Text(text) => {
            if text.is_empty() {
                input_is_empty();
                return Ok(());
            }
            let result = kasiski::crack(&text);
            if config.api_mode {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                program_exiting_successful_decoding(&result);
            }
        }
        Input::Messages { input, output } => {
            let batch = read_batch(&input)?;
            let outcomes = crack_batch(&batch, config);
            let reports = cracked_reports(&outcomes);
            write_report(&output, &reports)?;
            // Only claim a message was saved once the report is on disk
            for outcome in &outcomes {
                match outcome {
                    MessageOutcome::Cracked(report) => message_processed(&report.id),
                    MessageOutcome::Skipped(id) => message_skipped(id),
                }
            }
            if config.api_mode {
                println!("{}", serde_json::to_string(&reports)?);
            } else {
                report_written(&output, reports.len());
            }
        }
    }
    Ok(())
}
