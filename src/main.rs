//! Interactive tag cloud generator.
//!
//! Prompts for an input file, an output file, and the number of words to
//! display, then runs the pipeline. The word count is the only re-prompted
//! input; every other failure prints one message and exits.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process::ExitCode;

use tagcloud::{CloudConfig, Pipeline, PipelineObserver, TagCloudError};

/// Observer that surfaces read failures to the operator mid-run.
struct ReportObserver;

impl PipelineObserver for ReportObserver {
    fn on_read_error(&mut self, error: &TagCloudError) {
        eprintln!("Error: {error}");
    }
}

/// Print `message` and read one trimmed line from stdin.
fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for the number of words until the answer is an integer in
/// `0..=max`. This is the only retried condition.
fn prompt_for_count(max: usize) -> io::Result<usize> {
    loop {
        let answer = prompt(&format!(
            "Enter the number of words (in the range of 0 to {max}) \
             you would like to have in your tag cloud: "
        ))?;
        match answer.parse::<usize>() {
            Ok(n) if n <= max => return Ok(n),
            Ok(n) => eprintln!("Error: {}", TagCloudError::InvalidCount { given: n, max }),
            Err(_) => eprintln!("Error: Please enter an integer!"),
        }
    }
}

fn run() -> Result<(), TagCloudError> {
    let pipeline = Pipeline::new(CloudConfig::default());

    let input_path = prompt("Please input the name of the input file: ")?;
    let output_path = prompt("Please enter the name of the output file: ")?;

    // Input-open failure is fatal before any processing.
    let input = File::open(&input_path)
        .map_err(|source| TagCloudError::input_open(&input_path, source))?;

    let counter = pipeline.aggregate(BufReader::new(input), &mut ReportObserver);

    let n = prompt_for_count(counter.distinct_words())?;

    // Output-open failure aborts before any writing.
    let output =
        File::create(&output_path).map_err(|source| TagCloudError::Write { source })?;

    pipeline.finish(
        &counter,
        &input_path,
        n,
        BufWriter::new(output),
        &mut ReportObserver,
    )?;

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
