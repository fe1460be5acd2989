// src/bin/alr.rs

//! Driver program _alr_ drives the [_alrlib_].
//!
//! Reads an access log file, parses every line with a [`LogParser`],
//! renders the report with [`render`], then writes the report with
//! [`write_report`].
//!
//! The report file is written only after the entire log parsed without
//! error. A log line with an unparseable timestamp ends the program with an
//! error and the report file is not touched.
//!
//! [_alrlib_]: alrlib
//! [`LogParser`]: alrlib::readers::logparser::LogParser
//! [`render`]: alrlib::printer::report::render
//! [`write_report`]: alrlib::printer::writer::write_report

#![allow(non_camel_case_types)]

use std::process::ExitCode;

use ::anyhow::{Context, Result};
use ::clap::Parser;
use ::const_format::concatcp;
use ::si_trace_print::stack::stack_offset_set;
use ::si_trace_print::{defn, defo, defx};

use ::alrlib::common::{
    FPath,
    LineStrs,
    INPUT_FPATH_DEFAULT,
    OUTPUT_FPATH_DEFAULT,
};
use ::alrlib::data::record::Records;
use ::alrlib::debug::printers::e_err;
use ::alrlib::printer::report::render;
use ::alrlib::printer::writer::write_report;
use ::alrlib::readers::linereader::read_lines;
use ::alrlib::readers::logparser::{LogParser, SummaryLogParser};

// --------------------
// command-line parsing

const CLI_HELP_AFTER: &str = concatcp!(
    "\
Each log line is whitespace-separated:

    <id> <userId> <bytesSent> <bytesReceived> <date> <time>

Lines with fewer than five fields are skipped.
The report has three sections: pipe-delimited logs, sorted IDs, and unique
user IDs sorted and numbered.

Without arguments, reads \"",
    INPUT_FPATH_DEFAULT,
    "\" and writes \"",
    OUTPUT_FPATH_DEFAULT,
    "\".",
);

// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "alr",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(Access Log Report)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of the access log file to read.
    #[clap(
        default_value = INPUT_FPATH_DEFAULT,
        verbatim_doc_comment,
    )]
    input: FPath,

    /// Path of the report file to write. An existing file is replaced.
    #[clap(
        default_value = OUTPUT_FPATH_DEFAULT,
        verbatim_doc_comment,
    )]
    output: FPath,

    /// Print a summary of lines processed and skipped to STDERR.
    #[clap(
        short = 's',
        long,
        verbatim_doc_comment,
    )]
    summary: bool,
}

// --------------------
// processing

/// Read, parse, render, and write. Returns the parser statistics.
fn process_log(
    input: &FPath,
    output: &FPath,
) -> Result<SummaryLogParser> {
    defn!("({:?}, {:?})", input, output);

    let lines: LineStrs = read_lines(input)
        .with_context(|| format!("failed to read log file {:?}", input))?;
    defo!("read {} lines", lines.len());

    let mut logparser: LogParser = LogParser::new();
    let records: Records = logparser
        .parse(&lines)
        .with_context(|| format!("failed to parse log file {:?}", input))?;
    defo!("parsed {} records", records.len());

    let report: String = render(&records);

    write_report(output, &report)
        .with_context(|| format!("failed to write report file {:?}", output))?;

    let summary: SummaryLogParser = logparser.summary();
    defx!("{}", summary);

    Ok(summary)
}

/// Message printed to STDOUT after the report file is written.
fn message_success(output: &FPath) -> String {
    format!("✅ Log has been processed. Output written to '{}'.", output)
}

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args: CLI_Args = CLI_Args::parse();
    defo!("{:?}", args);

    let exitcode = match process_log(&args.input, &args.output) {
        Ok(summary) => {
            if args.summary {
                eprintln!("Summary: {}", summary);
            }
            println!("{}", message_success(&args.output));

            ExitCode::SUCCESS
        }
        Err(err) => {
            e_err!("{:#}", err);

            ExitCode::FAILURE
        }
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
