//! Run and REPL command handlers
//!
//! Both drive a fresh session. Totals are written one per line so the output
//! can be piped.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::CalculatorResult;
use crate::models::Operation;
use crate::services::Session;

/// Apply a token script and print the totals it reads
///
/// If the script never reads the total, the final total is printed once.
pub fn handle_run_command<W: Write>(
    session: &mut Session,
    settings: &Settings,
    tokens: &[String],
    out: &mut W,
) -> CalculatorResult<()> {
    let ops = Operation::parse_script(tokens)?;
    let reads_total = ops.iter().any(|op| !op.is_mutation());

    let totals = session.run(with_echo(ops, settings.echo_total))?;
    print_totals(&totals, out)?;

    if !reads_total && !settings.echo_total {
        writeln!(out, "{}", session.total())?;
    }

    Ok(())
}

/// Read operations line by line until EOF or `quit`
///
/// A line that fails to parse is reported on `err` and the session carries
/// on. Log write failures end the session.
pub fn handle_repl_command<R: BufRead, W: Write, E: Write>(
    session: &mut Session,
    settings: &Settings,
    input: R,
    out: &mut W,
    err: &mut E,
) -> CalculatorResult<()> {
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        let ops = match Operation::parse_line(trimmed) {
            Ok(ops) => ops,
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                continue;
            }
        };

        let totals = session.run(with_echo(ops, settings.echo_total))?;
        print_totals(&totals, out)?;
        out.flush()?;
    }

    Ok(())
}

/// Follow every mutation with a read when `echo` is set
fn with_echo(ops: Vec<Operation>, echo: bool) -> Vec<Operation> {
    if !echo {
        return ops;
    }

    ops.into_iter()
        .flat_map(|op| {
            if op.is_mutation() {
                vec![op, Operation::Total]
            } else {
                vec![op]
            }
        })
        .collect()
}

fn print_totals<W: Write>(totals: &[i64], out: &mut W) -> CalculatorResult<()> {
    for total in totals {
        writeln!(out, "{}", total)?;
    }
    Ok(())
}
