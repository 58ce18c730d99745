//! Simple command that prints one or '-n count' UUIDv7 strings

use std::{env, io, io::Write, process::ExitCode};

fn main() -> io::Result<ExitCode> {
    let count = match parse_count(env::args().skip(1)) {
        Ok(count) => count,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: uuid7 [-n count]");
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut out = io::BufWriter::new(io::stdout());
    for _ in 0..count {
        writeln!(out, "{}", muuid7::uuid7_string())?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_count(mut args: impl Iterator<Item = String>) -> Result<usize, String> {
    match args.next().as_deref() {
        None => Ok(1),
        Some("-n") => {
            let n_arg = args
                .next()
                .ok_or_else(|| "argument to option 'n' missing".to_owned())?;
            if args.next().is_some() {
                return Err("too many arguments".to_owned());
            }
            n_arg
                .parse()
                .map_err(|_| format!("invalid argument to option 'n': '{}'", n_arg))
        }
        Some(arg) => Err(format!("unrecognized argument '{}'", arg)),
    }
}
