use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use liblife::Grid;

const PROMPT: &str = "Enter the number of generations: ";

/// Prints the initial grid, then advances and prints it `generations` times.
/// When `generations` is `None` the count is read from `input`.
pub fn run<R, W, E>(
    grid: &mut Grid,
    generations: Option<usize>,
    mut input: R,
    mut output: W,
    mut errors: E,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(output, "Initial Generation:")?;
    write!(output, "{grid}")?;

    let generations = match generations {
        Some(generations) => generations,
        None => read_generations(&mut input, &mut output, &mut errors)?,
    };

    for _ in 0..generations {
        writeln!(output, "Next Generation:")?;
        grid.advance_generation();
        write!(output, "{grid}")?;
    }

    output.flush()?;
    Ok(())
}

fn read_generations<R, W, E>(
    input: &mut R,
    output: &mut W,
    errors: &mut E,
) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("No generation count given");
        }

        match parse_generations(&line) {
            Ok(generations) => return Ok(generations),
            Err(e) => writeln!(errors, "! {e:?}")?,
        }
    }
}

fn parse_generations(line: &str) -> anyhow::Result<usize> {
    let trimmed = line.trim();
    trimmed
        .parse::<usize>()
        .with_context(|| format!("Invalid generation count {trimmed:?}"))
}
