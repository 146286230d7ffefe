mod args;
mod config;

use anyhow::Result;
use args::Args;
use log::{debug, info, warn};
use rlife_lib::{Grid, NeighborCounts};
use std::io::{self, BufWriter, Write};

/// Writes the neighbor counts as one digit per cell.
fn write_counts<W: Write>(out: &mut W, counts: &NeighborCounts) -> io::Result<()> {
    for row in counts.as_slice().chunks(counts.width()) {
        let line: String = row.iter().map(|&c| char::from(b'0' + c)).collect();
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_generation<W: Write>(
    out: &mut W,
    index: u64,
    grid: &Grid,
    neighbors: bool,
) -> io::Result<()> {
    writeln!(out, "#G {} population {}", index, grid.population())?;
    write!(out, "{}", grid)?;
    if neighbors {
        writeln!(out, "#N")?;
        write_counts(out, &grid.neighbor_counts())?;
    }
    Ok(())
}

/// Writes at most `count` generations, stopping after the first empty one.
///
/// Returns the number of generations written.
fn write_generations<W, I>(out: &mut W, gens: I, count: u64, neighbors: bool) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Grid>,
{
    let mut written = 0;
    for (index, grid) in (0..count).zip(gens) {
        debug!("generation {}: population {}", index, grid.population());
        write_generation(out, index, &grid, neighbors)?;
        written += 1;
        if grid.is_empty() {
            warn!("all cells died at generation {}", index);
            break;
        }
    }
    Ok(written)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse()?;
    info!("{:?}", args.config);

    let gens = args.config.generations()?;
    let mut out = BufWriter::new(io::stdout().lock());
    write_generations(&mut out, gens, args.generations, args.neighbors)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlife_lib::generations;

    fn output<I: IntoIterator<Item = Grid>>(gens: I, count: u64, neighbors: bool) -> (u64, String) {
        let mut out = Vec::new();
        let written = write_generations(&mut out, gens, count, neighbors).unwrap();
        (written, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plaintext() -> Result<()> {
        let blinker = Grid::with_alive(5, 5, vec![(1, 2), (2, 2), (3, 2)])?;
        let (written, text) = output(generations(blinker), 2, false);
        assert_eq!(written, 2);
        assert_eq!(
            text,
            "#G 0 population 3\n\
             .....\n\
             .....\n\
             .ooo.\n\
             .....\n\
             .....\n\
             #G 1 population 3\n\
             .....\n\
             ..o..\n\
             ..o..\n\
             ..o..\n\
             .....\n"
        );
        Ok(())
    }

    #[test]
    fn with_neighbors() -> Result<()> {
        let grid = Grid::with_alive(4, 3, vec![(1, 1)])?;
        let (written, text) = output(generations(grid), 1, true);
        assert_eq!(written, 1);
        assert_eq!(
            text,
            "#G 0 population 1\n\
             ....\n\
             .o..\n\
             ....\n\
             #N\n\
             1110\n\
             1010\n\
             1110\n"
        );
        Ok(())
    }

    #[test]
    fn stops_when_empty() -> Result<()> {
        let lonely = Grid::with_alive(5, 5, vec![(2, 2)])?;
        let (written, text) = output(generations(lonely), 10, false);
        assert_eq!(written, 2);
        assert!(text.starts_with("#G 0 population 1\n"));
        assert!(text.contains("#G 1 population 0\n"));
        assert!(!text.contains("#G 2"));
        Ok(())
    }

    #[test]
    fn zero_generations() -> Result<()> {
        let grid = Grid::new(2, 2)?;
        assert_eq!(output(generations(grid), 0, true), (0, String::new()));
        Ok(())
    }
}
