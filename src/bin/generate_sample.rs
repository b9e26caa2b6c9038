//! Writes a small `output_data/` directory of team stat tables for trying
//! out the viewer: one `<team>_stats.csv` per team plus `league_stats.csv`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const HEADER: [&str; 16] = [
    "Number", "Name", "Games", "AVG", "PA", "AB", "R", "Hits", "RBI", "Doubles", "Triples",
    "HR", "GS", "OBP", "SLG", "OPS",
];

const TEAMS: [&str; 4] = ["cardinals", "herons", "otters", "pilots"];
const FIRST: [&str; 8] = ["Ana", "Ben", "Cal", "Dee", "Eli", "Fay", "Gus", "Ivy"];
const LAST: [&str; 6] = ["Reyes", "Park", "Moss", "Lund", "Ortiz", "Shaw"];
const POSITIONS: [&str; 7] = ["C", "1B", "2B", "SS", "3B", "OF", "P"];

/// Linear congruential generator, enough for reproducible fake stats.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(2862933555777941757)
            .wrapping_add(3037000493);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n.max(1)
    }
}

#[derive(Default)]
struct Totals {
    pa: u64,
    ab: u64,
    hits: u64,
    doubles: u64,
    triples: u64,
    hr: u64,
}

fn write_team(dir: &Path, team: &str, rng: &mut Lcg, totals: &mut Totals) -> Result<()> {
    let path = dir.join(format!("{team}_stats.csv"));
    let mut writer = csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(HEADER)?;

    let team_games = 12;
    for i in 0..11u64 {
        let name = format!(
            "{} {} ({})",
            FIRST[rng.below(FIRST.len() as u64) as usize],
            LAST[rng.below(LAST.len() as u64) as usize],
            POSITIONS[(i as usize) % POSITIONS.len()]
        );
        let games = 1 + rng.below(team_games);
        let pa = games * (1 + rng.below(4));
        let walks = rng.below(pa / 6 + 1);
        let ab = pa - walks;
        let hits = rng.below(ab / 2 + 1);
        let doubles = rng.below(hits / 3 + 1);
        let triples = rng.below((hits - doubles) / 6 + 1);
        let hr = rng.below((hits - doubles - triples) / 5 + 1);
        let runs = rng.below(hits + walks + 1);
        let rbi = rng.below(hits + hr + 1);
        let gs = rng.below(games + 1);

        let ratio = |num: u64, den: u64| if den == 0 { 0.0 } else { num as f64 / den as f64 };
        let avg = ratio(hits, ab);
        let obp = ratio(hits + walks, pa);
        let total_bases = hits + doubles + 2 * triples + 3 * hr;
        let slg = ratio(total_bases, ab);

        writer.write_record([
            (i + 1).to_string(),
            name,
            games.to_string(),
            format!("{avg:.3}"),
            pa.to_string(),
            ab.to_string(),
            runs.to_string(),
            hits.to_string(),
            rbi.to_string(),
            doubles.to_string(),
            triples.to_string(),
            hr.to_string(),
            gs.to_string(),
            format!("{obp:.4}"),
            format!("{slg:.4}"),
            format!("{:.4}", obp + slg),
        ])?;

        totals.pa += pa;
        totals.ab += ab;
        totals.hits += hits;
        totals.doubles += doubles;
        totals.triples += triples;
        totals.hr += hr;
    }

    // Template rows as exported by the scorebook: the viewer drops these.
    let mut blank = vec!["0".to_string(), String::new()];
    blank.extend(std::iter::repeat("0".to_string()).take(HEADER.len() - 2));
    writer.write_record(&blank)?;
    writer.write_record(vec![String::new(); HEADER.len()])?;

    writer.flush()?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn write_league(dir: &Path, totals: &Totals) -> Result<()> {
    let path = dir.join("league_stats.csv");
    let mut writer = csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["Statistic", "Total"])?;
    for (stat, total) in [
        ("PA", totals.pa),
        ("AB", totals.ab),
        ("Hits", totals.hits),
        ("Doubles", totals.doubles),
        ("Triples", totals.triples),
        ("HR", totals.hr),
    ] {
        writer.write_record([stat.to_string(), total.to_string()])?;
    }
    writer.flush()?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output_data"));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = Lcg(42);
    let mut totals = Totals::default();
    for team in TEAMS {
        write_team(&dir, team, &mut rng, &mut totals)?;
    }
    write_league(&dir, &totals)
}
