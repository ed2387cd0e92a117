//! Sequence command: date to Kin table over consecutive days.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dreamspell_calendar::{DatedKin, DayKin, kin_sequence};
use dreamspell_content::ContentTable;

use crate::cli::SequenceArgs;
use crate::config::DreamspellConfig;
use crate::convert::{self, OutputFormat};

pub fn run(args: SequenceArgs, config: &DreamspellConfig) -> Result<()> {
    let _cmd = info_span!("sequence").entered();
    let format = convert::output_format(args.json, config)?;
    let kin_config = convert::build_kin_config(&config.anchor, &config.range)?;
    let start = convert::parse_date(&args.start, "--start")?;

    let days = kin_sequence(start, args.days, &kin_config)
        .with_context(|| format!("failed to build sequence from {start}"))?;
    info!(start = %start, n_days = days.len(), "sequence computed");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&days)?),
        OutputFormat::Text => {
            let content = convert::load_content(&config.content)?;
            print!("{}", format_table(&days, &content));
        }
    }
    Ok(())
}

/// One line per day: date, Kin, seal and tone names.
fn format_table(days: &[DatedKin], content: &ContentTable) -> String {
    let mut out = String::new();
    for day in days {
        let line = match day.kin {
            DayKin::InCycle(kin) => format!(
                "{}  {:>3}  {} / {}\n",
                day.date,
                kin.get(),
                content.seal_name(kin.seal()),
                content.tone_name(kin.tone())
            ),
            DayKin::OutOfCycle => format!("{}    0  Hunab Ku\n", day.date),
        };
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreamspell_calendar::{GregorianDate, KinConfig};

    #[test]
    fn table_marks_leap_day() {
        let content = ContentTable::builtin().unwrap();
        let start = GregorianDate::new(2024, 2, 28).unwrap();
        let days = kin_sequence(start, 3, &KinConfig::default()).unwrap();
        let table = format_table(&days, &content);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2024-02-29    0  Hunab Ku");
        assert!(lines[2].starts_with("2024-03-01  132  "));
    }
}
