//! Day command: the pulse of one calendar day.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::DayArgs;
use crate::config::DreamspellConfig;
use crate::convert::{self, OutputFormat};
use crate::panels::{self, PanelContext};
use crate::pulse::Pulse;

pub fn run(args: DayArgs, config: &DreamspellConfig) -> Result<()> {
    let _cmd = info_span!("day").entered();
    let format = convert::output_format(args.json, config)?;
    let kin_config = convert::build_kin_config(&config.anchor, &config.range)?;
    let content = convert::load_content(&config.content)?;

    let date = match args.date {
        Some(ref s) => convert::parse_date(s, "date")?,
        None => convert::today()?,
    };

    let pulse = Pulse::for_date(date, &kin_config, &content)
        .with_context(|| format!("failed to compute pulse for {date}"))?;
    info!(
        date = %date,
        kin = pulse.kin.value(),
        day_out_of_time = pulse.is_day_out_of_time,
        "pulse computed"
    );

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&pulse)?);
        }
        OutputFormat::Text => {
            let selected = panels::resolve(&config.output.panels)?;
            let ctx = PanelContext {
                date: Some(pulse.date),
                moon: Some(pulse.moon),
                report: pulse.report.as_ref(),
                content: &content,
            };
            println!("{}", panels::render_all(&selected, &ctx)?);
        }
    }
    Ok(())
}
