//! Kin command: seal, tone, oracle and cycles of one Kin.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dreamspell_kin::Kin;

use crate::cli::KinArgs;
use crate::config::DreamspellConfig;
use crate::convert::{self, OutputFormat};
use crate::panels::{self, PanelContext};
use crate::pulse::KinReport;

pub fn run(args: KinArgs, config: &DreamspellConfig) -> Result<()> {
    let _cmd = info_span!("kin").entered();
    let format = convert::output_format(args.json, config)?;
    let kin = Kin::new(args.kin).with_context(|| format!("invalid kin {}", args.kin))?;
    let content = convert::load_content(&config.content)?;

    let report = KinReport::new(kin, &content);
    info!(
        kin = kin.get(),
        seal = kin.seal().get(),
        tone = kin.tone().get(),
        "kin resolved"
    );

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            let selected = panels::resolve(&config.output.panels)?;
            let ctx = PanelContext {
                date: None,
                moon: None,
                report: Some(&report),
                content: &content,
            };
            println!("{}", panels::render_all(&selected, &ctx)?);
        }
    }
    Ok(())
}
