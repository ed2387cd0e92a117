//! Text panels.
//!
//! Panels are registered statically in [`REGISTRY`] and selected by name from
//! the `[output].panels` config list.

use std::fmt::Write as _;

use anyhow::{Result, bail};

use dreamspell_calendar::{GregorianDate, MoonDay};
use dreamspell_content::{ContentTable, Psychology};
use dreamspell_kin::Kin;

use crate::pulse::KinReport;

/// What a panel gets to render from.
///
/// `date` and `moon` are only present when rendering a calendar day.
/// `report` is absent on February 29.
pub struct PanelContext<'a> {
    pub date: Option<GregorianDate>,
    pub moon: Option<MoonDay>,
    pub report: Option<&'a KinReport>,
    pub content: &'a ContentTable,
}

pub trait Panel: Sync {
    /// Name used in the config panel list.
    fn name(&self) -> &'static str;

    /// One-line description for `dreamspell panels`.
    fn description(&self) -> &'static str;

    /// Renders the panel. An empty string means the panel has nothing to
    /// show for this context.
    fn render(&self, ctx: &PanelContext<'_>) -> Result<String>;
}

struct IdentityPanel;
struct OraclePanel;
struct CyclesPanel;
struct MoonPanel;
struct EssencePanel;

/// All available panels, in listing order.
pub static REGISTRY: &[&dyn Panel] = &[
    &IdentityPanel,
    &OraclePanel,
    &CyclesPanel,
    &MoonPanel,
    &EssencePanel,
];

/// Looks up each configured name in the registry, keeping config order.
pub fn resolve(names: &[String]) -> Result<Vec<&'static dyn Panel>> {
    names
        .iter()
        .map(|name| match REGISTRY.iter().find(|p| p.name() == name.as_str()) {
            Some(panel) => Ok(*panel),
            None => {
                let known: Vec<_> = REGISTRY.iter().map(|p| p.name()).collect();
                bail!("unknown panel {name:?} (available: {})", known.join(", "))
            }
        })
        .collect()
}

/// Renders `panels` in order, separated by blank lines. Empty panels are
/// skipped.
pub fn render_all(panels: &[&dyn Panel], ctx: &PanelContext<'_>) -> Result<String> {
    let mut blocks = Vec::with_capacity(panels.len());
    for panel in panels {
        let text = panel.render(ctx)?;
        if !text.is_empty() {
            blocks.push(text);
        }
    }
    Ok(blocks.join("\n\n"))
}

fn kin_label(kin: Kin, content: &ContentTable) -> String {
    format!(
        "Kin {:>3}  {} / {}",
        kin.get(),
        content.seal_name(kin.seal()),
        content.tone_name(kin.tone())
    )
}

impl Panel for IdentityPanel {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn description(&self) -> &'static str {
        "date, Kin, seal, tone and color"
    }

    fn render(&self, ctx: &PanelContext<'_>) -> Result<String> {
        let mut out = String::new();
        if let Some(date) = ctx.date {
            writeln!(out, "Date      {date}")?;
        }
        match ctx.report {
            Some(r) => {
                writeln!(out, "Kin       {}", r.kin.get())?;
                writeln!(out, "Seal      {} ({})", r.seal_name, r.seal.get())?;
                writeln!(out, "Tone      {} ({})", r.tone_name, r.tone.get())?;
                write!(out, "Color     {}", r.color)?;
            }
            None => write!(out, "Kin       0 (Hunab Ku, outside the 260-day count)")?,
        }
        Ok(out)
    }
}

impl Panel for OraclePanel {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn description(&self) -> &'static str {
        "destiny with guide, analog, antipode and occult"
    }

    fn render(&self, ctx: &PanelContext<'_>) -> Result<String> {
        let Some(r) = ctx.report else {
            return Ok(String::new());
        };
        let o = &r.oracle;
        let rows = [
            ("Destiny", o.destiny),
            ("Guide", o.guide),
            ("Analog", o.analog),
            ("Antipode", o.antipode),
            ("Occult", o.occult),
        ];
        let lines: Vec<String> = rows
            .iter()
            .map(|(label, kin)| format!("{label:<9} {}", kin_label(*kin, ctx.content)))
            .collect();
        Ok(lines.join("\n"))
    }
}

impl Panel for CyclesPanel {
    fn name(&self) -> &'static str {
        "cycles"
    }

    fn description(&self) -> &'static str {
        "harmonic, chromatic, wavespell, castle, season, spin, family and time cell"
    }

    fn render(&self, ctx: &PanelContext<'_>) -> Result<String> {
        let Some(r) = ctx.report else {
            return Ok(String::new());
        };
        let c = &r.cycles;
        let mut out = String::new();
        writeln!(
            out,
            "Harmonic  {:>2}  {}/4  {}",
            c.harmonic.index, c.harmonic.position, c.harmonic.color
        )?;
        writeln!(
            out,
            "Chromatic {:>2}  {}/5  {}",
            c.chromatic.index, c.chromatic.position, c.chromatic.color
        )?;
        writeln!(
            out,
            "Wavespell {:>2}  {}/13  {} wavespell, {:.0}%, Kin {}..={}",
            c.wavespell.index,
            c.wavespell.position,
            ctx.content.seal_name(c.wavespell.seal),
            c.wavespell.progress(),
            c.wavespell.start.get(),
            c.wavespell.end.get()
        )?;
        writeln!(
            out,
            "Castle    {:>2}  day {}/52  {} castle of {}",
            c.castle.index + 1,
            c.castle.day,
            c.castle.color,
            c.castle.name()
        )?;
        writeln!(
            out,
            "Season    {:>2}  day {}/65  {} ({})",
            c.season.index + 1,
            c.season.day,
            c.season.color,
            c.season.direction()
        )?;
        writeln!(out, "Spin          {}", c.spin)?;
        writeln!(out, "Family        {}", c.family)?;
        write!(
            out,
            "Time cell     {} {}/4",
            c.time_cell,
            dreamspell_cycles::TimeCell::position(r.seal)
        )?;
        Ok(out)
    }
}

impl Panel for MoonPanel {
    fn name(&self) -> &'static str {
        "moon"
    }

    fn description(&self) -> &'static str {
        "13-Moon calendar position"
    }

    fn render(&self, ctx: &PanelContext<'_>) -> Result<String> {
        let text = match ctx.moon {
            None => String::new(),
            Some(MoonDay::Moon(m)) => {
                let tone = dreamspell_kin::Tone::new(m.moon)?;
                format!(
                    "Moon      {} ({}) day {}/28, week {} ({}), plasma {}\nYear      {}-{}",
                    m.moon,
                    ctx.content.tone_name(tone),
                    m.day,
                    m.week,
                    m.week_color(),
                    m.plasma,
                    m.year,
                    m.year + 1
                )
            }
            Some(MoonDay::DayOutOfTime { year }) => {
                format!("Moon      Day Out of Time, closing {}-{}", year, year + 1)
            }
            Some(MoonDay::HunabKu) => "Moon      Hunab Ku 0.0".to_string(),
        };
        Ok(text)
    }
}

impl Panel for EssencePanel {
    fn name(&self) -> &'static str {
        "essence"
    }

    fn description(&self) -> &'static str {
        "action, power, essence and psychology of seal and tone from the content table"
    }

    fn render(&self, ctx: &PanelContext<'_>) -> Result<String> {
        let Some(r) = ctx.report else {
            return Ok(String::new());
        };
        let mut out = String::new();
        if let Some(seal) = ctx.content.seal(r.seal) {
            write_attrs(
                &mut out,
                &seal.name,
                [seal.action.as_deref(), seal.power.as_deref(), seal.essence.as_deref()],
            )?;
            write_psychology(&mut out, seal.psychology.as_ref())?;
        }
        if let Some(tone) = ctx.content.tone(r.tone) {
            write_attrs(
                &mut out,
                &tone.name,
                [tone.action.as_deref(), tone.power.as_deref(), tone.essence.as_deref()],
            )?;
            write_psychology(&mut out, tone.psychology.as_ref())?;
        }
        Ok(out.trim_end().to_string())
    }
}

fn write_attrs(out: &mut String, name: &str, attrs: [Option<&str>; 3]) -> std::fmt::Result {
    let parts: Vec<&str> = attrs.into_iter().flatten().collect();
    if !parts.is_empty() {
        writeln!(out, "{name:<18} {}", parts.join(" / "))?;
    }
    Ok(())
}

fn write_psychology(out: &mut String, psychology: Option<&Psychology>) -> std::fmt::Result {
    let Some(p) = psychology else {
        return Ok(());
    };
    let rows = [("Light", &p.light), ("Shadow", &p.shadow), ("Healing", &p.healing)];
    for (label, text) in rows {
        if let Some(text) = text {
            writeln!(out, "  {label:<16} {text}")?;
        }
    }
    Ok(())
}
