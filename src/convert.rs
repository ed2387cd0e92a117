//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::Datelike;

use dreamspell_calendar::{DateRange, GregorianDate, KinConfig};
use dreamspell_content::ContentTable;
use dreamspell_kin::Kin;

use crate::config::{AnchorToml, ContentToml, DreamspellConfig, RangeToml};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parses an output format name.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Picks JSON when the `--json` flag is set, otherwise the configured format.
pub fn output_format(json_flag: bool, config: &DreamspellConfig) -> Result<OutputFormat> {
    if json_flag {
        return Ok(OutputFormat::Json);
    }
    parse_format(&config.output.format)
}

/// Parses a `YYYY-MM-DD` date, naming the setting it came from on failure.
pub fn parse_date(s: &str, what: &str) -> Result<GregorianDate> {
    s.parse::<GregorianDate>()
        .with_context(|| format!("invalid {what}: {s:?}"))
}

/// Converts a chrono date into a [`GregorianDate`].
pub fn from_naive(date: chrono::NaiveDate) -> Result<GregorianDate> {
    let month = u8::try_from(date.month()).context("month does not fit in u8")?;
    let day = u8::try_from(date.day()).context("day does not fit in u8")?;
    GregorianDate::new(date.year(), month, day).context("invalid local date")
}

/// Today's date in the local time zone.
pub fn today() -> Result<GregorianDate> {
    from_naive(chrono::Local::now().date_naive())
}

/// Builds a [`DateRange`] from the TOML range section.
pub fn build_range(range: &RangeToml) -> Result<DateRange> {
    let min = parse_date(&range.min, "[range].min")?;
    let max = parse_date(&range.max, "[range].max")?;
    DateRange::new(min, max).context("invalid [range]")
}

/// Builds and validates a [`KinConfig`] from the anchor and range sections.
pub fn build_kin_config(anchor: &AnchorToml, range: &RangeToml) -> Result<KinConfig> {
    let date = parse_date(&anchor.date, "[anchor].date")?;
    let kin = Kin::new(anchor.kin).context("invalid [anchor].kin")?;
    let cfg = KinConfig::new(date, kin).with_range(build_range(range)?);
    cfg.validate().context("invalid [anchor]")?;
    Ok(cfg)
}

/// Loads the configured content table, or the built-in one.
pub fn load_content(content: &ContentToml) -> Result<ContentTable> {
    match content.path {
        Some(ref path) => ContentTable::from_path(path)
            .with_context(|| format!("failed to load content table: {}", path.display())),
        None => ContentTable::builtin().context("failed to load built-in content table"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreamspell_calendar::{CANONICAL_ANCHOR_DATE, CANONICAL_ANCHOR_KIN};

    #[test]
    fn formats() {
        assert_eq!(parse_format("text").unwrap(), OutputFormat::Text);
        assert_eq!(parse_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_format("yaml").is_err());
    }

    #[test]
    fn json_flag_wins() {
        let mut cfg = DreamspellConfig::default();
        cfg.output.format = "text".to_string();
        assert_eq!(output_format(true, &cfg).unwrap(), OutputFormat::Json);
        assert_eq!(output_format(false, &cfg).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn default_sections_give_canonical_config() {
        let cfg = build_kin_config(&AnchorToml::default(), &RangeToml::default()).unwrap();
        assert_eq!(cfg.anchor_date(), CANONICAL_ANCHOR_DATE);
        assert_eq!(cfg.anchor_kin(), CANONICAL_ANCHOR_KIN);
        assert_eq!(cfg.range().max(), GregorianDate::new(5000, 12, 31).unwrap());
    }

    #[test]
    fn bad_anchor_kin() {
        let anchor = AnchorToml {
            kin: 0,
            ..AnchorToml::default()
        };
        let err = build_kin_config(&anchor, &RangeToml::default()).unwrap_err();
        assert!(format!("{err:#}").contains("[anchor].kin"));
    }

    #[test]
    fn leap_day_anchor_rejected() {
        let anchor = AnchorToml {
            date: "2024-02-29".to_string(),
            kin: 1,
        };
        assert!(build_kin_config(&anchor, &RangeToml::default()).is_err());
    }

    #[test]
    fn inverted_range_rejected() {
        let range = RangeToml {
            min: "2000-01-01".to_string(),
            max: "1999-12-31".to_string(),
        };
        assert!(build_range(&range).is_err());
    }

    #[test]
    fn bad_date_names_setting() {
        let err = parse_date("2024-13-01", "[range].min").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("[range].min"));
        assert!(msg.contains("2024-13-01"));
    }

    #[test]
    fn naive_conversion() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let d = from_naive(naive).unwrap();
        assert_eq!(d.to_string(), "2024-02-29");
    }

    #[test]
    fn content_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, r#"{ "seals": [{ "id": 1, "name": "Drache" }] }"#).unwrap();
        let table = load_content(&ContentToml { path: Some(path) }).unwrap();
        assert_eq!(table.seal_name(dreamspell_kin::Seal::new(1).unwrap()), "Drache");
    }

    #[test]
    fn builtin_content_by_default() {
        let table = load_content(&ContentToml::default()).unwrap();
        assert_eq!(table.seal_count(), 20);
    }
}
