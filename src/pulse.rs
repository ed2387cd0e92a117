//! The joined record for one day or one Kin.

use serde::Serialize;

use dreamspell_calendar::{CalendarError, DayKin, GregorianDate, KinConfig, MoonDay, moon_day};
use dreamspell_content::ContentTable;
use dreamspell_cycles::CycleAnnotation;
use dreamspell_kin::{Color, Kin, Seal, Tone};
use dreamspell_oracle::Oracle;

/// Everything derived from a single Kin, with content names resolved.
#[derive(Debug, Clone, Serialize)]
pub struct KinReport {
    pub kin: Kin,
    pub seal: Seal,
    pub tone: Tone,
    pub color: Color,
    pub seal_name: String,
    pub tone_name: String,
    pub oracle: Oracle,
    pub cycles: CycleAnnotation,
}

impl KinReport {
    pub fn new(kin: Kin, content: &ContentTable) -> Self {
        let seal = kin.seal();
        let tone = kin.tone();
        Self {
            kin,
            seal,
            tone,
            color: seal.color(),
            seal_name: content.seal_name(seal),
            tone_name: content.tone_name(tone),
            oracle: Oracle::of(kin),
            cycles: CycleAnnotation::of(kin),
        }
    }
}

/// The pulse of a calendar day.
///
/// `report` is absent on February 29, which has no Kin.
#[derive(Debug, Clone, Serialize)]
pub struct Pulse {
    pub date: GregorianDate,
    pub kin: DayKin,
    pub is_leap_day: bool,
    pub is_day_out_of_time: bool,
    pub moon: MoonDay,
    pub report: Option<KinReport>,
}

impl Pulse {
    pub fn for_date(
        date: GregorianDate,
        config: &KinConfig,
        content: &ContentTable,
    ) -> Result<Self, CalendarError> {
        let kin = config.kin_of(date)?;
        let moon = moon_day(date);
        Ok(Self {
            date,
            kin,
            is_leap_day: kin.is_out_of_cycle(),
            is_day_out_of_time: matches!(moon, MoonDay::DayOutOfTime { .. }),
            moon,
            report: kin.kin().map(|k| KinReport::new(k, content)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn regular_day() {
        let content = ContentTable::builtin().unwrap();
        let pulse = Pulse::for_date(date(1986, 5, 19), &KinConfig::default(), &content).unwrap();
        assert_eq!(pulse.kin.value(), 121);
        assert!(!pulse.is_leap_day);
        assert!(!pulse.is_day_out_of_time);
        let report = pulse.report.unwrap();
        assert_eq!(report.seal_name, "Red Dragon");
        assert_eq!(report.tone_name, "Self-Existing");
        assert_eq!(report.color, Color::Red);
        assert_eq!(report.oracle.guide.get(), 17);
    }

    #[test]
    fn leap_day_has_no_report() {
        let content = ContentTable::builtin().unwrap();
        let pulse = Pulse::for_date(date(2024, 2, 29), &KinConfig::default(), &content).unwrap();
        assert!(pulse.is_leap_day);
        assert_eq!(pulse.moon, MoonDay::HunabKu);
        assert!(pulse.report.is_none());
    }

    #[test]
    fn day_out_of_time_flag() {
        let content = ContentTable::builtin().unwrap();
        let pulse = Pulse::for_date(date(2013, 7, 25), &KinConfig::default(), &content).unwrap();
        assert!(pulse.is_day_out_of_time);
        assert_eq!(pulse.kin.value(), 163);
    }

    #[test]
    fn json_shape() {
        let content = ContentTable::builtin().unwrap();
        let pulse = Pulse::for_date(date(2000, 1, 1), &KinConfig::default(), &content).unwrap();
        let value = serde_json::to_value(&pulse).unwrap();
        assert_eq!(value["date"], "2000-01-01");
        assert_eq!(value["kin"], 153);
        assert_eq!(value["report"]["seal"], 13);
        assert_eq!(value["report"]["tone"], 10);
        assert_eq!(value["report"]["oracle"]["antipode"], 23);
        assert_eq!(value["moon"]["kind"], "moon");
    }
}
