mod ticker;
mod zones;

use std::fmt;

use chrono::{DateTime, Datelike, Timelike, Utc};

pub use ticker::{TICK_INTERVAL, spawn_ticker};
pub use zones::{TIMEZONES, TimezoneEntry};

/// Text shown in every field before the first refresh.
pub const PLACEHOLDER: &str = "--";
/// Text shown in the year field before the first refresh.
pub const YEAR_PLACEHOLDER: &str = "----";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// Day/night classification attached to a display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

/// Stable role of a display field, used by renderers to address it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Hour,
    Minute,
    Second,
    AmPm,
    Weekday,
    Day,
    Month,
    Year,
}

impl FieldRole {
    pub const ALL: [FieldRole; 8] = [
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::AmPm,
        Self::Weekday,
        Self::Day,
        Self::Month,
        Self::Year,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::AmPm => "am-pm",
            Self::Weekday => "weekday",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Classifies a 12-hour clock reading as day or night.
///
/// Only the clock hour is consulted: 1-5 AM and 6-11 PM are night, as is
/// 12 AM; 6-11 AM, 12 PM and 1-5 PM are day.
pub fn classify(hour12: u32, meridiem: Meridiem) -> DayPhase {
    let am = meridiem == Meridiem::Am;
    let pm = meridiem == Meridiem::Pm;

    if am && (1..6).contains(&hour12) {
        return DayPhase::Night;
    }

    let is_day = (am && hour12 >= 6 && hour12 != 12) || (pm && hour12 < 6) || (pm && hour12 == 12);

    if is_day { DayPhase::Day } else { DayPhase::Night }
}

/// Rendered state for one [`TimezoneEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    entry:   TimezoneEntry,
    hour:    String,
    minute:  String,
    second:  String,
    am_pm:   String,
    weekday: String,
    day:     String,
    month:   String,
    year:    String,
    phase:   Option<DayPhase>,
}

impl ClockDisplay {
    /// Builds a display showing placeholders and no day/night flag.
    pub fn new(entry: TimezoneEntry) -> Self {
        Self {
            entry,
            hour: PLACEHOLDER.to_owned(),
            minute: PLACEHOLDER.to_owned(),
            second: PLACEHOLDER.to_owned(),
            am_pm: PLACEHOLDER.to_owned(),
            weekday: PLACEHOLDER.to_owned(),
            day: PLACEHOLDER.to_owned(),
            month: PLACEHOLDER.to_owned(),
            year: YEAR_PLACEHOLDER.to_owned(),
            phase: None,
        }
    }

    pub fn entry(&self) -> &TimezoneEntry {
        &self.entry
    }

    pub fn phase(&self) -> Option<DayPhase> {
        self.phase
    }

    /// Formats `now` in the entry's timezone and writes every field.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        let local = now.with_timezone(&self.entry.timezone);
        let (is_pm, hour12) = local.hour12();
        let meridiem = if is_pm { Meridiem::Pm } else { Meridiem::Am };

        self.hour = format!("{hour12:02}");
        self.minute = format!("{:02}", local.minute());
        self.second = format!("{:02}", local.second());
        self.am_pm = meridiem.as_str().to_owned();
        self.weekday = local.format("%a").to_string();
        self.day = local.day().to_string();
        self.month = local.format("%b").to_string();
        self.year = local.year().to_string();
        self.phase = Some(classify(hour12, meridiem));
    }

    pub fn field(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::Hour => &self.hour,
            FieldRole::Minute => &self.minute,
            FieldRole::Second => &self.second,
            FieldRole::AmPm => &self.am_pm,
            FieldRole::Weekday => &self.weekday,
            FieldRole::Day => &self.day,
            FieldRole::Month => &self.month,
            FieldRole::Year => &self.year,
        }
    }

    /// `09:15:30 PM`
    pub fn time_text(&self) -> String {
        format!(
            "{}:{}:{} {}",
            self.hour, self.minute, self.second, self.am_pm
        )
    }

    /// `Tue, 30 Jul 2024`
    pub fn date_text(&self) -> String {
        format!(
            "{}, {} {} {}",
            self.weekday, self.day, self.month, self.year
        )
    }
}

impl fmt::Display for ClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = format!("{}, {}", self.entry.city, self.entry.country);
        let phase = self.phase.map_or(PLACEHOLDER, DayPhase::as_str);

        write!(
            f,
            "{location:<24} {}  {:<17} [{phase}]",
            self.time_text(),
            self.date_text()
        )
    }
}

/// Owns one [`ClockDisplay`] per entry, in entry order.
#[derive(Debug, Clone)]
pub struct ClockRegistry {
    displays: Vec<ClockDisplay>,
}

impl ClockRegistry {
    /// Creates a display per entry and refreshes each one for `now`.
    pub fn new(entries: &[TimezoneEntry], now: DateTime<Utc>) -> Self {
        let displays = entries
            .iter()
            .map(|entry| {
                let mut display = ClockDisplay::new(*entry);
                display.refresh(now);
                display
            })
            .collect();

        Self {
            displays,
        }
    }

    /// Registry over [`TIMEZONES`].
    pub fn with_reference_zones(now: DateTime<Utc>) -> Self {
        Self::new(&TIMEZONES, now)
    }

    /// Refreshes every display for the same instant.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        for display in &mut self.displays {
            display.refresh(now);
        }
    }

    pub fn displays(&self) -> &[ClockDisplay] {
        &self.displays
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::Tz;

    use super::*;

    fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .expect("valid instant")
    }

    fn tokyo() -> TimezoneEntry {
        TIMEZONES[3]
    }

    /// UTC instant at which Tokyo (UTC+9, no DST) reads `hour24:00` on 2024-07-30.
    fn tokyo_at(hour24: u32) -> DateTime<Utc> {
        Tz::Asia__Tokyo
            .with_ymd_and_hms(2024, 7, 30, hour24, 0, 0)
            .single()
            .expect("valid local time")
            .with_timezone(&Utc)
    }

    fn phase_at(hour24: u32) -> Option<DayPhase> {
        let mut display = ClockDisplay::new(tokyo());
        display.refresh(tokyo_at(hour24));
        display.phase()
    }

    #[test]
    fn new_display_shows_placeholders() {
        let display = ClockDisplay::new(tokyo());

        for role in FieldRole::ALL {
            let expected = if role == FieldRole::Year { YEAR_PLACEHOLDER } else { PLACEHOLDER };
            assert_eq!(display.field(role), expected, "{}", role.as_str());
        }
        assert_eq!(display.phase(), None);
    }

    #[test]
    fn registry_preserves_entry_order() {
        let registry = ClockRegistry::with_reference_zones(utc(2024, 7, 30, 12, 15, 30));
        let rendered: Vec<_> = registry
            .displays()
            .iter()
            .map(|display| (display.entry().city, display.entry().country))
            .collect();

        assert_eq!(
            rendered,
            [
                ("Bangkok", "Thailand"),
                ("New York", "USA"),
                ("Los Angeles", "USA"),
                ("Tokyo", "Japan"),
                ("London", "UK"),
                ("Sydney", "Australia"),
                ("Dubai", "UAE"),
                ("Rio de Janeiro", "Brazil")
            ]
        );
        assert_eq!(registry.len(), TIMEZONES.len());
        assert!(registry.displays().iter().all(|display| display.phase().is_some()));
    }

    #[test]
    fn refresh_formats_tokyo_fields() {
        let mut display = ClockDisplay::new(tokyo());
        display.refresh(utc(2024, 7, 30, 12, 15, 30));

        assert_eq!(display.field(FieldRole::Hour), "09");
        assert_eq!(display.field(FieldRole::Minute), "15");
        assert_eq!(display.field(FieldRole::Second), "30");
        assert_eq!(display.field(FieldRole::AmPm), "PM");
        assert_eq!(display.field(FieldRole::Weekday), "Tue");
        assert_eq!(display.field(FieldRole::Day), "30");
        assert_eq!(display.field(FieldRole::Month), "Jul");
        assert_eq!(display.field(FieldRole::Year), "2024");
        assert_eq!(display.time_text(), "09:15:30 PM");
        assert_eq!(display.date_text(), "Tue, 30 Jul 2024");
        // 9 PM falls outside every day branch.
        assert_eq!(display.phase(), Some(DayPhase::Night));
    }

    #[test]
    fn refresh_crosses_date_line() {
        let mut display = ClockDisplay::new(TIMEZONES[2]);
        display.refresh(utc(2024, 7, 30, 3, 5, 9));

        assert_eq!(display.time_text(), "08:05:09 PM");
        assert_eq!(display.date_text(), "Mon, 29 Jul 2024");
    }

    #[test]
    fn day_of_month_is_not_padded() {
        let mut display = ClockDisplay::new(TIMEZONES[4]);
        display.refresh(utc(2024, 1, 5, 0, 30, 0));

        assert_eq!(display.field(FieldRole::Day), "5");
        assert_eq!(display.field(FieldRole::Hour), "12");
        assert_eq!(display.field(FieldRole::AmPm), "AM");
    }

    #[test]
    fn early_morning_is_night() {
        assert_eq!(phase_at(2), Some(DayPhase::Night));
        assert_eq!(phase_at(5), Some(DayPhase::Night));
    }

    #[test]
    fn midnight_is_night() {
        assert_eq!(phase_at(0), Some(DayPhase::Night));
    }

    #[test]
    fn noon_is_day() {
        assert_eq!(phase_at(12), Some(DayPhase::Day));
    }

    #[test]
    fn morning_and_afternoon_are_day() {
        assert_eq!(phase_at(6), Some(DayPhase::Day));
        assert_eq!(phase_at(11), Some(DayPhase::Day));
        assert_eq!(phase_at(13), Some(DayPhase::Day));
        assert_eq!(phase_at(17), Some(DayPhase::Day));
    }

    #[test]
    fn evening_is_night() {
        assert_eq!(phase_at(18), Some(DayPhase::Night));
        assert_eq!(phase_at(23), Some(DayPhase::Night));
    }

    #[test]
    fn classify_covers_every_reading() {
        let day_am: Vec<_> = (1..=12)
            .filter(|hour| classify(*hour, Meridiem::Am) == DayPhase::Day)
            .collect();
        let day_pm: Vec<_> = (1..=12)
            .filter(|hour| classify(*hour, Meridiem::Pm) == DayPhase::Day)
            .collect();

        assert_eq!(day_am, [6, 7, 8, 9, 10, 11]);
        assert_eq!(day_pm, [1, 2, 3, 4, 5, 12]);
    }

    #[test]
    fn refresh_is_idempotent_for_same_instant() {
        let now = utc(2024, 7, 30, 12, 15, 30);
        let mut registry = ClockRegistry::with_reference_zones(now);
        let first = registry.displays().to_vec();

        registry.tick(now);
        assert_eq!(registry.displays(), first.as_slice());
    }

    #[test]
    fn tick_advances_all_displays() {
        let mut registry = ClockRegistry::with_reference_zones(utc(2024, 7, 30, 12, 15, 30));
        registry.tick(utc(2024, 7, 30, 12, 15, 31));

        assert!(
            registry
                .displays()
                .iter()
                .all(|display| display.field(FieldRole::Second) == "31")
        );
    }

    #[test]
    fn display_line_includes_location_and_phase() {
        let mut display = ClockDisplay::new(tokyo());
        let placeholder_line = display.to_string();
        assert!(placeholder_line.contains("--:--:-- --"));
        assert!(placeholder_line.ends_with("[--]"));

        display.refresh(utc(2024, 7, 30, 12, 15, 30));
        let line = display.to_string();
        assert!(line.starts_with("Tokyo, Japan"));
        assert!(line.contains("09:15:30 PM"));
        assert!(line.contains("Tue, 30 Jul 2024"));
        assert!(line.ends_with("[night]"));
    }
}
