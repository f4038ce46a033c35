use chrono_tz::Tz;

/// One configured location shown as a clock card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneEntry {
    pub id:       &'static str,
    pub city:     &'static str,
    pub country:  &'static str,
    pub timezone: Tz
}

impl TimezoneEntry {
    pub const fn new(
        id: &'static str,
        city: &'static str,
        country: &'static str,
        timezone: Tz
    ) -> Self {
        Self {
            id,
            city,
            country,
            timezone
        }
    }

    /// IANA name of the entry's timezone, e.g. `Asia/Tokyo`.
    pub fn timezone_name(&self) -> &'static str {
        self.timezone.name()
    }
}

/// Locations rendered by the application, in display order.
pub const TIMEZONES: [TimezoneEntry; 8] = [
    TimezoneEntry::new("thailand", "Bangkok", "Thailand", Tz::Asia__Bangkok),
    TimezoneEntry::new("usa-ny", "New York", "USA", Tz::America__New_York),
    TimezoneEntry::new("usa-la", "Los Angeles", "USA", Tz::America__Los_Angeles),
    TimezoneEntry::new("japan", "Tokyo", "Japan", Tz::Asia__Tokyo),
    TimezoneEntry::new("uk", "London", "UK", Tz::Europe__London),
    TimezoneEntry::new("australia", "Sydney", "Australia", Tz::Australia__Sydney),
    TimezoneEntry::new("dubai", "Dubai", "UAE", Tz::Asia__Dubai),
    TimezoneEntry::new("rio", "Rio de Janeiro", "Brazil", Tz::America__Sao_Paulo)
];
