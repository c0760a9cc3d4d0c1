//! Expansion of a zone's weekly rules into dated pickups.

use chrono::{Datelike, NaiveDate};

use crate::model::{
    AlternatingCollection, Collection, DateRange, PickupEvent, SeasonDay, SeasonalCollection,
    ZoneSchedule,
};

/// Week of the year counted in Sunday-started weeks, the week of January 1 being 1.
#[must_use]
pub fn week_number(date: NaiveDate) -> u32 {
    let first_weekday = date
        .with_ordinal(1)
        .map_or(0, |new_year| new_year.weekday().num_days_from_sunday());
    (date.ordinal0() + first_weekday + 1).div_ceil(7)
}

impl SeasonalCollection {
    /// Whether the date lies within the season; a season ending before it starts wraps
    /// over the new year.
    #[must_use]
    pub fn in_season(&self, date: NaiveDate) -> bool {
        let today = SeasonDay::of(date);
        if self.season_start <= self.season_end {
            self.season_start <= today && today <= self.season_end
        } else {
            today >= self.season_start || today <= self.season_end
        }
    }
}

impl AlternatingCollection {
    /// Stream collected in the week of `date`.
    #[must_use]
    pub fn stream_for(&self, date: NaiveDate) -> &str {
        if week_number(date) % 2 == 0 {
            &self.even_week
        } else {
            &self.odd_week
        }
    }
}

impl ZoneSchedule {
    /// Every collection on `date`: garbage, then recycling, then yard waste.
    #[must_use]
    pub fn collections_on(&self, date: NaiveDate) -> Vec<PickupEvent> {
        let weekday = date.weekday();
        let mut events = Vec::new();

        if self.garbage.days.contains(&weekday) {
            events.push(PickupEvent {
                date,
                collection: Collection::Garbage,
                note: self
                    .garbage
                    .time
                    .as_ref()
                    .map(|time| format!("Collection starts at {time}")),
            });
        }

        if self.recycling.day == weekday {
            events.push(PickupEvent {
                date,
                collection: Collection::Recycling(self.recycling.stream_for(date).to_owned()),
                note: None,
            });
        }

        if let Some(yard_waste) = &self.yard_waste
            && yard_waste.days.contains(&weekday)
            && yard_waste.in_season(date)
        {
            events.push(PickupEvent {
                date,
                collection: Collection::YardWaste,
                note: None,
            });
        }

        events
    }
}

/// All pickups within the inclusive range, ordered by date.
#[must_use]
pub fn pickups(schedule: &ZoneSchedule, range: DateRange) -> Vec<PickupEvent> {
    range
        .start
        .iter_days()
        .take_while(|date| *date <= range.end)
        .flat_map(|date| schedule.collections_on(date))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WeeklyCollection;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn oradell_schedule() -> ZoneSchedule {
        ZoneSchedule {
            garbage: WeeklyCollection {
                days: vec![Weekday::Mon, Weekday::Thu],
                time: Some("6:00 AM".to_owned()),
            },
            recycling: AlternatingCollection {
                day: Weekday::Wed,
                even_week: "Commingled".to_owned(),
                odd_week: "Paper & Cardboard".to_owned(),
            },
            yard_waste: Some(SeasonalCollection {
                days: vec![Weekday::Mon],
                season_start: SeasonDay { month: 4, day: 1 },
                season_end: SeasonDay { month: 10, day: 31 },
            }),
        }
    }

    #[test]
    fn week_numbers_start_on_sunday() {
        // 2026-01-01 is a Thursday; the following Sunday opens week 2.
        assert_eq!(week_number(date(2026, 1, 1)), 1);
        assert_eq!(week_number(date(2026, 1, 3)), 1);
        assert_eq!(week_number(date(2026, 1, 4)), 2);
        assert_eq!(week_number(date(2026, 12, 31)), 53);
    }

    #[test]
    fn recycling_alternates_by_week() {
        let schedule = oradell_schedule();
        assert_eq!(schedule.recycling.stream_for(date(2026, 1, 7)), "Commingled");
        assert_eq!(schedule.recycling.stream_for(date(2026, 1, 14)), "Paper & Cardboard");
    }

    #[test]
    fn yard_waste_only_in_season() {
        let schedule = oradell_schedule();
        let monday_in_may = schedule.collections_on(date(2026, 5, 4));
        let monday_in_december = schedule.collections_on(date(2026, 12, 7));

        assert_eq!(
            monday_in_may
                .iter()
                .map(|event| &event.collection)
                .collect::<Vec<_>>(),
            vec![&Collection::Garbage, &Collection::YardWaste]
        );
        assert_eq!(monday_in_december.len(), 1);
    }

    #[test]
    fn winter_season_wraps_year_end() {
        let season = SeasonalCollection {
            days: vec![Weekday::Sat],
            season_start: SeasonDay { month: 12, day: 1 },
            season_end: SeasonDay { month: 1, day: 15 },
        };
        assert!(season.in_season(date(2026, 12, 24)));
        assert!(season.in_season(date(2027, 1, 10)));
        assert!(!season.in_season(date(2027, 2, 1)));
    }

    #[test]
    fn week_of_pickups() {
        let schedule = oradell_schedule();
        let range = DateRange {
            start: date(2026, 10, 12),
            end: date(2026, 10, 18),
        };

        let events = pickups(&schedule, range);
        let summary: Vec<(NaiveDate, Collection)> = events
            .into_iter()
            .map(|event| (event.date, event.collection))
            .collect();

        assert_eq!(
            summary,
            vec![
                (date(2026, 10, 12), Collection::Garbage),
                (date(2026, 10, 12), Collection::YardWaste),
                (date(2026, 10, 14), Collection::Recycling("Commingled".to_owned())),
                (date(2026, 10, 15), Collection::Garbage),
            ]
        );
    }

    #[test]
    fn empty_range_has_no_pickups() {
        let range = DateRange {
            start: date(2026, 10, 18),
            end: date(2026, 10, 12),
        };
        assert!(pickups(&oradell_schedule(), range).is_empty());
    }
}
