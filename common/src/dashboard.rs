//! Reservation filters of the dashboard.
//!
//! The court-name filter and the day range are debounced independently, so
//! typing a name does not restart the date timer and vice versa. Once a
//! value is committed the page rebuilds its [`ReservaQuery`] and fetches.

use crate::api::{ApiRequest, ReservaSearch};
use crate::debounce::{Debounced, Scheduler, Tick};

/// Bounds of the day filter, as entered (`YYYY-MM-DD` or empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayRange {
    pub low: String,
    pub high: String,
}

/// A fired timer of one of the debounced filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTick {
    CourtName(Tick),
    Days(Tick),
}

pub struct ReservaFilters<H> {
    court_name: Debounced<String, H>,
    days: Debounced<DayRange, H>,
    last_day: String,
}

impl<H> Default for ReservaFilters<H> {
    fn default() -> Self {
        Self {
            court_name: Debounced::new(String::new()),
            days: Debounced::new(DayRange::default()),
            last_day: String::new(),
        }
    }
}

impl<H> ReservaFilters<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn court_name(&self) -> &str {
        self.court_name.live()
    }

    pub fn days(&self) -> &DayRange {
        self.days.live()
    }

    pub fn set_court_name<S>(
        &mut self,
        value: String,
        scheduler: &S,
        notify: impl FnOnce(FilterTick) + 'static,
    ) where
        S: Scheduler<Handle = H>,
    {
        self.court_name
            .set(value, scheduler, move |tick| notify(FilterTick::CourtName(tick)));
    }

    pub fn set_day<S>(&mut self, value: String, scheduler: &S, notify: impl FnOnce(FilterTick) + 'static)
    where
        S: Scheduler<Handle = H>,
    {
        let range = DayRange {
            low: value.clone(),
            high: self.days.live().high.clone(),
        };
        self.last_day = value;
        self.set_days(range, scheduler, notify);
    }

    pub fn set_day_max<S>(
        &mut self,
        value: String,
        scheduler: &S,
        notify: impl FnOnce(FilterTick) + 'static,
    ) where
        S: Scheduler<Handle = H>,
    {
        let range = DayRange {
            low: self.days.live().low.clone(),
            high: value.clone(),
        };
        self.last_day = value;
        self.set_days(range, scheduler, notify);
    }

    /// An inverted range is not rejected: both bounds snap back to the day
    /// edited last and that single day is what gets debounced. Bounds compare
    /// as strings, so an empty upper bound also snaps.
    fn set_days<S>(&mut self, mut range: DayRange, scheduler: &S, notify: impl FnOnce(FilterTick) + 'static)
    where
        S: Scheduler<Handle = H>,
    {
        if range.low > range.high {
            log::debug!(
                "inverted day range {}:{}, snapping to {}",
                range.low,
                range.high,
                self.last_day
            );
            range = DayRange {
                low: self.last_day.clone(),
                high: self.last_day.clone(),
            };
        }
        self.days
            .set(range, scheduler, move |tick| notify(FilterTick::Days(tick)));
    }

    /// Feeds back a fired timer. Returns `true` when the committed filters
    /// changed and the reservations should be fetched again.
    pub fn expire(&mut self, tick: FilterTick) -> bool {
        match tick {
            FilterTick::CourtName(tick) => self.court_name.expire(tick),
            FilterTick::Days(tick) => self.days.expire(tick),
        }
    }

    pub fn query(&self) -> ReservaQuery {
        ReservaQuery::from_committed(self.court_name.committed(), self.days.committed())
    }
}

/// The reservation listing to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservaQuery {
    All,
    Filtered {
        nom_cancha: Option<String>,
        dia: Option<String>,
    },
}

impl ReservaQuery {
    /// A name or a lower day bound selects the search endpoint. The day
    /// criterion is a `low:high` range when `low < high`, else `low` alone.
    pub fn from_committed(court_name: &str, days: &DayRange) -> Self {
        let nom_cancha = (!court_name.is_empty()).then(|| court_name.to_string());
        let dia = (!days.low.is_empty()).then(|| {
            if days.low < days.high {
                format!("{}:{}", days.low, days.high)
            } else {
                days.low.clone()
            }
        });

        if nom_cancha.is_none() && dia.is_none() {
            ReservaQuery::All
        } else {
            ReservaQuery::Filtered { nom_cancha, dia }
        }
    }

    pub fn request(&self) -> ApiRequest {
        match self {
            ReservaQuery::All => ApiRequest::list_reservas(),
            ReservaQuery::Filtered { nom_cancha, dia } => ApiRequest::search_reservas(&ReservaSearch {
                nom_cancha: nom_cancha.clone(),
                dia: dia.clone(),
                id_cancha: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::api::Method;
    use crate::debounce::DEBOUNCE_DELAY;
    use crate::debounce::manual::{ManualHandle, ManualScheduler};

    struct Harness {
        scheduler: ManualScheduler,
        ticks: Rc<RefCell<Vec<FilterTick>>>,
        filters: ReservaFilters<ManualHandle>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                scheduler: ManualScheduler::new(),
                ticks: Default::default(),
                filters: ReservaFilters::new(),
            }
        }

        fn notify(&self) -> impl FnOnce(FilterTick) + 'static {
            let ticks = self.ticks.clone();
            move |tick| ticks.borrow_mut().push(tick)
        }

        fn name(&mut self, value: &str) {
            let notify = self.notify();
            self.filters.set_court_name(value.into(), &self.scheduler, notify);
        }

        fn day(&mut self, value: &str) {
            let notify = self.notify();
            self.filters.set_day(value.into(), &self.scheduler, notify);
        }

        fn day_max(&mut self, value: &str) {
            let notify = self.notify();
            self.filters.set_day_max(value.into(), &self.scheduler, notify);
        }

        /// Lets every timer fire; returns how many fetches were triggered.
        fn settle(&mut self) -> usize {
            self.scheduler.advance(DEBOUNCE_DELAY);
            let fired: Vec<FilterTick> = self.ticks.borrow_mut().drain(..).collect();
            fired.into_iter().filter(|tick| self.filters.expire(*tick)).count()
        }
    }

    #[test]
    fn unfiltered_listing_by_default() {
        let harness = Harness::new();
        let request = harness.filters.query().request();

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/reservas/");
    }

    #[test]
    fn typing_a_name_commits_once() {
        let mut harness = Harness::new();
        harness.name("C");
        harness.name("Ce");
        harness.name("Cen*");

        assert_eq!(harness.settle(), 1);
        assert_eq!(
            harness.filters.query().request().to_string(),
            "GET /reservas/q/?nom_cancha=Cen*"
        );
    }

    #[test]
    fn ordered_range_is_sent_as_low_high() {
        let mut harness = Harness::new();
        harness.day_max("2024-05-20");
        harness.day("2024-05-10");

        assert_eq!(harness.settle(), 1);
        assert_eq!(
            harness.filters.query(),
            ReservaQuery::Filtered {
                nom_cancha: None,
                dia: Some("2024-05-10:2024-05-20".into()),
            }
        );
    }

    #[test]
    fn inverted_range_snaps_to_last_edited_day() {
        let mut harness = Harness::new();
        harness.day_max("2024-05-01");
        harness.settle();
        harness.day("2024-05-10");

        let days = harness.filters.days().clone();
        assert_eq!(days.low, "2024-05-10");
        assert_eq!(days.high, "2024-05-10");

        harness.settle();
        assert_eq!(
            harness.filters.query().request().query_value("dia"),
            Some("2024-05-10")
        );
    }

    #[test]
    fn lone_low_bound_snaps_upper_bound() {
        let mut harness = Harness::new();
        harness.day("2024-06-01");

        assert_eq!(harness.filters.days().high, "2024-06-01");
        harness.settle();
        assert_eq!(
            harness.filters.query().request().query_value("dia"),
            Some("2024-06-01")
        );
    }

    #[test]
    fn name_and_day_debounce_independently() {
        let mut harness = Harness::new();
        harness.name("Central");
        harness.scheduler.advance(DEBOUNCE_DELAY / 2);
        harness.day_max("2024-07-01");

        assert_eq!(harness.settle(), 2);

        let request = harness.filters.query().request();
        assert_eq!(request.query_value("nom_cancha"), Some("Central"));
        // an upper bound alone does not filter
        assert_eq!(request.query_value("dia"), None);
    }

    #[test]
    fn clearing_filters_returns_to_full_listing() {
        let mut harness = Harness::new();
        harness.name("Central");
        harness.settle();
        harness.name("");
        harness.settle();

        assert_eq!(harness.filters.query(), ReservaQuery::All);
    }
}
