//! Restaurant and menu fixtures.
//!
//! # Example
//!
//! ```
//! use ruokala_test::fixture::{restaurant, FakeSource};
//!
//! let source = FakeSource::new(vec![restaurant("r1", "Myyrmäki", "Sodexo", 60.26, 24.84)]);
//! assert!(source.calls().is_empty());
//! ```

use ruokala_core::{
    Course, DailyMenu, DataSource, DayMenu, Endpoints, Location, MenuKind, RequestError,
    Restaurant, WeeklyMenu,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// Build a restaurant with placeholder address data.
pub fn restaurant(id: &str, name: &str, company: &str, latitude: f64, longitude: f64) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        company_id: None,
        name: name.to_string(),
        address: format!("{name}katu 1"),
        postal_code: "00100".to_string(),
        city: "Helsinki".to_string(),
        phone: "+358 9 123 456".to_string(),
        company: company.to_string(),
        location: Location::new(latitude, longitude),
    }
}

/// A small daily menu.
pub fn sample_daily_menu() -> DailyMenu {
    DailyMenu {
        courses: vec![
            Course::new("Lohikeitto").diets("L, G").price("2,95 €"),
            Course::new("Kasvispyörykät").diets("VEG"),
            Course::new("Jälkiruoka"),
        ],
    }
}

/// A two-day weekly menu.
pub fn sample_weekly_menu() -> WeeklyMenu {
    WeeklyMenu {
        days: vec![
            DayMenu {
                date: "Maanantai".to_string(),
                courses: vec![Course::new("Makaronilaatikko").price("2,95 €")],
            },
            DayMenu {
                date: "Tiistai".to_string(),
                courses: vec![Course::new("Broileripasta").diets("L")],
            },
        ],
    }
}

/// One request recorded by [`FakeSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    /// Restaurant list fetch
    Restaurants,
    /// Menu fetch
    Menu {
        /// Restaurant id
        id: String,
        /// Daily or weekly
        kind: MenuKind,
    },
}

/// In-memory data source that records every request.
///
/// Menus default to [`sample_daily_menu`] / [`sample_weekly_menu`]; unknown
/// restaurant ids answer with a 404.
#[derive(Debug)]
pub struct FakeSource {
    endpoints: Endpoints,
    restaurants: Vec<Restaurant>,
    daily: HashMap<String, DailyMenu>,
    failures: HashMap<String, RequestError>,
    weekly_failures: HashMap<String, RequestError>,
    list_failure: Option<RequestError>,
    calls: RefCell<Vec<SourceCall>>,
}

impl FakeSource {
    /// Create a source serving `restaurants`.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            endpoints: Endpoints::new("https://fake.invalid/api/v1", "fi"),
            restaurants,
            daily: HashMap::new(),
            failures: HashMap::new(),
            weekly_failures: HashMap::new(),
            list_failure: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Serve a specific daily menu for one restaurant.
    pub fn with_daily_menu(mut self, id: &str, menu: DailyMenu) -> Self {
        self.daily.insert(id.to_string(), menu);
        self
    }

    /// Fail every menu request for one restaurant.
    pub fn with_menu_failure(mut self, id: &str, error: RequestError) -> Self {
        self.failures.insert(id.to_string(), error);
        self
    }

    /// Fail only the weekly menu request for one restaurant.
    pub fn with_weekly_failure(mut self, id: &str, error: RequestError) -> Self {
        self.weekly_failures.insert(id.to_string(), error);
        self
    }

    /// Fail the restaurant list request.
    pub fn with_list_failure(mut self, error: RequestError) -> Self {
        self.list_failure = Some(error);
        self
    }

    /// Every request made so far, in order.
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.borrow().clone()
    }

    /// Menu requests made so far, in order.
    pub fn menu_calls(&self) -> Vec<(String, MenuKind)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                SourceCall::Menu { id, kind } => Some((id.clone(), *kind)),
                SourceCall::Restaurants => None,
            })
            .collect()
    }

    fn record(&self, call: SourceCall) {
        self.calls.borrow_mut().push(call);
    }

    fn check_menu(&self, id: &str, kind: MenuKind) -> Result<(), RequestError> {
        self.record(SourceCall::Menu {
            id: id.to_string(),
            kind,
        });
        let weekly_failure = match kind {
            MenuKind::Weekly => self.weekly_failures.get(id),
            MenuKind::Daily => None,
        };
        if let Some(error) = self.failures.get(id).or(weekly_failure) {
            return Err(error.clone());
        }
        if self.restaurants.iter().any(|r| r.id == id) {
            Ok(())
        } else {
            Err(RequestError::Status {
                url: self.endpoints.menu(id, kind),
                status: 404,
                status_text: "Not Found".to_string(),
            })
        }
    }
}

impl DataSource for FakeSource {
    async fn restaurants(&self) -> Result<Vec<Restaurant>, RequestError> {
        self.record(SourceCall::Restaurants);
        match &self.list_failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.restaurants.clone()),
        }
    }

    async fn daily_menu(&self, id: &str) -> Result<DailyMenu, RequestError> {
        self.check_menu(id, MenuKind::Daily)?;
        Ok(self.daily.get(id).cloned().unwrap_or_else(sample_daily_menu))
    }

    async fn weekly_menu(&self, id: &str) -> Result<WeeklyMenu, RequestError> {
        self.check_menu(id, MenuKind::Weekly)?;
        Ok(sample_weekly_menu())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_fake_source_records_calls() {
        let source = FakeSource::new(vec![restaurant("a", "A", "Sodexo", 0.0, 0.0)]);
        block_on(source.restaurants()).unwrap();
        block_on(source.daily_menu("a")).unwrap();
        block_on(source.weekly_menu("a")).unwrap();
        assert_eq!(
            source.calls(),
            vec![
                SourceCall::Restaurants,
                SourceCall::Menu { id: "a".to_string(), kind: MenuKind::Daily },
                SourceCall::Menu { id: "a".to_string(), kind: MenuKind::Weekly },
            ]
        );
    }

    #[test]
    fn test_fake_source_unknown_id_is_404() {
        let source = FakeSource::new(Vec::new());
        let err = block_on(source.daily_menu("nope")).unwrap_err();
        assert!(matches!(err, RequestError::Status { status: 404, .. }));
    }

    #[test]
    fn test_fake_source_configured_failure() {
        let source = FakeSource::new(vec![restaurant("a", "A", "Sodexo", 0.0, 0.0)])
            .with_menu_failure(
                "a",
                RequestError::Transport {
                    url: "u".to_string(),
                    message: "boom".to_string(),
                },
            );
        assert!(block_on(source.daily_menu("a")).is_err());
        assert_eq!(source.menu_calls().len(), 1);
    }

    #[test]
    fn test_fake_source_weekly_failure_keeps_daily() {
        let source = FakeSource::new(vec![restaurant("a", "A", "Sodexo", 0.0, 0.0)])
            .with_weekly_failure(
                "a",
                RequestError::Transport {
                    url: "u".to_string(),
                    message: "boom".to_string(),
                },
            );
        assert!(block_on(source.daily_menu("a")).is_ok());
        assert!(block_on(source.weekly_menu("a")).is_err());
    }

    #[test]
    fn test_fake_source_custom_daily_menu() {
        let menu = DailyMenu {
            courses: vec![Course::new("Pizza")],
        };
        let source = FakeSource::new(vec![restaurant("a", "A", "Sodexo", 0.0, 0.0)])
            .with_daily_menu("a", menu.clone());
        assert_eq!(block_on(source.daily_menu("a")).unwrap(), menu);
    }
}
