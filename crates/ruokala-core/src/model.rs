//! Restaurant and menu records as served by the restaurant API.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// GeoJSON point attached to every restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Geometry type, always `"Point"` in practice
    #[serde(rename = "type", default = "Location::point_kind")]
    pub kind: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl Location {
    fn point_kind() -> String {
        "Point".to_string()
    }

    /// Create a point from latitude and longitude.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: Self::point_kind(),
            coordinates: [longitude, latitude],
        }
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    /// `[longitude, latitude]`, the order map markers expect.
    #[must_use]
    pub const fn lng_lat(&self) -> [f64; 2] {
        self.coordinates
    }
}

/// A student restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Numeric id within the owning company
    #[serde(rename = "companyId", default)]
    pub company_id: Option<u32>,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// Postal code
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    /// City
    pub city: String,
    /// Phone number, free-form
    #[serde(default)]
    pub phone: String,
    /// Owning company, e.g. `"Sodexo"` or `"Compass Group"`
    pub company: String,
    /// Geographic position
    pub location: Location,
}

/// One line item on a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Dish name
    pub name: String,
    /// Price text as given by the provider
    #[serde(default)]
    pub price: Option<String>,
    /// Dietary labels, e.g. `"L, G"`
    #[serde(default, deserialize_with = "deserialize_diets")]
    pub diets: Option<String>,
}

impl Course {
    /// Create a course with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
            diets: None,
        }
    }

    /// Set the price.
    #[must_use]
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Set the dietary labels.
    #[must_use]
    pub fn diets(mut self, diets: impl Into<String>) -> Self {
        self.diets = Some(diets.into());
        self
    }
}

// Providers send diets either as "L, G" or as ["L", "G"].
fn deserialize_diets<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Diets {
        Text(String),
        List(Vec<String>),
    }

    Ok(match Option::<Diets>::deserialize(deserializer)? {
        None => None,
        Some(Diets::Text(text)) => Some(text),
        Some(Diets::List(list)) if list.is_empty() => None,
        Some(Diets::List(list)) => Some(list.join(", ")),
    })
}

/// Today's courses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMenu {
    /// Courses in serving order
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Courses for one date of a weekly menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMenu {
    /// Date label as given by the provider
    pub date: String,
    /// Courses in serving order
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Courses grouped by date across a week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyMenu {
    /// Days in calendar order
    #[serde(default)]
    pub days: Vec<DayMenu>,
}

/// Which menu a detail dialog shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuKind {
    /// Today only
    #[default]
    Daily,
    /// The whole week
    Weekly,
}

impl MenuKind {
    /// Value of the matching radio input.
    #[must_use]
    pub const fn radio_value(self) -> &'static str {
        match self {
            Self::Daily => "daily-menu",
            Self::Weekly => "weekly-menu",
        }
    }

    /// Parse a radio input value. Unknown values fall back to daily.
    #[must_use]
    pub fn from_radio_value(value: &str) -> Self {
        match value {
            "weekly-menu" => Self::Weekly,
            _ => Self::Daily,
        }
    }
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
        }
    }
}

/// A fetched menu of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Menu {
    /// Today's courses
    Daily(DailyMenu),
    /// The week's courses
    Weekly(WeeklyMenu),
}

impl Menu {
    /// The kind of this menu.
    #[must_use]
    pub const fn kind(&self) -> MenuKind {
        match self {
            Self::Daily(_) => MenuKind::Daily,
            Self::Weekly(_) => MenuKind::Weekly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESTAURANT_JSON: &str = r#"{
        "location": {"type": "Point", "coordinates": [24.758, 60.2236]},
        "_id": "6470d38ecb12107db6fe24c1",
        "companyId": 16,
        "name": "Ravintola Myyrmäki",
        "address": "Leiritie 1",
        "postalCode": "01600",
        "city": "Vantaa",
        "phone": "+358 40 123 4567",
        "company": "Sodexo",
        "__v": 0
    }"#;

    #[test]
    fn test_restaurant_deserialize() {
        let r: Restaurant = serde_json::from_str(RESTAURANT_JSON).unwrap();
        assert_eq!(r.id, "6470d38ecb12107db6fe24c1");
        assert_eq!(r.company_id, Some(16));
        assert_eq!(r.postal_code, "01600");
        assert_eq!(r.company, "Sodexo");
        assert_eq!(r.location.longitude(), 24.758);
        assert_eq!(r.location.latitude(), 60.2236);
    }

    #[test]
    fn test_restaurant_missing_optional_fields() {
        let json = r#"{
            "location": {"coordinates": [1.0, 2.0]},
            "_id": "a", "name": "A", "address": "B",
            "postalCode": "0", "city": "C", "company": "D"
        }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(r.company_id, None);
        assert_eq!(r.phone, "");
        assert_eq!(r.location.kind, "Point");
    }

    #[test]
    fn test_location_new_orders_lng_lat() {
        let loc = Location::new(60.17, 24.94);
        assert_eq!(loc.lng_lat(), [24.94, 60.17]);
    }

    #[test]
    fn test_course_diets_as_text() {
        let c: Course = serde_json::from_str(r#"{"name":"Keitto","diets":"L, G"}"#).unwrap();
        assert_eq!(c.diets.as_deref(), Some("L, G"));
        assert_eq!(c.price, None);
    }

    #[test]
    fn test_course_diets_as_list() {
        let c: Course =
            serde_json::from_str(r#"{"name":"Keitto","price":"2,95 €","diets":["L","G"]}"#)
                .unwrap();
        assert_eq!(c.diets.as_deref(), Some("L, G"));
        assert_eq!(c.price.as_deref(), Some("2,95 €"));
    }

    #[test]
    fn test_course_diets_null_and_empty() {
        let c: Course = serde_json::from_str(r#"{"name":"X","diets":null}"#).unwrap();
        assert_eq!(c.diets, None);
        let c: Course = serde_json::from_str(r#"{"name":"X","diets":[]}"#).unwrap();
        assert_eq!(c.diets, None);
    }

    #[test]
    fn test_daily_menu_missing_courses() {
        let m: DailyMenu = serde_json::from_str("{}").unwrap();
        assert!(m.courses.is_empty());
    }

    #[test]
    fn test_weekly_menu_deserialize() {
        let json = r#"{"days":[{"date":"maanantai 6.5.","courses":[{"name":"Kala"}]}]}"#;
        let m: WeeklyMenu = serde_json::from_str(json).unwrap();
        assert_eq!(m.days.len(), 1);
        assert_eq!(m.days[0].courses[0].name, "Kala");
    }

    #[test]
    fn test_menu_kind_radio_values() {
        assert_eq!(MenuKind::from_radio_value("weekly-menu"), MenuKind::Weekly);
        assert_eq!(MenuKind::from_radio_value("daily-menu"), MenuKind::Daily);
        assert_eq!(MenuKind::from_radio_value("bogus"), MenuKind::Daily);
        assert_eq!(MenuKind::Weekly.radio_value(), "weekly-menu");
    }

    #[test]
    fn test_menu_kind() {
        assert_eq!(Menu::Daily(DailyMenu::default()).kind(), MenuKind::Daily);
        assert_eq!(Menu::Weekly(WeeklyMenu::default()).kind(), MenuKind::Weekly);
    }
}
