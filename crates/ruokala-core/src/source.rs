//! The remote restaurant API seam.

use crate::error::RequestError;
use crate::geometry::{rank_by_distance, Coordinates};
use crate::model::{DailyMenu, Menu, MenuKind, Restaurant, WeeklyMenu};
use crate::state::{BoardState, MenuRequest};

/// URL builder for the restaurant API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    language: String,
}

impl Endpoints {
    /// Create endpoints under `base_url` for menus in `language`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, language: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            language: language.into(),
        }
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Menu language tag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// `GET` target for the restaurant list.
    #[must_use]
    pub fn restaurants(&self) -> String {
        format!("{}/restaurants", self.base_url)
    }

    /// `GET` target for one restaurant's daily menu.
    #[must_use]
    pub fn daily_menu(&self, id: &str) -> String {
        format!("{}/restaurants/daily/{id}/{}", self.base_url, self.language)
    }

    /// `GET` target for one restaurant's weekly menu.
    #[must_use]
    pub fn weekly_menu(&self, id: &str) -> String {
        format!("{}/restaurants/weekly/{id}/{}", self.base_url, self.language)
    }

    /// `GET` target for a menu request.
    #[must_use]
    pub fn menu(&self, id: &str, kind: MenuKind) -> String {
        match kind {
            MenuKind::Daily => self.daily_menu(id),
            MenuKind::Weekly => self.weekly_menu(id),
        }
    }
}

/// Source of restaurant and menu data.
///
/// Each call is a single independent request: no retries, no timeout,
/// no caching.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Fetch every restaurant.
    async fn restaurants(&self) -> Result<Vec<Restaurant>, RequestError>;

    /// Fetch today's menu for a restaurant.
    async fn daily_menu(&self, id: &str) -> Result<DailyMenu, RequestError>;

    /// Fetch this week's menu for a restaurant.
    async fn weekly_menu(&self, id: &str) -> Result<WeeklyMenu, RequestError>;
}

/// Fetch the restaurant list and rank it around `observer`.
pub async fn load_board<S>(source: &S, observer: Coordinates) -> Result<BoardState, RequestError>
where
    S: DataSource,
{
    let mut restaurants = source.restaurants().await?;
    rank_by_distance(&mut restaurants, observer);
    tracing::info!(count = restaurants.len(), "restaurants loaded");
    Ok(BoardState::new(restaurants))
}

/// Perform a menu request issued by the board.
pub async fn load_menu<S>(source: &S, request: &MenuRequest) -> Result<Menu, RequestError>
where
    S: DataSource,
{
    match request.kind {
        MenuKind::Daily => source.daily_menu(&request.restaurant_id).await.map(Menu::Daily),
        MenuKind::Weekly => source
            .weekly_menu(&request.restaurant_id)
            .await
            .map(Menu::Weekly),
    }
}
