//! Map view repository.
//!
//! Geocoding lookups run before the view lock is taken, so a slow lookup
//! never blocks readers of the view.

use std::sync::Arc;

use domain::models::map::{Coordinate, LocationDetails, MapError, MapView};
use domain::services::geocoding::Geocoder;
use domain::services::map_search::{self, SearchFailure};
use tokio::sync::RwLock;

use crate::metrics::OpTimer;

/// Outcome of a map search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The view moved to the result.
    Moved(MapView),
    /// The query was blank; the view is unchanged.
    Ignored(MapView),
}

/// Repository for the map search view.
#[derive(Clone)]
pub struct MapRepository {
    view: Arc<RwLock<MapView>>,
}

impl MapRepository {
    pub fn new(view: Arc<RwLock<MapView>>) -> Self {
        Self { view }
    }

    pub async fn view(&self) -> MapView {
        self.view.read().await.clone()
    }

    pub async fn set_radius_km(&self, km: u32) -> Result<MapView, MapError> {
        let mut view = self.view.write().await;
        view.set_radius_km(km)?;
        Ok(view.clone())
    }

    /// Center the view on a device-reported position.
    pub async fn locate(&self, geocoder: &dyn Geocoder, coordinate: Coordinate) -> LocationDetails {
        let timer = OpTimer::new("map_locate");
        let details = map_search::resolve_location(geocoder, coordinate).await;
        let result = self.view.write().await.show_location(details).clone();
        timer.record();
        result
    }

    /// Move the view to the location matching `query`.
    ///
    /// A failed lookup leaves the view unchanged.
    pub async fn search(&self, geocoder: &dyn Geocoder, query: &str) -> Result<SearchOutcome, SearchFailure> {
        let timer = OpTimer::new("map_search");
        let resolved = map_search::resolve_search(geocoder, query).await;
        let result = match resolved {
            Ok(Some(coordinate)) => {
                let mut view = self.view.write().await;
                view.show_search_result(coordinate);
                Ok(SearchOutcome::Moved(view.clone()))
            }
            Ok(None) => Ok(SearchOutcome::Ignored(self.view().await)),
            Err(failure) => Err(failure),
        };
        timer.record();
        result
    }
}
