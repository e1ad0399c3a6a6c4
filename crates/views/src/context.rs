//! What every controller is constructed with.

use chrono::NaiveDate;
use larder_client::{AvailabilityProber, ConnectivityState, RemoteClient};

/// Client handle plus this controller's view of backend availability.
///
/// Each controller owns its own copy; probing in one screen does not change
/// what another screen believes.
#[derive(Clone)]
pub struct ViewContext {
    client: RemoteClient,
    connectivity: ConnectivityState,
    today: NaiveDate,
}

impl ViewContext {
    pub fn new(client: RemoteClient) -> Self {
        Self {
            client,
            connectivity: ConnectivityState::Unknown,
            today: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_connectivity(mut self, connectivity: ConnectivityState) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Fix the date used for form defaults.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn client(&self) -> &RemoteClient {
        &self.client
    }

    pub fn connectivity(&self) -> ConnectivityState {
        self.connectivity
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Probe the backend and remember the answer.
    pub async fn probe(&mut self) -> ConnectivityState {
        self.connectivity = AvailabilityProber::new(self.client.clone()).check().await;
        self.connectivity
    }
}
