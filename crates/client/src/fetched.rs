//! Tagged outcome of a read fetch.
//!
//! A fetcher never hands back bare data: it says whether the data is what the
//! server returned or a substitute, and if a substitute, why.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::client::RemoteClient;
use crate::error::ClientError;
use crate::probe::ConnectivityState;
use crate::transport::Request;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FallbackReason {
    /// The prober already reported the backend as unreachable; no call was made.
    #[error("backend unavailable")]
    BackendUnavailable,

    #[error(transparent)]
    Request(#[from] ClientError),

    /// Some, but not all, of the sources behind a composed view failed.
    #[error("{failed} of {total} sources failed: {first}")]
    PartialAggregate {
        failed: usize,
        total: usize,
        first: ClientError,
    },
}

impl FallbackReason {
    /// Reason for a composed view where `failed` of `total` sources failed
    /// and `first` is the earliest failure in source order.
    pub fn aggregate(failed: usize, total: usize, first: ClientError) -> Self {
        if failed >= total {
            FallbackReason::Request(first)
        } else {
            FallbackReason::PartialAggregate { failed, total, first }
        }
    }

    /// True when the server could not be reached at all, as opposed to
    /// answering with an error or an unreadable body.
    pub fn is_connectivity(&self) -> bool {
        match self {
            FallbackReason::BackendUnavailable => true,
            FallbackReason::Request(err) => err.is_connectivity(),
            FallbackReason::PartialAggregate { first, .. } => first.is_connectivity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Fallback { data: T, reason: FallbackReason },
}

impl<T> Fetched<T> {
    pub fn fallback(data: T, reason: impl Into<FallbackReason>) -> Self {
        Fetched::Fallback {
            data,
            reason: reason.into(),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn data(&self) -> &T {
        match self {
            Fetched::Live(data) | Fetched::Fallback { data, .. } => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            Fetched::Live(data) | Fetched::Fallback { data, .. } => data,
        }
    }

    pub fn reason(&self) -> Option<&FallbackReason> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn into_parts(self) -> (T, Option<FallbackReason>) {
        match self {
            Fetched::Live(data) => (data, None),
            Fetched::Fallback { data, reason } => (data, Some(reason)),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Live(data) => Fetched::Live(f(data)),
            Fetched::Fallback { data, reason } => Fetched::Fallback {
                data: f(data),
                reason,
            },
        }
    }
}

/// Issue `request` unless the backend is already known to be down; on any
/// failure substitute `fallback()`.
pub(crate) async fn live_or<T, F>(
    client: &RemoteClient,
    connectivity: ConnectivityState,
    request: Request,
    fallback: F,
) -> Fetched<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let endpoint = request.endpoint();
    if connectivity.is_offline() {
        tracing::warn!(endpoint = %endpoint, "backend unavailable, skipping request");
        return Fetched::fallback(fallback(), FallbackReason::BackendUnavailable);
    }

    match client.call(request).await {
        Ok(data) => Fetched::Live(data),
        Err(err) => {
            tracing::debug!(endpoint = %endpoint, error = %err, "using fallback data");
            Fetched::fallback(fallback(), err)
        }
    }
}
