//! Concurrent bulk resolution of entities by identifier.
//!
//! The remote platform has no batch lookup, so each identifier is fetched on
//! its own. All fetches run concurrently and are joined before returning;
//! results keep the order of the input identifiers, not completion order.

use std::fmt::{Debug, Display};
use std::future::Future;

use futures::future::{join_all, try_join_all};
use tracing::warn;

/// What to do when fetching one identifier fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnItemError {
    /// Log and drop the failed item; the batch always succeeds.
    Drop,
    /// Fail the whole batch with the first error.
    FailFast,
}

/// Fetch every identifier concurrently.
///
/// `fetch` yields `Ok(None)` for an identifier that resolved to nothing;
/// such entries are skipped under either policy.
///
/// # Errors
///
/// With [`OnItemError::FailFast`], returns the first error any fetch
/// produced. With [`OnItemError::Drop`], never fails.
pub async fn resolve_all<I, K, T, E, F, Fut>(
    ids: I,
    on_error: OnItemError,
    fetch: F,
) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = K>,
    K: Debug,
    E: Display,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    match on_error {
        OnItemError::Drop => {
            let fetches = ids.into_iter().map(|id| {
                let label = format!("{id:?}");
                let fetched = fetch(id);
                async move { (label, fetched.await) }
            });

            let items = join_all(fetches)
                .await
                .into_iter()
                .filter_map(|(id, result)| match result {
                    Ok(item) => item,
                    Err(e) => {
                        warn!(id = %id, error = %e, "Dropping item that failed to resolve");
                        None
                    }
                })
                .collect();

            Ok(items)
        }
        OnItemError::FailFast => {
            let items = try_join_all(ids.into_iter().map(&fetch)).await?;
            Ok(items.into_iter().flatten().collect())
        }
    }
}
