//! Pane registry: identity → per-pane surface state
//!
//! The registry is derived state. It is rebuilt deterministically from a
//! tree walk after every structural change (`sync_all`) and patched for a
//! single pane after a content-only change (`refresh`), mirroring the
//! coarse/fine reconciliation split. Each surface carries a generation
//! counter; a fetch result is applied only when its generation still
//! matches, so a stale response for a closed or re-navigated pane is
//! discarded on arrival rather than cancelled in flight.

use std::collections::HashMap;

use filedeck_config::PaneId;
use filedeck_protocol::{ApiError, FileDocument};

use crate::tile::{TileNode, TileTree};

/// What the content area of a pane currently shows
#[derive(Debug)]
pub enum SurfaceState {
    /// A fetch is outstanding
    Loading,
    /// The last fetch succeeded
    Ready(FileDocument),
    /// The last fetch failed; the message is shown inline
    Failed(String),
}

/// Retained per-pane render state
#[derive(Debug)]
pub struct PaneSurface {
    /// Path the surface was last (re)loaded for
    pub path: String,
    /// Projection the surface was last (re)loaded for
    pub projection: Option<String>,
    pub state: SurfaceState,
    /// Bumped on every (re)load; stale fetch results fail the match
    pub generation: u64,
}

/// A fetch the caller must hand to the content loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub pane_id: PaneId,
    pub path: String,
    pub projection: Option<String>,
    pub generation: u64,
}

/// A completed fetch coming back from the loader
#[derive(Debug)]
pub struct LoadOutcome {
    pub pane_id: PaneId,
    pub generation: u64,
    pub result: Result<FileDocument, ApiError>,
}

/// Mapping from pane identity to its surface
#[derive(Debug, Default)]
pub struct PaneRegistry {
    surfaces: HashMap<PaneId, PaneSurface>,
}

impl PaneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface for a pane, if registered
    pub fn get(&self, id: PaneId) -> Option<&PaneSurface> {
        self.surfaces.get(&id)
    }

    /// Number of registered surfaces
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Coarse pass: rebuild the registry from a full tree walk
    ///
    /// Surfaces whose pane vanished are dropped; every live pane gets a
    /// fresh Loading surface with a bumped generation. Returns the fetches
    /// to issue, one per pane. Invoked after boot and after every
    /// structural mutation, because identities and positions can shift
    /// arbitrarily (close promotes siblings wholesale).
    pub fn sync_all(&mut self, tree: &TileTree) -> Vec<FetchRequest> {
        let live = tree.pane_ids();
        self.surfaces.retain(|id, _| live.contains(id));

        let mut requests = Vec::with_capacity(live.len());
        for id in live {
            let Some((path, projection)) = tree.pane_state(id) else {
                continue;
            };
            let generation = self
                .surfaces
                .get(&id)
                .map(|surface| surface.generation + 1)
                .unwrap_or(1);
            self.surfaces.insert(
                id,
                PaneSurface {
                    path: path.clone(),
                    projection: projection.clone(),
                    state: SurfaceState::Loading,
                    generation,
                },
            );
            requests.push(FetchRequest {
                pane_id: id,
                path,
                projection,
                generation,
            });
        }
        log::debug!("registry sync: {} surfaces", self.surfaces.len());
        requests
    }

    /// Fine pass: reload a single pane after navigation or a projection
    /// switch, leaving every other surface untouched
    pub fn refresh(&mut self, id: PaneId, tree: &TileTree) -> Option<FetchRequest> {
        if !tree.find(id).is_some_and(TileNode::is_pane) {
            return None;
        }
        let (path, projection) = tree.pane_state(id)?;
        let generation = self
            .surfaces
            .get(&id)
            .map(|surface| surface.generation + 1)
            .unwrap_or(1);
        self.surfaces.insert(
            id,
            PaneSurface {
                path: path.clone(),
                projection: projection.clone(),
                state: SurfaceState::Loading,
                generation,
            },
        );
        Some(FetchRequest {
            pane_id: id,
            path,
            projection,
            generation,
        })
    }

    /// Apply a completed fetch, unless it is stale
    ///
    /// Stale means: the pane is no longer registered (closed, or dropped by
    /// a structural sync) or the surface has been reloaded since the fetch
    /// was issued (generation mismatch). Stale results are discarded.
    pub fn complete(&mut self, outcome: LoadOutcome) {
        let Some(surface) = self.surfaces.get_mut(&outcome.pane_id) else {
            log::debug!(
                "discarding fetch result for unregistered pane {}",
                outcome.pane_id
            );
            return;
        };
        if surface.generation != outcome.generation {
            log::debug!(
                "discarding stale fetch for pane {} (gen {} != {})",
                outcome.pane_id,
                outcome.generation,
                surface.generation
            );
            return;
        }
        surface.state = match outcome.result {
            Ok(document) => SurfaceState::Ready(document),
            Err(error) => SurfaceState::Failed(error.to_string()),
        };
    }
}
