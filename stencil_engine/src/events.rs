// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::{EventListener, ObjectId};

/// Selection and modification events raised by a rendering engine.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    /// A selection appeared where there was none.
    SelectionCreated {
        /// Newly selected drawables.
        selected: Vec<ObjectId>,
    },
    /// The selection changed.
    SelectionUpdated {
        /// Drawables added to the selection.
        selected: Vec<ObjectId>,
        /// Drawables removed from the selection.
        deselected: Vec<ObjectId>,
    },
    /// The selection was cleared.
    SelectionCleared {
        /// Drawables that were selected.
        deselected: Vec<ObjectId>,
    },
    /// An interactive move/resize finished.
    ObjectModified {
        /// The modified drawable.
        target: ObjectId,
    },
    /// An interactive resize is in progress.
    ObjectScaling {
        /// The drawable being scaled.
        target: ObjectId,
    },
}

impl EngineEvent {
    /// Drawables the event is about.
    #[must_use]
    pub fn targets(&self) -> Vec<ObjectId> {
        match self {
            Self::SelectionCreated { selected } => selected.clone(),
            Self::SelectionUpdated {
                selected,
                deselected,
            } => selected.iter().chain(deselected).copied().collect(),
            Self::SelectionCleared { deselected } => deselected.clone(),
            Self::ObjectModified { target } | Self::ObjectScaling { target } => vec![*target],
        }
    }
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Registry of event listeners, for engine adapters to embed.
#[derive(Default)]
pub struct EventListeners {
    next_id: u32,
    entries: Vec<(ListenerId, EventListener)>,
}

impl fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListeners")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl EventListeners {
    /// Registers a listener.
    pub fn subscribe(&mut self, listener: EventListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Delivers an event to every listener in registration order.
    pub fn emit(&mut self, event: &EngineEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
