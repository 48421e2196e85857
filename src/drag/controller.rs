//! Drag state machine and quick moves.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::deck::{EditingSession, Zone};

/// Where a slot lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// A deck zone.
    Deck(Zone),
    /// The search result pool. Read-only: cards dragged out of it are
    /// copies.
    Pool,
}

/// A card position under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub location: Location,
    pub index: usize,
}

impl Slot {
    #[must_use]
    pub const fn deck(zone: Zone, index: usize) -> Self {
        Self {
            location: Location::Deck(zone),
            index,
        }
    }

    #[must_use]
    pub const fn pool(index: usize) -> Self {
        Self {
            location: Location::Pool,
            index,
        }
    }

    /// The card at this slot, if any.
    #[must_use]
    pub fn card(&self, session: &EditingSession) -> Option<CardId> {
        match self.location {
            Location::Deck(zone) => session.deck().get(zone, self.index),
            Location::Pool => session.pool_card(self.index),
        }
    }
}

/// Pointer input, already hit-tested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Primary button pressed.
    Down(Option<Slot>),
    /// Pointer moved.
    Move,
    /// Primary button released.
    Up(Option<Slot>),
    /// Secondary button released.
    SecondaryClick(Option<Slot>),
    /// Middle button released.
    MiddleClick(Option<Slot>),
}

/// Controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    /// Button is down on a card that has not moved yet.
    Pressed { origin: Slot, card: CardId },
    /// The card is floating under the pointer. A deck-origin card has
    /// already left its zone.
    Dragging { origin: Slot, card: CardId },
}

/// What an event did to the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragOutcome {
    /// Nothing happened.
    Ignored,
    /// A card was picked up (button down).
    Pressed,
    /// The card started floating.
    Lifted,
    /// Button released without moving.
    Clicked,
    /// The floating card landed in a zone.
    Placed(Zone),
    /// The floating card went back where it came from.
    Returned(Zone),
    /// The floating card was dropped for good.
    Discarded,
    /// A deck card changed zone without being dragged.
    Moved { from: Zone, to: Zone },
    /// A new copy was added to a zone.
    Added(Zone),
    /// A card was removed from a zone.
    Removed(Zone),
}

/// Drives card movement from pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// The card under the pointer while dragging.
    #[must_use]
    pub fn floating(&self) -> Option<CardId> {
        match self.state {
            DragState::Dragging { card, .. } => Some(card),
            _ => None,
        }
    }

    /// Feed one event.
    pub fn handle(&mut self, session: &mut EditingSession, event: PointerEvent) -> DragOutcome {
        match event {
            PointerEvent::Down(slot) => self.on_down(session, slot),
            PointerEvent::Move => self.on_move(session),
            PointerEvent::Up(slot) => self.on_up(session, slot),
            PointerEvent::SecondaryClick(slot) => self.on_secondary(session, slot),
            PointerEvent::MiddleClick(slot) => self.on_middle(session, slot),
        }
    }

    /// Abort a drag in progress, putting the floating card back.
    pub fn cancel(&mut self, session: &mut EditingSession) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { origin, card } => return_to_origin(session, origin, card),
            DragState::Pressed { .. } | DragState::Idle => DragOutcome::Ignored,
        }
    }

    fn on_down(&mut self, session: &EditingSession, slot: Option<Slot>) -> DragOutcome {
        if session.is_readonly() || self.state != DragState::Idle {
            return DragOutcome::Ignored;
        }
        let Some(origin) = slot else {
            return DragOutcome::Ignored;
        };
        let Some(card) = origin.card(session) else {
            return DragOutcome::Ignored;
        };
        if origin.location == Location::Pool && !session.check_limit(card) {
            return DragOutcome::Ignored;
        }
        self.state = DragState::Pressed { origin, card };
        DragOutcome::Pressed
    }

    fn on_move(&mut self, session: &mut EditingSession) -> DragOutcome {
        let DragState::Pressed { origin, card } = self.state else {
            return DragOutcome::Ignored;
        };
        if let Location::Deck(zone) = origin.location {
            if session.remove(zone, origin.index).is_err() {
                self.state = DragState::Idle;
                return DragOutcome::Ignored;
            }
        }
        self.state = DragState::Dragging { origin, card };
        DragOutcome::Lifted
    }

    fn on_up(&mut self, session: &mut EditingSession, slot: Option<Slot>) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Idle => DragOutcome::Ignored,
            DragState::Pressed { .. } => DragOutcome::Clicked,
            DragState::Dragging { origin, card } => match slot.map(|s| (s.location, s.index)) {
                Some((Location::Deck(zone), index)) => {
                    if session.insert(zone, card, Some(index)) {
                        DragOutcome::Placed(zone)
                    } else {
                        return_to_origin(session, origin, card)
                    }
                }
                Some((Location::Pool, _)) if !session.is_siding() => DragOutcome::Discarded,
                Some((Location::Pool, _)) | None => return_to_origin(session, origin, card),
            },
        }
    }

    fn on_secondary(&mut self, session: &mut EditingSession, slot: Option<Slot>) -> DragOutcome {
        if session.is_readonly() {
            return DragOutcome::Ignored;
        }
        match std::mem::take(&mut self.state) {
            DragState::Pressed { .. } => DragOutcome::Ignored,
            DragState::Dragging { origin, card } => {
                let chain = drop_rotation(origin.location, session.is_siding());
                match session.push_chain(card, chain) {
                    Some(zone) => DragOutcome::Placed(zone),
                    None => return_to_origin(session, origin, card),
                }
            }
            DragState::Idle => match slot {
                None => DragOutcome::Ignored,
                Some(slot) if session.is_siding() => quick_move(session, slot),
                Some(slot) => match slot.location {
                    Location::Deck(zone) => match session.remove(zone, slot.index) {
                        Ok(_) => DragOutcome::Removed(zone),
                        Err(_) => DragOutcome::Ignored,
                    },
                    Location::Pool => quick_move(session, slot),
                },
            },
        }
    }

    fn on_middle(&mut self, session: &mut EditingSession, slot: Option<Slot>) -> DragOutcome {
        if session.is_readonly() || session.is_siding() {
            return DragOutcome::Ignored;
        }
        match self.state {
            DragState::Dragging { .. } => return DragOutcome::Ignored,
            DragState::Pressed { .. } => {
                self.state = DragState::Idle;
                return DragOutcome::Ignored;
            }
            DragState::Idle => {}
        }
        let Some(slot) = slot else {
            return DragOutcome::Ignored;
        };
        let Some(card) = slot.card(session) else {
            return DragOutcome::Ignored;
        };
        if !session.check_limit(card) {
            return DragOutcome::Ignored;
        }
        let chain: &[Zone] = match slot.location {
            Location::Deck(Zone::Main) => &[Zone::Main, Zone::Side],
            Location::Deck(Zone::Extra) => &[Zone::Extra, Zone::Side],
            Location::Deck(Zone::Side) => &[Zone::Side, Zone::Extra, Zone::Main],
            Location::Pool => &[Zone::Extra, Zone::Main, Zone::Side],
        };
        session
            .push_chain(card, chain)
            .map_or(DragOutcome::Ignored, DragOutcome::Added)
    }
}

/// Move the card at `slot` to its counterpart zone without dragging.
///
/// Deck cards rotate main→side, extra→side, side→extra then main; the
/// card leaves its zone only once the destination took it. Pool cards
/// add a copy to extra, else main, else side, if the copy limit allows.
pub fn quick_move(session: &mut EditingSession, slot: Slot) -> DragOutcome {
    if session.is_readonly() {
        return DragOutcome::Ignored;
    }
    let Some(card) = slot.card(session) else {
        return DragOutcome::Ignored;
    };
    match slot.location {
        Location::Deck(from) => match session.push_chain(card, rotation(from)) {
            Some(to) => {
                // Destination differs from `from`, so `slot.index` still
                // points at the card.
                if session.remove(from, slot.index).is_err() {
                    tracing::warn!(%card, zone = %from, "quick move left a duplicate");
                }
                DragOutcome::Moved { from, to }
            }
            None => DragOutcome::Ignored,
        },
        Location::Pool => {
            if !session.check_limit(card) {
                return DragOutcome::Ignored;
            }
            session
                .push_chain(card, &[Zone::Extra, Zone::Main, Zone::Side])
                .map_or(DragOutcome::Ignored, DragOutcome::Added)
        }
    }
}

fn rotation(from: Zone) -> &'static [Zone] {
    match from {
        Zone::Main | Zone::Extra => &[Zone::Side],
        Zone::Side => &[Zone::Extra, Zone::Main],
    }
}

/// Destinations for a floating card released by a secondary click.
fn drop_rotation(origin: Location, siding: bool) -> &'static [Zone] {
    match origin {
        Location::Deck(zone) => rotation(zone),
        Location::Pool if siding => &[Zone::Extra, Zone::Main, Zone::Side],
        Location::Pool => &[Zone::Side],
    }
}

fn return_to_origin(session: &mut EditingSession, origin: Slot, card: CardId) -> DragOutcome {
    match origin.location {
        Location::Pool => DragOutcome::Discarded,
        Location::Deck(zone) => {
            session.restore(zone, card, origin.index);
            DragOutcome::Returned(zone)
        }
    }
}
