//! The game state machine.
//!
//! `GameController` owns every card and moves them between zones in
//! response to shell actions. A turn runs:
//!
//! ```text
//! Idle ──draw / take pile top──▶ Revealed ──swap hand card──▶ AwaitingDiscard
//!                                    │                             │
//!                                    └──discard revealed card──────┤
//!                                                                  ▼
//!                                               choose pile ──▶ next turn
//! ```
//!
//! After each turn the scores of the visible cards are published, and the
//! game ends as soon as some hand is fully face-up.
//!
//! Every action either commits completely or is rejected without touching
//! state. Rejections are reported to observers as `ActionRejected` and
//! returned as `GameError::IllegalAction`.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, error, info, warn};

use super::affordances::Affordances;
use super::dealing::{DealSequence, DealStep};
use super::phase::{Phase, TurnStage};
use super::snapshot::GameSnapshot;
use crate::cards::{Card, CardCatalog};
use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameError, GameEvent, GameObserver, GameRng,
    Player, PlayerId, PlayerMap, RejectReason,
};
use crate::rules::GameOutcome;
use crate::zones::{Deck, DiscardPile, Zone};

/// Owns the table and runs the turn cycle.
pub struct GameController {
    config: GameConfig,
    catalog: CardCatalog,
    rng: GameRng,
    deck: Deck,
    players: PlayerMap<Player>,
    discard_piles: SmallVec<[DiscardPile; 2]>,
    phase: Phase,
    current_player: PlayerId,
    revealed_card: Option<Card>,
    card_awaiting_discard: Option<Card>,
    deal: DealSequence,
    scores: PlayerMap<i32>,
    outcome: Option<GameOutcome>,
    turn_number: u32,
    action_sequence: u32,
    history: Vector<ActionRecord>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameController {
    /// Validate `config`, build the deck and shuffle it with `seed`.
    ///
    /// The controller starts in `Setup`; call `deal_all` or step through
    /// `deal_next` to begin play.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        let catalog = CardCatalog::from_config(&config)?;
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::from_catalog(&catalog, config.copies_per_type);
        deck.shuffle(&mut rng);

        info!(
            seed,
            players = config.player_count,
            deck_size = deck.remaining(),
            "new game"
        );
        Ok(Self::assemble(config, catalog, rng, deck))
    }

    /// Like `new`, but deals from `deck` as given instead of shuffling.
    ///
    /// The deck must hold at least one card beyond the deal. A later
    /// `restart` still builds and shuffles a full deck.
    pub fn with_deck(config: GameConfig, deck: Deck, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        let needed = config.player_count * config.cards_per_player;
        if deck.remaining() <= needed {
            return Err(ConfigError::NotEnoughCards {
                needed,
                available: deck.remaining(),
            }
            .into());
        }
        let catalog = CardCatalog::from_config(&config)?;
        Ok(Self::assemble(config, catalog, GameRng::new(seed), deck))
    }

    fn assemble(config: GameConfig, catalog: CardCatalog, rng: GameRng, deck: Deck) -> Self {
        Self {
            players: seat_players(&config),
            discard_piles: empty_piles(&config),
            deal: DealSequence::new(config.player_count, config.cards_per_player),
            scores: PlayerMap::with_value(config.player_count, 0),
            config,
            catalog,
            rng,
            deck,
            phase: Phase::Setup,
            current_player: PlayerId::new(0),
            revealed_card: None,
            card_awaiting_discard: None,
            outcome: None,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers survive restarts.
    pub fn add_observer(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub(crate) fn add_boxed_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    // ------------------------------------------------------------------
    // Dealing
    // ------------------------------------------------------------------

    /// Deal one card. Returns the step taken, or `None` once dealing is done.
    ///
    /// The last step moves the game into `PlayerTurn` with player 0 active.
    pub fn deal_next(&mut self) -> Result<Option<DealStep>, GameError> {
        if self.phase != Phase::Setup {
            return Err(self.reject(RejectReason::NotDealing));
        }

        let Some(step) = self.deal.next_step() else {
            self.begin_play();
            return Ok(None);
        };

        let Some(card) = self.deck.draw() else {
            error!(player = %step.player, slot = step.slot, "deck ran out while dealing");
            return Err(GameError::invariant("deck ran out while dealing"));
        };

        let face_up = !self.config.deal_face_down;
        let player = &mut self.players[step.player];
        player.deal_card(step.slot, card)?;
        if face_up {
            if let Some(card) = player.hand.get_mut(step.slot) {
                card.set_face_up(true);
            }
        }
        let dealt = player.hand.get(step.slot).cloned();

        if let Some(card) = dealt {
            debug!(player = %step.player, slot = step.slot, card = %card, "dealt card");
            self.emit(GameEvent::CardMoved {
                card: card.clone(),
                zone: Zone::Hand(step.player),
                slot: Some(step.slot),
            });
            if face_up {
                self.emit(GameEvent::CardFaceChanged { card, face_up: true });
            }
        }

        if self.deal.is_complete() {
            self.begin_play();
        }
        Ok(Some(step))
    }

    /// Run the remaining deal steps at once.
    pub fn deal_all(&mut self) -> Result<(), GameError> {
        while self.phase == Phase::Setup {
            self.deal_next()?;
        }
        Ok(())
    }

    fn begin_play(&mut self) {
        self.phase = Phase::PlayerTurn;
        self.current_player = PlayerId::new(0);
        self.refresh_interactability();
        self.publish_scores();
        self.emit(GameEvent::TurnChanged {
            player: self.current_player,
        });
        info!(
            players = self.config.player_count,
            deck_remaining = self.deck.remaining(),
            "dealing complete"
        );
    }

    // ------------------------------------------------------------------
    // Turn actions
    // ------------------------------------------------------------------

    /// Reveal the top card of the deck.
    pub fn draw_from_deck(&mut self) -> Result<(), GameError> {
        self.ensure(self.require_idle())?;

        let Some(mut card) = self.deck.draw() else {
            warn!(player = %self.current_player, "deck is empty");
            return Err(self.reject(RejectReason::DeckEmpty));
        };
        card.owner = None;
        self.emit(GameEvent::CardMoved {
            card: card.clone(),
            zone: Zone::RevealSlot,
            slot: None,
        });
        if card.set_face_up(true) {
            self.emit(GameEvent::CardFaceChanged {
                card: card.clone(),
                face_up: true,
            });
        }

        debug!(player = %self.current_player, card = %card, "revealed card from deck");
        self.revealed_card = Some(card);
        self.finish_action(Action::DrawFromDeck);
        Ok(())
    }

    /// Lift the top card of discard pile `pile` into the reveal slot.
    pub fn select_discard_top(&mut self, pile: usize) -> Result<(), GameError> {
        self.ensure(self.require_idle())?;
        if pile >= self.discard_piles.len() {
            return Err(self.reject(RejectReason::InvalidPile(pile)));
        }
        let Some(card) = self.discard_piles[pile].pop_top() else {
            return Err(self.reject(RejectReason::EmptyPile(pile)));
        };

        self.emit(GameEvent::CardMoved {
            card: card.clone(),
            zone: Zone::RevealSlot,
            slot: None,
        });
        debug!(player = %self.current_player, pile, card = %card, "took discard top");
        self.revealed_card = Some(card);
        self.finish_action(Action::SelectDiscardTop { pile });
        Ok(())
    }

    /// Swap the revealed card with the card in `player`'s `slot`.
    ///
    /// The revealed card takes the slot face-up. The hand card moves to the
    /// reveal slot, face-up, and must then be discarded.
    pub fn click_hand_card(&mut self, player: PlayerId, slot: usize) -> Result<(), GameError> {
        self.ensure(self.require_revealed())?;
        if self.players.get(player).is_none() {
            return Err(self.reject(RejectReason::UnknownPlayer(player)));
        }
        if player != self.current_player {
            return Err(self.reject(RejectReason::NotYourTurn {
                player,
                current: self.current_player,
            }));
        }
        if self.players[player].hand.get(slot).is_none() {
            return Err(self.reject(RejectReason::InvalidSlot(slot)));
        }

        let Some(mut card) = self.revealed_card.take() else {
            return Err(GameError::invariant("revealed stage without a revealed card"));
        };
        let hand = &mut self.players[player].hand;
        if let Err(err) = hand.swap(slot, &mut card) {
            error!(%player, slot, %err, "swap failed");
            self.revealed_card = Some(card);
            return Err(err);
        }
        let incoming = hand.get_mut(slot).map(|c| {
            c.owner = Some(player);
            c.clone()
        });

        let mut outgoing = card;
        outgoing.owner = None;
        if let Some(incoming) = incoming {
            debug!(%player, slot, incoming = %incoming, outgoing = %outgoing, "swapped hand card");
            self.emit(GameEvent::CardMoved {
                card: incoming,
                zone: Zone::Hand(player),
                slot: Some(slot),
            });
        }
        self.emit(GameEvent::CardMoved {
            card: outgoing.clone(),
            zone: Zone::RevealSlot,
            slot: None,
        });
        if outgoing.set_face_up(true) {
            self.emit(GameEvent::CardFaceChanged {
                card: outgoing.clone(),
                face_up: true,
            });
        }

        self.card_awaiting_discard = Some(outgoing);
        self.finish_action(Action::ClickHandCard { player, slot });
        Ok(())
    }

    /// Decline the revealed card: it must now be discarded.
    pub fn click_revealed_card(&mut self) -> Result<(), GameError> {
        self.ensure(self.require_revealed())?;
        let Some(card) = self.revealed_card.take() else {
            return Err(GameError::invariant("revealed stage without a revealed card"));
        };

        debug!(player = %self.current_player, card = %card, "declined revealed card");
        self.card_awaiting_discard = Some(card);
        self.finish_action(Action::ClickRevealedCard);
        Ok(())
    }

    /// Put the card awaiting discard on `pile` and pass the turn.
    pub fn choose_discard_pile(&mut self, pile: usize) -> Result<(), GameError> {
        self.ensure(self.require_awaiting())?;
        if pile >= self.discard_piles.len() {
            return Err(self.reject(RejectReason::InvalidPile(pile)));
        }
        let Some(card) = self.card_awaiting_discard.take() else {
            return Err(GameError::invariant("discard stage without a card to discard"));
        };

        self.discard_piles[pile].push(card);
        if let Some(top) = self.discard_piles[pile].top().cloned() {
            debug!(player = %self.current_player, pile, card = %top, "discarded");
            self.emit(GameEvent::CardMoved {
                card: top,
                zone: Zone::DiscardPile(pile),
                slot: None,
            });
        }

        self.finish_action(Action::ChooseDiscardPile { pile });
        self.next_turn();
        Ok(())
    }

    /// Throw the current game away and deal a new one.
    ///
    /// Builds a fresh deck from the catalog, shuffles it with the running
    /// RNG stream and deals every card. Accepted in any phase.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let mut deck = Deck::from_catalog(&self.catalog, self.config.copies_per_type);
        deck.shuffle(&mut self.rng);

        self.deck = deck;
        self.players = seat_players(&self.config);
        self.discard_piles = empty_piles(&self.config);
        self.deal.reset();
        self.scores = PlayerMap::with_value(self.config.player_count, 0);
        self.phase = Phase::Setup;
        self.current_player = PlayerId::new(0);
        self.revealed_card = None;
        self.card_awaiting_discard = None;
        self.outcome = None;
        self.turn_number = 1;
        self.action_sequence = 0;
        self.history = Vector::new();

        info!(seed = self.rng.seed(), "game restarted");
        self.deal_all()
    }

    /// Dispatch `action` to the matching operation.
    pub fn apply(&mut self, action: &Action) -> Result<(), GameError> {
        match *action {
            Action::DrawFromDeck => self.draw_from_deck(),
            Action::SelectDiscardTop { pile } => self.select_discard_top(pile),
            Action::ClickHandCard { player, slot } => self.click_hand_card(player, slot),
            Action::ClickRevealedCard => self.click_revealed_card(),
            Action::ChooseDiscardPile { pile } => self.choose_discard_pile(pile),
            Action::Restart => self.restart(),
        }
    }

    /// Every turn action that `apply` would accept right now.
    ///
    /// `Restart` is always accepted and never listed.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let Ok(stage) = self.require_turn() else {
            return Vec::new();
        };

        match stage {
            TurnStage::Idle => {
                let draw = (!self.deck.is_empty()).then_some(Action::DrawFromDeck);
                let tops = self
                    .discard_piles
                    .iter()
                    .enumerate()
                    .filter(|(_, pile)| !pile.is_empty())
                    .map(|(pile, _)| Action::SelectDiscardTop { pile });
                draw.into_iter().chain(tops).collect()
            }
            TurnStage::Revealed => {
                let player = self.current_player;
                self.players[player]
                    .hand
                    .slots()
                    .enumerate()
                    .filter(|(_, card)| card.is_some())
                    .map(|(slot, _)| Action::ClickHandCard { player, slot })
                    .chain(std::iter::once(Action::ClickRevealedCard))
                    .collect()
            }
            TurnStage::AwaitingDiscard => (0..self.discard_piles.len())
                .map(|pile| Action::ChooseDiscardPile { pile })
                .collect(),
        }
    }

    /// What the shell may offer as clickable right now.
    #[must_use]
    pub fn affordances(&self) -> Affordances {
        let idle = self.phase == Phase::PlayerTurn && self.stage() == TurnStage::Idle;
        Affordances {
            draw_from_deck: idle && !self.deck.is_empty(),
            discard_tops: self
                .discard_piles
                .iter()
                .map(|pile| pile.top().is_some_and(|c| c.interactable))
                .collect(),
            revealed_card: self
                .revealed_card
                .as_ref()
                .is_some_and(|c| c.interactable),
            choose_discard_pile: self.phase == Phase::PlayerTurn
                && self.card_awaiting_discard.is_some(),
            hand_slots: self.players.map(|_, player| {
                player
                    .hand
                    .slots()
                    .map(|card| card.is_some_and(|c| c.interactable))
                    .collect()
            }),
        }
    }

    // ------------------------------------------------------------------
    // Turn bookkeeping
    // ------------------------------------------------------------------

    fn finish_action(&mut self, action: Action) {
        let record = ActionRecord::new(
            self.current_player,
            action,
            self.turn_number,
            self.action_sequence,
        );
        self.action_sequence += 1;
        self.history.push_back(record);
        self.refresh_interactability();
    }

    fn next_turn(&mut self) {
        self.current_player = self.current_player.next(self.config.player_count);
        self.turn_number += 1;
        self.action_sequence = 0;

        let finisher = self
            .players
            .iter()
            .find(|(_, player)| player.is_fully_revealed())
            .map(|(id, _)| id);
        if let Some(finisher) = finisher {
            // No handover: the shell hears GameEnded, not a new turn.
            self.end_game(finisher);
            return;
        }

        self.refresh_interactability();
        self.emit(GameEvent::TurnChanged {
            player: self.current_player,
        });
        self.publish_scores();
    }

    fn end_game(&mut self, finisher: PlayerId) {
        self.phase = Phase::GameEnd;

        let mut flipped = Vec::new();
        for (_, player) in self.players.iter_mut() {
            for slot in player.reveal_all() {
                if let Some(card) = player.hand.get(slot) {
                    flipped.push(card.clone());
                }
            }
        }
        for card in flipped {
            self.emit(GameEvent::CardFaceChanged { card, face_up: true });
        }

        let outcome = GameOutcome::from_scores(self.players.map(|_, p| p.calculate_score()));
        self.scores = outcome.scores.clone();
        self.refresh_interactability();
        self.emit(GameEvent::ScoresUpdated {
            scores: outcome.scores.clone(),
        });
        self.emit(GameEvent::GameEnded {
            winner: outcome.winner,
            scores: outcome.scores.clone(),
        });

        info!(
            winner = %outcome.winner,
            %finisher,
            scores = ?outcome.scores.as_slice(),
            turns = self.turn_number,
            "game over"
        );
        self.outcome = Some(outcome);
    }

    fn publish_scores(&mut self) {
        self.scores = self.players.map(|_, p| p.calculate_score());
        self.emit(GameEvent::ScoresUpdated {
            scores: self.scores.clone(),
        });
    }

    /// Re-derive which cards the shell may click.
    fn refresh_interactability(&mut self) {
        let in_play = self.phase == Phase::PlayerTurn;
        let idle = in_play && self.stage() == TurnStage::Idle;
        let swapping = in_play && self.revealed_card.is_some();
        let current = self.current_player;

        for card in self.deck.iter_mut() {
            card.interactable = false;
        }
        for pile in &mut self.discard_piles {
            for card in pile.iter_mut() {
                card.interactable = false;
            }
            if let Some(top) = pile.top_mut() {
                top.interactable = idle;
            }
        }
        if let Some(card) = self.revealed_card.as_mut() {
            card.interactable = in_play;
        }
        if let Some(card) = self.card_awaiting_discard.as_mut() {
            card.interactable = false;
        }
        for (id, player) in self.players.iter_mut() {
            let clickable = swapping && id == current;
            for card in player.hand.cards_mut() {
                card.interactable = clickable;
            }
        }
    }

    // ------------------------------------------------------------------
    // Guards
    // ------------------------------------------------------------------

    fn require_turn(&self) -> Result<TurnStage, RejectReason> {
        match self.phase {
            Phase::Setup => Err(RejectReason::NotStarted),
            Phase::GameEnd => Err(RejectReason::GameOver),
            Phase::PlayerTurn => Ok(self.stage()),
        }
    }

    fn require_idle(&self) -> Result<(), RejectReason> {
        match self.require_turn()? {
            TurnStage::Idle => Ok(()),
            TurnStage::Revealed => Err(RejectReason::CardAlreadyRevealed),
            TurnStage::AwaitingDiscard => Err(RejectReason::DiscardPending),
        }
    }

    fn require_revealed(&self) -> Result<(), RejectReason> {
        match self.require_turn()? {
            TurnStage::Revealed => Ok(()),
            TurnStage::Idle => Err(RejectReason::NoRevealedCard),
            TurnStage::AwaitingDiscard => Err(RejectReason::DiscardPending),
        }
    }

    fn require_awaiting(&self) -> Result<(), RejectReason> {
        match self.require_turn()? {
            TurnStage::AwaitingDiscard => Ok(()),
            TurnStage::Idle | TurnStage::Revealed => Err(RejectReason::NothingToDiscard),
        }
    }

    fn ensure<T>(&mut self, check: Result<T, RejectReason>) -> Result<T, GameError> {
        match check {
            Ok(value) => Ok(value),
            Err(reason) => Err(self.reject(reason)),
        }
    }

    fn reject(&mut self, reason: RejectReason) -> GameError {
        debug!(player = %self.current_player, phase = ?self.phase, %reason, "action rejected");
        self.emit(GameEvent::ActionRejected { reason });
        GameError::IllegalAction(reason)
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    /// Capture the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            current_player: self.current_player,
            turn_number: self.turn_number,
            action_sequence: self.action_sequence,
            deck: self.deck.clone(),
            players: self.players.clone(),
            discard_piles: self.discard_piles.to_vec(),
            revealed_card: self.revealed_card.clone(),
            card_awaiting_discard: self.card_awaiting_discard.clone(),
            deal: self.deal.clone(),
            scores: self.scores.clone(),
            outcome: self.outcome.clone(),
            history: self.history.clone(),
            rng: self.rng.state(),
        }
    }

    /// Resume a game captured by `snapshot`. No events are emitted.
    ///
    /// `config` must describe the same table the snapshot was taken from.
    /// A snapshot with an unknown current seat, a wrong hand size or a
    /// phase its deal and outcome do not support is refused with
    /// `GameError::Invariant`.
    pub fn from_snapshot(config: GameConfig, snapshot: GameSnapshot) -> Result<Self, GameError> {
        config.validate()?;
        let catalog = CardCatalog::from_config(&config)?;

        if let Some(mismatch) = snapshot.table_mismatch(&config) {
            error!(
                snapshot_players = snapshot.players.player_count(),
                snapshot_piles = snapshot.discard_piles.len(),
                current = %snapshot.current_player,
                mismatch,
                "snapshot does not match configuration"
            );
            return Err(GameError::invariant(mismatch));
        }

        debug!(
            phase = ?snapshot.phase,
            turn = snapshot.turn_number,
            "restored game from snapshot"
        );
        Ok(Self {
            config,
            catalog,
            rng: GameRng::from_state(&snapshot.rng),
            deck: snapshot.deck,
            players: snapshot.players,
            discard_piles: snapshot.discard_piles.into_iter().collect(),
            phase: snapshot.phase,
            current_player: snapshot.current_player,
            revealed_card: snapshot.revealed_card,
            card_awaiting_discard: snapshot.card_awaiting_discard,
            deal: snapshot.deal,
            scores: snapshot.scores,
            outcome: snapshot.outcome,
            turn_number: snapshot.turn_number,
            action_sequence: snapshot.action_sequence,
            history: snapshot.history,
            observers: Vec::new(),
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Stage of the current turn, derived from the staging slots.
    #[must_use]
    pub fn stage(&self) -> TurnStage {
        TurnStage::from_slots(
            self.revealed_card.is_some(),
            self.card_awaiting_discard.is_some(),
        )
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn revealed_card(&self) -> Option<&Card> {
        self.revealed_card.as_ref()
    }

    #[must_use]
    pub fn card_awaiting_discard(&self) -> Option<&Card> {
        self.card_awaiting_discard.as_ref()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player)
    }

    #[must_use]
    pub fn discard_piles(&self) -> &[DiscardPile] {
        &self.discard_piles
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Progress of the opening deal.
    #[must_use]
    pub fn deal_progress(&self) -> &DealSequence {
        &self.deal
    }

    /// Scores as last published.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<i32> {
        &self.scores
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameEnd
    }

    /// Accepted actions of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("phase", &self.phase)
            .field("stage", &self.stage())
            .field("current_player", &self.current_player)
            .field("turn_number", &self.turn_number)
            .field("deck_remaining", &self.deck.remaining())
            .field("scores", &self.scores.as_slice())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

fn seat_players(config: &GameConfig) -> PlayerMap<Player> {
    PlayerMap::new(config.player_count, |id| {
        Player::new(id, config.cards_per_player)
    })
}

fn empty_piles(config: &GameConfig) -> SmallVec<[DiscardPile; 2]> {
    (0..config.discard_pile_count)
        .map(|_| DiscardPile::new())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EventLog;

    fn dealt_game(seed: u64) -> GameController {
        let mut game = GameController::new(GameConfig::default(), seed).unwrap();
        game.deal_all().unwrap();
        game
    }

    #[test]
    fn test_new_game_in_setup() {
        let game = GameController::new(GameConfig::default(), 42).unwrap();

        assert_eq!(game.phase(), Phase::Setup);
        assert_eq!(game.deck().remaining(), 52);
        assert!(game.legal_actions().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_player_count(1);
        let err = GameController::new(config, 42).unwrap_err();

        assert!(matches!(err, GameError::Config(ConfigError::PlayerCount(1))));
    }

    #[test]
    fn test_deal_all_starts_play() {
        let game = dealt_game(42);

        assert_eq!(game.phase(), Phase::PlayerTurn);
        assert_eq!(game.stage(), TurnStage::Idle);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.deck().remaining(), 52 - 24);
        for (id, player) in game.players().iter() {
            assert_eq!(player.hand.card_count(), 6);
            assert!(player.hand.cards().all(|c| !c.face_up && c.owner == Some(id)));
        }
        assert!(game.scores().values().all(|&s| s == 0));
    }

    #[test]
    fn test_deal_next_steps() {
        let mut game = GameController::new(GameConfig::default(), 42).unwrap();

        let first = game.deal_next().unwrap().unwrap();
        assert_eq!(first, DealStep { player: PlayerId::new(0), slot: 0 });
        assert_eq!(game.deal_progress().dealt(), 1);

        for _ in 1..24 {
            game.deal_next().unwrap();
        }
        assert_eq!(game.phase(), Phase::PlayerTurn);

        let err = game.deal_next().unwrap_err();
        assert_eq!(err.reject_reason(), Some(RejectReason::NotDealing));
    }

    #[test]
    fn test_deal_face_up() {
        let mut game = GameController::new(GameConfig::default().deal_face_up(), 42).unwrap();
        game.deal_all().unwrap();

        assert!(game
            .players()
            .values()
            .all(|p| p.hand.cards().all(|c| c.face_up)));
    }

    #[test]
    fn test_actions_rejected_during_setup() {
        let mut game = GameController::new(GameConfig::default(), 42).unwrap();

        let err = game.draw_from_deck().unwrap_err();
        assert_eq!(err.reject_reason(), Some(RejectReason::NotStarted));
    }

    #[test]
    fn test_draw_then_decline_then_discard() {
        let mut game = dealt_game(7);

        game.draw_from_deck().unwrap();
        assert_eq!(game.stage(), TurnStage::Revealed);
        let revealed = game.revealed_card().unwrap().id;
        assert!(game.revealed_card().unwrap().face_up);

        game.click_revealed_card().unwrap();
        assert_eq!(game.stage(), TurnStage::AwaitingDiscard);

        game.choose_discard_pile(1).unwrap();
        assert_eq!(game.stage(), TurnStage::Idle);
        assert_eq!(game.current_player(), PlayerId::new(1));
        assert_eq!(game.discard_piles()[1].top().unwrap().id, revealed);
        assert_eq!(game.turn_number(), 2);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_swap_puts_revealed_card_in_slot() {
        let mut game = dealt_game(11);
        game.draw_from_deck().unwrap();
        let revealed = game.revealed_card().unwrap().id;
        let hand_card = game.players()[PlayerId::new(0)].hand.get(3).unwrap().id;

        game.click_hand_card(PlayerId::new(0), 3).unwrap();

        let slot = game.players()[PlayerId::new(0)].hand.get(3).unwrap();
        assert_eq!(slot.id, revealed);
        assert!(slot.face_up);
        assert_eq!(slot.owner, Some(PlayerId::new(0)));
        let outgoing = game.card_awaiting_discard().unwrap();
        assert_eq!(outgoing.id, hand_card);
        assert!(outgoing.face_up);
        assert_eq!(outgoing.owner, None);
    }

    #[test]
    fn test_stage_rejections() {
        let mut game = dealt_game(3);

        assert_eq!(
            game.click_hand_card(PlayerId::new(0), 0).unwrap_err().reject_reason(),
            Some(RejectReason::NoRevealedCard)
        );
        assert_eq!(
            game.click_revealed_card().unwrap_err().reject_reason(),
            Some(RejectReason::NoRevealedCard)
        );
        assert_eq!(
            game.choose_discard_pile(0).unwrap_err().reject_reason(),
            Some(RejectReason::NothingToDiscard)
        );
        assert_eq!(
            game.select_discard_top(0).unwrap_err().reject_reason(),
            Some(RejectReason::EmptyPile(0))
        );

        game.draw_from_deck().unwrap();
        assert_eq!(
            game.draw_from_deck().unwrap_err().reject_reason(),
            Some(RejectReason::CardAlreadyRevealed)
        );
        assert_eq!(
            game.click_hand_card(PlayerId::new(2), 0).unwrap_err().reject_reason(),
            Some(RejectReason::NotYourTurn {
                player: PlayerId::new(2),
                current: PlayerId::new(0)
            })
        );
        assert_eq!(
            game.click_hand_card(PlayerId::new(0), 6).unwrap_err().reject_reason(),
            Some(RejectReason::InvalidSlot(6))
        );
        assert_eq!(
            game.click_hand_card(PlayerId::new(9), 0).unwrap_err().reject_reason(),
            Some(RejectReason::UnknownPlayer(PlayerId::new(9)))
        );

        game.click_revealed_card().unwrap();
        assert_eq!(
            game.choose_discard_pile(2).unwrap_err().reject_reason(),
            Some(RejectReason::InvalidPile(2))
        );
        for action in [
            Action::DrawFromDeck,
            Action::SelectDiscardTop { pile: 0 },
            Action::ClickHandCard {
                player: PlayerId::new(0),
                slot: 0,
            },
            Action::ClickRevealedCard,
        ] {
            assert_eq!(
                game.apply(&action).unwrap_err().reject_reason(),
                Some(RejectReason::DiscardPending)
            );
        }
        assert_eq!(game.stage(), TurnStage::AwaitingDiscard);
    }

    #[test]
    fn test_rejection_leaves_state_and_notifies() {
        let mut game = dealt_game(5);
        let log = EventLog::new();
        game.add_observer(log.clone());
        let before = game.snapshot();

        game.choose_discard_pile(0).unwrap_err();

        assert_eq!(game.snapshot(), before);
        assert_eq!(
            log.take(),
            vec![GameEvent::ActionRejected {
                reason: RejectReason::NothingToDiscard
            }]
        );
    }

    #[test]
    fn test_interactability_follows_stage() {
        let mut game = dealt_game(9);
        let p0 = PlayerId::new(0);

        let idle = game.affordances();
        assert!(idle.draw_from_deck);
        assert!(!idle.revealed_card);
        assert!(!idle.any_hand_slot(p0));

        game.draw_from_deck().unwrap();
        let revealed = game.affordances();
        assert!(!revealed.draw_from_deck);
        assert!(revealed.revealed_card);
        assert!(revealed.hand_slots[p0].iter().all(|&s| s));
        assert!(!revealed.any_hand_slot(PlayerId::new(1)));

        game.click_revealed_card().unwrap();
        let awaiting = game.affordances();
        assert!(awaiting.choose_discard_pile);
        assert!(!awaiting.revealed_card);
        assert!(!awaiting.any_hand_slot(p0));

        game.choose_discard_pile(0).unwrap();
        let next = game.affordances();
        assert!(next.draw_from_deck);
        assert_eq!(next.discard_tops.as_slice(), &[true, false]);
    }

    #[test]
    fn test_legal_actions_per_stage() {
        let mut game = dealt_game(13);

        assert_eq!(game.legal_actions(), vec![Action::DrawFromDeck]);

        game.draw_from_deck().unwrap();
        let actions = game.legal_actions();
        assert_eq!(actions.len(), 7);
        assert_eq!(actions.last(), Some(&Action::ClickRevealedCard));

        game.apply(&Action::ClickHandCard {
            player: PlayerId::new(0),
            slot: 0,
        })
        .unwrap();
        assert_eq!(
            game.legal_actions(),
            vec![
                Action::ChooseDiscardPile { pile: 0 },
                Action::ChooseDiscardPile { pile: 1 },
            ]
        );
    }

    #[test]
    fn test_restart_deals_new_game() {
        let mut game = dealt_game(21);
        let first_hand: Vec<_> = game.players()[PlayerId::new(0)]
            .hand
            .cards()
            .map(|c| c.id)
            .collect();
        game.draw_from_deck().unwrap();

        game.restart().unwrap();

        assert_eq!(game.phase(), Phase::PlayerTurn);
        assert_eq!(game.stage(), TurnStage::Idle);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.deck().remaining(), 28);
        assert!(game.history().is_empty());
        assert!(game.discard_piles().iter().all(DiscardPile::is_empty));
        let second_hand: Vec<_> = game.players()[PlayerId::new(0)]
            .hand
            .cards()
            .map(|c| c.id)
            .collect();
        assert_ne!(first_hand, second_hand);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = dealt_game(99);
        let b = dealt_game(99);

        assert_eq!(a.players(), b.players());
        assert_eq!(a.deck(), b.deck());
    }
}
