//! Game session: phase state machine and input dispatch.

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::OccupancyTracker;
use crate::common::{BoardCoordinate, Rejected, ShotOutcome};
use crate::config::{ConfigError, GameConfig, NUM_SHIPS};
use crate::countdown::{Countdown, CountdownEvent};
use crate::placement::{Placement, PlacementEngine};
use crate::render::Renderer;
use crate::ship::{Orientation, ShipSpec};
use crate::shot;
use crate::target::{HoverChange, TargetResolver};

/// Phase of a round. A round never returns to `Placing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Placing,
    Shooting,
}

/// The two seats sharing one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Home,
    Visitor,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Home => Player::Visitor,
            Player::Visitor => Player::Home,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::Home => 0,
            Player::Visitor => 1,
        }
    }
}

/// Pointer input delivered to [`GameSession::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent<P> {
    PointerMove(P),
    PointerClick(P),
    ContextMenu(P),
}

/// What an accepted input event did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// The current ship fits at the hovered cell.
    Previewed(Placement),
    /// The current ship was committed to the board.
    Placed(Placement),
    /// The placement orientation flipped.
    Rotated(Orientation),
    /// The hovered cell changed.
    Hovered(HoverChange),
    /// A shot was resolved; input stays locked until [`GameSession::finish_shot`].
    Fired {
        target: BoardCoordinate,
        outcome: ShotOutcome,
    },
    /// The event has no meaning in the current phase.
    Ignored,
}

/// All state of one round, owned by the top-level controller.
pub struct GameSession {
    config: GameConfig,
    phase: GamePhase,
    active: Player,
    placement: Option<PlacementEngine>,
    fleets: [OccupancyTracker; 2],
    countdown: Countdown,
    hover: TargetResolver,
    shot_pending: bool,
    started: bool,
    rng: SmallRng,
}

impl GameSession {
    /// Create a session in the `Placing` phase. Input is refused with
    /// [`Rejected::WrongPhase`] until [`start_game`](Self::start_game).
    pub fn new(config: GameConfig, rng: SmallRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: GamePhase::Placing,
            active: Player::Home,
            placement: Some(PlacementEngine::new(config.board_size)),
            fleets: [OccupancyTracker::new(), OccupancyTracker::new()],
            countdown: Countdown::new(),
            hover: TargetResolver::new(),
            shot_pending: false,
            started: false,
            rng,
        })
    }

    /// Session with a deterministic RNG.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Placement state, present only while placing.
    pub fn placement(&self) -> Option<&PlacementEngine> {
        self.placement.as_ref()
    }

    /// The ship the active player is placing.
    pub fn current_ship(&self) -> Option<ShipSpec> {
        self.placement.as_ref().and_then(|p| p.current_ship())
    }

    pub fn orientation(&self) -> Orientation {
        self.placement
            .as_ref()
            .map(|p| p.orientation())
            .unwrap_or_default()
    }

    /// Locked cells of `player`, including ships placed so far this phase.
    pub fn fleet(&self, player: Player) -> &OccupancyTracker {
        match &self.placement {
            Some(engine) if player == self.active => engine.locked(),
            _ => &self.fleets[player.index()],
        }
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Placement time left, in `[0, 1]`.
    pub fn countdown_fraction(&self) -> f32 {
        self.countdown.fraction()
    }

    pub fn hovered(&self) -> Option<BoardCoordinate> {
        self.hover.current()
    }

    /// `true` while a shot animation blocks input.
    pub fn shot_pending(&self) -> bool {
        self.shot_pending
    }

    /// Deal the visitor a random fleet, then let the home player place theirs.
    pub fn start_game<V: Renderer>(&mut self, view: &mut V) {
        let mut visitor = PlacementEngine::new(self.config.board_size);
        visitor.place_all_random(&mut self.rng);
        self.fleets[Player::Visitor.index()] = visitor.into_locked();
        self.active = Player::Home;
        self.started = true;
        info!("Game started");
        self.reset_placement(view);
    }

    /// Restart the active player's placement from an empty board and re-arm
    /// the countdown. Refused once shooting has begun.
    pub fn start_placement_phase<V: Renderer>(&mut self, view: &mut V) -> Result<(), Rejected> {
        if !self.started || self.phase != GamePhase::Placing || self.placement.is_none() {
            return Err(Rejected::WrongPhase);
        }
        self.reset_placement(view);
        Ok(())
    }

    fn reset_placement<V: Renderer>(&mut self, view: &mut V) {
        self.phase = GamePhase::Placing;
        self.placement = Some(PlacementEngine::new(self.config.board_size));
        self.fleets[self.active.index()].clear();
        self.hover.clear();
        self.shot_pending = false;
        self.countdown
            .start(self.config.placement_seconds, self.config.tick_interval);
        info!(
            "Placement phase for {:?}: {} seconds",
            self.active, self.config.placement_seconds
        );
        view.render_phase(self.phase, self.active);
        view.render_countdown(self.countdown.fraction());
    }

    /// Stop the countdown and switch input handling to shooting.
    ///
    /// Ships still unplaced at this point are placed at random so both
    /// fleets are always complete when shooting starts.
    pub fn start_shooting_phase<V: Renderer>(&mut self, view: &mut V) {
        self.countdown.cancel();
        view.hide_countdown();
        if let Some(mut engine) = self.placement.take() {
            if !engine.is_complete() {
                warn!(
                    "Shooting started with {} ship(s) unplaced",
                    NUM_SHIPS - engine.ship_index()
                );
                for placement in engine.place_all_random(&mut self.rng) {
                    view.render_placed(&placement);
                }
            }
            self.fleets[self.active.index()] = engine.into_locked();
        }
        if let Some(cell) = self.hover.clear() {
            view.render_highlight(cell, false);
        }
        self.phase = GamePhase::Shooting;
        info!("Shooting phase, {:?} fires first", self.active);
        view.render_phase(self.phase, self.active);
    }

    /// Single entry point for pointer input; dispatches on the current phase.
    pub fn handle<V: Renderer>(
        &mut self,
        view: &mut V,
        event: InputEvent<V::Pointer>,
    ) -> Result<EventOutcome, Rejected> {
        if !self.started {
            return Err(Rejected::WrongPhase);
        }
        match (self.phase, event) {
            (GamePhase::Placing, InputEvent::PointerMove(p)) => self.placement_hover(view, &p),
            (GamePhase::Placing, InputEvent::PointerClick(p)) => self.placement_click(view, &p),
            (GamePhase::Placing, InputEvent::ContextMenu(_)) => self.placement_rotate(view),
            (GamePhase::Shooting, InputEvent::PointerMove(p)) => self.shoot_hover(view, &p),
            (GamePhase::Shooting, InputEvent::PointerClick(p)) => self.shoot(view, &p),
            (GamePhase::Shooting, InputEvent::ContextMenu(_)) => Ok(EventOutcome::Ignored),
        }
    }

    /// Advance the placement countdown by one tick. When it runs out the
    /// remaining ships are placed at random and shooting begins.
    pub fn on_timer_tick<V: Renderer>(&mut self, view: &mut V) -> Option<CountdownEvent> {
        if self.phase != GamePhase::Placing {
            self.countdown.cancel();
            return None;
        }
        let event = self.countdown.tick()?;
        match event {
            CountdownEvent::Tick(fraction) => view.render_countdown(fraction),
            CountdownEvent::Expired => {
                info!("Placement time is up for {:?}", self.active);
                if let Some(engine) = self.placement.as_mut() {
                    for placement in engine.place_all_random(&mut self.rng) {
                        view.render_placed(&placement);
                    }
                }
                self.start_shooting_phase(view);
            }
        }
        Some(event)
    }

    /// End the shot lockout and pass the turn. Returns the player to move
    /// next, or `None` if no shot was pending.
    pub fn finish_shot<V: Renderer>(&mut self, view: &mut V) -> Option<Player> {
        if !self.shot_pending {
            return None;
        }
        self.shot_pending = false;
        self.active = self.active.opponent();
        debug!("Turn passes to {:?}", self.active);
        view.render_phase(self.phase, self.active);
        Some(self.active)
    }

    fn placement_hover<V: Renderer>(
        &mut self,
        view: &mut V,
        pointer: &V::Pointer,
    ) -> Result<EventOutcome, Rejected> {
        let picked = view.pick_cell(pointer);
        self.hover.update(picked);
        self.preview(view).map(EventOutcome::Previewed)
    }

    fn placement_click<V: Renderer>(
        &mut self,
        view: &mut V,
        pointer: &V::Pointer,
    ) -> Result<EventOutcome, Rejected> {
        let picked = view.pick_cell(pointer);
        self.hover.update(picked);
        let anchor = picked.ok_or(Rejected::NoCellUnderPointer)?;
        let engine = self.placement.as_mut().ok_or(Rejected::WrongPhase)?;
        let orientation = engine.orientation();
        let placement = engine.confirm_placement(anchor, orientation)?;
        view.render_placed(&placement);
        if engine.is_complete() {
            self.start_shooting_phase(view);
        }
        Ok(EventOutcome::Placed(placement))
    }

    fn placement_rotate<V: Renderer>(&mut self, view: &mut V) -> Result<EventOutcome, Rejected> {
        let engine = self.placement.as_mut().ok_or(Rejected::WrongPhase)?;
        let orientation = engine.toggle_orientation();
        let _ = self.preview(view);
        Ok(EventOutcome::Rotated(orientation))
    }

    /// Show or hide the current ship at the hovered cell.
    fn preview<V: Renderer>(&self, view: &mut V) -> Result<Placement, Rejected> {
        let engine = self.placement.as_ref().ok_or(Rejected::WrongPhase)?;
        let ship = engine.current_ship().ok_or(Rejected::FleetComplete)?;
        let orientation = engine.orientation();
        let anchor = self.hover.current();
        let result = anchor
            .ok_or(Rejected::NoCellUnderPointer)
            .and_then(|cell| engine.preview_at(cell, orientation));
        view.render_preview(ship.index(), anchor, orientation, result.is_ok());
        result
    }

    fn shoot_hover<V: Renderer>(
        &mut self,
        view: &mut V,
        pointer: &V::Pointer,
    ) -> Result<EventOutcome, Rejected> {
        if self.shot_pending {
            return Err(Rejected::ShotPending);
        }
        let change = self.hover.update(view.pick_cell(pointer));
        if let Some(cell) = change.restore {
            view.render_highlight(cell, false);
        }
        if let Some(cell) = change.hover {
            view.render_highlight(cell, true);
        }
        Ok(EventOutcome::Hovered(change))
    }

    fn shoot<V: Renderer>(
        &mut self,
        view: &mut V,
        pointer: &V::Pointer,
    ) -> Result<EventOutcome, Rejected> {
        if self.shot_pending {
            return Err(Rejected::ShotPending);
        }
        let picked = view.pick_cell(pointer);
        if let Some(cell) = self.hover.clear() {
            view.render_highlight(cell, false);
        }
        let target = picked.ok_or(Rejected::NoCellUnderPointer)?;
        let outcome = shot::resolve(target, &self.fleets[self.active.opponent().index()]);
        match outcome {
            ShotOutcome::Hit => view.play_hit_animation(target),
            ShotOutcome::Miss => view.play_miss_animation(target),
        }
        self.shot_pending = true;
        info!("{:?} fired at {}: {:?}", self.active, target, outcome);
        Ok(EventOutcome::Fired { target, outcome })
    }
}
