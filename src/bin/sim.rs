//! Headless run: the home player sits idle until the placement countdown
//! places their fleet, then both sides fire random shots in turn.
//! Prints a JSON summary.

use pirates_revenge::{
    BoardCoordinate, CountdownEvent, EventOutcome, GameConfig, GamePhase, GameSession,
    InputEvent, Orientation, Player, Renderer, ShotOutcome,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

#[derive(Default)]
struct Tally {
    hits: [usize; 2],
    misses: [usize; 2],
    active: usize,
}

impl Renderer for Tally {
    type Pointer = Option<BoardCoordinate>;

    fn pick_cell(&mut self, pointer: &Self::Pointer) -> Option<BoardCoordinate> {
        *pointer
    }

    fn render_preview(&mut self, _: usize, _: Option<BoardCoordinate>, _: Orientation, _: bool) {}

    fn render_highlight(&mut self, _: BoardCoordinate, _: bool) {}

    fn play_hit_animation(&mut self, _: BoardCoordinate) {
        self.hits[self.active] += 1;
    }

    fn play_miss_animation(&mut self, _: BoardCoordinate) {
        self.misses[self.active] += 1;
    }

    fn render_phase(&mut self, _: GamePhase, player: Player) {
        self.active = match player {
            Player::Home => 0,
            Player::Visitor => 1,
        };
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [shots-per-player]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let shots: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => 10,
    };

    let config = GameConfig::default();
    let mut session = GameSession::with_seed(config, seed)?;
    let mut view = Tally::default();
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

    session.start_game(&mut view);
    let mut ticks = 0;
    while session.phase() == GamePhase::Placing {
        if let Some(CountdownEvent::Tick(_)) = session.on_timer_tick(&mut view) {
            ticks += 1;
        }
    }

    let mut outcomes = Vec::new();
    for _ in 0..shots * 2 {
        let target = BoardCoordinate::new(
            rng.random_range(0..config.board_size),
            rng.random_range(0..config.board_size),
        );
        let shooter = session.active_player();
        if let Ok(EventOutcome::Fired { outcome, .. }) =
            session.handle(&mut view, InputEvent::PointerClick(Some(target)))
        {
            outcomes.push(json!({
                "player": shooter,
                "target": target,
                "hit": outcome == ShotOutcome::Hit,
            }));
        }
        session.finish_shot(&mut view);
    }

    let result = json!({
        "seed": seed,
        "countdown_ticks": ticks,
        "home_fleet": session.fleet(Player::Home).cells(),
        "visitor_fleet": session.fleet(Player::Visitor).cells(),
        "home": {"hits": view.hits[0], "misses": view.misses[0]},
        "visitor": {"hits": view.hits[1], "misses": view.misses[1]},
        "shots": outcomes,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
