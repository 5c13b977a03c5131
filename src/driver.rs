#![cfg(feature = "std")]

use log::debug;
use tokio::sync::mpsc;
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};

use crate::game::{EventOutcome, GameSession, InputEvent};
use crate::render::Renderer;

/// Run one started session until the input channel closes.
///
/// Input events, countdown ticks and the end of each shot animation are all
/// handled on this one task, so every handler sees a consistent session.
/// Rejected input is logged and otherwise ignored.
pub async fn drive<V: Renderer>(
    session: &mut GameSession,
    view: &mut V,
    mut input: mpsc::Receiver<InputEvent<V::Pointer>>,
) {
    let period = session.config().tick_interval;
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut shot_deadline: Option<Instant> = None;

    loop {
        let countdown_running = session.countdown().is_running();
        let deadline = shot_deadline.unwrap_or_else(Instant::now);
        tokio::select! {
            event = input.recv() => {
                let Some(event) = event else { break };
                match session.handle(view, event) {
                    Ok(EventOutcome::Fired { .. }) => {
                        shot_deadline = Some(Instant::now() + session.config().shot_animation);
                    }
                    Ok(outcome) => debug!("Input handled: {:?}", outcome),
                    Err(rejected) => debug!("Input ignored: {}", rejected),
                }
            }
            _ = ticker.tick(), if countdown_running => {
                session.on_timer_tick(view);
            }
            _ = sleep_until(deadline), if shot_deadline.is_some() => {
                shot_deadline = None;
                session.finish_shot(view);
            }
        }
    }
    debug!("Input closed, leaving the game loop");
}
