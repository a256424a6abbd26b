//! Game rules, state and tick driving.
//!
//! - [`GameState`] - Snake, heading, food, score and running flag of one game
//! - [`check_termination`] - Pure game-over predicate
//! - [`FoodSpawner`] / [`FoodSeed`] - Seeded, uniform food placement
//! - [`GameLoop`] - Per-tick sequence wired to the [`Renderer`], [`ScoreDisplay`] and [`Audio`] collaborators
//! - [`TickScheduler`] - Delayed-tick capability, with [`ManualScheduler`] for synchronous driving
//!
//! # Game Flow
//!
//! 1. Create a [`GameState`] (initial snake heading right, score 0, one food)
//! 2. [`GameLoop::start`] paints the first frame and schedules a tick
//! 3. Input calls [`GameLoop::handle_key`] at any time between ticks
//! 4. Each fired tick advances the snake and schedules the next one
//! 5. A tick that ends the game schedules nothing; [`GameLoop::reset`] starts over

pub use self::{
    collaborator::*, food::*, game_loop::*, game_state::*, input::*, scheduler::*,
    termination::*,
};

mod collaborator;
mod food;
mod game_loop;
mod game_state;
mod input;
mod scheduler;
mod termination;
