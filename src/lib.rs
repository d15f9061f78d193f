//! Crate root module declarations for the Breakwave engine project.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! search, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod board_types;
    pub mod breakthrough_rules;
}

pub mod move_generation {
    pub mod generate_moves;
    pub mod move_apply;
}

pub mod search {
    pub mod board_scoring;
    pub mod reply_simulation;
    pub mod tactical_patterns;
    pub mod threat_wave;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_threat_wave;
    pub mod engine_trait;
}

pub mod utils {
    pub mod coordinates;
    pub mod encoding;
    pub mod match_harness;
    pub mod render_board;
}

pub mod errors;
