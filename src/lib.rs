//! 3x3x3 Rubik's cube simulator with a layer-by-layer solver.
//!
//! [`cube::RubiksCube`] holds the 54 facelets and applies the 36 moves of [`moves::Move`],
//! [`solver::solve`] returns the full labeled move list that solves a cube.

pub mod algorithms;
pub mod batch;
pub mod color;
pub mod cube;
pub mod moves;
pub mod playback;
pub mod solver;
pub mod state;

pub use color::Color;
pub use cube::{Face, RubiksCube};
pub use moves::Move;
pub use solver::{solve, LayerByLayerSolver, SolutionStep, SolverResult, Stage};
pub use state::CubeState;
