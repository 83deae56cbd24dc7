/// Main configuration module.
/// 
/// Re-exports submodules for gameplay and timing configuration.
pub mod game;
pub mod timing;
