//! Application state shared across handlers

use crate::repositories::HeroRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub hero_repository: HeroRepository,
}
