#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Clone)]
pub struct DebugState {
    pub frame_counter: u64,
    pub time_accum: f32,
    pub log_interval: f32,
    /// Rapier collider wireframes (F1).
    pub wireframe: bool,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            frame_counter: 0,
            time_accum: 0.0,
            log_interval: 1.0,
            wireframe: false,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub ball_speed: f32,
    pub ball_racked: bool,
    pub boxes: usize,
    pub boxes_awake: usize,
    pub launches: u32,
    pub holed: u32,
    pub fell_out: u32,
    pub reracked: u32,
}
