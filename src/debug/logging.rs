#[cfg(feature = "debug")]
use super::state::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::core::level::ActiveVariant;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    stats: Res<DebugStats>,
    variant: Option<Res<ActiveVariant>>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!("SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} variant={} ball_speed={:.1} racked={} boxes={}/{} awake launches={} holed={} fell_out={} reracked={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            variant.map_or("-", |v| v.id()),
            stats.ball_speed,
            stats.ball_racked,
            stats.boxes_awake,
            stats.boxes,
            stats.launches,
            stats.holed,
            stats.fell_out,
            stats.reracked);
    }
}
