#[cfg(feature = "debug")]
use super::state::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::core::components::{Ball, CrateBox, Racked};
#[cfg(feature = "debug")]
use crate::gameplay::round::RoundEvent;
#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier2d::prelude::{Sleeping, Velocity};

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    mut round_events: EventReader<RoundEvent>,
    q_ball: Query<(&Velocity, Has<Racked>), With<Ball>>,
    q_boxes: Query<Option<&Sleeping>, With<CrateBox>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    let inst_ms = dt * 1000.0;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
        stats.frame_time_ms = inst_ms;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }

    if let Some((vel, racked)) = q_ball.iter().next() {
        stats.ball_speed = vel.linvel.length();
        stats.ball_racked = racked;
    }
    stats.boxes = q_boxes.iter().count();
    stats.boxes_awake = q_boxes
        .iter()
        .filter(|s| !s.is_some_and(|s| s.sleeping))
        .count();

    for ev in round_events.read() {
        match ev {
            RoundEvent::Launched { .. } => stats.launches += 1,
            RoundEvent::Holed => stats.holed += 1,
            RoundEvent::FellOut => stats.fell_out += 1,
            RoundEvent::Reracked => stats.reracked += 1,
        }
    }
}
