//! Unattended runs: `window.autoClose` seconds after start the app exits,
//! logging the session's score on the way out.

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::round::Scoreboard;

#[derive(Resource, Deref, DerefMut)]
pub struct SessionDeadline(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_deadline)
            .add_systems(Update, expire_session.run_if(resource_exists::<SessionDeadline>));
    }
}

fn arm_deadline(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "session", seconds = secs, "exiting automatically after {secs}s");
        commands.insert_resource(SessionDeadline(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn expire_session(
    time: Res<Time>,
    mut deadline: ResMut<SessionDeadline>,
    score: Option<Res<Scoreboard>>,
    mut exit: EventWriter<AppExit>,
) {
    if !deadline.tick(time.delta()).just_finished() {
        return;
    }
    if let Some(s) = score {
        info!(
            target: "session",
            "session over: shots={} holes={} restarts={}",
            s.shots, s.holes, s.restarts
        );
    }
    exit.write(AppExit::Success);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn app_with(secs: f32) -> App {
        let mut app = App::new();
        let mut cfg = GameConfig::default();
        cfg.window.auto_close = secs;
        app.add_plugins(MinimalPlugins)
            .insert_resource(cfg)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)))
            .add_plugins(AutoClosePlugin);
        app
    }

    #[test]
    fn zero_disables_the_deadline() {
        let mut app = app_with(0.0);
        app.update();
        assert!(app.world().get_resource::<SessionDeadline>().is_none());
    }

    #[test]
    fn deadline_requests_exit() {
        let mut app = app_with(0.5);
        let mut exited = None;
        for _ in 0..8 {
            app.update();
            exited = app.should_exit();
            if exited.is_some() {
                break;
            }
        }
        assert_eq!(exited, Some(AppExit::Success));
    }
}
