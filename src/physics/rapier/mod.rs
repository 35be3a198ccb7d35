pub mod rapier_physics;

pub use rapier_physics::{ball_mass, body_material, PhysicsSetupPlugin, PIXELS_PER_METER};
