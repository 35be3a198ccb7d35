// This file is part of Flingball.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The four shipped mini-games and the knobs that distinguish them.

use bevy::prelude::*;

/// Scene family: decides geometry, gravity and the termination rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Top-down putting green, no gravity, hole sensor.
    Golf,
    /// Side view, gravity, slingshot against a box pyramid.
    Demolition,
}

/// Where sprite art comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtSource {
    Procedural,
    Files,
}

/// How the aim release is handed to the physics body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchMode {
    /// Overwrite the linear velocity.
    Velocity,
    /// Apply a one-shot impulse.
    Impulse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariantId {
    #[default]
    Golf,
    GolfSprites,
    Demolition,
    DemolitionSprites,
}

impl VariantId {
    pub const ALL: [VariantId; 4] = [
        VariantId::Golf,
        VariantId::GolfSprites,
        VariantId::Demolition,
        VariantId::DemolitionSprites,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Golf => "golf",
            Self::GolfSprites => "golf_sprites",
            Self::Demolition => "demolition",
            Self::DemolitionSprites => "demolition_sprites",
        }
    }

    pub fn from_id(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|v| v.id().eq_ignore_ascii_case(s))
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Golf => "Mini golf",
            Self::GolfSprites => "Mini golf (sprites)",
            Self::Demolition => "Demolition",
            Self::DemolitionSprites => "Demolition (sprites)",
        }
    }

    pub fn kind(self) -> SceneKind {
        match self {
            Self::Golf | Self::GolfSprites => SceneKind::Golf,
            Self::Demolition | Self::DemolitionSprites => SceneKind::Demolition,
        }
    }

    pub fn art(self) -> ArtSource {
        match self {
            Self::Golf | Self::Demolition => ArtSource::Procedural,
            Self::GolfSprites | Self::DemolitionSprites => ArtSource::Files,
        }
    }

    pub fn launch(self) -> LaunchMode {
        match self {
            Self::DemolitionSprites => LaunchMode::Impulse,
            _ => LaunchMode::Velocity,
        }
    }
}

/// Variant the next `Loading` pass will build.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Deref, Default)]
pub struct ActiveVariant(pub VariantId);
