use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One stage of the host initialization sequence, in the order the host drives them.
///
/// The derived ordering is the lifecycle ordering: `Core < Servers < Scene < Editor < Max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Core,
    Servers,
    Scene,
    Editor,
    Max,
}

impl Phase {
    /// Every phase in initialization order.
    pub const ALL: [Self; 5] = [Self::Core, Self::Servers, Self::Scene, Self::Editor, Self::Max];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Servers => "servers",
            Self::Scene => "scene",
            Self::Editor => "editor",
            Self::Max => "max",
        }
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// The phase after this one, `None` for `Max`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Core => Some(Self::Servers),
            Self::Servers => Some(Self::Scene),
            Self::Scene => Some(Self::Editor),
            Self::Editor => Some(Self::Max),
            Self::Max => None,
        }
    }

    #[must_use]
    pub const fn flag(self) -> PhaseSet {
        match self {
            Self::Core => PhaseSet::CORE,
            Self::Servers => PhaseSet::SERVERS,
            Self::Scene => PhaseSet::SCENE,
            Self::Editor => PhaseSet::EDITOR,
            Self::Max => PhaseSet::MAX,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

bitflags! {
    /// Represents a set of completed phases.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct PhaseSet: u8 {
        const CORE = 1 << 0;
        const SERVERS = 1 << 1;
        const SCENE = 1 << 2;
        const EDITOR = 1 << 3;
        const MAX = 1 << 4;

        const ALL = Self::CORE.bits()
            | Self::SERVERS.bits()
            | Self::SCENE.bits()
            | Self::EDITOR.bits()
            | Self::MAX.bits();
    }
}

impl Default for PhaseSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl PhaseSet {
    #[must_use]
    pub const fn has(self, phase: Phase) -> bool {
        self.contains(phase.flag())
    }

    /// The latest phase in the set.
    #[must_use]
    pub fn highest(self) -> Option<Phase> {
        Phase::ALL.into_iter().rev().find(|phase| self.has(*phase))
    }

    /// Phases in the set, latest first. This is the teardown order.
    pub fn descending(self) -> impl Iterator<Item = Phase> {
        Phase::ALL.into_iter().rev().filter(move |phase| self.has(*phase))
    }
}

impl From<Phase> for PhaseSet {
    fn from(phase: Phase) -> Self {
        phase.flag()
    }
}

impl From<u8> for PhaseSet {
    fn from(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for PhaseSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for PhaseSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
