//! Decoded symbol descriptor.
//!
//! Identifier parsing lives elsewhere; this is the read-only view the layout
//! engine consumes. Field codes follow the two-digit / six-digit numbering of
//! the symbol identifier so hosts can fill them straight from their codec.

use serde::{Deserialize, Serialize};

/// Reality, exercise or simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Context {
    #[default]
    Reality,
    Exercise,
    Simulation,
}

/// Standard identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Affiliation {
    Pending,
    #[default]
    Unknown,
    AssumedFriend,
    Friend,
    Neutral,
    Suspect,
    Hostile,
}

impl Affiliation {
    pub fn from_code(code: u8) -> Option<Affiliation> {
        Some(match code {
            0 => Affiliation::Pending,
            1 => Affiliation::Unknown,
            2 => Affiliation::AssumedFriend,
            3 => Affiliation::Friend,
            4 => Affiliation::Neutral,
            5 => Affiliation::Suspect,
            6 => Affiliation::Hostile,
            _ => return None,
        })
    }
}

/// Operational status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Present,
    Planned,
    FullyCapable,
    Damaged,
    Destroyed,
    FullToCapacity,
}

impl Status {
    pub fn from_code(code: u8) -> Option<Status> {
        Some(match code {
            0 => Status::Present,
            1 => Status::Planned,
            2 => Status::FullyCapable,
            3 => Status::Damaged,
            4 => Status::Destroyed,
            5 => Status::FullToCapacity,
            _ => return None,
        })
    }
}

/// Symbol set, keyed by its two-digit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum SymbolSet {
    Air,
    AirMissile,
    Space,
    SpaceMissile,
    LandUnit,
    LandCivilian,
    LandEquipment,
    LandInstallation,
    ControlMeasure,
    DismountedIndividual,
    SeaSurface,
    SeaSubsurface,
    MineWarfare,
    Activity,
    Atmospheric,
    Oceanographic,
    MeteorologicalSpace,
    SignalsIntelligence(u8),
    Cyberspace,
    Other(u8),
}

impl SymbolSet {
    pub fn code(self) -> u8 {
        match self {
            SymbolSet::Air => 1,
            SymbolSet::AirMissile => 2,
            SymbolSet::Space => 5,
            SymbolSet::SpaceMissile => 6,
            SymbolSet::LandUnit => 10,
            SymbolSet::LandCivilian => 11,
            SymbolSet::LandEquipment => 15,
            SymbolSet::LandInstallation => 20,
            SymbolSet::ControlMeasure => 25,
            SymbolSet::DismountedIndividual => 27,
            SymbolSet::SeaSurface => 30,
            SymbolSet::SeaSubsurface => 35,
            SymbolSet::MineWarfare => 36,
            SymbolSet::Activity => 40,
            SymbolSet::Atmospheric => 45,
            SymbolSet::Oceanographic => 46,
            SymbolSet::MeteorologicalSpace => 47,
            SymbolSet::SignalsIntelligence(c) | SymbolSet::Other(c) => c,
            SymbolSet::Cyberspace => 60,
        }
    }

    /// Physical domain the frame is drawn for. Control measures and the
    /// environmental sets have no frame.
    pub fn dimension(self) -> Option<Dimension> {
        match self {
            SymbolSet::Air | SymbolSet::AirMissile => Some(Dimension::Air),
            SymbolSet::Space | SymbolSet::SpaceMissile => Some(Dimension::Space),
            SymbolSet::LandUnit
            | SymbolSet::LandCivilian
            | SymbolSet::LandEquipment
            | SymbolSet::LandInstallation
            | SymbolSet::DismountedIndividual
            | SymbolSet::Activity => Some(Dimension::Land),
            SymbolSet::SeaSurface => Some(Dimension::SeaSurface),
            SymbolSet::SeaSubsurface | SymbolSet::MineWarfare => Some(Dimension::Subsurface),
            SymbolSet::SignalsIntelligence(c) => Some(match c {
                50 => Dimension::Space,
                51 => Dimension::Air,
                53 => Dimension::SeaSurface,
                54 => Dimension::Subsurface,
                _ => Dimension::Land,
            }),
            SymbolSet::Cyberspace => Some(Dimension::Cyberspace),
            SymbolSet::ControlMeasure
            | SymbolSet::Atmospheric
            | SymbolSet::Oceanographic
            | SymbolSet::MeteorologicalSpace
            | SymbolSet::Other(_) => None,
        }
    }
}

impl From<u8> for SymbolSet {
    fn from(code: u8) -> Self {
        match code {
            1 => SymbolSet::Air,
            2 => SymbolSet::AirMissile,
            5 => SymbolSet::Space,
            6 => SymbolSet::SpaceMissile,
            10 => SymbolSet::LandUnit,
            11 => SymbolSet::LandCivilian,
            15 => SymbolSet::LandEquipment,
            20 => SymbolSet::LandInstallation,
            25 => SymbolSet::ControlMeasure,
            27 => SymbolSet::DismountedIndividual,
            30 => SymbolSet::SeaSurface,
            35 => SymbolSet::SeaSubsurface,
            36 => SymbolSet::MineWarfare,
            40 => SymbolSet::Activity,
            45 => SymbolSet::Atmospheric,
            46 => SymbolSet::Oceanographic,
            47 => SymbolSet::MeteorologicalSpace,
            50..=54 => SymbolSet::SignalsIntelligence(code),
            60 => SymbolSet::Cyberspace,
            other => SymbolSet::Other(other),
        }
    }
}

impl From<SymbolSet> for u8 {
    fn from(set: SymbolSet) -> u8 {
        set.code()
    }
}

/// Physical domain of a framed symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Air,
    Space,
    Land,
    SeaSurface,
    Subsurface,
    Cyberspace,
}

/// Frame outline family, which drives indicator geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameShape {
    /// Friend/assumed friend on land
    FriendRectangle,
    /// Friend/assumed friend in air, space, at sea or cyberspace
    FriendRound,
    /// Suspect/hostile
    HostileDiamond,
    Neutral,
    /// Unknown/pending on land
    UnknownQuatrefoil,
    /// Unknown/pending in any other dimension
    UnknownRound,
}

/// Headquarters / task force / feint-dummy digit (bit 1 feint-dummy,
/// bit 2 headquarters, bit 4 task force).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hqtfd(pub u8);

impl Hqtfd {
    pub const NONE: Hqtfd = Hqtfd(0);
    pub const FEINT_DUMMY: Hqtfd = Hqtfd(1);
    pub const HEADQUARTERS: Hqtfd = Hqtfd(2);
    pub const TASK_FORCE: Hqtfd = Hqtfd(4);

    pub fn feint_dummy(self) -> bool {
        self.0 & 1 != 0
    }

    pub fn headquarters(self) -> bool {
        self.0 & 2 != 0
    }

    pub fn task_force(self) -> bool {
        self.0 & 4 != 0
    }
}

impl std::ops::BitOr for Hqtfd {
    type Output = Hqtfd;
    fn bitor(self, rhs: Hqtfd) -> Hqtfd {
        Hqtfd(self.0 | rhs.0)
    }
}

/// Echelon size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Echelon {
    TeamCrew,
    Squad,
    Section,
    Platoon,
    Company,
    Battalion,
    Regiment,
    Brigade,
    Division,
    Corps,
    Army,
    ArmyGroup,
    Region,
    Command,
}

impl Echelon {
    /// Amplifier text drawn above the frame
    pub fn label(self) -> &'static str {
        match self {
            Echelon::TeamCrew => "\u{00D8}",
            Echelon::Squad => "\u{25CF}",
            Echelon::Section => "\u{25CF}\u{25CF}",
            Echelon::Platoon => "\u{25CF}\u{25CF}\u{25CF}",
            Echelon::Company => "I",
            Echelon::Battalion => "II",
            Echelon::Regiment => "III",
            Echelon::Brigade => "X",
            Echelon::Division => "XX",
            Echelon::Corps => "XXX",
            Echelon::Army => "XXXX",
            Echelon::ArmyGroup => "XXXXX",
            Echelon::Region => "XXXXXX",
            Echelon::Command => "++",
        }
    }
}

/// Mobility and towed-array amplifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mobility {
    WheeledLimited,
    WheeledCrossCountry,
    Tracked,
    WheeledTracked,
    Towed,
    Rail,
    PackAnimals,
    OverSnow,
    Sled,
    Barge,
    Amphibious,
    ShortTowedArray,
    LongTowedArray,
}

impl Mobility {
    pub fn is_towed_array(self) -> bool {
        matches!(self, Mobility::ShortTowedArray | Mobility::LongTowedArray)
    }
}

/// The amplifier digits, decoded by group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amplifier(pub u8);

impl Amplifier {
    pub fn echelon(self) -> Option<Echelon> {
        Some(match self.0 {
            11 => Echelon::TeamCrew,
            12 => Echelon::Squad,
            13 => Echelon::Section,
            14 => Echelon::Platoon,
            15 => Echelon::Company,
            16 => Echelon::Battalion,
            17 => Echelon::Regiment,
            18 => Echelon::Brigade,
            21 => Echelon::Division,
            22 => Echelon::Corps,
            23 => Echelon::Army,
            24 => Echelon::ArmyGroup,
            25 => Echelon::Region,
            26 => Echelon::Command,
            _ => return None,
        })
    }

    pub fn mobility(self) -> Option<Mobility> {
        Some(match self.0 {
            31 => Mobility::WheeledLimited,
            32 => Mobility::WheeledCrossCountry,
            33 => Mobility::Tracked,
            34 => Mobility::WheeledTracked,
            35 => Mobility::Towed,
            36 => Mobility::Rail,
            37 => Mobility::PackAnimals,
            41 => Mobility::OverSnow,
            42 => Mobility::Sled,
            51 => Mobility::Barge,
            52 => Mobility::Amphibious,
            61 => Mobility::ShortTowedArray,
            62 => Mobility::LongTowedArray,
            _ => return None,
        })
    }

    /// Leader amplifier for dismounted individuals
    pub fn leader(self) -> bool {
        self.0 == 71
    }
}

/// Read-only decoded symbol fields
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolDescriptor {
    #[serde(default)]
    pub context: Context,
    #[serde(default)]
    pub affiliation: Affiliation,
    pub symbol_set: SymbolSet,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub hqtfd: Hqtfd,
    #[serde(default)]
    pub amplifier: Amplifier,
    /// Six-digit entity / entity type / entity subtype code
    #[serde(default)]
    pub entity: u32,
    /// Numeric country code, 0 when unset
    #[serde(default)]
    pub country: u16,
}

impl SymbolDescriptor {
    pub fn new(symbol_set: SymbolSet, entity: u32) -> Self {
        SymbolDescriptor {
            context: Context::Reality,
            affiliation: Affiliation::Friend,
            symbol_set,
            status: Status::Present,
            hqtfd: Hqtfd::NONE,
            amplifier: Amplifier(0),
            entity,
            country: 0,
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn with_affiliation(mut self, affiliation: Affiliation) -> Self {
        self.affiliation = affiliation;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_hqtfd(mut self, hqtfd: Hqtfd) -> Self {
        self.hqtfd = hqtfd;
        self
    }

    pub fn with_amplifier(mut self, code: u8) -> Self {
        self.amplifier = Amplifier(code);
        self
    }

    pub fn with_country(mut self, country: u16) -> Self {
        self.country = country;
        self
    }

    /// Symbol set + entity code, the key modifier catalogs are indexed by.
    pub fn basic_id(&self) -> String {
        format!("{:02}{:06}", self.symbol_set.code(), self.entity)
    }

    /// Entity type: the first four digits of the entity code.
    pub fn entity_type(&self) -> u32 {
        self.entity / 100
    }

    pub fn frame_shape(&self) -> Option<FrameShape> {
        let dimension = self.symbol_set.dimension()?;
        let land = dimension == Dimension::Land;
        Some(match self.affiliation {
            Affiliation::Friend | Affiliation::AssumedFriend if land => FrameShape::FriendRectangle,
            Affiliation::Friend | Affiliation::AssumedFriend => FrameShape::FriendRound,
            Affiliation::Suspect | Affiliation::Hostile => FrameShape::HostileDiamond,
            Affiliation::Neutral => FrameShape::Neutral,
            Affiliation::Unknown | Affiliation::Pending if land => FrameShape::UnknownQuatrefoil,
            Affiliation::Unknown | Affiliation::Pending => FrameShape::UnknownRound,
        })
    }

    /// Letter drawn at the frame's upper right for exercise and simulation
    /// symbols.
    pub fn affiliation_modifier(&self) -> Option<&'static str> {
        match self.context {
            Context::Reality => None,
            Context::Simulation => Some("S"),
            Context::Exercise => Some(match self.affiliation {
                Affiliation::Suspect => "J",
                Affiliation::Hostile => "K",
                _ => "X",
            }),
        }
    }
}
