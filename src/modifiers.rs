//! Modifier keys and the per-render value map.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::log::debug;

macro_rules! modifier_keys {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, )*) => {
        /// Closed set of modifier keys. Keys print as their canonical names.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Modifier {
            $( $(#[$doc])* $variant, )*
        }

        impl Modifier {
            pub const ALL: &'static [Modifier] = &[ $( Modifier::$variant, )* ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( Modifier::$variant => $name, )*
                }
            }
        }

        impl FromStr for Modifier {
            type Err = UnknownModifier;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(Modifier::$variant), )*
                    _ => Err(UnknownModifier(s.to_string())),
                }
            }
        }
    };
}

modifier_keys! {
    /// Echelon
    B => "B_ECHELON",
    /// Quantity
    C => "C_QUANTITY",
    /// Task force indicator
    D => "D_TASK_FORCE_INDICATOR",
    E => "E_FRAME_SHAPE_MODIFIER",
    F => "F_REINFORCED_REDUCED",
    G => "G_STAFF_COMMENTS",
    H => "H_ADDITIONAL_INFO_1",
    H1 => "H1_ADDITIONAL_INFO_2",
    H2 => "H2_ADDITIONAL_INFO_3",
    J => "J_EVALUATION_RATING",
    K => "K_COMBAT_EFFECTIVENESS",
    L => "L_SIGNATURE_EQUIP",
    M => "M_HIGHER_FORMATION",
    N => "N_HOSTILE",
    P => "P_IFF_SIF_AIS",
    /// Direction of movement, compass degrees
    Q => "Q_DIRECTION_OF_MOVEMENT",
    R => "R_MOBILITY_INDICATOR",
    S => "S_HQ_STAFF_INDICATOR",
    T => "T_UNIQUE_DESIGNATION_1",
    T1 => "T1_UNIQUE_DESIGNATION_2",
    V => "V_EQUIP_TYPE",
    W => "W_DTG_1",
    W1 => "W1_DTG_2",
    X => "X_ALTITUDE_DEPTH",
    Y => "Y_LOCATION",
    Z => "Z_SPEED",
    Aa => "AA_SPECIAL_C2_HQ",
    /// Feint/dummy indicator
    Ab => "AB_FEINT_DUMMY_INDICATOR",
    Ad => "AD_PLATFORM_TYPE",
    Ae => "AE_EQUIPMENT_TEARDOWN_TIME",
    Af => "AF_COMMON_IDENTIFIER",
    /// Auxiliary equipment (towed arrays)
    Ag => "AG_AUX_EQUIP_INDICATOR",
    Al => "AL_OPERATIONAL_CONDITION",
    /// Engagement bar text
    Ao => "AO_ENGAGEMENT_BAR",
    Ap => "AP_TARGET_NUMBER",
    Ap1 => "AP1_TARGET_NUMBER_EXTENSION",
    Aq => "AQ_GUARDED_UNIT",
    Ar => "AR_SPECIAL_DESIGNATOR",
    As => "AS_COUNTRY",
    Av => "AV_LEADERSHIP",
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Modifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Modifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModifier(pub String);

impl fmt::Display for UnknownModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown modifier key {:?}", self.0)
    }
}

impl std::error::Error for UnknownModifier {}

/// Modifier values requested for one symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModifierValues {
    values: BTreeMap<Modifier, String>,
}

impl ModifierValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: Modifier, value: impl Into<String>) -> Option<String> {
        self.values.insert(key, value.into())
    }

    pub fn with(mut self, key: Modifier, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert by canonical key name. Unknown names are dropped.
    pub fn insert_named(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name.parse::<Modifier>() {
            Ok(key) => {
                self.values.insert(key, value.into());
                true
            }
            Err(_) => {
                debug!(key = name, "ignoring unknown modifier key");
                false
            }
        }
    }

    pub fn get(&self, key: Modifier) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn remove(&mut self, key: Modifier) -> Option<String> {
        self.values.remove(&key)
    }

    pub fn contains(&self, key: Modifier) -> bool {
        self.values.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Modifier, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ModifierValues {
    /// Collects `(name, value)` pairs, ignoring unknown names.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = ModifierValues::new();
        for (k, v) in iter {
            let name: String = k.into();
            values.insert_named(&name, v);
        }
        values
    }
}

impl<'de> Deserialize<'de> for ModifierValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}
