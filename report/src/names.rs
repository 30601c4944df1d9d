//! Display names for the engine identifiers reported by the server browser.

pub static MAP_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "MP_Abandoned" => "Zavod 311",
    "MP_Damage" => "Lancang Dam",
    "MP_Flooded" => "Flood Zone",
    "MP_Journey" => "Golmud Railway",
    "MP_Naval" => "Paracel Storm",
    "MP_Prison" => "Operation Locker",
    "MP_Resort" => "Hainan Resort",
    "MP_Siege" => "Siege of Shanghai",
    "MP_TheDish" => "Rogue Transmission",
    "MP_Tremors" => "Dawnbreaker",
    "XP1_001" => "Silk Road",
    "XP1_002" => "Altai Range",
    "XP1_003" => "Guilin Peaks",
    "XP1_004" => "Dragon Pass",
    "XP0_Caspian" => "Caspian Border",
    "XP0_Firestorm" => "Operation Firestorm",
    "XP0_Metro" => "Operation Metro",
    "XP0_Oman" => "Gulf of Oman",
    "XP2_001" => "Lost Islands",
    "XP2_002" => "Nansha strike",
    "XP2_003" => "WaveBreaker",
    "XP2_004" => "Operation Mortar",
    "XP3_MarketPl" => "Pearl Market",
    "XP3_Prpganda" => "Propaganda",
    "XP3_UrbanGdn" => "Lumphini Garden",
    "XP3_WtrFront" => "Sunken Dragon",
};

/// Keyed by the decimal form of the mode bitflag
pub static MODE_NAMES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "8388608" => "Air Superiority",
    "524288" => "Capture the Flag",
    "134217728" => "Carrier Assault",
    "67108864" => "Carrier Assault Large",
    "34359738368" => "Chain Link",
    "64" => "Conquest",
    "16777216" => "Defuse",
    "1024" => "Domination",
    "2097152" => "Obliteration",
    "68719476736" => "Obliteration Competitive",
    "2" => "Rush",
    "8" => "Squad DM",
    "32" => "Team DM",
};

pub fn map_name(id: &str) -> Option<&'static str> {
    MAP_NAMES.get(id).copied()
}

pub fn mode_name(id: &str) -> Option<&'static str> {
    MODE_NAMES.get(id).copied()
}
