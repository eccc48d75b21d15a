// Platform shard value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shard {
    Steam,
    Kakao,
    Console,
    Psn,
    Xbox,
    Stadia,
    Tournament,
    PcNa,
    PcEu,
    PcAs,
    PcKrjp,
    PcJp,
    PcOc,
    PcSa,
    PcSea,
    PcKakao,
}

impl Shard {
    pub const ALL: [Shard; 16] = [
        Shard::Steam,
        Shard::Kakao,
        Shard::Console,
        Shard::Psn,
        Shard::Xbox,
        Shard::Stadia,
        Shard::Tournament,
        Shard::PcNa,
        Shard::PcEu,
        Shard::PcAs,
        Shard::PcKrjp,
        Shard::PcJp,
        Shard::PcOc,
        Shard::PcSa,
        Shard::PcSea,
        Shard::PcKakao,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shard::Steam => "steam",
            Shard::Kakao => "kakao",
            Shard::Console => "console",
            Shard::Psn => "psn",
            Shard::Xbox => "xbox",
            Shard::Stadia => "stadia",
            Shard::Tournament => "tournament",
            Shard::PcNa => "pc-na",
            Shard::PcEu => "pc-eu",
            Shard::PcAs => "pc-as",
            Shard::PcKrjp => "pc-krjp",
            Shard::PcJp => "pc-jp",
            Shard::PcOc => "pc-oc",
            Shard::PcSa => "pc-sa",
            Shard::PcSea => "pc-sea",
            Shard::PcKakao => "pc-kakao",
        }
    }
}

impl fmt::Display for Shard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Shard::ALL
            .iter()
            .copied()
            .find(|shard| shard.as_str() == wanted)
            .ok_or_else(|| format!("unknown shard '{}'", s.trim()))
    }
}
