//! 祈願プール種別

use serde::{Serialize, Serializer};

/// 祈願プール種別（出力ドキュメントでは数値コードで表す）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolType {
    None,
    /// 角色活动祈愿
    CharacterEvent,
    /// 角色活动祈愿-2
    CharacterEvent2,
    /// 武器活动祈愿
    WeaponEvent,
    /// 集录祈愿
    Chronicled,
}

impl PoolType {
    pub fn code(&self) -> u16 {
        match self {
            PoolType::None => 0,
            PoolType::CharacterEvent => 301,
            PoolType::CharacterEvent2 => 400,
            PoolType::WeaponEvent => 302,
            PoolType::Chronicled => 500,
        }
    }
}

impl Serialize for PoolType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(PoolType::None.code(), 0);
        assert_eq!(PoolType::CharacterEvent.code(), 301);
        assert_eq!(PoolType::CharacterEvent2.code(), 400);
        assert_eq!(PoolType::WeaponEvent.code(), 302);
        assert_eq!(PoolType::Chronicled.code(), 500);
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&PoolType::CharacterEvent2).unwrap(), "400");
    }
}
