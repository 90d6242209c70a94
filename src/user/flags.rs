use crate::util::flags::impl_flags_serde;
use bitflags::bitflags;

bitflags! {
    /// Badges and account properties on a [`User`].
    ///
    /// [`User`]: super::User
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct UserFlags: u64 {
        const STAFF = 1;
        const PARTNER = 1 << 1;
        const HYPESQUAD = 1 << 2;
        const BUG_HUNTER_LEVEL_1 = 1 << 3;
        const HYPESQUAD_ONLINE_HOUSE_1 = 1 << 6;
        const HYPESQUAD_ONLINE_HOUSE_2 = 1 << 7;
        const HYPESQUAD_ONLINE_HOUSE_3 = 1 << 8;
        const PREMIUM_EARLY_SUPPORTER = 1 << 9;
        const TEAM_PSEUDO_USER = 1 << 10;
        const BUG_HUNTER_LEVEL_2 = 1 << 14;
        const VERIFIED_BOT = 1 << 16;
        const VERIFIED_DEVELOPER = 1 << 17;
        const CERTIFIED_MODERATOR = 1 << 18;
        const BOT_HTTP_INTERACTIONS = 1 << 19;
        const ACTIVE_DEVELOPER = 1 << 22;
    }
}

impl_flags_serde!(UserFlags);

#[cfg(test)]
mod tests {
    use super::UserFlags;
    use crate::util::flags::FlagsExt;

    #[test]
    fn mask_round_trip() {
        let flags = UserFlags::STAFF | UserFlags::ACTIVE_DEVELOPER;
        let (decoded, lossy) = UserFlags::from_mask(flags.to_mask());

        assert!(!lossy);
        assert_eq!(decoded, flags);
    }
}
