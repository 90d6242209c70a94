use crate::util::flags::impl_flags_serde;
use bitflags::bitflags;

bitflags! {
    /// Extra behavior toggles on a [`Message`].
    ///
    /// [`Message`]: super::Message
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// Published to subscribed channels.
        const CROSSPOSTED = 1;
        /// Originated from a subscribed channel.
        const IS_CROSSPOST = 1 << 1;
        const SUPPRESS_EMBEDS = 1 << 2;
        /// The source message of this crosspost was deleted.
        const SOURCE_MESSAGE_DELETED = 1 << 3;
        const URGENT = 1 << 4;
        const HAS_THREAD = 1 << 5;
        /// Visible only to the invoking user of an interaction.
        const EPHEMERAL = 1 << 6;
        const LOADING = 1 << 7;
        const FAILED_TO_MENTION_SOME_ROLES_IN_THREAD = 1 << 8;
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
        const IS_VOICE_MESSAGE = 1 << 13;
    }
}

impl_flags_serde!(MessageFlags);

#[cfg(test)]
mod tests {
    use super::MessageFlags;
    use crate::util::flags::FlagsExt;

    #[test]
    fn crossposted_and_deleted_source() {
        let (flags, lossy) = MessageFlags::from_mask(0b1001);

        assert!(!lossy);
        assert_eq!(
            flags,
            MessageFlags::CROSSPOSTED | MessageFlags::SOURCE_MESSAGE_DELETED
        );

        let with_ephemeral = flags | MessageFlags::EPHEMERAL;
        assert_eq!(with_ephemeral.to_mask(), 0b100_1001);
    }
}
