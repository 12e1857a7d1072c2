//! Enum registries: the closed sets of small integer codes used by entity
//! fields. Entity fields store the raw `u8` so out-of-set codes remain
//! constructible; membership is checked strictly against one registry.

macro_rules! registry {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $code:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($variant = $code),+
        }

        impl $name {
            pub const VALUES: &'static [u8] = &[$($code),+];

            pub fn code(self) -> u8 {
                self as u8
            }

            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn is_member(code: u8) -> bool {
                Self::from_code(code).is_some()
            }
        }
    };
}

registry!(AuthTokenType {
    None = 0,
    Lens = 1,
    Ens = 2,
});

registry!(Direction {
    Buy = 0,
    Sell = 1,
});

registry!(TokenType {
    FungibleToken = 0,
    NonFungibleToken = 1,
    MultiToken = 2,
});

registry!(DisputeState {
    Disputed = 0,
    Retracted = 1,
    Resolved = 2,
    Escalated = 3,
    Decided = 4,
});

registry!(ExchangeState {
    Committed = 0,
    Revoked = 1,
    Canceled = 2,
    Redeemed = 3,
    Completed = 4,
});

registry!(EvaluationMethod {
    None = 0,
    Threshold = 1,
    SpecificToken = 2,
});

registry!(GatingType {
    PerAddress = 0,
    PerTokenId = 1,
});
