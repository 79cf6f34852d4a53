use crate::util::*;
use std::{fmt, str::FromStr};

plain_enum_mod!(modepi, EPlayerIndex {
    EPI0, EPI1, EPI2,
});

impl fmt::Display for EPlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_usize())
    }
}

impl FromStr for EPlayerIndex {
    type Err = &'static str;
    fn from_str(str_epi: &str) -> Result<Self, Self::Err> {
        usize::from_str(str_epi).ok()
            .and_then(EPlayerIndex::checked_from_usize)
            .ok_or("Could not convert to EPlayerIndex")
    }
}

#[test]
fn test_wrapping() {
    assert_eq!(EPlayerIndex::EPI2.wrapping_add(1), EPlayerIndex::EPI0);
    assert_eq!(EPlayerIndex::EPI0.wrapped_difference_usize(EPlayerIndex::EPI2), 1);
    assert_eq!(EPlayerIndex::EPI2.wrapped_difference_usize(EPlayerIndex::EPI0), 2);
}
