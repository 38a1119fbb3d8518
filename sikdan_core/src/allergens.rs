//! Statutory allergen codes used on Korean school meal pages.
//!
//! Menus annotate dishes with the numeric codes 1 through 19; the static
//! table below maps each code to its ingredient name.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Lowest valid allergen code
pub const MIN_CODE: u8 = 1;
/// Highest valid allergen code
pub const MAX_CODE: u8 = 19;

/// Cached code-to-ingredient table - built once and reused across all lookups
static ALLERGEN_NAMES: Lazy<HashMap<u8, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "난류"),
        (2, "우유"),
        (3, "메밀"),
        (4, "땅콩"),
        (5, "대두"),
        (6, "밀"),
        (7, "고등어"),
        (8, "게"),
        (9, "새우"),
        (10, "돼지고기"),
        (11, "복숭아"),
        (12, "토마토"),
        (13, "아황산류"),
        (14, "호두"),
        (15, "닭고기"),
        (16, "쇠고기"),
        (17, "오징어"),
        (18, "조개류(굴,전복,홍합)"),
        (19, "잣"),
    ])
});

/// A validated allergen code in `MIN_CODE..=MAX_CODE`
///
/// Ordering is numeric, so sorted collections of codes report ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AllergenCode(u8);

impl AllergenCode {
    /// Construct from a raw number, `None` outside the valid range
    pub fn new(code: u8) -> Option<Self> {
        (MIN_CODE..=MAX_CODE).contains(&code).then_some(Self(code))
    }

    /// Parse a single token, `None` for non-integers and out-of-range values
    pub fn parse(token: &str) -> Option<Self> {
        token.trim().parse::<u8>().ok().and_then(Self::new)
    }

    /// The numeric code
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Decimal string form, the exact text matched against menu lines
    pub fn digits(&self) -> String {
        self.0.to_string()
    }

    /// Ingredient name from the static table, with a placeholder for codes
    /// the table does not cover
    pub fn name(&self) -> &'static str {
        ALLERGEN_NAMES.get(&self.0).copied().unwrap_or("???")
    }
}

/// Renders as the warning summary uses it: `5번(대두)`
impl fmt::Display for AllergenCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}번({})", self.0, self.name())
    }
}
