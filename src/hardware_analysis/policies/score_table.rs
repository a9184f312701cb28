use crate::shared::error::RigError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// Score given to anything the tables do not recognise
pub const DEFAULT_SCORE: u32 = 50;

/// Brand -> family -> normalized score
pub type BrandFamilies = BTreeMap<String, BTreeMap<String, u32>>;

/// ScoreTable policy mapping brand and model text to a normalized score
///
/// Family keys are matched as substrings of the lowercased model text. When
/// several keys match, the longest one wins ("rtx 4060" beats "rtx 406"), and
/// keys of equal length resolve to the lexicographically smaller one. The
/// result therefore never depends on the order the table was written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    brands: BrandFamilies,
}

/// A family key that matched, with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyMatch<'a> {
    pub brand: &'a str,
    pub family: &'a str,
    pub score: u32,
}

impl ScoreTable {
    /// Builds a table, lowercasing and trimming every brand and family key
    ///
    /// # Errors
    /// Returns a validation error when a brand or family key is blank, since a
    /// blank family would match every model string.
    pub fn new(brands: BrandFamilies) -> Result<Self> {
        let mut normalized = BrandFamilies::new();
        for (brand, families) in brands {
            let brand_key = brand.trim().to_lowercase();
            if brand_key.is_empty() {
                return Err(RigError::Validation {
                    message: "score table brand names must not be empty".to_string(),
                }
                .into());
            }

            let entry = normalized.entry(brand_key.clone()).or_default();
            for (family, score) in families {
                let family_key = family.trim().to_lowercase();
                if family_key.is_empty() {
                    return Err(RigError::Validation {
                        message: format!(
                            "score table for brand '{}' contains an empty family key",
                            brand_key
                        ),
                    }
                    .into());
                }
                entry.insert(family_key, score);
            }
        }
        Ok(Self { brands: normalized })
    }

    fn families(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
        entries
            .iter()
            .map(|(family, score)| (family.to_string(), *score))
            .collect()
    }

    /// Built-in CPU table
    pub fn default_cpu() -> Self {
        let brands = BrandFamilies::from([
            (
                "intel".to_string(),
                Self::families(&[
                    ("i9", 100),
                    ("i7", 85),
                    ("i5", 70),
                    ("i3", 50),
                    ("pentium", 30),
                    ("celeron", 20),
                ]),
            ),
            (
                "amd".to_string(),
                Self::families(&[
                    ("ryzen 9", 100),
                    ("ryzen 7", 85),
                    ("ryzen 5", 70),
                    ("ryzen 3", 50),
                    ("athlon", 30),
                ]),
            ),
        ]);
        Self { brands }
    }

    /// Built-in GPU table
    pub fn default_gpu() -> Self {
        let brands = BrandFamilies::from([
            (
                "nvidia".to_string(),
                Self::families(&[
                    ("rtx 4090", 100),
                    ("rtx 4080", 95),
                    ("rtx 4070", 85),
                    ("rtx 4060", 75),
                    ("rtx 3090", 90),
                    ("rtx 3080", 85),
                    ("rtx 3070", 75),
                    ("rtx 3060", 65),
                    ("rtx 2080", 70),
                    ("rtx 2070", 60),
                    ("rtx 2060", 50),
                    ("gtx 1660", 45),
                    ("gtx 1650", 40),
                    ("gtx 1080", 55),
                    ("gtx 1070", 50),
                    ("gtx 1060", 45),
                    ("gtx 980", 40),
                    ("gtx 970", 35),
                    ("gtx 960", 30),
                    ("gtx 780", 25),
                    ("gtx 770", 22),
                    ("gtx 760", 20),
                    ("gtx 660", 18),
                    ("gt 730", 10),
                ]),
            ),
            (
                "amd".to_string(),
                Self::families(&[
                    ("rx 7900", 95),
                    ("rx 7800", 85),
                    ("rx 7700", 75),
                    ("rx 7600", 65),
                    ("rx 6900", 85),
                    ("rx 6800", 75),
                    ("rx 6700", 65),
                    ("rx 6600", 55),
                    ("rx 5700", 60),
                    ("rx 5600", 50),
                    ("rx 5500", 45),
                    ("rx 590", 40),
                    ("rx 580", 38),
                    ("rx 570", 35),
                ]),
            ),
        ]);
        Self { brands }
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }

    pub fn contains_brand(&self, brand: &str) -> bool {
        self.brands.contains_key(&brand.to_lowercase())
    }

    /// Best family of `brand` contained in `model`
    ///
    /// Both arguments are compared case-insensitively.
    pub fn match_model(&self, brand: &str, model: &str) -> Option<FamilyMatch<'_>> {
        let model = model.to_lowercase();
        let (brand_key, families) = self.brands.get_key_value(&brand.trim().to_lowercase())?;
        Self::best_family(brand_key, families, &model)
    }

    /// Best family of the brand mentioned first in `text`
    ///
    /// Requirement strings often list alternatives ("Intel Core i7 / AMD
    /// Ryzen 5"). Longest-match applies within a brand; across brands the
    /// earliest mention with a matching family wins.
    pub fn match_text(&self, text: &str) -> Option<FamilyMatch<'_>> {
        let text = text.to_lowercase();
        self.brands
            .iter()
            .filter_map(|(brand, families)| {
                let position = text.find(brand.as_str())?;
                Self::best_family(brand, families, &text).map(|found| (position, found))
            })
            .min_by(|(a_pos, a), (b_pos, b)| {
                a_pos
                    .cmp(b_pos)
                    .then_with(|| b.brand.len().cmp(&a.brand.len()))
                    .then_with(|| a.brand.cmp(&b.brand))
            })
            .map(|(_, found)| found)
    }

    fn best_family<'a>(
        brand: &'a str,
        families: &'a BTreeMap<String, u32>,
        haystack: &str,
    ) -> Option<FamilyMatch<'a>> {
        // BTreeMap iterates in key order, so the first key of maximal length
        // is also the lexicographically smallest one.
        families
            .iter()
            .filter(|(family, _)| haystack.contains(family.as_str()))
            .fold(None, |best: Option<FamilyMatch<'a>>, (family, score)| {
                let candidate = FamilyMatch {
                    brand,
                    family: family.as_str(),
                    score: *score,
                };
                match best {
                    Some(current) if current.family.len() >= family.len() => Some(current),
                    _ => Some(candidate),
                }
            })
    }

}
