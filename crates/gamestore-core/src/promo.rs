//! Promo code table
//!
//! Fixed mapping from code to percentage discount. Codes are stored in
//! normalized (trimmed, uppercase) form so lookups are case-insensitive.
//! Two configured codes that normalize to the same key are rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Normalize user input into the form promo codes are stored in
pub fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Known promo codes and their percentage discounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u8>", into = "BTreeMap<String, u8>")]
pub struct PromoTable {
    codes: BTreeMap<String, u8>,
}

impl PromoTable {
    /// Build a table from `(code, percent)` pairs
    pub fn new<I, S>(entries: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = (S, u8)>,
        S: AsRef<str>,
    {
        let table = Self {
            codes: normalize_entries(entries)?,
        };
        table.validate()?;
        Ok(table)
    }

    /// Check that every code is non-empty and every percentage is at most 100
    pub fn validate(&self) -> StoreResult<()> {
        for (code, percent) in &self.codes {
            if code.is_empty() {
                return Err(StoreError::InvalidPromo("empty code".to_string()));
            }
            if *percent > 100 {
                return Err(StoreError::InvalidPromo(format!(
                    "{} discounts {}%",
                    code, percent
                )));
            }
        }
        Ok(())
    }

    /// Percentage for `code`, after normalization
    pub fn lookup(&self, code: &str) -> Option<u8> {
        self.codes.get(&normalize(code)).copied()
    }

    /// Codes in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.codes.iter().map(|(code, percent)| (code.as_str(), *percent))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Normalize every code, failing if two of them end up equal
fn normalize_entries<I, S>(entries: I) -> StoreResult<BTreeMap<String, u8>>
where
    I: IntoIterator<Item = (S, u8)>,
    S: AsRef<str>,
{
    let mut codes = BTreeMap::new();
    for (code, percent) in entries {
        let key = normalize(code.as_ref());
        if codes.insert(key.clone(), percent).is_some() {
            return Err(StoreError::InvalidPromo(format!(
                "{} is listed more than once",
                key
            )));
        }
    }
    Ok(codes)
}

impl Default for PromoTable {
    fn default() -> Self {
        Self {
            codes: BTreeMap::from([
                ("GAME2024".to_string(), 15),
                ("NEWBIE".to_string(), 25),
                ("VIP50".to_string(), 50),
            ]),
        }
    }
}

impl TryFrom<BTreeMap<String, u8>> for PromoTable {
    type Error = StoreError;

    fn try_from(raw: BTreeMap<String, u8>) -> StoreResult<Self> {
        Ok(Self {
            codes: normalize_entries(raw)?,
        })
    }
}

impl From<PromoTable> for BTreeMap<String, u8> {
    fn from(table: PromoTable) -> Self {
        table.codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_codes() {
        let table = PromoTable::default();
        assert_eq!(table.lookup("GAME2024"), Some(15));
        assert_eq!(table.lookup("NEWBIE"), Some(25));
        assert_eq!(table.lookup("VIP50"), Some(50));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = PromoTable::default();
        assert_eq!(table.lookup("game2024"), Some(15));
        assert_eq!(table.lookup("Vip50"), Some(50));
        assert_eq!(table.lookup("  newbie "), Some(25));
    }

    #[test]
    fn test_unknown_code() {
        let table = PromoTable::default();
        assert_eq!(table.lookup("FAKE123"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_new_normalizes_keys() {
        let table = PromoTable::new([("summer", 10u8)]).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), [("SUMMER", 10)]);
    }

    #[test]
    fn test_rejects_over_100_percent() {
        assert!(matches!(
            PromoTable::new([("FREE", 101u8)]),
            Err(StoreError::InvalidPromo(_))
        ));
        assert!(PromoTable::new([("FREE", 100u8)]).is_ok());
    }

    #[test]
    fn test_rejects_blank_code() {
        assert!(PromoTable::new([("   ", 5u8)]).is_err());
    }

    #[test]
    fn test_rejects_codes_differing_only_in_case() {
        let err = PromoTable::new([("vip50", 10u8), ("VIP50", 50u8)]).unwrap_err();
        assert!(matches!(err, StoreError::InvalidPromo(ref msg) if msg.contains("VIP50")));

        assert!(PromoTable::new([(" sale", 5u8), ("SALE ", 5u8)]).is_err());
    }

    #[test]
    fn test_deserialize_rejects_colliding_codes() {
        let err = serde_json::from_str::<PromoTable>(r#"{"vip50": 10, "VIP50": 50}"#).unwrap_err();
        assert!(err.to_string().contains("VIP50 is listed more than once"));
    }

    #[test]
    fn test_deserialize_normalizes() {
        let table: PromoTable = serde_json::from_str(r#"{"spring": 5}"#).unwrap();
        assert_eq!(table.lookup("SPRING"), Some(5));
    }
}
