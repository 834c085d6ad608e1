use std::fmt;

/// Delivery speed classification. Each tier maps to one fee function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeeTier {
    Standard,
    Express,
    #[default]
    Free,
}

impl FeeTier {
    /// Maps a tier name to a tier. Anything unrecognized is `Free`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "standard" => FeeTier::Standard,
            "express" => FeeTier::Express,
            _ => FeeTier::Free,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeeTier::Standard => "standard",
            FeeTier::Express => "express",
            FeeTier::Free => "free",
        }
    }
}

impl From<&str> for FeeTier {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn standard_fee(distance: u32) -> u64 {
    u64::from(distance) * 5
}

pub fn express_fee(distance: u32) -> u64 {
    u64::from(distance) * 10
}

pub fn free_fee(_distance: u32) -> u64 {
    0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeCalculator {
    tier: FeeTier,
}

impl FeeCalculator {
    pub fn new(tier: FeeTier) -> Self {
        Self { tier }
    }

    pub fn fee(&self, distance: u32) -> u64 {
        let fee = match self.tier {
            FeeTier::Standard => standard_fee(distance),
            FeeTier::Express => express_fee(distance),
            FeeTier::Free => free_fee(distance),
        };
        tracing::debug!("Fee for {} delivery over {}: {}", self.tier, distance, fee);
        fee
    }
}
