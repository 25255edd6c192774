/// Lower or upper bound a measured ratio must satisfy to land in a tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cutoff {
    AtLeast(f64),
    Above(f64),
    Below(f64),
    Exactly(f64),
}

impl Cutoff {
    pub fn admits(self, value: f64) -> bool {
        match self {
            Cutoff::AtLeast(bound) => value >= bound,
            Cutoff::Above(bound) => value > bound,
            Cutoff::Below(bound) => value < bound,
            Cutoff::Exactly(bound) => value == bound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub cutoff: Cutoff,
    pub points: u8,
}

/// Ordered quantization table. Tiers are checked top-down and the first
/// admitting tier wins; values matching none (including NaN) get `fallback`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierTable {
    tiers: &'static [Tier],
    fallback: u8,
}

impl TierTable {
    pub const fn new(tiers: &'static [Tier], fallback: u8) -> Self {
        Self { tiers, fallback }
    }

    pub fn quantize(&self, value: f64) -> u8 {
        self.tiers
            .iter()
            .find(|tier| tier.cutoff.admits(value))
            .map(|tier| tier.points)
            .unwrap_or(self.fallback)
    }

    /// Every point value this table can produce.
    pub fn allowed_points(&self) -> Vec<u8> {
        let mut points: Vec<u8> = self.tiers.iter().map(|tier| tier.points).collect();
        points.push(self.fallback);
        points.sort_unstable();
        points.dedup();
        points
    }

    pub fn max_points(&self) -> u8 {
        self.allowed_points().last().copied().unwrap_or(self.fallback)
    }
}

/// Months of expenses covered by savings.
pub const EMERGENCY_FUND_TIERS: TierTable = TierTable::new(
    &[
        Tier {
            cutoff: Cutoff::AtLeast(6.0),
            points: 25,
        },
        Tier {
            cutoff: Cutoff::AtLeast(3.0),
            points: 20,
        },
        Tier {
            cutoff: Cutoff::AtLeast(1.0),
            points: 15,
        },
        Tier {
            cutoff: Cutoff::Above(0.0),
            points: 5,
        },
    ],
    0,
);

/// Monthly debt service divided by income.
pub const DEBT_RATIO_TIERS: TierTable = TierTable::new(
    &[
        Tier {
            cutoff: Cutoff::Exactly(0.0),
            points: 25,
        },
        Tier {
            cutoff: Cutoff::Below(0.15),
            points: 20,
        },
        Tier {
            cutoff: Cutoff::Below(0.30),
            points: 15,
        },
        Tier {
            cutoff: Cutoff::Below(0.40),
            points: 10,
        },
    ],
    5,
);

/// Share of income left after expenses and debt; may be negative.
pub const SAVINGS_RATE_TIERS: TierTable = TierTable::new(
    &[
        Tier {
            cutoff: Cutoff::AtLeast(0.20),
            points: 25,
        },
        Tier {
            cutoff: Cutoff::AtLeast(0.15),
            points: 20,
        },
        Tier {
            cutoff: Cutoff::AtLeast(0.10),
            points: 15,
        },
        Tier {
            cutoff: Cutoff::AtLeast(0.05),
            points: 10,
        },
        Tier {
            cutoff: Cutoff::Above(0.0),
            points: 5,
        },
    ],
    0,
);

/// Count of distinct long-horizon goals.
pub const INVESTMENT_DIVERSITY_TIERS: TierTable = TierTable::new(
    &[
        Tier {
            cutoff: Cutoff::AtLeast(3.0),
            points: 25,
        },
        Tier {
            cutoff: Cutoff::Exactly(2.0),
            points: 20,
        },
        Tier {
            cutoff: Cutoff::Exactly(1.0),
            points: 15,
        },
    ],
    0,
);
