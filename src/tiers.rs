//! Output size tables.
//!
//! Marketing images and driver icons share tier names but not dimensions.

use crate::foundation::core::Size;

/// Named output size category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    XLarge,
    Large,
    Small,
}

impl Tier {
    /// File stem used for this tier (`xlarge`, `large`, `small`).
    pub fn name(self) -> &'static str {
        match self {
            Tier::XLarge => "xlarge",
            Tier::Large => "large",
            Tier::Small => "small",
        }
    }

    /// PNG file name for this tier.
    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// `tier -> size` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputTable {
    pub xlarge: Size,
    pub large: Size,
    pub small: Size,
}

impl OutputTable {
    /// Entries in generation order, largest first.
    pub fn entries(&self) -> [(Tier, Size); 3] {
        [
            (Tier::XLarge, self.xlarge),
            (Tier::Large, self.large),
            (Tier::Small, self.small),
        ]
    }

    pub fn size(&self, tier: Tier) -> Size {
        match tier {
            Tier::XLarge => self.xlarge,
            Tier::Large => self.large,
            Tier::Small => self.small,
        }
    }
}

pub const MARKETING_OUTPUTS: OutputTable = OutputTable {
    xlarge: Size::new(1000, 700),
    large: Size::new(500, 350),
    small: Size::new(250, 175),
};

pub const DRIVER_OUTPUTS: OutputTable = OutputTable {
    xlarge: Size::new(1000, 1000),
    large: Size::new(500, 500),
    small: Size::new(75, 75),
};
