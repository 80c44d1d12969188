/// A budget bucket. `percentage` is expected to be in `0..=100`; the set as a
/// whole is not required to add up to 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub percentage: u8,
}

impl Category {
    pub fn new(name: impl Into<String>, percentage: u8) -> Self {
        debug_assert!(percentage <= 100, "percentage out of range: {percentage}");
        Self {
            name: name.into(),
            percentage,
        }
    }

    /// The built-in category set, in display order.
    pub fn defaults() -> Vec<Category> {
        vec![
            Self::new("Fixed costs", 50),
            Self::new("Investments", 25),
            Self::new("Savings", 10),
            Self::new("Guilt-free spending", 15),
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
