use super::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub category: Category,
    pub amount: i64,
}

impl Allocation {
    pub fn name(&self) -> &str {
        &self.category.name
    }
}
