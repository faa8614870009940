use crate::models::{Health, TreeRecord};

/// Trees registered in central Badulla, used when no record file is given.
pub(super) fn badulla_trees() -> Vec<TreeRecord> {
    vec![
        TreeRecord::new(1, "Mango Tree", "Mango", Health::Healthy, "Central", 6.9897, 81.0559),
        TreeRecord::new(2, "Coconut Palm", "Coconut", Health::Healthy, "Central", 6.9912, 81.0545),
        TreeRecord::new(3, "Mahogany", "Mahogany", Health::Moderate, "North", 6.988, 81.057),
        TreeRecord::new(4, "Jak Tree", "Jak", Health::Healthy, "South", 6.9865, 81.0555),
        TreeRecord::new(5, "Neem Tree", "Neem", Health::Poor, "East", 6.992, 81.053),
        TreeRecord::new(6, "Tamarind", "Tamarind", Health::Healthy, "West", 6.9905, 81.0585),
    ]
}
