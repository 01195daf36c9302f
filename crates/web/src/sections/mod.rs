// =============================================================================
// Cloudora Web - Marketing Sections
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Section Order
// 3. Tests
// =============================================================================

pub mod advantages;
pub mod contacts;
pub mod hero;
pub mod products;
pub mod vision;

pub use advantages::Advantages;
pub use contacts::Contacts;
pub use hero::Hero;
pub use products::Products;
pub use vision::Vision;

// -----------------------------------------------------------------------------
// 2. Section Order
// -----------------------------------------------------------------------------

/// DOM ids of the main view sections, top to bottom.
pub const SECTION_IDS: [&str; 5] = ["hero", "vision", "products", "advantages", "contacts"];

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::nav::NAV_SECTIONS;

    #[test]
    fn test_nav_links_target_rendered_sections() {
        for (id, _) in NAV_SECTIONS {
            assert!(SECTION_IDS.contains(id), "no section with id {id}");
        }
    }

    #[test]
    fn test_section_ids_are_unique() {
        for (i, id) in SECTION_IDS.iter().enumerate() {
            assert!(!SECTION_IDS[i + 1..].contains(id));
        }
    }
}
