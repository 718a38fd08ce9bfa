use joinboard_shared::SeedData;

const SEED_JSON: &str = include_str!("../assets/seed.json");

/// Load the bundled seed data, falling back to an empty screen if it is invalid
pub fn load() -> SeedData {
    match SeedData::from_json(SEED_JSON) {
        Ok(seed) => {
            tracing::info!(
                "Loaded {} join requests and {} members",
                seed.employees.len(),
                seed.members.len()
            );
            seed
        }
        Err(e) => {
            tracing::error!("Failed to load seed data: {}", e);
            SeedData::default()
        }
    }
}
