use crate::types::{ResourceEntry, RiskEntry, RiskLevel};

/// Fixed risk register attached to every integrated model
///
/// Demo data for the data-center build; a production register would come from
/// a risk workshop, not from code.
pub fn sample_risks() -> Vec<RiskEntry> {
    vec![
        RiskEntry::new(
            "DC-L1-STRUCT-SLAB",
            RiskLevel::High,
            "Material delays, Weather",
            "Early procurement, Indoor curing",
        ),
        RiskEntry::new(
            "DC-L1-IT-RACK",
            RiskLevel::High,
            "Equipment availability, Testing issues",
            "Pre-order, Extended testing schedule",
        ),
        RiskEntry::new(
            "DC-L1-MEP-HVAC",
            RiskLevel::Medium,
            "System integration, Space constraints",
            "BIM coordination, Mock-ups",
        ),
        RiskEntry::new(
            "DC-L2-MEP-ELEC",
            RiskLevel::Medium,
            "Code changes, Load calculations",
            "Regular code reviews, Conservative design",
        ),
        RiskEntry::new(
            "DC-L1-ARCH-DOOR",
            RiskLevel::Low,
            "Installation quality",
            "Certified installers, Quality checks",
        ),
    ]
}

/// Fixed resource allocation table attached to every integrated model
pub fn sample_resources() -> Vec<ResourceEntry> {
    vec![
        ResourceEntry::new("DC-L1-STRUCT-WALL", "Concrete Crew, Formwork Team", 8, 185_000),
        ResourceEntry::new("DC-L1-STRUCT-COL", "Concrete Crew, Rebar Team", 6, 120_000),
        ResourceEntry::new("DC-L1-STRUCT-SLAB", "Concrete Crew, Finishing Team", 10, 250_000),
        ResourceEntry::new("DC-L2-STRUCT-SLAB", "Concrete Crew, Finishing Team", 10, 275_000),
        ResourceEntry::new("DC-L1-ARCH-DOOR", "Door Installation Team", 4, 85_000),
        ResourceEntry::new("DC-L1-IT-RACK", "IT Installation Specialists", 8, 420_000),
        ResourceEntry::new("DC-L1-MEP-HVAC", "HVAC Specialists, Pipe Fitters", 12, 380_000),
        ResourceEntry::new("DC-L1-MEP-ELEC", "Electrical Contractors", 10, 350_000),
        ResourceEntry::new("DC-L2-STRUCT-WALL", "Concrete Crew, Formwork Team", 8, 160_000),
        ResourceEntry::new("DC-L2-MEP-HVAC", "HVAC Specialists, Pipe Fitters", 12, 390_000),
        ResourceEntry::new("DC-L2-IT-RACK", "IT Installation Specialists", 10, 520_000),
        ResourceEntry::new("DC-L2-MEP-ELEC", "Electrical Contractors", 10, 370_000),
    ]
}
