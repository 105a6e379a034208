//! Venue-type classification from the free-text remark column.

/// Canonical venue categories derived from the remark text.
///
/// `Custom` carries a remark that matched no rule; its trimmed text becomes
/// the category label verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VenueCategory {
    Gym,
    YogaStudio,
    SwimmingPool,
    IndoorPool,
    OutdoorPool,
    IndoorOutdoorPool,
    BilliardsAndClimbing,
    Other,
    Custom(String),
}

impl VenueCategory {
    /// Label written to the feature properties and counted in the summary
    /// tables.
    pub fn label(&self) -> &str {
        match self {
            VenueCategory::Gym => "健身房",
            VenueCategory::YogaStudio => "瑜珈教室",
            VenueCategory::SwimmingPool => "游泳池",
            VenueCategory::IndoorPool => "室內游泳池",
            VenueCategory::OutdoorPool => "室外游泳池",
            VenueCategory::IndoorOutdoorPool => "室內外游泳池",
            VenueCategory::BilliardsAndClimbing => "撞球場及攀岩場",
            VenueCategory::Other => "其他",
            VenueCategory::Custom(text) => text,
        }
    }

    /// Map marker icon for the category. Categories without a dedicated icon
    /// (including free-text ones) get the generic marker.
    pub fn icon(&self) -> &'static str {
        match self {
            VenueCategory::Gym => "dumbbell",
            VenueCategory::YogaStudio => "yoga",
            VenueCategory::SwimmingPool => "swimming",
            VenueCategory::IndoorPool => "swimming-indoor",
            VenueCategory::OutdoorPool => "swimming-outdoor",
            VenueCategory::IndoorOutdoorPool => "swimming-both",
            VenueCategory::BilliardsAndClimbing => "sports",
            VenueCategory::Other | VenueCategory::Custom(_) => "marker",
        }
    }
}

/// Classifies a remark into a venue category.
///
/// Rules run in priority order and the first match wins; matching is plain
/// substring containment over the whole remark, not tokenization. The
/// swimming rule sub-classifies by pool siting, checking the compound
/// `室內外` before its two substrings.
pub fn classify(remark: &str) -> VenueCategory {
    if remark.is_empty() {
        return VenueCategory::Other;
    }

    let remark = remark.trim();

    if remark.contains("健身房") {
        VenueCategory::Gym
    } else if remark.contains("瑜珈") || remark.contains("瑜伽") {
        VenueCategory::YogaStudio
    } else if remark.contains("游泳") {
        if remark.contains("室內外") {
            VenueCategory::IndoorOutdoorPool
        } else if remark.contains("室外") {
            VenueCategory::OutdoorPool
        } else if remark.contains("室內") {
            VenueCategory::IndoorPool
        } else {
            VenueCategory::SwimmingPool
        }
    } else if remark.contains("撞球") || remark.contains("攀岩") {
        VenueCategory::BilliardsAndClimbing
    } else {
        VenueCategory::Custom(remark.to_string())
    }
}
