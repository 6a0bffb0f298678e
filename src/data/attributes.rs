// ---------------------------------------------------------------------------
// Attribute registry – the HomeC column names offered in the selectors
// ---------------------------------------------------------------------------

/// Name of the column holding the sample timestamps.
pub const TIME_ATTRIBUTE: &str = "time";

/// Known columns of `HomeC.csv`, in the order they appear in the selectors.
pub const ATTRIBUTES: [&str; 32] = [
    TIME_ATTRIBUTE,
    "use [kW]",
    "gen [kW]",
    "House overall [kW]",
    "Dishwasher [kW]",
    "Furnace 1 [kW]",
    "Furnace 2 [kW]",
    "Home office [kW]",
    "Fridge [kW]",
    "Wine cellar [kW]",
    "Garage door [kW]",
    "Kitchen 12 [kW]",
    "Kitchen 14 [kW]",
    "Kitchen 38 [kW]",
    "Barn [kW]",
    "Well [kW]",
    "Microwave [kW]",
    "Living room [kW]",
    "Solar [kW]",
    "temperature",
    "icon",
    "humidity",
    "visibility",
    "summary",
    "apparentTemperature",
    "pressure",
    "windSpeed",
    "cloudCover",
    "windBearing",
    "precipIntensity",
    "dewPoint",
    "precipProbability",
];

/// Whether `name` refers to the time column.
pub fn is_time(name: &str) -> bool {
    name == TIME_ATTRIBUTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_comes_first() {
        assert_eq!(ATTRIBUTES[0], TIME_ATTRIBUTE);
        assert!(is_time(ATTRIBUTES[0]));
        assert!(!is_time("Time"));
    }

    #[test]
    fn names_are_unique() {
        let unique: std::collections::BTreeSet<&str> = ATTRIBUTES.iter().copied().collect();
        assert_eq!(unique.len(), ATTRIBUTES.len());
    }
}
